use serde_json::Value;

use crate::VariantError;

/// Conversion into the value tree, threading an explicit recursion budget.
///
/// Conversions that descend into nested structures pass `max_depth - 1`
/// downwards and fail deterministically with
/// [`VariantError::DepthExhausted`] once the budget hits zero. Scalar leaves
/// ignore the budget.
pub trait ToTree {
    fn to_tree(&self, max_depth: u32) -> Result<Value, VariantError>;
}

/// Conversion out of the value tree, into an existing value.
///
/// The in-place receiver matters: a `#[static_variant]` union given a
/// malformed (too short) array deliberately leaves `self` untouched, which a
/// constructor-style API could not express.
pub trait FromTree {
    fn from_tree(&mut self, tree: &Value, max_depth: u32) -> Result<(), VariantError>;
}

/// Diagnostic name for a tree node's shape, used in error reports.
pub fn tree_kind(tree: &Value) -> &'static str {
    match tree {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

macro_rules! unsigned_leaf {
    ($($t:ty),*) => {$(
        impl ToTree for $t {
            fn to_tree(&self, _max_depth: u32) -> Result<Value, VariantError> {
                Ok(Value::from(*self as u64))
            }
        }

        impl FromTree for $t {
            fn from_tree(&mut self, tree: &Value, _max_depth: u32) -> Result<(), VariantError> {
                let raw = tree.as_u64().ok_or(VariantError::UnexpectedTree {
                    expected: stringify!($t),
                    found: tree_kind(tree),
                })?;
                *self = <$t>::try_from(raw).map_err(|_| VariantError::UnexpectedTree {
                    expected: stringify!($t),
                    found: "out-of-range number",
                })?;
                Ok(())
            }
        }
    )*};
}

macro_rules! signed_leaf {
    ($($t:ty),*) => {$(
        impl ToTree for $t {
            fn to_tree(&self, _max_depth: u32) -> Result<Value, VariantError> {
                Ok(Value::from(*self as i64))
            }
        }

        impl FromTree for $t {
            fn from_tree(&mut self, tree: &Value, _max_depth: u32) -> Result<(), VariantError> {
                let raw = tree.as_i64().ok_or(VariantError::UnexpectedTree {
                    expected: stringify!($t),
                    found: tree_kind(tree),
                })?;
                *self = <$t>::try_from(raw).map_err(|_| VariantError::UnexpectedTree {
                    expected: stringify!($t),
                    found: "out-of-range number",
                })?;
                Ok(())
            }
        }
    )*};
}

unsigned_leaf!(u8, u16, u32, u64, usize);
signed_leaf!(i8, i16, i32, i64, isize);

impl ToTree for f64 {
    fn to_tree(&self, _max_depth: u32) -> Result<Value, VariantError> {
        // `Value::from` maps NaN and the infinities to null, which the
        // reverse conversion can only reject; report them at the source.
        serde_json::Number::from_f64(*self)
            .map(Value::Number)
            .ok_or(VariantError::UnexpectedTree {
                expected: "finite f64",
                found: "non-finite number",
            })
    }
}

impl FromTree for f64 {
    fn from_tree(&mut self, tree: &Value, _max_depth: u32) -> Result<(), VariantError> {
        *self = tree.as_f64().ok_or(VariantError::UnexpectedTree {
            expected: "f64",
            found: tree_kind(tree),
        })?;
        Ok(())
    }
}

impl ToTree for bool {
    fn to_tree(&self, _max_depth: u32) -> Result<Value, VariantError> {
        Ok(Value::Bool(*self))
    }
}

impl FromTree for bool {
    fn from_tree(&mut self, tree: &Value, _max_depth: u32) -> Result<(), VariantError> {
        *self = tree.as_bool().ok_or(VariantError::UnexpectedTree {
            expected: "bool",
            found: tree_kind(tree),
        })?;
        Ok(())
    }
}

impl ToTree for String {
    fn to_tree(&self, _max_depth: u32) -> Result<Value, VariantError> {
        Ok(Value::String(self.clone()))
    }
}

impl FromTree for String {
    fn from_tree(&mut self, tree: &Value, _max_depth: u32) -> Result<(), VariantError> {
        let text = tree.as_str().ok_or(VariantError::UnexpectedTree {
            expected: "string",
            found: tree_kind(tree),
        })?;
        *self = text.to_owned();
        Ok(())
    }
}

impl ToTree for () {
    fn to_tree(&self, _max_depth: u32) -> Result<Value, VariantError> {
        Ok(Value::Null)
    }
}

impl FromTree for () {
    fn from_tree(&mut self, tree: &Value, _max_depth: u32) -> Result<(), VariantError> {
        if tree.is_null() {
            Ok(())
        } else {
            Err(VariantError::UnexpectedTree {
                expected: "null",
                found: tree_kind(tree),
            })
        }
    }
}

impl<T: ToTree> ToTree for Vec<T> {
    fn to_tree(&self, max_depth: u32) -> Result<Value, VariantError> {
        if max_depth == 0 {
            return Err(VariantError::DepthExhausted {
                container: "sequence",
            });
        }
        let mut items = Vec::with_capacity(self.len());
        for item in self {
            items.push(item.to_tree(max_depth - 1)?);
        }
        Ok(Value::Array(items))
    }
}

impl<T: FromTree + Default> FromTree for Vec<T> {
    fn from_tree(&mut self, tree: &Value, max_depth: u32) -> Result<(), VariantError> {
        if max_depth == 0 {
            return Err(VariantError::DepthExhausted {
                container: "sequence",
            });
        }
        let items = tree.as_array().ok_or(VariantError::UnexpectedTree {
            expected: "array",
            found: tree_kind(tree),
        })?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            let mut value = T::default();
            value.from_tree(item, max_depth - 1)?;
            out.push(value);
        }
        *self = out;
        Ok(())
    }
}
