use proc_macro::TokenStream;
use syn::{parse_macro_input, Result};

mod common;

mod expand;
mod tree;
mod visitor;

#[inline]
fn result_of(doit: Result<impl Into<TokenStream>>) -> TokenStream {
    match doit {
        Ok(token_stream) => token_stream.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Turns an enum into a closed tagged union over its member types.
///
/// Each variant declares one member type, either as a one-field tuple variant
/// (`Number(i64)`) or as a unit variant naming a type of the same identifier
/// (`Ping`, shorthand for `Ping(Ping)`). Member types must be distinct,
/// non-reference types, and every member type must implement [`Default`]
/// (re-tagging default-constructs the newly selected member).
///
/// Takes arguments in the same format as other proc_macro_attribute, eg.
/// `#[static_variant(no_impl)]`.
///
/// Valid arguments:
/// - `no_impl`: stop [`From`] member and [`TryFrom`] union from being implemented.
/// - `no_tree`: stop the `ToTree`/`FromTree` serialization bridge from being
///   implemented, for unions whose members do not participate in serialization.
///
/// Generated alongside the enum:
/// - `StaticVariant` and per-member `VariantOf` implementations (tag
///   introspection, `set_which` re-tagging, checked `get`/`get_mut`);
/// - `Default` (tag 0, default value of the first member);
/// - `PartialEq`/`Eq`/`PartialOrd`/`Ord` comparing **tags only** — do not also
///   derive these;
/// - `{Enum}Visitor` and `{Enum}VisitorMut` traits with one method per member
///   (snake_case of the variant name), plus inherent `visit`/`visit_mut`;
/// - inherent `convert_into<U>` cloning the live value into any union whose
///   member list is a superset of this one;
/// - unless suppressed, `From`/`TryFrom` conversions and the
///   `ToTree`/`FromTree` value-tree bridge.
#[proc_macro_attribute]
pub fn static_variant(args: TokenStream, input: TokenStream) -> TokenStream {
    result_of(expand::doit(
        parse_macro_input!(args),
        parse_macro_input!(input),
    ))
}
