//! Closed tagged unions over a statically declared list of member types.
//!
//! A `#[static_variant]` enum holds exactly one live value out of its declared
//! member types, identified by a zero-based tag in declaration order. The
//! macro validates the member list at expansion time (no duplicate types, no
//! reference types) and generates the whole container contract: tag
//! introspection and re-tagging, checked narrowing, visitor dispatch, and a
//! depth-budgeted serialization bridge to a JSON-like value tree.
//!
//! ```
//! use static_variant::{static_variant, StaticVariant};
//!
//! #[static_variant]
//! #[derive(Debug, Clone)]
//! enum Sample {
//!     Number(i64),
//!     Text(String),
//! }
//!
//! let mut sample = Sample::from(5i64);
//! assert_eq!(sample.which(), 0);
//! assert_eq!(*sample.get::<i64>().unwrap(), 5);
//!
//! sample.set_which(1).unwrap();
//! assert_eq!(sample.get::<String>().unwrap(), "");
//! ```

mod error;
mod tree;
mod variant;

pub use error::VariantError;
pub use tree::{tree_kind, FromTree, ToTree};
pub use variant::{StaticVariant, VariantOf};

/// The value tree used as the serialization target.
pub use serde_json::Value;

pub use static_variant_macros::static_variant;
