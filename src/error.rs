use thiserror::Error;

/// Failure surface of the container API. Every reported failure carries the
/// names and tags a caller needs to diagnose it; there is no recoverable
/// channel beyond propagating the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    /// `get::<X>()` was called while a different member type is live.
    #[error("{container} does not contain a value of type {expected} (live tag {tag})")]
    WrongType {
        container: &'static str,
        expected: &'static str,
        tag: usize,
    },

    /// A tag outside `[0, N)` was passed to `set_which` (directly or through
    /// `from_tree`).
    #[error("tag {tag} is out of range for {container} with {count} member types")]
    InvalidTag {
        container: &'static str,
        tag: usize,
        count: usize,
    },

    /// The recursion budget ran out before a tree conversion completed.
    #[error("recursion depth exhausted while converting {container}")]
    DepthExhausted { container: &'static str },

    /// The value tree did not have the shape a conversion requires.
    #[error("expected {expected} in the value tree, found {found}")]
    UnexpectedTree {
        expected: &'static str,
        found: &'static str,
    },
}
