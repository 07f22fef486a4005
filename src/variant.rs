use crate::VariantError;

/// Contract implemented by every `#[static_variant]` enum: the declared
/// member list with its tag positions, plus tag-driven introspection and
/// re-tagging.
///
/// Tags are zero-based and follow declaration order. A valid instance always
/// holds exactly one live value whose type sits at position `which()`.
pub trait StaticVariant: Sized {
    /// Number of declared member types.
    const COUNT: usize;

    /// Canonical name of the union: the comma-joined member names wrapped in
    /// the `static_variant<...>` marker. Diagnostic only.
    const NAME: &'static str;

    /// Member type names, indexed by tag.
    fn type_names() -> &'static [&'static str];

    /// The tag of the live member type. Never fails.
    fn which(&self) -> usize;

    /// Drops the live value and default-constructs the member at `tag`,
    /// so that `which()` afterwards reports `tag`.
    ///
    /// Out-of-range tags are reported as [`VariantError::InvalidTag`], never
    /// silently clamped.
    fn set_which(&mut self, tag: usize) -> Result<(), VariantError>;

    /// Name of the member type at `tag`, if the tag is in range.
    fn name_of(tag: usize) -> Option<&'static str> {
        Self::type_names().get(tag).copied()
    }

    /// Tag-checked narrowing to the member type `X`.
    ///
    /// Succeeds iff `which() == X::TAG`; otherwise reports
    /// [`VariantError::WrongType`] naming the expected member. The tag is
    /// re-checked on every call, caller intent is never trusted.
    fn get<X: VariantOf<Self>>(&self) -> Result<&X, VariantError> {
        X::variant_ref(self).ok_or(VariantError::WrongType {
            container: Self::NAME,
            expected: X::NAME,
            tag: self.which(),
        })
    }

    /// As [`Self::get`], with mutable access.
    fn get_mut<X: VariantOf<Self>>(&mut self) -> Result<&mut X, VariantError> {
        let tag = self.which();
        X::variant_mut(self).ok_or(VariantError::WrongType {
            container: Self::NAME,
            expected: X::NAME,
            tag,
        })
    }
}

/// Catalog entry tying a member type to its position within one union.
/// Implemented by the macro for every declared member.
pub trait VariantOf<E: StaticVariant>: Sized {
    /// Zero-based position of this member in the declared list.
    const TAG: usize;

    /// Canonical name of this member type.
    const NAME: &'static str;

    /// The live value, if this member is the live one.
    fn variant_ref(container: &E) -> Option<&Self>;

    /// The live value by `&mut`, if this member is the live one.
    fn variant_mut(container: &mut E) -> Option<&mut Self>;
}
