use crate::nullability::NullabilitySource;

/// The effective nullability of one type position along with the layer that
/// decided it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ResolvedNullability {
    pub(crate) non_null: bool,
    pub(crate) source: NullabilitySource,
}
impl ResolvedNullability {
    pub fn is_non_null(&self) -> bool {
        self.non_null
    }

    pub fn nullable(&self) -> bool {
        !self.non_null
    }

    pub fn source(&self) -> NullabilitySource {
        self.source
    }
}
