/// An explicit nullability declared directly on a single type position.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Nullability {
    NonNull,
    Nullable,
}
impl Nullability {
    pub fn from_non_null(non_null: bool) -> Self {
        if non_null {
            Self::NonNull
        } else {
            Self::Nullable
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull)
    }
}
