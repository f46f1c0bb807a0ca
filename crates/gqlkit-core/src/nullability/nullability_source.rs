/// The configuration layer that decided the nullability of a type position.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum NullabilitySource {
    /// The position was wrapped in an explicit `nonNull` or `nullable`.
    ExplicitWrapper,

    /// The owning type's [`NonNullDefaults`](crate::nullability::NonNullDefaults).
    TypeDefaults,

    /// The schema-wide [`NonNullDefaults`](crate::nullability::NonNullDefaults).
    GlobalDefaults,
}
impl NullabilitySource {
    pub fn description(&self) -> &str {
        match self {
            Self::ExplicitWrapper => "explicit wrapper",
            Self::TypeDefaults => "type-level nonNullDefaults",
            Self::GlobalDefaults => "global nonNullDefaults",
        }
    }
}
