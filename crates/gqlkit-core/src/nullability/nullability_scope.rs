use crate::nullability::resolve_nullability;
use crate::nullability::NonNullDefaults;
use crate::nullability::Nullability;
use crate::nullability::PositionKind;
use crate::nullability::ResolvedNullability;

/// The schema-wide and type-level layers in effect while resolving the
/// positions declared on one type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NullabilityScope {
    global: NonNullDefaults,
    type_defaults: Option<NonNullDefaults>,
}
impl NullabilityScope {
    pub fn new(
        global: NonNullDefaults,
        type_defaults: Option<NonNullDefaults>,
    ) -> Self {
        Self {
            global,
            type_defaults,
        }
    }

    pub fn global(&self) -> &NonNullDefaults {
        &self.global
    }

    pub fn resolve(
        &self,
        field_override: Option<Nullability>,
        kind: PositionKind,
    ) -> ResolvedNullability {
        resolve_nullability(
            &self.global,
            self.type_defaults.as_ref(),
            field_override,
            kind,
        )
    }

    pub fn type_defaults(&self) -> Option<&NonNullDefaults> {
        self.type_defaults.as_ref()
    }
}
