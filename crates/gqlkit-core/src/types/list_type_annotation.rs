use crate::loc;
use crate::nullability::NullabilitySource;
use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub(super) inner_type_annotation: Box<TypeAnnotation>,
    pub(super) nullability_source: NullabilitySource,
    pub(super) nullable: bool,
    pub(super) ref_location: loc::SourceLocation,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_annotation
    }

    /// Check if two list type annotations are definitionally equal (see
    /// [`TypeAnnotation::is_equivalent_to()`]).
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.inner_type_annotation.is_equivalent_to(&other.inner_type_annotation)
    }

    pub fn nullability_source(&self) -> NullabilitySource {
        self.nullability_source
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}
