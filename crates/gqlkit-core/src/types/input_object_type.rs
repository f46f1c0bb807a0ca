use crate::loc;
use crate::nullability::NonNullDefaults;
use crate::types::InputField;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, InputField>,
    pub(super) name: String,
    pub(super) non_null_defaults: Option<NonNullDefaults>,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.get(name)
    }

    /// The input fields of this [`InputObjectType`], ordered as they were
    /// declared.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The type-level [`NonNullDefaults`] declared on this type. Only the
    /// `input` half is meaningful since input objects have no output
    /// positions.
    pub fn non_null_defaults(&self) -> Option<&NonNullDefaults> {
        self.non_null_defaults.as_ref()
    }
}
