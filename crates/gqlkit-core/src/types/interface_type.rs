use crate::loc;
use crate::nullability::NonNullDefaults;
use crate::types::Field;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::schema::Schema).
///
/// Types implementing an interface do not inherit its
/// [`NonNullDefaults`]; each type resolves its own fields.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType(pub(super) ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.0.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn interfaces(&self) -> &Vec<NamedGraphQLTypeRef> {
        &self.0.interfaces
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }

    pub fn non_null_defaults(&self) -> Option<&NonNullDefaults> {
        self.0.non_null_defaults.as_ref()
    }
}
