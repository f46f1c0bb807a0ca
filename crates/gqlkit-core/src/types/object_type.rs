use crate::loc;
use crate::nullability::NonNullDefaults;
use crate::types::Field;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

/// Represents a
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType(pub(super) ObjectOrInterfaceTypeData);
impl ObjectType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`ObjectType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.0.def_location
    }

    /// The description of this [`ObjectType`], if one was declared.
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.fields.get(name)
    }

    /// The fields of this [`ObjectType`], ordered as they were declared.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    /// The names of the interfaces this [`ObjectType`] implements, ordered as
    /// they were declared.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn interfaces(&self) -> &Vec<NamedGraphQLTypeRef> {
        &self.0.interfaces
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }

    /// The type-level [`NonNullDefaults`] declared on this [`ObjectType`].
    ///
    /// These have already been applied to every [`Field`] (and every
    /// [`Parameter`](crate::types::Parameter) of every [`Field`]) of this type.
    pub fn non_null_defaults(&self) -> Option<&NonNullDefaults> {
        self.0.non_null_defaults.as_ref()
    }
}
