use crate::loc;
use crate::nullability::NonNullDefaults;
use crate::types::Field;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// Data shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectOrInterfaceTypeData {
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(super) name: String,
    pub(super) non_null_defaults: Option<NonNullDefaults>,
}
impl ObjectOrInterfaceTypeData {
    pub(super) fn interface_names(&self) -> Vec<&str> {
        self.interfaces.iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }
}
