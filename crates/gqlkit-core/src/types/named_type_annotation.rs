use crate::loc;
use crate::nullability::NullabilitySource;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(super) nullability_source: NullabilitySource,
    pub(super) nullable: bool,
    pub(super) type_ref: NamedGraphQLTypeRef,
}
impl NamedTypeAnnotation {
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> &'schema GraphQLType {
        self.type_ref
            .deref(schema)
            .expect("type is present in schema")
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    /// Check if two named type annotations are definitionally equal.
    ///
    /// Two named type annotations are equivalent if they have:
    /// - Same type name
    /// - Same nullability
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.type_ref.name() == other.type_ref.name()
    }

    /// Compares only the named types themselves; nullability is handled by
    /// [`TypeAnnotation::is_subtype_of()`](crate::types::TypeAnnotation::is_subtype_of).
    pub(super) fn is_named_subtype_of_impl(
        &self,
        types_map: &IndexMap<String, GraphQLType>,
        other: &Self,
    ) -> bool {
        if self.type_ref.name() == other.type_ref.name() {
            return true;
        }

        let other_iface_name = match types_map.get(other.type_ref.name()) {
            Some(GraphQLType::Interface(iface)) => iface.name(),
            _ => return false,
        };

        match types_map.get(self.type_ref.name()) {
            Some(GraphQLType::Object(obj_type)) =>
                obj_type.interface_names().contains(&other_iface_name),
            Some(GraphQLType::Interface(iface_type)) =>
                iface_type.interface_names().contains(&other_iface_name),
            _ => false,
        }
    }

    pub fn nullability_source(&self) -> NullabilitySource {
        self.nullability_source
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        self.type_ref.ref_location()
    }
}
