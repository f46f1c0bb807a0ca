use crate::loc;
use crate::nullability::NonNullDefaults;
use crate::schema::SchemaBuildError;
use crate::types::FieldBuilder;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Declares an interface type.
///
/// Implementing types do not inherit an interface's type-level
/// [`NonNullDefaults`]. An implementing field may still be non-null where the
/// interface field is nullable, but not the other way around.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeBuilder {
    def_location: loc::SourceLocation,
    description: Option<String>,
    fields: Vec<FieldBuilder>,
    interfaces: Vec<NamedGraphQLTypeRef>,
    name: String,
    non_null_defaults: Option<NonNullDefaults>,
}
impl InterfaceTypeBuilder {
    pub fn description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn field(mut self, field: FieldBuilder) -> Self {
        self.fields.push(field);
        self
    }

    /// Declares that this interface implements another interface.
    pub fn implements(mut self, interface_name: impl AsRef<str>) -> Self {
        let ref_location = self.def_location
            .child("implements")
            .child(self.interfaces.len());
        self.interfaces.push(NamedGraphQLTypeRef::new(interface_name, ref_location));
        self
    }

    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            def_location: loc::SourceLocation::Builder,
            description: None,
            fields: vec![],
            interfaces: vec![],
            name: name.as_ref().to_string(),
            non_null_defaults: None,
        }
    }

    /// Type-level defaults for every field and parameter declared on this type.
    /// These take precedence over the schema-wide defaults but yield to
    /// explicit `nonNull`/`nullable` wrappers.
    pub fn non_null_defaults(mut self, non_null_defaults: NonNullDefaults) -> Self {
        self.non_null_defaults = Some(non_null_defaults);
        self
    }

    pub(crate) fn with_def_location(mut self, def_location: loc::SourceLocation) -> Self {
        self.def_location = def_location;
        self
    }
}

#[inherent]
impl TypeBuilder for InterfaceTypeBuilder {
    pub fn build(self, global_non_null_defaults: &NonNullDefaults) -> Result<GraphQLType> {
        let data = TypeBuilderHelpers::object_or_interface_data(
            self.def_location,
            self.description,
            self.fields,
            global_non_null_defaults,
            self.interfaces,
            self.name,
            self.non_null_defaults,
        )?;
        Ok(GraphQLType::Interface(InterfaceType(data).into()))
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn type_name(&self) -> &str {
        self.name.as_str()
    }
}
