use crate::loc;
use crate::nullability::NonNullDefaults;
use crate::nullability::NullabilityScope;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::InputFieldBuilder;
use crate::types::InputObjectType;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Declares an input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeBuilder {
    def_location: loc::SourceLocation,
    description: Option<String>,
    fields: Vec<InputFieldBuilder>,
    name: String,
    non_null_defaults: Option<NonNullDefaults>,
}
impl InputObjectTypeBuilder {
    pub fn description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn field(mut self, field: InputFieldBuilder) -> Self {
        self.fields.push(field);
        self
    }

    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            def_location: loc::SourceLocation::Builder,
            description: None,
            fields: vec![],
            name: name.as_ref().to_string(),
            non_null_defaults: None,
        }
    }

    /// Type-level defaults for the fields of this input type. Only
    /// [`NonNullDefaults::input`] applies here.
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
impl TypeBuilder for InputObjectTypeBuilder {
    pub fn build(self, global_non_null_defaults: &NonNullDefaults) -> Result<GraphQLType> {
        let scope = NullabilityScope::new(
            *global_non_null_defaults,
            self.non_null_defaults,
        );
        let fields = TypeBuilderHelpers::input_fields_from_builders(
            self.name.as_str(),
            &scope,
            self.fields,
        )?;

        Ok(GraphQLType::InputObject(InputObjectType {
            def_location: self.def_location,
            description: self.description,
            fields,
            name: self.name,
            non_null_defaults: self.non_null_defaults,
        }.into()))
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn type_name(&self) -> &str {
        self.name.as_str()
    }
}
