use crate::loc;
use crate::nullability::NonNullDefaults;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ScalarType;
use crate::types::TypeBuilder;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Declares a custom scalar type.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeBuilder {
    def_location: loc::SourceLocation,
    description: Option<String>,
    name: String,
}
impl ScalarTypeBuilder {
    pub fn description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            def_location: loc::SourceLocation::Builder,
            description: None,
            name: name.as_ref().to_string(),
        }
    }

    pub(crate) fn with_def_location(mut self, def_location: loc::SourceLocation) -> Self {
        self.def_location = def_location;
        self
    }
}

#[inherent]
impl TypeBuilder for ScalarTypeBuilder {
    pub fn build(self, _global_non_null_defaults: &NonNullDefaults) -> Result<GraphQLType> {
        Ok(GraphQLType::Scalar(ScalarType {
            def_location: self.def_location,
            description: self.description,
            name: self.name,
        }.into()))
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn type_name(&self) -> &str {
        self.name.as_str()
    }
}
