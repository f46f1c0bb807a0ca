use crate::loc;
use crate::nullability::NullabilityScope;
use crate::nullability::PositionKind;
use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::ParameterBuilder;
use crate::types::TypeExpr;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Declares one field of an [`ObjectTypeBuilder`](crate::types::ObjectTypeBuilder)
/// or [`InterfaceTypeBuilder`](crate::types::InterfaceTypeBuilder).
///
/// ```
/// use gqlkit_core::types::FieldBuilder;
/// use gqlkit_core::types::ParameterBuilder;
/// use gqlkit_core::types::TypeExpr;
///
/// // echo(message: String): String!
/// let echo = FieldBuilder::new("echo", TypeExpr::non_null(TypeExpr::named("String")))
///     .parameter(ParameterBuilder::new("message", TypeExpr::named("String")));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldBuilder {
    def_location: loc::SourceLocation,
    deprecation_reason: Option<String>,
    description: Option<String>,
    name: String,
    parameters: Vec<ParameterBuilder>,
    type_expr: TypeExpr,
}
impl FieldBuilder {
    pub(crate) fn build(
        self,
        type_name: &str,
        scope: &NullabilityScope,
    ) -> Result<Field> {
        // https://spec.graphql.org/October2021/#sel-IAHZhCFDBDCAACCTl4L
        if self.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                location: self.def_location,
                field_name: self.name,
                type_name: type_name.to_string(),
            });
        }

        let type_annotation = self.type_expr.resolve(
            scope,
            PositionKind::Output,
            &self.def_location.child("type"),
        )?;

        let mut parameters: IndexMap<String, Parameter> = IndexMap::new();
        for param_builder in self.parameters {
            let param = param_builder.build(type_name, self.name.as_str(), scope)?;
            if let Some(existing_param) = parameters.get(param.name()) {
                return Err(SchemaBuildError::DuplicateParameterDefinition {
                    type_name: type_name.to_string(),
                    field_name: self.name,
                    parameter_name: param.name,
                    def1: existing_param.def_location.to_owned(),
                    def2: param.def_location,
                });
            }
            parameters.insert(param.name.to_string(), param);
        }

        Ok(Field {
            parent_type: NamedGraphQLTypeRef::new(
                type_name,
                self.def_location.to_owned(),
            ),
            def_location: self.def_location,
            deprecation_reason: self.deprecation_reason,
            description: self.description,
            name: self.name,
            parameters,
            type_annotation,
        })
    }

    /// Marks this field as deprecated.
    pub fn deprecated(mut self, reason: impl AsRef<str>) -> Self {
        self.deprecation_reason = Some(reason.as_ref().to_string());
        self
    }

    pub fn description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn new(name: impl AsRef<str>, type_expr: TypeExpr) -> Self {
        Self {
            def_location: loc::SourceLocation::Builder,
            deprecation_reason: None,
            description: None,
            name: name.as_ref().to_string(),
            parameters: vec![],
            type_expr,
        }
    }

    pub fn parameter(mut self, parameter: ParameterBuilder) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub(crate) fn with_def_location(mut self, def_location: loc::SourceLocation) -> Self {
        self.def_location = def_location;
        self
    }
}
