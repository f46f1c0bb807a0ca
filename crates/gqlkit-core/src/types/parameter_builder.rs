use crate::loc;
use crate::nullability::NullabilityScope;
use crate::nullability::PositionKind;
use crate::schema::SchemaBuildError;
use crate::types::Parameter;
use crate::types::TypeExpr;
use crate::Value;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Declares one parameter of a [`FieldBuilder`](crate::types::FieldBuilder).
///
/// ```
/// use gqlkit_core::types::ParameterBuilder;
/// use gqlkit_core::types::TypeExpr;
///
/// let message = ParameterBuilder::new("message", TypeExpr::named("String"))
///     .default_value("hello");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterBuilder {
    def_location: loc::SourceLocation,
    default_value: Option<Value>,
    description: Option<String>,
    name: String,
    type_expr: TypeExpr,
}
impl ParameterBuilder {
    pub(crate) fn build(
        self,
        type_name: &str,
        field_name: &str,
        scope: &NullabilityScope,
    ) -> Result<Parameter> {
        // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBBCAACCTlrG
        if self.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                location: self.def_location,
                field_name: field_name.to_string(),
                param_name: self.name,
                type_name: type_name.to_string(),
            });
        }

        let type_annotation = self.type_expr.resolve(
            scope,
            PositionKind::Input,
            &self.def_location.child("type"),
        )?;

        Ok(Parameter {
            def_location: self.def_location,
            default_value: self.default_value,
            description: self.description,
            name: self.name,
            type_annotation,
        })
    }

    /// The value used when a caller omits this parameter entirely. It is never
    /// substituted for an explicit `null`.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn new(name: impl AsRef<str>, type_expr: TypeExpr) -> Self {
        Self {
            def_location: loc::SourceLocation::Builder,
            default_value: None,
            description: None,
            name: name.as_ref().to_string(),
            type_expr,
        }
    }

    pub(crate) fn with_def_location(mut self, def_location: loc::SourceLocation) -> Self {
        self.def_location = def_location;
        self
    }
}
