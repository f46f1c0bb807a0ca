use crate::loc;
use crate::schema::Schema;
use crate::types::ArgumentCoercionError;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(super) def_location: loc::SourceLocation,
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) parameters: IndexMap<String, Parameter>,
    pub(super) parent_type: NamedGraphQLTypeRef,
    pub(super) type_annotation: TypeAnnotation,
}
impl Field {
    /// Decides the value of every declared parameter for one invocation of this
    /// field, given the arguments the caller provided.
    ///
    /// Parameters that were omitted and have neither a default value nor a
    /// non-null type are left out of the returned map. A parameter given an
    /// explicit `null` maps to [`Value::Null`] even when it declares a default
    /// value (see [`Parameter::coerce_input()`]).
    pub fn coerce_arguments(
        &self,
        provided: &IndexMap<String, Value>,
    ) -> Result<IndexMap<String, Value>, ArgumentCoercionError> {
        if let Some(unknown_arg) = provided.keys()
            .find(|arg_name| !self.parameters.contains_key(arg_name.as_str())) {
            return Err(ArgumentCoercionError::UnknownArgument {
                argument_name: unknown_arg.to_string(),
                field_name: self.name.to_string(),
            });
        }

        let mut coerced = IndexMap::new();
        for (param_name, param) in &self.parameters {
            if let Some(value) = param.coerce_input(provided.get(param_name))? {
                coerced.insert(param_name.to_string(), value);
            }
        }
        Ok(coerced)
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`Field`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    /// The parameters of this [`Field`], ordered as they were declared.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn parent_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> &'schema GraphQLType {
        self.parent_type
            .deref(schema)
            .expect("type is present in schema")
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type.name()
    }

    /// The resolved [`TypeAnnotation`] of this [`Field`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
