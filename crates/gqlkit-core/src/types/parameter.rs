use crate::loc;
use crate::types::argument_coercion::coerce_input_value;
use crate::types::ArgumentCoercionError;
use crate::types::TypeAnnotation;
use crate::Value;

/// Represents a parameter (argument definition) declared on a
/// [`Field`](crate::types::Field).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter {
    pub(super) def_location: loc::SourceLocation,
    pub(super) default_value: Option<Value>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl Parameter {
    /// Decides the value of this parameter for one invocation of its field.
    ///
    /// Pass `None` when the caller omitted the argument and `Some(&Value::Null)`
    /// when the caller explicitly provided `null`. The
    /// [default value](Parameter::default_value) is used only in the former
    /// case.
    pub fn coerce_input(
        &self,
        provided: Option<&Value>,
    ) -> Result<Option<Value>, ArgumentCoercionError> {
        coerce_input_value(
            self.name.as_str(),
            &self.type_annotation,
            self.default_value.as_ref(),
            provided,
        )
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A parameter is required when a caller must always provide it: it is
    /// non-null and has no default value.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
