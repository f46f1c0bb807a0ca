use crate::types::TypeAnnotation;
use crate::Value;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ArgumentCoercionError {
    #[error(
        "The `{name}` input is declared as `{expected_type}` and has no default \
        value, so it must be provided"
    )]
    MissingRequiredArgument {
        expected_type: String,
        name: String,
    },

    #[error(
        "An explicit `null` was provided for the `{name}` input, but it is \
        declared as non-null (`{expected_type}`)"
    )]
    NullForNonNullArgument {
        expected_type: String,
        name: String,
    },

    #[error("The `{field_name}` field does not declare a `{argument_name}` parameter")]
    UnknownArgument {
        argument_name: String,
        field_name: String,
    },
}

/// Decides the value an input position ends up with given what the caller
/// provided.
///
/// `None` means the caller omitted the input entirely, which is distinct from
/// providing an explicit [`Value::Null`]. The declared default applies only to
/// an omitted input. An explicit `null` is kept as-is for nullable inputs and
/// never replaced by the default.
///
/// Returns `Ok(None)` when the input stays omitted (nullable, no default).
pub(super) fn coerce_input_value(
    name: &str,
    type_annotation: &TypeAnnotation,
    default_value: Option<&Value>,
    provided: Option<&Value>,
) -> Result<Option<Value>, ArgumentCoercionError> {
    match (provided, default_value) {
        (None, Some(default_value)) => Ok(Some(default_value.to_owned())),

        (None, None) if type_annotation.nullable() => Ok(None),

        (None, None) => Err(ArgumentCoercionError::MissingRequiredArgument {
            expected_type: type_annotation.to_string(),
            name: name.to_string(),
        }),

        (Some(Value::Null), _) if type_annotation.nullable() =>
            Ok(Some(Value::Null)),

        (Some(Value::Null), _) =>
            Err(ArgumentCoercionError::NullForNonNullArgument {
                expected_type: type_annotation.to_string(),
                name: name.to_string(),
            }),

        (Some(value), _) => Ok(Some(value.to_owned())),
    }
}
