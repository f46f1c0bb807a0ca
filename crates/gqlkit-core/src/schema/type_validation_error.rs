use crate::loc;
use crate::types::TypeAnnotation;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input object fields may only reference an input object type if doing \
        so does not create a circular chain of non-null, non-list fields. \
        Unbreakable input-object cycle found: {}",
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
    },

    #[error(
        "The `{type_name}` type implements `{non_interface_type_name}`, but \
        that type is not an interface type"
    )]
    ImplementsNonInterfaceType {
        loc: loc::SourceLocation,
        non_interface_type_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements `{undefined_interface_name}`, but \
        no type with that name is defined in the schema"
    )]
    ImplementsUndefinedInterface {
        loc: loc::SourceLocation,
        type_name: String,
        undefined_interface_name: String,
    },

    #[error("Invalid default value for `{coordinate}` ({def_location}): {reason}")]
    InvalidDefaultValue {
        coordinate: String,
        def_location: loc::SourceLocation,
        reason: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is not an input type."
    )]
    InvalidInputFieldWithOutputType {
        def_location: loc::SourceLocation,
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Invalid parameter type: The `{type_name}.{field_name}` field \
        declares the `{parameter_name}` parameter as `{invalid_parameter_type}`, \
        but `{interface_name}.{field_name}` declares it as \
        `{expected_parameter_type}`"
    )]
    InvalidInterfaceSpecifiedFieldParameterType {
        def_location: loc::SourceLocation,
        expected_parameter_type: TypeAnnotation,
        field_name: String,
        interface_name: String,
        invalid_parameter_type: TypeAnnotation,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "Invalid interface-specified field type: The \
        `{type_name}.{field_name}` field is declared as `{invalid_field_type}`, \
        which is not a subtype of `{expected_field_type}` as declared by \
        `{interface_name}.{field_name}`"
    )]
    InvalidInterfaceSpecifiedFieldType {
        location: loc::SourceLocation,
        expected_field_type: TypeAnnotation,
        field_name: String,
        interface_name: String,
        invalid_field_type: TypeAnnotation,
        type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SourceLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input types: The \
        `{parameter_name}` parameter was declared with the \
        `{outputonly_type_name}` type, which is not an input type."
    )]
    InvalidParameterWithOutputOnlyType {
        def_location: loc::SourceLocation,
        outputonly_type_name: String,
        parameter_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field declares a `{parameter_name}` \
        parameter that `{interface_name}.{field_name}` does not declare, so it \
        must be nullable or have a default value"
    )]
    InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
        location: loc::SourceLocation,
        field_name: String,
        interface_name: String,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface, \
        but does not define a field named `{field_name}`"
    )]
    MissingInterfaceSpecifiedField {
        def_location: loc::SourceLocation,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface \
        which defines a `{missing_parameter_name}` parameter on the \
        `{field_name}` field, but `{type_name}.{field_name}` has no \
        `{missing_parameter_name}` parameter"
    )]
    MissingInterfaceSpecifiedFieldParameter {
        def_location: loc::SourceLocation,
        field_name: String,
        interface_name: String,
        missing_parameter_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements {}, therefore \
        `{type_name}` must also implement \
        `{missing_recursive_interface_name}`",
        inheritance_path.iter()
            .map(|iface_name| format!("the `{iface_name}` interface"))
            .collect::<Vec<_>>()
            .join(" which implements "),
    )]
    MissingRecursiveInterfaceImplementation {
        def_location: loc::SourceLocation,
        inheritance_path: Vec<String>,
        missing_recursive_interface_name: String,
        type_name: String,
    },

    #[error(
        "There is no type defined with the name `{undefined_type_name}` \
        (referenced at {ref_location})"
    )]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        undefined_type_name: String,
    },
}
