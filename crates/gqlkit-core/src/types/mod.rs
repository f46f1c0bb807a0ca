mod argument_coercion;
mod default_value_validator;
mod enum_type;
mod enum_type_builder;
mod field;
mod field_builder;
mod graphql_type;
mod input_field;
mod input_field_builder;
mod input_object_type;
mod input_object_type_builder;
mod input_object_type_validator;
mod interface_type;
mod interface_type_builder;
mod list_type_annotation;
mod named_graphql_type_ref;
mod named_type_annotation;
mod object_or_interface_type_data;
mod object_or_interface_type_validator;
mod object_type;
mod object_type_builder;
mod parameter;
mod parameter_builder;
mod scalar_type;
mod scalar_type_builder;
mod type_annotation;
mod type_builder;
mod type_expr;
mod types_map_builder;

pub use argument_coercion::ArgumentCoercionError;
use default_value_validator::DefaultValueValidator;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use enum_type_builder::EnumTypeBuilder;
pub use enum_type_builder::EnumValueBuilder;
pub use field::Field;
pub use field_builder::FieldBuilder;
pub use graphql_type::GraphQLType;
pub use input_field::InputField;
pub use input_field_builder::InputFieldBuilder;
pub use input_object_type::InputObjectType;
pub use input_object_type_builder::InputObjectTypeBuilder;
use input_object_type_validator::InputObjectTypeValidator;
pub use interface_type::InterfaceType;
pub use interface_type_builder::InterfaceTypeBuilder;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_graphql_type_ref::NamedGraphQLTypeRef;
pub use named_type_annotation::NamedTypeAnnotation;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub use object_type_builder::ObjectTypeBuilder;
pub use parameter::Parameter;
pub use parameter_builder::ParameterBuilder;
pub use scalar_type::ScalarType;
pub use scalar_type_builder::ScalarTypeBuilder;
pub use type_annotation::TypeAnnotation;
pub use type_builder::TypeBuilder;
pub use type_builder::TypeBuilderEnum;
use type_builder::TypeBuilderHelpers;
pub use type_expr::TypeExpr;
pub(crate) use types_map_builder::TypesMapBuilder;

#[cfg(test)]
mod tests;
