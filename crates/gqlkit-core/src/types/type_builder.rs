use crate::loc;
use crate::nullability::NonNullDefaults;
use crate::nullability::NullabilityScope;
use crate::schema::SchemaBuildError;
use crate::types::EnumTypeBuilder;
use crate::types::Field;
use crate::types::FieldBuilder;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputFieldBuilder;
use crate::types::InputObjectTypeBuilder;
use crate::types::InterfaceTypeBuilder;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectTypeBuilder;
use crate::types::ScalarTypeBuilder;
use indexmap::IndexMap;
use inherent::inherent;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Implemented by every builder that declares one named type of a schema.
///
/// Builders only collect declarations. Nullability is resolved when
/// [`TypeBuilder::build()`] is called with the schema-wide
/// [`NonNullDefaults`], which [`SchemaBuilder::build()`](crate::SchemaBuilder::build)
/// does exactly once per type.
pub trait TypeBuilder: Sized {
    fn build(self, global_non_null_defaults: &NonNullDefaults) -> Result<GraphQLType>;

    fn def_location(&self) -> &loc::SourceLocation;

    fn type_name(&self) -> &str;
}

/// Any one of the type builders, as accepted by
/// [`SchemaBuilder::add_type()`](crate::SchemaBuilder::add_type).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeBuilderEnum {
    Enum(EnumTypeBuilder),
    InputObject(InputObjectTypeBuilder),
    Interface(InterfaceTypeBuilder),
    Object(ObjectTypeBuilder),
    Scalar(ScalarTypeBuilder),
}

#[inherent]
impl TypeBuilder for TypeBuilderEnum {
    pub fn build(self, global_non_null_defaults: &NonNullDefaults) -> Result<GraphQLType> {
        match self {
            Self::Enum(builder) => builder.build(global_non_null_defaults),
            Self::InputObject(builder) => builder.build(global_non_null_defaults),
            Self::Interface(builder) => builder.build(global_non_null_defaults),
            Self::Object(builder) => builder.build(global_non_null_defaults),
            Self::Scalar(builder) => builder.build(global_non_null_defaults),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Enum(builder) => builder.def_location(),
            Self::InputObject(builder) => builder.def_location(),
            Self::Interface(builder) => builder.def_location(),
            Self::Object(builder) => builder.def_location(),
            Self::Scalar(builder) => builder.def_location(),
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::Enum(builder) => builder.type_name(),
            Self::InputObject(builder) => builder.type_name(),
            Self::Interface(builder) => builder.type_name(),
            Self::Object(builder) => builder.type_name(),
            Self::Scalar(builder) => builder.type_name(),
        }
    }
}
impl std::convert::From<EnumTypeBuilder> for TypeBuilderEnum {
    fn from(value: EnumTypeBuilder) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<InputObjectTypeBuilder> for TypeBuilderEnum {
    fn from(value: InputObjectTypeBuilder) -> Self {
        Self::InputObject(value)
    }
}
impl std::convert::From<InterfaceTypeBuilder> for TypeBuilderEnum {
    fn from(value: InterfaceTypeBuilder) -> Self {
        Self::Interface(value)
    }
}
impl std::convert::From<ObjectTypeBuilder> for TypeBuilderEnum {
    fn from(value: ObjectTypeBuilder) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<ScalarTypeBuilder> for TypeBuilderEnum {
    fn from(value: ScalarTypeBuilder) -> Self {
        Self::Scalar(value)
    }
}

pub(super) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    pub fn input_fields_from_builders(
        type_name: &str,
        scope: &NullabilityScope,
        field_builders: Vec<InputFieldBuilder>,
    ) -> Result<IndexMap<String, InputField>> {
        let mut fields: IndexMap<String, InputField> = IndexMap::new();
        for field_builder in field_builders {
            let field = field_builder.build(type_name, scope)?;
            if let Some(existing_field) = fields.get(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name,
                    field_def1: existing_field.def_location.to_owned(),
                    field_def2: field.def_location,
                });
            }
            fields.insert(field.name.to_string(), field);
        }
        Ok(fields)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn object_or_interface_data(
        def_location: loc::SourceLocation,
        description: Option<String>,
        field_builders: Vec<FieldBuilder>,
        global_non_null_defaults: &NonNullDefaults,
        interfaces: Vec<NamedGraphQLTypeRef>,
        name: String,
        non_null_defaults: Option<NonNullDefaults>,
    ) -> Result<ObjectOrInterfaceTypeData> {
        // Object and interface type declarations must declare a unique list of
        // interfaces they implement.
        //
        // https://spec.graphql.org/October2021/#sel-HAHZhCFFABABsCqgY
        let mut seen_iface_names = HashSet::new();
        for iface_ref in &interfaces {
            if !seen_iface_names.insert(iface_ref.name()) {
                return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                    def_location: iface_ref.ref_location().to_owned(),
                    duplicated_interface_name: iface_ref.name().to_string(),
                    type_name: name,
                });
            }
        }

        let scope = NullabilityScope::new(
            *global_non_null_defaults,
            non_null_defaults,
        );
        log::trace!(
            "Resolving fields of `{name}` with global defaults {} and type \
            defaults {}.",
            scope.global(),
            scope.type_defaults()
                .map(|defaults| defaults.to_string())
                .unwrap_or_else(|| "(none)".to_string()),
        );

        let mut fields: IndexMap<String, Field> = IndexMap::new();
        for field_builder in field_builders {
            let field = field_builder.build(name.as_str(), &scope)?;
            if let Some(existing_field) = fields.get(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: name,
                    field_name: field.name,
                    field_def1: existing_field.def_location.to_owned(),
                    field_def2: field.def_location,
                });
            }
            fields.insert(field.name.to_string(), field);
        }

        Ok(ObjectOrInterfaceTypeData {
            def_location,
            description,
            fields,
            interfaces,
            name,
            non_null_defaults,
        })
    }
}
