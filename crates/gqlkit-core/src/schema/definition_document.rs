//! The JSON definition document format accepted by
//! [`SchemaBuilder::load_definition_str()`](crate::SchemaBuilder::load_definition_str).
//!
//! Documents mirror the builder API one-to-one: every type definition becomes
//! the corresponding type builder, located at its JSON pointer within the
//! document.

use crate::loc;
use crate::nullability::NonNullDefaults;
use crate::types::EnumTypeBuilder;
use crate::types::EnumValueBuilder;
use crate::types::FieldBuilder;
use crate::types::InputFieldBuilder;
use crate::types::InputObjectTypeBuilder;
use crate::types::InterfaceTypeBuilder;
use crate::types::ObjectTypeBuilder;
use crate::types::ParameterBuilder;
use crate::types::ScalarTypeBuilder;
use crate::types::TypeBuilderEnum;
use crate::types::TypeExpr;
use crate::Value;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub(super) struct DefinitionDocument {
    #[serde(default)]
    pub non_null_defaults: Option<NonNullDefaults>,

    #[serde(default)]
    pub types: Vec<TypeDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub(super) enum TypeDefinition {
    Enum(EnumDefinition),
    InputObject(InputObjectDefinition),
    Interface(ObjectOrInterfaceDefinition),
    Object(ObjectOrInterfaceDefinition),
    Scalar(ScalarDefinition),
}
impl TypeDefinition {
    pub fn into_type_builder(self, location: loc::SourceLocation) -> TypeBuilderEnum {
        match self {
            Self::Enum(def) => def.into_builder(location).into(),
            Self::InputObject(def) => def.into_builder(location).into(),
            Self::Interface(def) => {
                let mut builder = InterfaceTypeBuilder::new(def.name.as_str())
                    .with_def_location(location.to_owned());
                if let Some(description) = &def.description {
                    builder = builder.description(description);
                }
                if let Some(non_null_defaults) = def.non_null_defaults {
                    builder = builder.non_null_defaults(non_null_defaults);
                }
                for iface_name in &def.implements {
                    builder = builder.implements(iface_name);
                }
                for field in def.field_builders(&location) {
                    builder = builder.field(field);
                }
                builder.into()
            },
            Self::Object(def) => {
                let mut builder = ObjectTypeBuilder::new(def.name.as_str())
                    .with_def_location(location.to_owned());
                if let Some(description) = &def.description {
                    builder = builder.description(description);
                }
                if let Some(non_null_defaults) = def.non_null_defaults {
                    builder = builder.non_null_defaults(non_null_defaults);
                }
                for iface_name in &def.implements {
                    builder = builder.implements(iface_name);
                }
                for field in def.field_builders(&location) {
                    builder = builder.field(field);
                }
                builder.into()
            },
            Self::Scalar(def) => {
                let mut builder = ScalarTypeBuilder::new(def.name)
                    .with_def_location(location);
                if let Some(description) = def.description {
                    builder = builder.description(description);
                }
                builder.into()
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub(super) struct ObjectOrInterfaceDefinition {
    #[serde(default)]
    description: Option<String>,

    #[serde(default)]
    fields: Vec<FieldDefinition>,

    #[serde(default)]
    implements: Vec<String>,

    name: String,

    #[serde(default)]
    non_null_defaults: Option<NonNullDefaults>,
}
impl ObjectOrInterfaceDefinition {
    fn field_builders(&self, location: &loc::SourceLocation) -> Vec<FieldBuilder> {
        self.fields.iter()
            .enumerate()
            .map(|(idx, field)| field.to_builder(location.child("fields").child(idx)))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct FieldDefinition {
    #[serde(default)]
    args: Vec<InputValueDefinition>,

    #[serde(default)]
    deprecation_reason: Option<String>,

    #[serde(default)]
    description: Option<String>,

    name: String,

    #[serde(rename = "type")]
    type_expr: TypeExpr,
}
impl FieldDefinition {
    fn to_builder(&self, location: loc::SourceLocation) -> FieldBuilder {
        let mut builder = FieldBuilder::new(self.name.as_str(), self.type_expr.to_owned())
            .with_def_location(location.to_owned());
        if let Some(description) = &self.description {
            builder = builder.description(description);
        }
        if let Some(reason) = &self.deprecation_reason {
            builder = builder.deprecated(reason);
        }
        for (idx, arg) in self.args.iter().enumerate() {
            let arg_location = location.child("args").child(idx);
            let mut param = ParameterBuilder::new(arg.name.as_str(), arg.type_expr.to_owned())
                .with_def_location(arg_location);
            if let Some(description) = &arg.description {
                param = param.description(description);
            }
            if let Some(default_value) = &arg.default {
                param = param.default_value(Value::from_json(default_value));
            }
            builder = builder.parameter(param);
        }
        builder
    }
}

/// An argument or an input object field.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct InputValueDefinition {
    /// `Some(Null)` for an explicit `"default": null`, `None` when the key is
    /// absent.
    #[serde(default, deserialize_with = "deserialize_present")]
    default: Option<serde_json::Value>,

    #[serde(default)]
    description: Option<String>,

    name: String,

    #[serde(rename = "type")]
    type_expr: TypeExpr,
}

fn deserialize_present<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub(super) struct InputObjectDefinition {
    #[serde(default)]
    description: Option<String>,

    #[serde(default)]
    fields: Vec<InputValueDefinition>,

    name: String,

    #[serde(default)]
    non_null_defaults: Option<NonNullDefaults>,
}
impl InputObjectDefinition {
    fn into_builder(self, location: loc::SourceLocation) -> InputObjectTypeBuilder {
        let mut builder = InputObjectTypeBuilder::new(self.name)
            .with_def_location(location.to_owned());
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        if let Some(non_null_defaults) = self.non_null_defaults {
            builder = builder.non_null_defaults(non_null_defaults);
        }
        for (idx, field) in self.fields.into_iter().enumerate() {
            let mut field_builder = InputFieldBuilder::new(field.name, field.type_expr)
                .with_def_location(location.child("fields").child(idx));
            if let Some(description) = field.description {
                field_builder = field_builder.description(description);
            }
            if let Some(default_value) = &field.default {
                field_builder = field_builder.default_value(Value::from_json(default_value));
            }
            builder = builder.field(field_builder);
        }
        builder
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub(super) struct EnumDefinition {
    #[serde(default)]
    description: Option<String>,

    name: String,

    #[serde(default)]
    values: Vec<EnumValueDefinition>,
}
impl EnumDefinition {
    fn into_builder(self, location: loc::SourceLocation) -> EnumTypeBuilder {
        let mut builder = EnumTypeBuilder::new(self.name)
            .with_def_location(location.to_owned());
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        for (idx, value) in self.values.into_iter().enumerate() {
            let value_location = location.child("values").child(idx);
            let value_builder = match value {
                EnumValueDefinition::Name(name) =>
                    EnumValueBuilder::new(name),
                EnumValueDefinition::Full(FullEnumValueDefinition {
                    deprecation_reason,
                    description,
                    name,
                }) => {
                    let mut value_builder = EnumValueBuilder::new(name);
                    if let Some(description) = description {
                        value_builder = value_builder.description(description);
                    }
                    if let Some(reason) = deprecation_reason {
                        value_builder = value_builder.deprecated(reason);
                    }
                    value_builder
                },
            };
            builder = builder.value(value_builder.with_def_location(value_location));
        }
        builder
    }
}

/// Either a bare value name or an object describing the value.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EnumValueDefinition {
    Name(String),
    Full(FullEnumValueDefinition),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct FullEnumValueDefinition {
    #[serde(default)]
    deprecation_reason: Option<String>,

    #[serde(default)]
    description: Option<String>,

    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub(super) struct ScalarDefinition {
    #[serde(default)]
    description: Option<String>,

    name: String,
}
