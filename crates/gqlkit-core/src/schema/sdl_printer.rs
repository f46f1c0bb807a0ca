use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::value::quote_graphql_string;
use crate::Value;
use indexmap::IndexMap;
use std::fmt;
use std::fmt::Write;

const INDENT: &str = "  ";

/// Writes every non-built-in type of `schema`, in declaration order,
/// separated by blank lines.
pub(super) fn write_schema(schema: &Schema, buf: &mut dyn Write) -> fmt::Result {
    let printer = SdlPrinter { types: &schema.types };
    let mut first = true;
    for type_ in schema.types.values().filter(|type_| !type_.is_builtin()) {
        if !first {
            buf.write_char('\n')?;
        }
        first = false;
        printer.write_type(type_, buf)?;
    }
    Ok(())
}

struct SdlPrinter<'a> {
    types: &'a IndexMap<String, GraphQLType>,
}
impl SdlPrinter<'_> {
    fn write_type(&self, type_: &GraphQLType, buf: &mut dyn Write) -> fmt::Result {
        match type_ {
            GraphQLType::Enum(enum_type) => self.write_enum(enum_type, buf),
            GraphQLType::InputObject(input_type) => self.write_input_object(input_type, buf),
            GraphQLType::Interface(iface_type) => self.write_object_like(
                "interface",
                iface_type.name(),
                iface_type.description(),
                iface_type.interfaces(),
                iface_type.fields(),
                buf,
            ),
            GraphQLType::Object(obj_type) => self.write_object_like(
                "type",
                obj_type.name(),
                obj_type.description(),
                obj_type.interfaces(),
                obj_type.fields(),
                buf,
            ),
            GraphQLType::Scalar(scalar_type) => write_scalar(scalar_type, buf),

            GraphQLType::Bool
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::String
                => Ok(()),
        }
    }

    fn write_enum(&self, enum_type: &EnumType, buf: &mut dyn Write) -> fmt::Result {
        write_description(enum_type.description(), 0, buf)?;
        writeln!(buf, "enum {} {{", enum_type.name())?;
        for value in enum_type.values().values() {
            write_description(value.description(), 1, buf)?;
            write!(buf, "{INDENT}{}", value.name())?;
            write_deprecated(value.deprecation_reason(), buf)?;
            buf.write_char('\n')?;
        }
        writeln!(buf, "}}")
    }

    fn write_input_object(
        &self,
        input_type: &InputObjectType,
        buf: &mut dyn Write,
    ) -> fmt::Result {
        write_description(input_type.description(), 0, buf)?;
        writeln!(buf, "input {} {{", input_type.name())?;
        for field in input_type.fields().values() {
            write_description(field.description(), 1, buf)?;
            write!(buf, "{INDENT}")?;
            self.write_input_field(field, buf)?;
            buf.write_char('\n')?;
        }
        writeln!(buf, "}}")
    }

    fn write_input_field(&self, field: &InputField, buf: &mut dyn Write) -> fmt::Result {
        write!(buf, "{}: {}", field.name(), field.type_annotation())?;
        if let Some(default_value) = field.default_value() {
            write!(
                buf,
                " = {}",
                self.render_value(field.type_annotation(), default_value),
            )?;
        }
        Ok(())
    }

    fn write_object_like(
        &self,
        keyword: &str,
        name: &str,
        description: Option<&str>,
        interfaces: &[NamedGraphQLTypeRef],
        fields: &IndexMap<String, Field>,
        buf: &mut dyn Write,
    ) -> fmt::Result {
        write_description(description, 0, buf)?;
        write!(buf, "{keyword} {name}")?;
        if !interfaces.is_empty() {
            let iface_names =
                interfaces.iter()
                    .map(|iface_ref| iface_ref.name())
                    .collect::<Vec<_>>();
            write!(buf, " implements {}", iface_names.join(" & "))?;
        }
        writeln!(buf, " {{")?;
        for field in fields.values() {
            write_description(field.description(), 1, buf)?;
            write!(buf, "{INDENT}{}", field.name())?;
            self.write_parameters(field.parameters(), buf)?;
            write!(buf, ": {}", field.type_annotation())?;
            write_deprecated(field.deprecation_reason(), buf)?;
            buf.write_char('\n')?;
        }
        writeln!(buf, "}}")
    }

    /// Parameters go on one line unless one of them has a description.
    fn write_parameters(
        &self,
        params: &IndexMap<String, Parameter>,
        buf: &mut dyn Write,
    ) -> fmt::Result {
        if params.is_empty() {
            return Ok(());
        }

        let multiline = params.values().any(|param| param.description().is_some());
        buf.write_char('(')?;
        for (idx, param) in params.values().enumerate() {
            if multiline {
                buf.write_char('\n')?;
                write_description(param.description(), 2, buf)?;
                write!(buf, "{INDENT}{INDENT}")?;
            } else if idx > 0 {
                buf.write_str(", ")?;
            }
            write!(buf, "{}: {}", param.name(), param.type_annotation())?;
            if let Some(default_value) = param.default_value() {
                write!(
                    buf,
                    " = {}",
                    self.render_value(param.type_annotation(), default_value),
                )?;
            }
        }
        if multiline {
            write!(buf, "\n{INDENT}")?;
        }
        buf.write_char(')')
    }

    /// Renders `value` as a GraphQL literal for a position of type
    /// `type_annot`. Strings naming an enum value are printed bare when the
    /// position is enum-typed.
    fn render_value(&self, type_annot: &TypeAnnotation, value: &Value) -> String {
        match (type_annot, value) {
            (TypeAnnotation::List(list_annot), Value::List(items)) => format!(
                "[{}]",
                items.iter()
                    .map(|item| self.render_value(list_annot.inner_type_annotation(), item))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),

            (TypeAnnotation::List(list_annot), _) =>
                self.render_value(list_annot.inner_type_annotation(), value),

            (TypeAnnotation::Named(named_annot), _) => {
                let type_ = self.types.get(named_annot.graphql_type_name());
                match (type_, value) {
                    (Some(GraphQLType::Enum(_)), Value::String(value_name)) =>
                        value_name.to_string(),

                    (Some(GraphQLType::InputObject(input_type)), Value::Object(entries)) =>
                        format!(
                            "{{{}}}",
                            entries.iter()
                                .map(|(key, entry)| {
                                    let rendered = match input_type.field(key) {
                                        Some(field) =>
                                            self.render_value(field.type_annotation(), entry),
                                        None => entry.to_graphql_string(),
                                    };
                                    format!("{key}: {rendered}")
                                })
                                .collect::<Vec<_>>()
                                .join(", "),
                        ),

                    _ => value.to_graphql_string(),
                }
            },
        }
    }
}

fn write_scalar(scalar_type: &ScalarType, buf: &mut dyn Write) -> fmt::Result {
    write_description(scalar_type.description(), 0, buf)?;
    writeln!(buf, "scalar {}", scalar_type.name())
}

fn write_deprecated(reason: Option<&str>, buf: &mut dyn Write) -> fmt::Result {
    match reason {
        Some(reason) => write!(
            buf,
            " @deprecated(reason: {})",
            quote_graphql_string(reason),
        ),
        None => Ok(()),
    }
}

fn write_description(
    description: Option<&str>,
    level: usize,
    buf: &mut dyn Write,
) -> fmt::Result {
    let Some(description) = description else {
        return Ok(());
    };

    let indent = INDENT.repeat(level);
    writeln!(buf, "{indent}\"\"\"")?;
    for line in description.lines() {
        if line.trim().is_empty() {
            buf.write_char('\n')?;
        } else {
            writeln!(buf, "{indent}{}", line.replace(r#"""""#, r#"\""""#))?;
        }
    }
    writeln!(buf, "{indent}\"\"\"")
}
