use crate::commands::schema_args::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlkit_core::types::GraphQLType;
use gqlkit_core::types::TypeAnnotation;
use gqlkit_core::Schema;
use std::fmt::Write;
use std::str::FromStr;

#[derive(Debug, clap::Args)]
pub(crate) struct ExplainCmd {
    #[arg(
        help="The position to explain: `Type.field` for a field or input \
             field, `Type.field(arg:)` for an argument.",
        long,
    )]
    coordinate: SchemaCoordinate,

    #[command(flatten)]
    schema_args: SchemaArgs,
}

#[inherent::inherent]
impl RunnableCommand for ExplainCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.schema_args.load_schema()
            .and_then(|schema| explain(&schema, &self.coordinate))
            .map(Some)
            .into()
    }
}

/// A schema coordinate naming a field, an input field, or an argument.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum SchemaCoordinate {
    Argument {
        arg_name: String,
        field_name: String,
        type_name: String,
    },
    Field {
        field_name: String,
        type_name: String,
    },
}
impl FromStr for SchemaCoordinate {
    type Err = String;

    fn from_str(coordinate: &str) -> Result<Self, Self::Err> {
        let invalid = || format!(
            "`{coordinate}` is not a `Type.field` or `Type.field(arg:)` coordinate"
        );
        let is_name = |name: &str| {
            !name.is_empty()
                && !name.starts_with(|c: char| c.is_ascii_digit())
                && name.chars().all(|c| c == '_' || c.is_ascii_alphanumeric())
        };

        let (type_name, rest) = coordinate.split_once('.').ok_or_else(invalid)?;
        let parsed = match rest.split_once('(') {
            Some((field_name, arg)) => {
                let arg_name = arg.strip_suffix(":)").ok_or_else(invalid)?;
                if !is_name(arg_name) {
                    return Err(invalid());
                }
                Self::Argument {
                    arg_name: arg_name.to_string(),
                    field_name: field_name.to_string(),
                    type_name: type_name.to_string(),
                }
            },
            None => Self::Field {
                field_name: rest.to_string(),
                type_name: type_name.to_string(),
            },
        };

        let (Self::Argument { field_name, type_name, .. }
            | Self::Field { field_name, type_name }) = &parsed;
        if !is_name(type_name) || !is_name(field_name) {
            return Err(invalid());
        }
        Ok(parsed)
    }
}

/// Renders the resolved type of every position at `coordinate` along with the
/// configuration layer that decided each one. Explaining a field also
/// explains its arguments.
pub(super) fn explain(
    schema: &Schema,
    coordinate: &SchemaCoordinate,
) -> anyhow::Result<String> {
    let (type_name, field_name) = match coordinate {
        SchemaCoordinate::Argument { field_name, type_name, .. }
        | SchemaCoordinate::Field { field_name, type_name } => (type_name, field_name),
    };
    let Some(type_) = schema.get_type(type_name) else {
        anyhow::bail!("The schema defines no type named `{type_name}`");
    };

    let mut buf = String::new();
    if let GraphQLType::InputObject(input_type) = type_ {
        let SchemaCoordinate::Field { .. } = coordinate else {
            anyhow::bail!("Input object fields of `{type_name}` take no arguments");
        };
        let Some(field) = input_type.field(field_name) else {
            anyhow::bail!("`{type_name}` has no input field named `{field_name}`");
        };
        write_positions(
            &mut buf,
            &format!("{type_name}.{field_name}"),
            field.type_annotation(),
        )?;
        return Ok(buf.trim_end().to_string());
    }

    let Some(fields) = type_.output_fields() else {
        anyhow::bail!("`{type_name}` is a leaf type and has no fields");
    };
    let Some(field) = fields.get(field_name) else {
        anyhow::bail!("`{type_name}` has no field named `{field_name}`");
    };

    match coordinate {
        SchemaCoordinate::Argument { arg_name, .. } => {
            let Some(param) = field.parameter(arg_name) else {
                anyhow::bail!(
                    "`{type_name}.{field_name}` has no argument named `{arg_name}`"
                );
            };
            write_positions(
                &mut buf,
                &format!("{type_name}.{field_name}({arg_name}:)"),
                param.type_annotation(),
            )?;
        },

        SchemaCoordinate::Field { .. } => {
            write_positions(
                &mut buf,
                &format!("{type_name}.{field_name}"),
                field.type_annotation(),
            )?;
            for param in field.parameters().values() {
                write_positions(
                    &mut buf,
                    &format!("{type_name}.{field_name}({}:)", param.name()),
                    param.type_annotation(),
                )?;
            }
        },
    }

    Ok(buf.trim_end().to_string())
}

fn write_positions(
    buf: &mut String,
    label: &str,
    type_annot: &TypeAnnotation,
) -> std::fmt::Result {
    writeln!(buf, "{label}: {type_annot}")?;
    for position in type_annot.positions() {
        writeln!(
            buf,
            "  `{position}` is {} ({})",
            if position.nullable() { "nullable" } else { "non-null" },
            position.nullability_source().description(),
        )?;
    }
    Ok(())
}
