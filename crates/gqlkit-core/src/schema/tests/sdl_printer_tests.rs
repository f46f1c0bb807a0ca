use crate::nullability::NonNullDefaults;
use crate::schema::sdl_printer::write_schema;
use crate::schema::SchemaBuildError;
use crate::types::EnumTypeBuilder;
use crate::types::EnumValueBuilder;
use crate::types::FieldBuilder;
use crate::types::InputFieldBuilder;
use crate::types::InputObjectTypeBuilder;
use crate::types::InterfaceTypeBuilder;
use crate::types::ObjectTypeBuilder;
use crate::types::ParameterBuilder;
use crate::types::ScalarTypeBuilder;
use crate::types::TypeExpr;
use crate::SchemaBuilder;
use crate::Value;

type Result<T> = std::result::Result<T, Box<SchemaBuildError>>;

#[test]
fn resolved_nullability_is_printed() -> Result<()> {
    let schema = SchemaBuilder::new()
        .non_null_defaults(NonNullDefaults::ALL_NON_NULL)
        .add_type(
            ObjectTypeBuilder::new("Query").field(
                FieldBuilder::new("echo", TypeExpr::named("String")).parameter(
                    ParameterBuilder::new(
                        "message",
                        TypeExpr::nullable(TypeExpr::named("String")),
                    ).default_value("hi"),
                ),
            ),
        )
        .build()?;

    assert_eq!(
        schema.to_sdl(),
        "type Query {\n  echo(message: String = \"hi\"): String!\n}\n",
    );

    Ok(())
}

#[test]
fn builtin_scalars_are_not_printed() -> Result<()> {
    let schema = SchemaBuilder::new()
        .add_type(
            ObjectTypeBuilder::new("Query")
                .field(FieldBuilder::new("ok", TypeExpr::named("Boolean"))),
        )
        .build()?;

    assert_eq!(schema.to_sdl(), "type Query {\n  ok: Boolean\n}\n");

    Ok(())
}

#[test]
fn descriptions_interfaces_and_deprecations() -> Result<()> {
    let schema = SchemaBuilder::new()
        .non_null_defaults(NonNullDefaults::ALL_NON_NULL)
        .add_type(
            InterfaceTypeBuilder::new("Node")
                .field(FieldBuilder::new("id", TypeExpr::named("ID"))),
        )
        .add_type(
            ObjectTypeBuilder::new("User")
                .description("A person.")
                .implements("Node")
                .field(FieldBuilder::new("id", TypeExpr::named("ID")))
                .field(
                    FieldBuilder::new("name", TypeExpr::nullable(TypeExpr::named("String")))
                        .deprecated("Use `id`."),
                ),
        )
        .add_type(
            ObjectTypeBuilder::new("Query")
                .field(FieldBuilder::new("user", TypeExpr::named("User"))),
        )
        .add_type(ScalarTypeBuilder::new("DateTime").description("ISO-8601."))
        .build()?;

    let expected = [
        "interface Node {",
        "  id: ID!",
        "}",
        "",
        "\"\"\"",
        "A person.",
        "\"\"\"",
        "type User implements Node {",
        "  id: ID!",
        "  name: String @deprecated(reason: \"Use `id`.\")",
        "}",
        "",
        "type Query {",
        "  user: User!",
        "}",
        "",
        "\"\"\"",
        "ISO-8601.",
        "\"\"\"",
        "scalar DateTime",
        "",
    ].join("\n");
    assert_eq!(schema.to_sdl(), expected);

    Ok(())
}

#[test]
fn enum_defaults_print_as_bare_values() -> Result<()> {
    let schema = SchemaBuilder::new()
        .add_type(
            EnumTypeBuilder::new("Color")
                .value("RED")
                .value(EnumValueBuilder::new("GREEN").deprecated("Too bright.")),
        )
        .add_type(
            InputObjectTypeBuilder::new("Filter")
                .field(
                    InputFieldBuilder::new("color", TypeExpr::named("Color"))
                        .default_value("RED"),
                )
                .field(
                    InputFieldBuilder::new("tags", TypeExpr::list(TypeExpr::named("String")))
                        .default_value(Value::List(vec![Value::from("a")])),
                ),
        )
        .add_type(
            ObjectTypeBuilder::new("Query").field(
                FieldBuilder::new("items", TypeExpr::list(TypeExpr::named("String")))
                    .parameter(
                        ParameterBuilder::new("filter", TypeExpr::named("Filter"))
                            .default_value(Value::from_json(
                                &serde_json::json!({ "color": "GREEN" }),
                            )),
                    ),
            ),
        )
        .build()?;

    let expected = [
        "enum Color {",
        "  RED",
        "  GREEN @deprecated(reason: \"Too bright.\")",
        "}",
        "",
        "input Filter {",
        "  color: Color = RED",
        "  tags: [String] = [\"a\"]",
        "}",
        "",
        "type Query {",
        "  items(filter: Filter = {color: GREEN}): [String]",
        "}",
        "",
    ].join("\n");
    assert_eq!(schema.to_sdl(), expected);

    Ok(())
}

#[test]
fn described_parameters_go_on_their_own_lines() -> Result<()> {
    let schema = SchemaBuilder::new()
        .add_type(
            ObjectTypeBuilder::new("Query").field(
                FieldBuilder::new("search", TypeExpr::list(TypeExpr::named("String")))
                    .parameter(
                        ParameterBuilder::new("term", TypeExpr::named("String"))
                            .description("What to find."),
                    )
                    .parameter(
                        ParameterBuilder::new("limit", TypeExpr::named("Int"))
                            .default_value(10),
                    ),
            ),
        )
        .build()?;

    let expected = [
        "type Query {",
        "  search(",
        "    \"\"\"",
        "    What to find.",
        "    \"\"\"",
        "    term: String",
        "    limit: Int = 10",
        "  ): [String]",
        "}",
        "",
    ].join("\n");
    assert_eq!(schema.to_sdl(), expected);

    Ok(())
}

struct FailingWriter;
impl std::fmt::Write for FailingWriter {
    fn write_str(&mut self, _s: &str) -> std::fmt::Result {
        Err(std::fmt::Error)
    }
}

#[test]
fn write_errors_are_propagated() -> Result<()> {
    let schema = SchemaBuilder::new()
        .add_type(
            ObjectTypeBuilder::new("Query")
                .field(FieldBuilder::new("ok", TypeExpr::named("Boolean"))),
        )
        .build()?;

    assert_eq!(write_schema(&schema, &mut FailingWriter), Err(std::fmt::Error));
    assert_eq!(schema.to_string(), schema.to_sdl());

    Ok(())
}
