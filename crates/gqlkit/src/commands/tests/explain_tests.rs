use crate::commands::explain::explain;
use crate::commands::explain::SchemaCoordinate;
use gqlkit_core::nullability::NonNullDefaults;
use gqlkit_core::types::FieldBuilder;
use gqlkit_core::types::InputFieldBuilder;
use gqlkit_core::types::InputObjectTypeBuilder;
use gqlkit_core::types::ObjectTypeBuilder;
use gqlkit_core::types::ParameterBuilder;
use gqlkit_core::types::TypeExpr;
use gqlkit_core::Schema;
use gqlkit_core::SchemaBuilder;
use std::str::FromStr;

fn echo_schema() -> anyhow::Result<Schema> {
    Ok(SchemaBuilder::new()
        .add_type(
            ObjectTypeBuilder::new("Query")
                .non_null_defaults(NonNullDefaults::ALL_NON_NULL)
                .field(
                    FieldBuilder::new("echo", TypeExpr::named("String")).parameter(
                        ParameterBuilder::new(
                            "message",
                            TypeExpr::nullable(TypeExpr::named("String")),
                        ),
                    ),
                )
                .field(FieldBuilder::new("tags", TypeExpr::list(TypeExpr::named("String")))),
        )
        .add_type(
            InputObjectTypeBuilder::new("EchoOptions")
                .field(InputFieldBuilder::new("loud", TypeExpr::named("Boolean"))),
        )
        .build()?)
}

fn coordinate(raw: &str) -> SchemaCoordinate {
    SchemaCoordinate::from_str(raw).expect("valid coordinate")
}

mod parse_coordinate {
    use super::*;

    #[test]
    fn field_coordinates() {
        assert_eq!(
            SchemaCoordinate::from_str("Query.echo"),
            Ok(SchemaCoordinate::Field {
                field_name: "echo".to_string(),
                type_name: "Query".to_string(),
            }),
        );
    }

    #[test]
    fn argument_coordinates() {
        assert_eq!(
            SchemaCoordinate::from_str("Query.echo(message:)"),
            Ok(SchemaCoordinate::Argument {
                arg_name: "message".to_string(),
                field_name: "echo".to_string(),
                type_name: "Query".to_string(),
            }),
        );
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        for raw in ["Query", "Query.", ".echo", "Query.echo(message)", "Query.echo(:)", "Query.1echo"] {
            assert!(SchemaCoordinate::from_str(raw).is_err(), "accepted `{raw}`");
        }
    }
}

mod explain_positions {
    use super::*;

    #[test]
    fn field_and_its_arguments() -> anyhow::Result<()> {
        let schema = echo_schema()?;

        assert_eq!(
            explain(&schema, &coordinate("Query.echo"))?,
            [
                "Query.echo: String!",
                "  `String!` is non-null (type-level nonNullDefaults)",
                "Query.echo(message:): String",
                "  `String` is nullable (explicit wrapper)",
            ].join("\n"),
        );

        Ok(())
    }

    #[test]
    fn single_argument() -> anyhow::Result<()> {
        let schema = echo_schema()?;

        assert_eq!(
            explain(&schema, &coordinate("Query.echo(message:)"))?,
            "Query.echo(message:): String\n  `String` is nullable (explicit wrapper)",
        );

        Ok(())
    }

    #[test]
    fn every_list_position_is_explained() -> anyhow::Result<()> {
        let schema = echo_schema()?;

        assert_eq!(
            explain(&schema, &coordinate("Query.tags"))?,
            [
                "Query.tags: [String!]!",
                "  `[String!]!` is non-null (type-level nonNullDefaults)",
                "  `String!` is non-null (type-level nonNullDefaults)",
            ].join("\n"),
        );

        Ok(())
    }

    #[test]
    fn input_fields_use_global_defaults() -> anyhow::Result<()> {
        let schema = echo_schema()?;

        assert_eq!(
            explain(&schema, &coordinate("EchoOptions.loud"))?,
            "EchoOptions.loud: Boolean\n  `Boolean` is nullable (global nonNullDefaults)",
        );

        Ok(())
    }

    #[test]
    fn unknown_positions_are_errors() -> anyhow::Result<()> {
        let schema = echo_schema()?;

        for raw in [
            "Missing.field",
            "Query.missing",
            "Query.echo(missing:)",
            "EchoOptions.loud(x:)",
            "String.length",
        ] {
            assert!(explain(&schema, &coordinate(raw)).is_err(), "explained `{raw}`");
        }

        Ok(())
    }
}
