use crate::nullability::NonNullDefaults;
use crate::nullability::NullabilitySource;
use crate::schema::SchemaBuildError;
use crate::types::tests::test_utils;
use crate::types::tests::test_utils::Result;
use crate::types::FieldBuilder;
use crate::types::InputFieldBuilder;
use crate::types::InputObjectTypeBuilder;
use crate::types::InterfaceTypeBuilder;
use crate::types::ObjectTypeBuilder;
use crate::types::ParameterBuilder;
use crate::types::TypeExpr;
use crate::SchemaBuilder;

fn echo_field(field_type: TypeExpr, param_type: TypeExpr) -> FieldBuilder {
    FieldBuilder::new("echo", field_type)
        .parameter(ParameterBuilder::new("message", param_type))
}

mod nullability_layers {
    use super::*;

    #[test]
    fn explicit_non_null_field_with_default_parameter() -> Result<()> {
        let schema = SchemaBuilder::new()
            .non_null_defaults(NonNullDefaults::ALL_NULLABLE)
            .add_type(ObjectTypeBuilder::new("Query").field(echo_field(
                TypeExpr::non_null(TypeExpr::named("String")),
                TypeExpr::named("String"),
            )))
            .build()?;

        let echo = schema.query_type().field("echo").expect("echo field");
        assert_eq!(echo.type_annotation().to_string(), "String!");
        let message = echo.parameter("message").expect("message parameter");
        assert_eq!(message.type_annotation().to_string(), "String");
        assert_eq!(
            message.type_annotation().nullability_source(),
            NullabilitySource::GlobalDefaults,
        );

        Ok(())
    }

    #[test]
    fn type_defaults_apply_to_fields_and_parameters() -> Result<()> {
        let schema = SchemaBuilder::new()
            .non_null_defaults(NonNullDefaults::ALL_NULLABLE)
            .add_type(
                ObjectTypeBuilder::new("Query")
                    .non_null_defaults(NonNullDefaults::ALL_NON_NULL)
                    .field(echo_field(TypeExpr::named("String"), TypeExpr::named("String")))
            )
            .build()?;

        let echo = schema.query_type().field("echo").expect("echo field");
        assert_eq!(echo.type_annotation().to_string(), "String!");
        assert_eq!(
            echo.type_annotation().nullability_source(),
            NullabilitySource::TypeDefaults,
        );
        let message = echo.parameter("message").expect("message parameter");
        assert_eq!(message.type_annotation().to_string(), "String!");
        assert_eq!(
            message.type_annotation().nullability_source(),
            NullabilitySource::TypeDefaults,
        );

        Ok(())
    }

    #[test]
    fn explicit_wrappers_agree_with_type_defaults() -> Result<()> {
        let schema = SchemaBuilder::new()
            .add_type(
                ObjectTypeBuilder::new("Query")
                    .non_null_defaults(NonNullDefaults::ALL_NON_NULL)
                    .field(echo_field(
                        TypeExpr::non_null(TypeExpr::named("String")),
                        TypeExpr::non_null(TypeExpr::named("String")),
                    ))
            )
            .build()?;

        let echo = schema.query_type().field("echo").expect("echo field");
        assert!(!echo.type_annotation().nullable());
        assert!(!echo.parameter("message").expect("message").type_annotation().nullable());
        assert_eq!(
            echo.type_annotation().nullability_source(),
            NullabilitySource::ExplicitWrapper,
        );

        Ok(())
    }

    #[test]
    fn weaker_type_defaults_still_win_over_global_defaults() -> Result<()> {
        let schema = SchemaBuilder::new()
            .non_null_defaults(NonNullDefaults::ALL_NON_NULL)
            .add_type(
                ObjectTypeBuilder::new("Query")
                    .non_null_defaults(NonNullDefaults::ALL_NULLABLE)
                    .field(echo_field(TypeExpr::named("String"), TypeExpr::named("String")))
            )
            .build()?;

        let echo = schema.query_type().field("echo").expect("echo field");
        assert!(echo.type_annotation().nullable());
        assert!(echo.parameter("message").expect("message").type_annotation().nullable());

        Ok(())
    }

    #[test]
    fn input_and_output_defaults_are_independent() -> Result<()> {
        let schema = SchemaBuilder::new()
            .non_null_defaults(NonNullDefaults::new(true, false))
            .add_type(ObjectTypeBuilder::new("Query").field(
                echo_field(TypeExpr::named("String"), TypeExpr::named("String")),
            ))
            .build()?;

        let echo = schema.query_type().field("echo").expect("echo field");
        assert_eq!(echo.type_annotation().to_string(), "String");
        assert_eq!(
            echo.parameter("message").expect("message").type_annotation().to_string(),
            "String!",
        );

        Ok(())
    }

    #[test]
    fn types_do_not_inherit_interface_defaults() -> Result<()> {
        let schema = SchemaBuilder::new()
            .add_type(
                InterfaceTypeBuilder::new("Node")
                    .non_null_defaults(NonNullDefaults::ALL_NON_NULL)
                    .field(FieldBuilder::new("id", TypeExpr::named("ID")))
            )
            .add_type(
                ObjectTypeBuilder::new("Query")
                    .implements("Node")
                    .field(FieldBuilder::new("id", TypeExpr::non_null(TypeExpr::named("ID"))))
                    .field(FieldBuilder::new("name", TypeExpr::named("String")))
            )
            .build()?;

        let query = schema.query_type();
        assert_eq!(query.field("id").expect("id").type_annotation().to_string(), "ID!");
        assert_eq!(query.field("name").expect("name").type_annotation().to_string(), "String");

        Ok(())
    }

    #[test]
    fn input_object_fields_use_input_defaults() -> Result<()> {
        let schema = SchemaBuilder::new()
            .non_null_defaults(NonNullDefaults::new(false, true))
            .add_type(test_utils::query_type())
            .add_type(
                InputObjectTypeBuilder::new("Filter")
                    .field(InputFieldBuilder::new("term", TypeExpr::named("String")))
            )
            .add_type(
                InputObjectTypeBuilder::new("StrictFilter")
                    .non_null_defaults(NonNullDefaults::new(true, false))
                    .field(InputFieldBuilder::new("term", TypeExpr::named("String")))
            )
            .build()?;

        let filter = schema.get_type("Filter")
            .and_then(|type_| type_.as_input_object())
            .expect("Filter input type");
        assert!(filter.field("term").expect("term").type_annotation().nullable());

        let strict_filter = schema.get_type("StrictFilter")
            .and_then(|type_| type_.as_input_object())
            .expect("StrictFilter input type");
        assert!(!strict_filter.field("term").expect("term").type_annotation().nullable());

        Ok(())
    }
}

mod declaration_errors {
    use super::*;

    #[test]
    fn duplicate_field_names_are_rejected() {
        let result = SchemaBuilder::new()
            .add_type(
                ObjectTypeBuilder::new("Query")
                    .field(FieldBuilder::new("a", TypeExpr::named("Int")))
                    .field(FieldBuilder::new("a", TypeExpr::named("String")))
            )
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { ref type_name, ref field_name, .. })
                if type_name == "Query" && field_name == "a"
        ));
    }

    #[test]
    fn duplicate_parameter_names_are_rejected() {
        let result = SchemaBuilder::new()
            .add_type(ObjectTypeBuilder::new("Query").field(
                FieldBuilder::new("a", TypeExpr::named("Int"))
                    .parameter(ParameterBuilder::new("x", TypeExpr::named("Int")))
                    .parameter(ParameterBuilder::new("x", TypeExpr::named("Int")))
            ))
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateParameterDefinition { ref parameter_name, .. })
                if parameter_name == "x"
        ));
    }

    #[test]
    fn duplicate_implements_declarations_are_rejected() {
        let result = SchemaBuilder::new()
            .add_type(
                ObjectTypeBuilder::new("Query")
                    .implements("Node")
                    .implements("Node")
                    .field(FieldBuilder::new("id", TypeExpr::named("ID")))
            )
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration { .. })
        ));
    }

    #[test]
    fn dunder_prefixed_names_are_rejected() {
        let result = SchemaBuilder::new()
            .add_type(
                ObjectTypeBuilder::new("Query")
                    .field(FieldBuilder::new("__secret", TypeExpr::named("Int")))
            )
            .build();
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedFieldName { .. })
        ));

        let result = SchemaBuilder::new()
            .add_type(ObjectTypeBuilder::new("Query").field(
                FieldBuilder::new("a", TypeExpr::named("Int"))
                    .parameter(ParameterBuilder::new("__x", TypeExpr::named("Int")))
            ))
            .build();
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedParamName { .. })
        ));

        let result = SchemaBuilder::new()
            .add_type(test_utils::query_type())
            .add_type(ObjectTypeBuilder::new("__Hidden"))
            .build();
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedTypeName { .. })
        ));
    }

    #[test]
    fn duplicate_type_names_are_rejected() {
        let result = SchemaBuilder::new()
            .add_type(test_utils::query_type())
            .add_type(test_utils::query_type())
            .build();
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { ref type_name, .. })
                if type_name == "Query"
        ));

        let result = SchemaBuilder::new()
            .add_type(test_utils::query_type())
            .add_type(ObjectTypeBuilder::new("String"))
            .build();
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { ref type_name, .. })
                if type_name == "String"
        ));
    }
}
