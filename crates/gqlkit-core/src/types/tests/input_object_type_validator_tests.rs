use crate::nullability::NonNullDefaults;
use crate::schema::TypeValidationError;
use crate::types::tests::test_utils;
use crate::types::tests::test_utils::Result;
use crate::types::InputFieldBuilder;
use crate::types::InputObjectTypeBuilder;
use crate::types::ObjectTypeBuilder;
use crate::types::TypeExpr;

fn non_null(name: &str) -> TypeExpr {
    TypeExpr::non_null(TypeExpr::named(name))
}

#[test]
fn flat_input_object_validates() -> Result<()> {
    test_utils::build_schema(vec![
        InputObjectTypeBuilder::new("Flat")
            .field(InputFieldBuilder::new("a", TypeExpr::named("Int")))
            .field(InputFieldBuilder::new("b", non_null("Int")))
            .into(),
    ])?;
    Ok(())
}

#[test]
fn cycle_broken_by_nullable_field_validates() -> Result<()> {
    test_utils::build_schema(vec![
        InputObjectTypeBuilder::new("A")
            .field(InputFieldBuilder::new("b", non_null("B")))
            .into(),
        InputObjectTypeBuilder::new("B")
            .field(InputFieldBuilder::new("a", TypeExpr::named("A")))
            .into(),
    ])?;
    Ok(())
}

#[test]
fn cycle_broken_by_list_field_validates() -> Result<()> {
    test_utils::build_schema(vec![
        InputObjectTypeBuilder::new("Tree")
            .field(InputFieldBuilder::new(
                "children",
                TypeExpr::non_null(TypeExpr::list(non_null("Tree"))),
            ))
            .into(),
    ])?;
    Ok(())
}

#[test]
fn non_null_self_reference_is_reported() {
    let errors = test_utils::validation_errors(vec![
        InputObjectTypeBuilder::new("Loop")
            .field(InputFieldBuilder::new("next", non_null("Loop")))
            .into(),
    ]);

    assert_eq!(errors, vec![TypeValidationError::CircularInputFieldChain {
        circular_field_path: vec!["Loop.next".to_string(), "Loop".to_string()],
    }]);
}

#[test]
fn non_null_multi_type_cycle_is_reported_once() {
    let errors = test_utils::validation_errors(vec![
        InputObjectTypeBuilder::new("B")
            .field(InputFieldBuilder::new("c", non_null("C")))
            .into(),
        InputObjectTypeBuilder::new("A")
            .field(InputFieldBuilder::new("b", non_null("B")))
            .into(),
        InputObjectTypeBuilder::new("C")
            .field(InputFieldBuilder::new("a", non_null("A")))
            .into(),
    ]);

    assert_eq!(errors, vec![TypeValidationError::CircularInputFieldChain {
        circular_field_path: vec![
            "A.b".to_string(),
            "B.c".to_string(),
            "C.a".to_string(),
            "A".to_string(),
        ],
    }]);
}

#[test]
fn cycles_sharing_a_type_are_each_reported() {
    let errors = test_utils::validation_errors(vec![
        InputObjectTypeBuilder::new("A")
            .field(InputFieldBuilder::new("x", non_null("B")))
            .field(InputFieldBuilder::new("y", non_null("C")))
            .into(),
        InputObjectTypeBuilder::new("B")
            .field(InputFieldBuilder::new("z", non_null("C")))
            .into(),
        InputObjectTypeBuilder::new("C")
            .field(InputFieldBuilder::new("w", non_null("A")))
            .into(),
    ]);

    assert_eq!(errors, vec![
        TypeValidationError::CircularInputFieldChain {
            circular_field_path: vec![
                "A.x".to_string(),
                "B.z".to_string(),
                "C.w".to_string(),
                "A".to_string(),
            ],
        },
        TypeValidationError::CircularInputFieldChain {
            circular_field_path: vec![
                "A.y".to_string(),
                "C.w".to_string(),
                "A".to_string(),
            ],
        },
    ]);
}

#[test]
fn input_non_null_defaults_can_create_cycles() {
    let errors = test_utils::validation_errors(vec![
        InputObjectTypeBuilder::new("Node")
            .non_null_defaults(NonNullDefaults::new(true, false))
            .field(InputFieldBuilder::new("parent", TypeExpr::named("Node")))
            .into(),
    ]);

    assert!(matches!(
        errors.as_slice(),
        [TypeValidationError::CircularInputFieldChain { .. }]
    ));
}

#[test]
fn output_typed_input_field_is_reported() {
    let errors = test_utils::validation_errors(vec![
        ObjectTypeBuilder::new("User").into(),
        InputObjectTypeBuilder::new("Filter")
            .field(InputFieldBuilder::new("user", TypeExpr::named("User")))
            .into(),
    ]);

    assert!(matches!(
        errors.as_slice(),
        [TypeValidationError::InvalidInputFieldWithOutputType {
            field_name,
            invalid_type_name,
            parent_type_name,
            ..
        }] if field_name == "user"
            && invalid_type_name == "User"
            && parent_type_name == "Filter"
    ));
}

#[test]
fn undefined_input_field_type_is_reported() {
    let errors = test_utils::validation_errors(vec![
        InputObjectTypeBuilder::new("Filter")
            .field(InputFieldBuilder::new("when", TypeExpr::named("DateTime")))
            .into(),
    ]);

    assert!(matches!(
        errors.as_slice(),
        [TypeValidationError::UndefinedTypeName { undefined_type_name, .. }]
            if undefined_type_name == "DateTime"
    ));
}
