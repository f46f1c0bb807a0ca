use crate::nullability::NonNullDefaults;
use crate::schema::NullAbsorber;
use crate::schema::NullPropagation;
use crate::schema::NullPropagationError;
use crate::schema::RootOperationKind;
use crate::schema::SchemaBuildError;
use crate::types::FieldBuilder;
use crate::types::ObjectTypeBuilder;
use crate::types::TypeExpr;
use crate::Schema;
use crate::SchemaBuilder;

type Result<T> = std::result::Result<T, Box<SchemaBuildError>>;

fn nullable(name: &str) -> TypeExpr {
    TypeExpr::nullable(TypeExpr::named(name))
}

/// Everything is non-null unless wrapped in `nullable`:
///
/// ```graphql
/// type Query {
///   grid: [[Post!]]!
///   me: User!
///   posts: [Post]!
///   viewer: User
/// }
/// type User { bestFriend: User!, name: String!, nickname: String }
/// type Post { title: String! }
/// ```
fn social_schema() -> Result<Schema> {
    Ok(SchemaBuilder::new()
        .non_null_defaults(NonNullDefaults::ALL_NON_NULL)
        .add_type(
            ObjectTypeBuilder::new("Query")
                .field(FieldBuilder::new(
                    "grid",
                    TypeExpr::list(TypeExpr::nullable(TypeExpr::list(TypeExpr::named("Post")))),
                ))
                .field(FieldBuilder::new("me", TypeExpr::named("User")))
                .field(FieldBuilder::new("posts", TypeExpr::list(nullable("Post"))))
                .field(FieldBuilder::new("viewer", nullable("User"))),
        )
        .add_type(
            ObjectTypeBuilder::new("User")
                .field(FieldBuilder::new("bestFriend", TypeExpr::named("User")))
                .field(FieldBuilder::new("name", TypeExpr::named("String")))
                .field(FieldBuilder::new("nickname", nullable("String"))),
        )
        .add_type(
            ObjectTypeBuilder::new("Post")
                .field(FieldBuilder::new("title", TypeExpr::named("String"))),
        )
        .build()?)
}

fn propagate(
    schema: &Schema,
    path: &[&str],
) -> std::result::Result<NullPropagation, NullPropagationError> {
    schema.null_propagation(RootOperationKind::Query, path)
}

mod absorbers {
    use super::*;

    #[test]
    fn nullable_leaf_absorbs_its_own_null() -> Result<()> {
        let schema = social_schema()?;

        assert_eq!(
            propagate(&schema, &["me", "nickname"]),
            Ok(NullPropagation {
                absorbed_by: NullAbsorber::Field {
                    coordinate: "User.nickname".to_string(),
                    path_index: 1,
                },
                blast_radius: 0,
            }),
        );

        Ok(())
    }

    #[test]
    fn closest_nullable_ancestor_absorbs() -> Result<()> {
        let schema = social_schema()?;

        assert_eq!(
            propagate(&schema, &["viewer", "name"]),
            Ok(NullPropagation {
                absorbed_by: NullAbsorber::Field {
                    coordinate: "Query.viewer".to_string(),
                    path_index: 0,
                },
                blast_radius: 1,
            }),
        );
        assert_eq!(
            propagate(&schema, &["viewer", "bestFriend", "name"]),
            Ok(NullPropagation {
                absorbed_by: NullAbsorber::Field {
                    coordinate: "Query.viewer".to_string(),
                    path_index: 0,
                },
                blast_radius: 2,
            }),
        );

        Ok(())
    }

    #[test]
    fn nullable_list_items_absorb() -> Result<()> {
        let schema = social_schema()?;

        assert_eq!(
            propagate(&schema, &["posts", "title"]),
            Ok(NullPropagation {
                absorbed_by: NullAbsorber::ListItem {
                    coordinate: "Query.posts".to_string(),
                    list_depth: 1,
                    path_index: 0,
                },
                blast_radius: 0,
            }),
        );

        // `[[Post!]]!`: the inner `Post!` is skipped in favor of the nullable
        // inner list.
        assert_eq!(
            propagate(&schema, &["grid", "title"]),
            Ok(NullPropagation {
                absorbed_by: NullAbsorber::ListItem {
                    coordinate: "Query.grid".to_string(),
                    list_depth: 1,
                    path_index: 0,
                },
                blast_radius: 0,
            }),
        );

        Ok(())
    }

    #[test]
    fn all_non_null_path_nulls_the_root() -> Result<()> {
        let schema = social_schema()?;

        assert_eq!(
            propagate(&schema, &["me", "bestFriend", "name"]),
            Ok(NullPropagation {
                absorbed_by: NullAbsorber::Root,
                blast_radius: 2,
            }),
        );
        assert_eq!(
            propagate(&schema, &["me"]),
            Ok(NullPropagation {
                absorbed_by: NullAbsorber::Root,
                blast_radius: 0,
            }),
        );

        Ok(())
    }

    #[test]
    fn serializes_with_kind_tags() -> Result<()> {
        let schema = social_schema()?;
        let propagation = propagate(&schema, &["posts", "title"])
            .expect("path is valid");

        assert_eq!(
            serde_json::to_value(&propagation).expect("serializable"),
            serde_json::json!({
                "absorbedBy": {
                    "kind": "listItem",
                    "coordinate": "Query.posts",
                    "listDepth": 1,
                    "pathIndex": 0,
                },
                "blastRadius": 0,
            }),
        );
        assert_eq!(
            propagation.absorbed_by.to_string(),
            "a depth-1 list item of `Query.posts`",
        );

        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn empty_path() -> Result<()> {
        let schema = social_schema()?;
        assert_eq!(propagate(&schema, &[]), Err(NullPropagationError::EmptyPath));
        Ok(())
    }

    #[test]
    fn undefined_field() -> Result<()> {
        let schema = social_schema()?;
        assert_eq!(
            propagate(&schema, &["me", "email"]),
            Err(NullPropagationError::UndefinedField {
                field_name: "email".to_string(),
                type_name: "User".to_string(),
            }),
        );
        Ok(())
    }

    #[test]
    fn field_on_leaf_type() -> Result<()> {
        let schema = social_schema()?;
        assert_eq!(
            propagate(&schema, &["me", "name", "length"]),
            Err(NullPropagationError::FieldOnLeafType {
                field_name: "length".to_string(),
                type_name: "String".to_string(),
            }),
        );
        Ok(())
    }

    #[test]
    fn undefined_root_operation_type() -> Result<()> {
        let schema = social_schema()?;
        assert_eq!(
            schema.null_propagation(RootOperationKind::Mutation, &["me"]),
            Err(NullPropagationError::UndefinedRootOperationType {
                operation: RootOperationKind::Mutation,
            }),
        );
        Ok(())
    }
}
