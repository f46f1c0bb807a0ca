//! Where does a null go?
//!
//! When a field produces a null (or an error) in a position declared
//! non-null, GraphQL replaces the closest enclosing nullable position with
//! `null` instead. [`Schema::null_propagation()`] walks a field path from a
//! root operation type and reports which position absorbs such a null from the
//! path's last field.
//!
//! https://spec.graphql.org/October2021/#sec-Handling-Field-Errors

use crate::schema::RootOperationKind;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use thiserror::Error;

/// The position that ends up `null`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "kind")]
pub enum NullAbsorber {
    /// The field at `path[path_index]` resolves to `null`.
    Field {
        coordinate: String,
        path_index: usize,
    },

    /// One item of a list returned by the field at `path[path_index]`
    /// becomes `null`. `list_depth` is 1 for the items of the outermost list,
    /// 2 for the items of a list nested in it, and so on.
    ListItem {
        coordinate: String,
        list_depth: usize,
        path_index: usize,
    },

    /// No position along the path is nullable, so the entire `data` entry of
    /// the response becomes `null`.
    Root,
}
impl std::fmt::Display for NullAbsorber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field { coordinate, .. } => write!(f, "field `{coordinate}`"),
            Self::ListItem { coordinate, list_depth, .. } => write!(
                f,
                "a depth-{list_depth} list item of `{coordinate}`",
            ),
            Self::Root => write!(f, "the response root (`data` becomes null)"),
        }
    }
}

/// The outcome of a null produced by the last field of an analyzed path.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NullPropagation {
    pub absorbed_by: NullAbsorber,

    /// The number of fields on the path, not counting the last one, whose
    /// values are lost to the null.
    pub blast_radius: usize,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum NullPropagationError {
    #[error("A field path must name at least one field")]
    EmptyPath,

    #[error(
        "The `{field_name}` field can not be selected on `{type_name}` because \
        it is a leaf type without fields"
    )]
    FieldOnLeafType {
        field_name: String,
        type_name: String,
    },

    #[error("The `{type_name}` type has no field named `{field_name}`")]
    UndefinedField {
        field_name: String,
        type_name: String,
    },

    #[error("The schema defines no {operation} root operation type")]
    UndefinedRootOperationType {
        operation: RootOperationKind,
    },
}

pub(super) fn analyze(
    schema: &Schema,
    root: RootOperationKind,
    path: &[&str],
) -> Result<NullPropagation, NullPropagationError> {
    if path.is_empty() {
        return Err(NullPropagationError::EmptyPath);
    }

    let root_type = schema.root_operation_type(root)
        .ok_or(NullPropagationError::UndefinedRootOperationType { operation: root })?;

    let mut fields: Vec<&Field> = Vec::with_capacity(path.len());
    let mut current_type_name = root_type.name();
    for field_name in path {
        let current_type = schema.get_type(current_type_name)
            .expect("type is present in schema");
        let field = lookup_field(current_type, field_name)?;
        current_type_name =
            field.type_annotation()
                .innermost_named_type_annotation()
                .graphql_type_name();
        fields.push(field);
    }

    let leaf_index = fields.len() - 1;
    let coordinate = |index: usize| {
        format!("{}.{}", fields[index].parent_type_name(), fields[index].name())
    };

    // An error in the last field nulls out its own value first.
    if fields[leaf_index].type_annotation().nullable() {
        log::trace!("Null from `{}` is absorbed by the field itself.", coordinate(leaf_index));
        return Ok(NullPropagation {
            absorbed_by: NullAbsorber::Field {
                coordinate: coordinate(leaf_index),
                path_index: leaf_index,
            },
            blast_radius: 0,
        });
    }

    // Otherwise the null travels outwards through each ancestor's positions,
    // starting from the position that holds the child object.
    for path_index in (0..leaf_index).rev() {
        let positions = fields[path_index].type_annotation().positions();
        for (list_depth, position) in positions.iter().enumerate().rev() {
            if !position.nullable() {
                continue;
            }

            let absorbed_by = if list_depth == 0 {
                NullAbsorber::Field {
                    coordinate: coordinate(path_index),
                    path_index,
                }
            } else {
                NullAbsorber::ListItem {
                    coordinate: coordinate(path_index),
                    list_depth,
                    path_index,
                }
            };
            let lost_fields_from = if list_depth == 0 { path_index } else { path_index + 1 };
            return Ok(NullPropagation {
                absorbed_by,
                blast_radius: leaf_index - lost_fields_from,
            });
        }
    }

    Ok(NullPropagation {
        absorbed_by: NullAbsorber::Root,
        blast_radius: leaf_index,
    })
}

fn lookup_field<'a>(
    type_: &'a GraphQLType,
    field_name: &str,
) -> Result<&'a Field, NullPropagationError> {
    let Some(fields) = type_.output_fields() else {
        return Err(NullPropagationError::FieldOnLeafType {
            field_name: field_name.to_string(),
            type_name: type_.name().to_string(),
        });
    };

    fields.get(field_name).ok_or_else(|| NullPropagationError::UndefinedField {
        field_name: field_name.to_string(),
        type_name: type_.name().to_string(),
    })
}
