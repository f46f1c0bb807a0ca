use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashSet;

pub(super) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let type_name = self.type_.name();
        for (field_name, field) in self.type_.fields() {
            let innermost_type_name =
                field.type_annotation()
                    .innermost_named_type_annotation()
                    .graphql_type_name();
            match self.types_map.get(innermost_type_name) {
                // Input object fields can only be declared with input types.
                //
                // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
                Some(innermost_type) if !innermost_type.is_input_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidInputFieldWithOutputType {
                            def_location: field.type_annotation().ref_location().to_owned(),
                            field_name: field_name.to_string(),
                            invalid_type_name: innermost_type_name.to_string(),
                            parent_type_name: type_name.to_string(),
                        }
                    ),
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: field.type_annotation().ref_location().to_owned(),
                    undefined_type_name: innermost_type_name.to_string(),
                }),
            }
        }

        self.find_unbreakable_cycles(
            type_name,
            self.type_.fields(),
            &mut vec![],
            &mut HashSet::from([type_name]),
        );
        self.errors
    }

    /// Walks every chain of non-null, non-list input fields starting at the
    /// validated type. A chain that leads back to the validated type can never
    /// be satisfied by a finite input value.
    ///
    /// `path_type_names` holds the types on the current chain only, so every
    /// simple cycle through the validated type is found, even when cycles
    /// share types. Each cycle is reported once: by the type in the cycle
    /// whose name sorts first.
    fn find_unbreakable_cycles(
        &mut self,
        type_name: &'a str,
        fields: &'a IndexMap<String, InputField>,
        path: &mut Vec<String>,
        path_type_names: &mut HashSet<&'a str>,
    ) {
        let root_type_name = self.type_.name();
        for (field_name, field) in fields {
            if breaks_input_cycle(field.type_annotation()) {
                continue;
            }

            let next_type_name =
                field.type_annotation()
                    .innermost_named_type_annotation()
                    .graphql_type_name();
            path.push(format!("{type_name}.{field_name}"));

            if next_type_name == root_type_name {
                let root_sorts_first = path.iter()
                    .filter_map(|step| step.split('.').next())
                    .all(|step_type_name| root_type_name <= step_type_name);
                if root_sorts_first {
                    let mut circular_field_path = path.to_owned();
                    circular_field_path.push(root_type_name.to_string());
                    self.errors.push(TypeValidationError::CircularInputFieldChain {
                        circular_field_path,
                    });
                }
            } else if path_type_names.insert(next_type_name) {
                if let Some(GraphQLType::InputObject(next_type)) =
                    self.types_map.get(next_type_name) {
                    self.find_unbreakable_cycles(
                        next_type_name,
                        next_type.fields(),
                        path,
                        path_type_names,
                    );
                }
                path_type_names.remove(next_type_name);
            }

            path.pop();
        }
    }
}

/// A field whose outermost position is nullable or a list can always be
/// satisfied without recursing (`null` or `[]`).
///
/// https://spec.graphql.org/October2021/#sec-Input-Objects.Circular-References
fn breaks_input_cycle(type_annot: &TypeAnnotation) -> bool {
    type_annot.nullable() || type_annot.as_list_annotation().is_some()
}
