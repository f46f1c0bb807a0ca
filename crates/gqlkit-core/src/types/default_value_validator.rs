use crate::loc;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// Checks every declared default value (parameters and input fields) against
/// the resolved type of the position it is declared on.
///
/// References to undefined types are skipped here since the other validators
/// already report them.
pub(super) struct DefaultValueValidator<'a> {
    errors: Vec<TypeValidationError>,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> DefaultValueValidator<'a> {
    pub fn new(types_map: &'a IndexMap<String, GraphQLType>) -> Self {
        Self {
            errors: vec![],
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        for type_ in self.types_map.values() {
            match type_ {
                GraphQLType::InputObject(input_type) => {
                    for (field_name, field) in input_type.fields() {
                        if let Some(default_value) = field.default_value() {
                            self.check(
                                format!("{}.{field_name}", input_type.name()),
                                field.def_location(),
                                field.type_annotation(),
                                default_value,
                            );
                        }
                    }
                },

                GraphQLType::Interface(_) | GraphQLType::Object(_) => {
                    let fields = type_.output_fields().into_iter().flatten();
                    for (field_name, field) in fields {
                        for (param_name, param) in field.parameters() {
                            if let Some(default_value) = param.default_value() {
                                self.check(
                                    format!(
                                        "{}.{field_name}({param_name}:)",
                                        type_.name(),
                                    ),
                                    param.def_location(),
                                    param.type_annotation(),
                                    default_value,
                                );
                            }
                        }
                    }
                },

                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),
            }
        }
        self.errors
    }

    fn check(
        &mut self,
        coordinate: String,
        def_location: &loc::SourceLocation,
        type_annot: &TypeAnnotation,
        value: &Value,
    ) {
        if let Err(reason) = self.conforms(type_annot, value) {
            log::trace!("Default value of `{coordinate}` rejected: {reason}");
            self.errors.push(TypeValidationError::InvalidDefaultValue {
                coordinate,
                def_location: def_location.to_owned(),
                reason,
            });
        }
    }

    fn conforms(
        &self,
        type_annot: &TypeAnnotation,
        value: &Value,
    ) -> std::result::Result<(), String> {
        if value.is_null() {
            return if type_annot.nullable() {
                Ok(())
            } else {
                Err(format!("`null` is not a valid value for `{type_annot}`"))
            };
        }

        // GraphQL float literals have no spelling for NaN or infinity.
        if let Some(non_finite) = find_non_finite_float(value) {
            return Err(format!(
                "`{non_finite}` is not a finite number, so it can not be \
                written as a GraphQL value",
            ));
        }

        let named_annot = match type_annot {
            TypeAnnotation::List(list_annot) => {
                let inner = list_annot.inner_type_annotation();
                return match value {
                    Value::List(items) => items.iter()
                        .try_for_each(|item| self.conforms(inner, item)),
                    // A single item is accepted where a list is expected.
                    //
                    // https://spec.graphql.org/October2021/#sec-List.Input-Coercion
                    _ => self.conforms(inner, value),
                };
            },
            TypeAnnotation::Named(named_annot) => named_annot,
        };

        let type_name = named_annot.graphql_type_name();
        let Some(type_) = self.types_map.get(type_name) else {
            return Ok(());
        };
        match (type_, value) {
            (GraphQLType::Bool, Value::Bool(_))
            | (GraphQLType::Float, Value::Float(_) | Value::Int(_))
            | (GraphQLType::ID, Value::Int(_) | Value::String(_))
            | (GraphQLType::Int, Value::Int(_))
            | (GraphQLType::String, Value::String(_))
            | (GraphQLType::Scalar(_), _)
                => Ok(()),

            (GraphQLType::Int, Value::Float(_)) => Err(format!(
                "`{value}` is not an integer, so it is not a valid value for \
                `{type_annot}`",
            )),

            (GraphQLType::Enum(enum_type), Value::Enum(value_name) | Value::String(value_name)) =>
                if enum_type.value(value_name).is_some() {
                    Ok(())
                } else {
                    Err(format!(
                        "The `{}` enum has no value named `{value_name}`",
                        enum_type.name(),
                    ))
                },

            (GraphQLType::InputObject(input_type), Value::Object(entries)) =>
                self.conforms_to_input_object(input_type, entries),

            _ => Err(format!(
                "`{value}` is not a valid value for `{type_annot}`",
            )),
        }
    }

    fn conforms_to_input_object(
        &self,
        input_type: &InputObjectType,
        entries: &IndexMap<String, Value>,
    ) -> std::result::Result<(), String> {
        if let Some(unknown_name) = entries.keys().find(|key| input_type.field(key).is_none()) {
            return Err(format!(
                "The `{}` input type has no field named `{unknown_name}`",
                input_type.name(),
            ));
        }

        for (field_name, field) in input_type.fields() {
            match entries.get(field_name) {
                Some(entry) => self.conforms(field.type_annotation(), entry)?,
                None if field.is_required() => return Err(format!(
                    "The required `{}.{field_name}` field is missing",
                    input_type.name(),
                )),
                None => (),
            }
        }
        Ok(())
    }
}

fn find_non_finite_float(value: &Value) -> Option<f64> {
    match value {
        Value::Float(float) if !float.is_finite() => Some(*float),
        Value::List(items) => items.iter().find_map(find_non_finite_float),
        Value::Object(entries) => entries.values().find_map(find_non_finite_float),
        _ => None,
    }
}
