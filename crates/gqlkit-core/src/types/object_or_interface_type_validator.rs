use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use std::collections::HashSet;

pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    implemented_iface_names: HashSet<&'a str>,
    inheritance_path: Vec<&'a str>,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            implemented_iface_names: type_.interface_names().into_iter().collect(),
            inheritance_path: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(
        mut self,
        verified_interface_impls: &mut HashSet<&'a str>,
    ) -> Vec<TypeValidationError> {
        let mut iface_names =
            self.implemented_iface_names.iter()
                .copied()
                .collect::<Vec<_>>();
        // Report in a stable order.
        iface_names.sort_unstable();
        for iface_name in iface_names {
            // Interfaces may implement other interfaces, so the same interface
            // can be reached more than once while walking the hierarchy.
            if !verified_interface_impls.insert(iface_name) {
                continue;
            }
            self.validate_interface_impl(iface_name, verified_interface_impls);
        }

        if self.inheritance_path.is_empty() {
            self.validate_own_fields();
        }

        self.errors
    }

    fn validate_interface_impl(
        &mut self,
        iface_name: &'a str,
        verified_interface_impls: &mut HashSet<&'a str>,
    ) {
        let type_name = self.type_.name.as_str();

        let Some(iface_type) = self.types_map.get(iface_name) else {
            self.errors.push(TypeValidationError::ImplementsUndefinedInterface {
                loc: self.type_.def_location.to_owned(),
                type_name: type_name.to_string(),
                undefined_interface_name: iface_name.to_string(),
            });
            return;
        };

        let Some(iface) = iface_type.as_interface() else {
            self.errors.push(TypeValidationError::ImplementsNonInterfaceType {
                loc: self.type_.def_location.to_owned(),
                non_interface_type_name: iface_type.name().to_string(),
                type_name: type_name.to_string(),
            });
            return;
        };

        // An implementing type must also explicitly implement every interface
        // that the implemented interface itself implements.
        //
        // https://spec.graphql.org/October2021/#IsValidImplementation()
        let iface_implemented_iface_names =
            iface.interface_names()
                .into_iter()
                .collect::<HashSet<_>>();
        let mut missing_recursive_iface_names =
            iface_implemented_iface_names.difference(&self.implemented_iface_names)
                .copied()
                .collect::<Vec<_>>();
        missing_recursive_iface_names.sort_unstable();
        for missing_name in missing_recursive_iface_names {
            let mut inheritance_path =
                self.inheritance_path.iter()
                    .map(|name| name.to_string())
                    .collect::<Vec<_>>();
            inheritance_path.push(iface_name.to_string());
            self.errors.push(
                TypeValidationError::MissingRecursiveInterfaceImplementation {
                    def_location: self.type_.def_location.to_owned(),
                    inheritance_path,
                    missing_recursive_interface_name: missing_name.to_string(),
                    type_name: type_name.to_string(),
                }
            );
        }

        let mut child_inheritance_path = self.inheritance_path.to_owned();
        child_inheritance_path.push(iface_name);
        let child_validator = ObjectOrInterfaceTypeValidator {
            errors: vec![],
            implemented_iface_names: iface_implemented_iface_names,
            inheritance_path: child_inheritance_path,
            type_: self.type_,
            types_map: self.types_map,
        };
        self.errors.append(&mut child_validator.validate(verified_interface_impls));

        for (field_name, iface_field) in iface.fields() {
            let Some(type_field) = self.type_.fields.get(field_name) else {
                self.errors.push(
                    TypeValidationError::MissingInterfaceSpecifiedField {
                        def_location: self.type_.def_location.to_owned(),
                        field_name: field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        type_name: type_name.to_string(),
                    }
                );
                continue;
            };

            let iface_field_params = iface_field.parameters();
            let type_field_params = type_field.parameters();

            // Every parameter of the interface field must be declared on the
            // implementing field with an equivalent type. Nullability must
            // match exactly.
            for (param_name, iface_param) in iface_field_params {
                let Some(type_param) = type_field_params.get(param_name) else {
                    self.errors.push(
                        TypeValidationError::MissingInterfaceSpecifiedFieldParameter {
                            def_location: type_field.def_location().to_owned(),
                            field_name: field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            missing_parameter_name: param_name.to_string(),
                            type_name: type_name.to_string(),
                        }
                    );
                    continue;
                };

                let iface_param_type = iface_param.type_annotation();
                let type_param_type = type_param.type_annotation();
                if !type_param_type.is_equivalent_to(iface_param_type) {
                    self.errors.push(
                        TypeValidationError::InvalidInterfaceSpecifiedFieldParameterType {
                            def_location: type_param.def_location().to_owned(),
                            expected_parameter_type: iface_param_type.to_owned(),
                            field_name: field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            invalid_parameter_type: type_param_type.to_owned(),
                            parameter_name: param_name.to_string(),
                            type_name: type_name.to_string(),
                        }
                    );
                }
            }

            // Parameters that only the implementing field declares must be
            // optional (nullable or defaulted).
            //
            // See 2.d at https://spec.graphql.org/October2021/#IsValidImplementation()
            for (param_name, type_param) in type_field_params {
                if iface_field_params.contains_key(param_name) {
                    continue;
                }
                if type_param.is_required() {
                    self.errors.push(
                        TypeValidationError::InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
                            location: type_param.type_annotation().ref_location().to_owned(),
                            field_name: field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            parameter_name: param_name.to_string(),
                            type_name: type_name.to_string(),
                        }
                    );
                }
            }

            let type_field_annot = type_field.type_annotation();
            let iface_field_annot = iface_field.type_annotation();
            if !type_field_annot.is_subtype_of_impl(self.types_map, iface_field_annot) {
                self.errors.push(
                    TypeValidationError::InvalidInterfaceSpecifiedFieldType {
                        location: type_field_annot.ref_location().to_owned(),
                        expected_field_type: iface_field_annot.to_owned(),
                        field_name: field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        invalid_field_type: type_field_annot.to_owned(),
                        type_name: type_name.to_string(),
                    }
                );
            }
        }
    }

    fn validate_own_fields(&mut self) {
        let type_name = self.type_.name.as_str();
        for (field_name, field) in &self.type_.fields {
            // Fields of object and interface types must be declared with an
            // output type.
            //
            // https://spec.graphql.org/October2021/#sel-JAHZhCFDBFABLBgB_pM
            let innermost_type_name =
                field.type_annotation()
                    .innermost_named_type_annotation()
                    .graphql_type_name();
            match self.types_map.get(innermost_type_name) {
                Some(innermost_type) if !innermost_type.is_output_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidOutputFieldWithInputType {
                            def_location: field.type_annotation().ref_location().to_owned(),
                            field_name: field_name.to_string(),
                            input_type_name: innermost_type_name.to_string(),
                            parent_type_name: type_name.to_string(),
                        }
                    ),
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: field.type_annotation().ref_location().to_owned(),
                    undefined_type_name: innermost_type_name.to_string(),
                }),
            }

            for (param_name, param) in field.parameters() {
                // Parameters must be declared with an input type.
                //
                // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBDCAACEB6yD
                let innermost_type_name =
                    param.type_annotation()
                        .innermost_named_type_annotation()
                        .graphql_type_name();
                match self.types_map.get(innermost_type_name) {
                    Some(innermost_type) if !innermost_type.is_input_type() =>
                        self.errors.push(
                            TypeValidationError::InvalidParameterWithOutputOnlyType {
                                def_location: param.type_annotation().ref_location().to_owned(),
                                outputonly_type_name: innermost_type_name.to_string(),
                                parameter_name: param_name.to_string(),
                            }
                        ),
                    Some(_) => (),
                    None => self.errors.push(TypeValidationError::UndefinedTypeName {
                        ref_location: param.type_annotation().ref_location().to_owned(),
                        undefined_type_name: innermost_type_name.to_string(),
                    }),
                }
            }
        }
    }
}
