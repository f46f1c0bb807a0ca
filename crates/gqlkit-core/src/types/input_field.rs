use crate::loc;
use crate::schema::Schema;
use crate::types::argument_coercion::coerce_input_value;
use crate::types::ArgumentCoercionError;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeAnnotation;
use crate::Value;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputField {
    pub(super) def_location: loc::SourceLocation,
    pub(super) default_value: Option<Value>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) parent_type: NamedGraphQLTypeRef,
    pub(super) type_annotation: TypeAnnotation,
}
impl InputField {
    /// Same as [`Parameter::coerce_input()`](crate::types::Parameter::coerce_input),
    /// for one field of an input object value.
    pub fn coerce_input(
        &self,
        provided: Option<&Value>,
    ) -> Result<Option<Value>, ArgumentCoercionError> {
        coerce_input_value(
            self.name.as_str(),
            &self.type_annotation,
            self.default_value.as_ref(),
            provided,
        )
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`InputField`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> &'schema GraphQLType {
        self.parent_type
            .deref(schema)
            .expect("type is present in schema")
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type.name()
    }

    /// The resolved [`TypeAnnotation`] of this [`InputField`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
