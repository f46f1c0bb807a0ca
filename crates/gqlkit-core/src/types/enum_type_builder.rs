use crate::loc;
use crate::nullability::NonNullDefaults;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::GraphQLType;
use crate::types::TypeBuilder;
use indexmap::IndexMap;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Declares an enum type.
///
/// ```
/// use gqlkit_core::types::EnumTypeBuilder;
/// use gqlkit_core::types::EnumValueBuilder;
///
/// let color = EnumTypeBuilder::new("Color")
///     .value("RED")
///     .value(EnumValueBuilder::new("MAUVE").deprecated("Too fancy."));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeBuilder {
    def_location: loc::SourceLocation,
    description: Option<String>,
    name: String,
    values: Vec<EnumValueBuilder>,
}
impl EnumTypeBuilder {
    pub fn description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            def_location: loc::SourceLocation::Builder,
            description: None,
            name: name.as_ref().to_string(),
            values: vec![],
        }
    }

    pub fn value(mut self, value: impl Into<EnumValueBuilder>) -> Self {
        self.values.push(value.into());
        self
    }

    pub(crate) fn with_def_location(mut self, def_location: loc::SourceLocation) -> Self {
        self.def_location = def_location;
        self
    }
}

#[inherent]
impl TypeBuilder for EnumTypeBuilder {
    /// Enums have no type positions, so the non-null defaults are unused.
    pub fn build(self, _global_non_null_defaults: &NonNullDefaults) -> Result<GraphQLType> {
        let mut values: IndexMap<String, EnumValue> = IndexMap::new();
        for value_builder in self.values {
            let value = value_builder.build();
            if let Some(existing_value) = values.get(value.name.as_str()) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    type_name: self.name,
                    value_name: value.name,
                    def1: existing_value.def_location.to_owned(),
                    def2: value.def_location,
                });
            }
            values.insert(value.name.to_string(), value);
        }

        Ok(GraphQLType::Enum(EnumType {
            def_location: self.def_location,
            description: self.description,
            name: self.name,
            values,
        }.into()))
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn type_name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueBuilder {
    def_location: loc::SourceLocation,
    deprecation_reason: Option<String>,
    description: Option<String>,
    name: String,
}
impl EnumValueBuilder {
    fn build(self) -> EnumValue {
        EnumValue {
            def_location: self.def_location,
            deprecation_reason: self.deprecation_reason,
            description: self.description,
            name: self.name,
        }
    }

    pub fn deprecated(mut self, reason: impl AsRef<str>) -> Self {
        self.deprecation_reason = Some(reason.as_ref().to_string());
        self
    }

    pub fn description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            def_location: loc::SourceLocation::Builder,
            deprecation_reason: None,
            description: None,
            name: name.as_ref().to_string(),
        }
    }

    pub(crate) fn with_def_location(mut self, def_location: loc::SourceLocation) -> Self {
        self.def_location = def_location;
        self
    }
}
impl std::convert::From<&str> for EnumValueBuilder {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
