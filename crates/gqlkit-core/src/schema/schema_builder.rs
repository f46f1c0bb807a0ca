use crate::loc;
use crate::nullability::NonNullDefaults;
use crate::schema::definition_document::DefinitionDocument;
use crate::schema::definition_file::read_definition_file;
use crate::schema::DefinitionFileError;
use crate::schema::RootOperationKind;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeBuilderEnum;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`].
///
/// Types can be added programmatically with [`SchemaBuilder::add_type()`] or
/// loaded from JSON definition documents. Nothing is resolved until
/// [`SchemaBuilder::build()`], which applies the global [`NonNullDefaults`]
/// to every type exactly once.
///
/// ```
/// use gqlkit_core::nullability::NonNullDefaults;
/// use gqlkit_core::types::FieldBuilder;
/// use gqlkit_core::types::ObjectTypeBuilder;
/// use gqlkit_core::types::TypeExpr;
/// use gqlkit_core::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .non_null_defaults(NonNullDefaults::new(false, true))
///     .add_type(
///         ObjectTypeBuilder::new("Query")
///             .field(FieldBuilder::new("version", TypeExpr::named("String")))
///     )
///     .build()
///     .unwrap();
///
/// assert!(schema.to_sdl().contains("version: String!"));
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    document_non_null_defaults: Option<(NonNullDefaults, PathBuf)>,
    non_null_defaults: Option<NonNullDefaults>,
    str_load_counter: u16,
    type_builders: Vec<TypeBuilderEnum>,
}
impl SchemaBuilder {
    pub fn add_type(mut self, type_builder: impl Into<TypeBuilderEnum>) -> Self {
        self.type_builders.push(type_builder.into());
        self
    }

    pub fn build(self) -> Result<Schema> {
        let non_null_defaults = self.effective_non_null_defaults();
        log::debug!(
            "Building a schema from {} type definition(s) with global \
            nonNullDefaults {non_null_defaults}.",
            self.type_builders.len(),
        );

        let mut types_map_builder = TypesMapBuilder::new();
        for type_builder in self.type_builders {
            types_map_builder.add_new_type(type_builder.build(&non_null_defaults)?)?;
        }
        let types = types_map_builder.into_types_map()?;

        let query_type = match root_operation_type_ref(&types, RootOperationKind::Query)? {
            Some(query_type) => query_type,
            None => return Err(SchemaBuildError::NoQueryOperationTypeDefined),
        };
        let mutation_type = root_operation_type_ref(&types, RootOperationKind::Mutation)?;
        let subscription_type =
            root_operation_type_ref(&types, RootOperationKind::Subscription)?;

        log::debug!("Built a schema with {} type(s).", types.len());
        Ok(Schema {
            mutation_type,
            non_null_defaults,
            query_type,
            subscription_type,
            types,
        })
    }

    /// The global [`NonNullDefaults`] that [`SchemaBuilder::build()`] will
    /// use: the value passed to [`SchemaBuilder::non_null_defaults()`] if any,
    /// else the value declared by loaded definition documents if any, else
    /// [`NonNullDefaults::default()`].
    pub fn effective_non_null_defaults(&self) -> NonNullDefaults {
        self.non_null_defaults
            .or(self.document_non_null_defaults.as_ref().map(|(defaults, _)| *defaults))
            .unwrap_or_default()
    }

    pub fn load_definition_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_definition_files(vec![file_path])
    }

    pub fn load_definition_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = read_definition_file(file_path)
                .map_err(|err| SchemaBuildError::DefinitionFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_definition_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    /// Loads a JSON definition document. `file_path` is only used to describe
    /// source locations; documents without one are named `str://N`.
    pub fn load_definition_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let document: DefinitionDocument = serde_json::from_str(content)
            .map_err(|err| SchemaBuildError::DefinitionParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;
        log::debug!(
            "Loaded {} type definition(s) from `{}`.",
            document.types.len(),
            file_path.display(),
        );

        if let Some(doc_defaults) = document.non_null_defaults {
            match &self.document_non_null_defaults {
                Some((existing_defaults, existing_file))
                    if *existing_defaults != doc_defaults =>
                    return Err(SchemaBuildError::ConflictingGlobalNonNullDefaults {
                        defaults1: *existing_defaults,
                        defaults2: doc_defaults,
                        file1: existing_file.to_owned(),
                        file2: file_path,
                    }),
                Some(_) => (),
                None => {
                    self.document_non_null_defaults =
                        Some((doc_defaults, file_path.to_owned()));
                },
            }
        }

        let doc_location = loc::SourceLocation::document(file_path);
        for (idx, type_def) in document.types.into_iter().enumerate() {
            let type_location = doc_location.child("types").child(idx);
            self.type_builders.push(type_def.into_type_builder(type_location));
        }

        Ok(self)
    }

    pub fn new() -> Self {
        Self {
            document_non_null_defaults: None,
            non_null_defaults: None,
            str_load_counter: 0,
            type_builders: vec![],
        }
    }

    /// Sets the global [`NonNullDefaults`]. This takes precedence over any
    /// `nonNullDefaults` declared by loaded definition documents.
    pub fn non_null_defaults(mut self, non_null_defaults: NonNullDefaults) -> Self {
        self.non_null_defaults = Some(non_null_defaults);
        self
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn root_operation_type_ref(
    types: &IndexMap<String, GraphQLType>,
    kind: RootOperationKind,
) -> Result<Option<NamedGraphQLTypeRef>> {
    let type_name = kind.default_type_name();
    match types.get(type_name) {
        Some(GraphQLType::Object(obj_type)) => Ok(Some(NamedGraphQLTypeRef::new(
            type_name,
            obj_type.def_location().to_owned(),
        ))),
        Some(type_) => Err(SchemaBuildError::RootOperationTypeNotAnObject {
            def_location: type_.def_location().to_owned(),
            operation: kind,
            type_name: type_name.to_string(),
        }),
        None => Ok(None),
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "`{}` declares global nonNullDefaults {defaults2}, but `{}` already \
        declared {defaults1}",
        file2.display(),
        file1.display(),
    )]
    ConflictingGlobalNonNullDefaults {
        defaults1: NonNullDefaults,
        defaults2: NonNullDefaults,
        file1: PathBuf,
        file2: PathBuf,
    },

    #[error(
        "Nullability wrappers can not be nested directly: `{type_expr}` at \
        {location}"
    )]
    ConflictingNullabilityWrappers {
        location: loc::SourceLocation,
        type_expr: String,
    },

    #[error("Failure while trying to read a definition file from disk: {0}")]
    DefinitionFileReadError(Box<DefinitionFileError>),

    #[error("Error parsing the definition document `{}`: {err}", file.display())]
    DefinitionParseError {
        file: PathBuf,
        err: String,
    },

    #[error(
        "The `{type_name}` enum defines the `{value_name}` value more than \
        once ({def1} and {def2})"
    )]
    DuplicateEnumValueDefinition {
        type_name: String,
        value_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type defines the `{field_name}` field more than \
        once ({field_def1} and {field_def2})"
    )]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SourceLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field defines the `{parameter_name}` \
        parameter more than once ({def1} and {def2})"
    )]
    DuplicateParameterDefinition {
        type_name: String,
        field_name: String,
        parameter_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined ({def1} and {def2})")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error(
        "Parameter names must not start with `__`: \
        `{type_name}.{field_name}({param_name}:)`"
    )]
    InvalidDunderPrefixedParamName {
        location: loc::SourceLocation,
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The `{type_name}` type is used as the {operation} root operation \
        type, but it is not an object type"
    )]
    RootOperationTypeNotAnObject {
        def_location: loc::SourceLocation,
        operation: RootOperationKind,
        type_name: String,
    },

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
