use crate::nullability::NonNullDefaults;
use crate::schema::null_propagation;
use crate::schema::sdl_printer;
use crate::schema::NullPropagation;
use crate::schema::NullPropagationError;
use crate::schema::RootOperationKind;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents a fully validated and immutable GraphQL schema.
///
/// Every field, parameter, and input field in a [`Schema`] carries a resolved
/// [`TypeAnnotation`](crate::types::TypeAnnotation). The
/// [`NonNullDefaults`] it was built with are kept for reference only; nothing
/// is re-resolved after [`SchemaBuilder::build()`].
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) non_null_defaults: NonNullDefaults,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns all types defined within this [`Schema`], ordered as they were
    /// declared.
    ///
    /// [^note] This map includes both the declared types and the built-in
    /// scalars (which come first).
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type.as_ref().map(|named_ref| self.expect_object(named_ref))
    }

    /// The global [`NonNullDefaults`] that were in effect when this schema
    /// was built.
    pub fn non_null_defaults(&self) -> &NonNullDefaults {
        &self.non_null_defaults
    }

    /// Computes how far a null produced by the last field of `path` spreads
    /// through a response. See [`NullPropagation`].
    pub fn null_propagation(
        &self,
        root: RootOperationKind,
        path: &[&str],
    ) -> Result<NullPropagation, NullPropagationError> {
        null_propagation::analyze(self, root, path)
    }

    /// Returns this [`Schema`]'s Query root operation type.
    pub fn query_type(&self) -> &ObjectType {
        self.expect_object(&self.query_type)
    }

    pub fn root_operation_type(&self, kind: RootOperationKind) -> Option<&ObjectType> {
        match kind {
            RootOperationKind::Mutation => self.mutation_type(),
            RootOperationKind::Query => Some(self.query_type()),
            RootOperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type.as_ref().map(|named_ref| self.expect_object(named_ref))
    }

    /// Renders this [`Schema`] as GraphQL SDL. Resolved non-null positions are
    /// marked with `!`.
    pub fn to_sdl(&self) -> String {
        self.to_string()
    }

    fn expect_object(&self, named_ref: &NamedGraphQLTypeRef) -> &ObjectType {
        named_ref.deref(self)
            .and_then(|type_| type_.as_object())
            .expect("root operation type is an object type present in schema")
    }
}
impl std::fmt::Display for Schema {
    /// Same output as [`Schema::to_sdl()`].
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        sdl_printer::write_schema(self, f)
    }
}
