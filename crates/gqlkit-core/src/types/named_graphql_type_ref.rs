use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;

/// A by-name reference to a [`GraphQLType`] stored within a [`Schema`].
///
/// Storing names instead of direct references lets a [`Schema`] own all of its
/// types without self-references. De-referencing is done with
/// [`NamedGraphQLTypeRef::deref()`] against the owning [`Schema`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedGraphQLTypeRef {
    name: String,
    ref_location: loc::SourceLocation,
}
impl NamedGraphQLTypeRef {
    pub fn deref<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        schema.types.get(self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: loc::SourceLocation,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            ref_location,
        }
    }

    /// Where this reference was made (not where the referenced type was
    /// defined).
    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}
