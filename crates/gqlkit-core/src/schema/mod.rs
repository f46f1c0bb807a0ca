//! Building, validating, printing, and analyzing a [`Schema`].
//!
//! A [`SchemaBuilder`] collects type builders (directly or from JSON
//! definition documents) along with the schema-wide
//! [`NonNullDefaults`](crate::nullability::NonNullDefaults). Calling
//! [`SchemaBuilder::build()`] resolves every type position exactly once and
//! produces an immutable [`Schema`].

mod definition_document;
mod definition_file;
mod null_propagation;
mod root_operation_kind;
#[allow(clippy::module_inception)]
mod schema;
pub(crate) mod schema_builder;
mod sdl_printer;
mod type_validation_error;

pub use definition_file::DefinitionFileError;
pub use null_propagation::NullAbsorber;
pub use null_propagation::NullPropagation;
pub use null_propagation::NullPropagationError;
pub use root_operation_kind::RootOperationKind;
pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
