pub mod loc;
pub mod nullability;
pub mod schema;
pub mod types;
mod value;

pub use schema::Schema;
pub use schema::SchemaBuilder;
pub use schema::SchemaBuildError;
pub use value::Value;
