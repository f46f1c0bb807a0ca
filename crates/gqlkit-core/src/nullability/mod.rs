//! Resolution of the effective nullability of every field, parameter, and
//! input field position in a schema.
//!
//! Nullability is configured in three layers. From least to most specific:
//!
//! 1. Schema-wide [`NonNullDefaults`], given to the
//!    [`SchemaBuilder`](crate::SchemaBuilder).
//! 2. Type-level [`NonNullDefaults`], given to an object, interface, or input
//!    object type builder. These apply to every position declared on that
//!    type (including the parameters of its fields).
//! 3. An explicit [`Nullability`] wrapper on the position itself (see
//!    [`TypeExpr::non_null()`](crate::types::TypeExpr::non_null) and
//!    [`TypeExpr::nullable()`](crate::types::TypeExpr::nullable)).
//!
//! The most specific layer that is present always wins, regardless of its
//! value.

mod non_null_defaults;
#[allow(clippy::module_inception)]
mod nullability;
mod nullability_scope;
mod nullability_source;
mod position_kind;
mod resolve;
mod resolved_nullability;

pub use non_null_defaults::NonNullDefaults;
pub use nullability::Nullability;
pub use nullability_scope::NullabilityScope;
pub use nullability_source::NullabilitySource;
pub use position_kind::PositionKind;
pub use resolve::resolve_non_null;
pub use resolve::resolve_nullability;
pub use resolved_nullability::ResolvedNullability;
