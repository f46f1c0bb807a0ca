use crate::loc;
use crate::nullability::Nullability;
use crate::nullability::NullabilityScope;
use crate::nullability::PositionKind;
use crate::schema::SchemaBuildError;
use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// A type as declared on a field, parameter, or input field, before any
/// nullability defaults have been applied.
///
/// Every [`TypeExpr::Named`] and [`TypeExpr::List`] node is one type position.
/// Positions wrapped in [`TypeExpr::NonNull`] or [`TypeExpr::Nullable`] keep
/// the declared nullability. All other positions take their nullability from
/// the owning type's [`NonNullDefaults`](crate::nullability::NonNullDefaults)
/// or, when the owning type declares none, the schema-wide defaults.
///
/// In definition documents a named type is a bare string and wrappers are
/// single-key objects:
///
/// ```json
/// { "nonNull": { "list": { "nullable": "String" } } }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(from = "TypeExprRepr", into = "TypeExprRepr")]
pub enum TypeExpr {
    List(Box<TypeExpr>),
    Named(String),
    NonNull(Box<TypeExpr>),
    Nullable(Box<TypeExpr>),
}
impl TypeExpr {
    /// The explicit [`Nullability`] of the outermost position, if declared.
    pub fn explicit_nullability(&self) -> Option<Nullability> {
        match self {
            Self::NonNull(_) => Some(Nullability::NonNull),
            Self::Nullable(_) => Some(Nullability::Nullable),
            Self::List(_) | Self::Named(_) => None,
        }
    }

    /// The name of the named type at the core of this expression.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::Named(name) => name.as_str(),
            Self::List(inner)
            | Self::NonNull(inner)
            | Self::Nullable(inner) => inner.innermost_type_name(),
        }
    }

    pub fn list(inner: TypeExpr) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn named(name: impl AsRef<str>) -> Self {
        Self::Named(name.as_ref().to_string())
    }

    pub fn non_null(inner: TypeExpr) -> Self {
        Self::NonNull(Box::new(inner))
    }

    pub fn nullable(inner: TypeExpr) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Applies the layered nullability configuration in `scope` to every
    /// position of this expression.
    pub(crate) fn resolve(
        &self,
        scope: &NullabilityScope,
        kind: PositionKind,
        location: &loc::SourceLocation,
    ) -> Result<TypeAnnotation> {
        match self {
            Self::NonNull(inner) => inner.resolve_position(
                Some(Nullability::NonNull),
                scope,
                kind,
                location,
                self,
            ),
            Self::Nullable(inner) => inner.resolve_position(
                Some(Nullability::Nullable),
                scope,
                kind,
                location,
                self,
            ),
            Self::List(_) | Self::Named(_) =>
                self.resolve_position(None, scope, kind, location, self),
        }
    }

    fn resolve_position(
        &self,
        explicit: Option<Nullability>,
        scope: &NullabilityScope,
        kind: PositionKind,
        location: &loc::SourceLocation,
        wrapper: &TypeExpr,
    ) -> Result<TypeAnnotation> {
        match self {
            Self::Named(name) => {
                let resolved = scope.resolve(explicit, kind);
                log::trace!(
                    "Resolved `{name}` {} position at {location} as {} via {}.",
                    kind.name(),
                    if resolved.nullable() { "nullable" } else { "non-null" },
                    resolved.source().description(),
                );
                Ok(TypeAnnotation::Named(NamedTypeAnnotation {
                    nullability_source: resolved.source(),
                    nullable: resolved.nullable(),
                    type_ref: NamedGraphQLTypeRef::new(name, location.to_owned()),
                }))
            },

            Self::List(inner) => {
                let resolved = scope.resolve(explicit, kind);
                Ok(TypeAnnotation::List(ListTypeAnnotation {
                    inner_type_annotation: Box::new(
                        inner.resolve(scope, kind, location)?,
                    ),
                    nullability_source: resolved.source(),
                    nullable: resolved.nullable(),
                    ref_location: location.to_owned(),
                }))
            },

            // A nullability wrapper directly inside another one: the two would
            // either contradict each other or be redundant.
            Self::NonNull(_) | Self::Nullable(_) =>
                Err(SchemaBuildError::ConflictingNullabilityWrappers {
                    location: location.to_owned(),
                    type_expr: wrapper.to_string(),
                }),
        }
    }
}
impl std::fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "list({inner})"),
            Self::Named(name) => write!(f, "{name}"),
            Self::NonNull(inner) => write!(f, "nonNull({inner})"),
            Self::Nullable(inner) => write!(f, "nullable({inner})"),
        }
    }
}

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
enum TypeExprRepr {
    Named(String),
    Wrapped(WrappedTypeExprRepr),
}

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
enum WrappedTypeExprRepr {
    List(TypeExpr),
    NonNull(TypeExpr),
    Nullable(TypeExpr),
}

impl std::convert::From<TypeExprRepr> for TypeExpr {
    fn from(value: TypeExprRepr) -> Self {
        match value {
            TypeExprRepr::Named(name) => Self::Named(name),
            TypeExprRepr::Wrapped(WrappedTypeExprRepr::List(inner)) =>
                Self::List(Box::new(inner)),
            TypeExprRepr::Wrapped(WrappedTypeExprRepr::NonNull(inner)) =>
                Self::NonNull(Box::new(inner)),
            TypeExprRepr::Wrapped(WrappedTypeExprRepr::Nullable(inner)) =>
                Self::Nullable(Box::new(inner)),
        }
    }
}
impl std::convert::From<TypeExpr> for TypeExprRepr {
    fn from(value: TypeExpr) -> Self {
        match value {
            TypeExpr::Named(name) => Self::Named(name),
            TypeExpr::List(inner) =>
                Self::Wrapped(WrappedTypeExprRepr::List(*inner)),
            TypeExpr::NonNull(inner) =>
                Self::Wrapped(WrappedTypeExprRepr::NonNull(*inner)),
            TypeExpr::Nullable(inner) =>
                Self::Wrapped(WrappedTypeExprRepr::Nullable(*inner)),
        }
    }
}
