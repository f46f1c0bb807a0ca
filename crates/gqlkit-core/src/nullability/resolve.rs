use crate::nullability::NonNullDefaults;
use crate::nullability::Nullability;
use crate::nullability::NullabilitySource;
use crate::nullability::PositionKind;
use crate::nullability::ResolvedNullability;

/// Determines whether a position of the given `kind` is non-null.
///
/// An explicit `field_override` always wins. Otherwise the type-level
/// `type_override` decides, and only when neither is present do the `global`
/// defaults apply.
pub fn resolve_non_null(
    global: &NonNullDefaults,
    type_override: Option<&NonNullDefaults>,
    field_override: Option<Nullability>,
    kind: PositionKind,
) -> bool {
    resolve_nullability(global, type_override, field_override, kind).non_null
}

/// Same as [`resolve_non_null()`], but also reports which layer made the
/// decision.
pub fn resolve_nullability(
    global: &NonNullDefaults,
    type_override: Option<&NonNullDefaults>,
    field_override: Option<Nullability>,
    kind: PositionKind,
) -> ResolvedNullability {
    if let Some(explicit) = field_override {
        ResolvedNullability {
            non_null: explicit.is_non_null(),
            source: NullabilitySource::ExplicitWrapper,
        }
    } else if let Some(type_defaults) = type_override {
        ResolvedNullability {
            non_null: type_defaults.for_kind(kind),
            source: NullabilitySource::TypeDefaults,
        }
    } else {
        ResolvedNullability {
            non_null: global.for_kind(kind),
            source: NullabilitySource::GlobalDefaults,
        }
    }
}
