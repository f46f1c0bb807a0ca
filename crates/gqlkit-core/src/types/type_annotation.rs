use crate::loc;
use crate::nullability::NullabilitySource;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use indexmap::IndexMap;

/// The resolved type of a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter), or
/// [`InputField`](crate::types::InputField).
///
/// Every level of a [`TypeAnnotation`] carries exactly one resolved nullability
/// flag along with the [`NullabilitySource`] that decided it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(list_annot) =>
                list_annot.inner_type_annotation().innermost_named_type_annotation(),
            Self::Named(named_annot) => named_annot,
        }
    }

    pub(crate) fn inner_named_type_ref(&self) -> &NamedGraphQLTypeRef {
        &self.innermost_named_type_annotation().type_ref
    }

    /// Check if two type annotations are definitionally equal.
    ///
    /// Two type annotations are equivalent if they have the same structure,
    /// the same nullability at each level, and the same innermost type name.
    /// Source locations and [`NullabilitySource`]s are ignored: a position made
    /// non-null by an explicit wrapper is equivalent to one made non-null by
    /// defaults.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(self_list), Self::List(other_list))
                => self_list.is_equivalent_to(other_list),
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_equivalent_to(other_named),
            _ => false,
        }
    }

    /// Indicates if a value of this type can always be used where a value of
    /// `other` is expected.
    ///
    /// A non-null position is a subtype of a nullable one (but not the other
    /// way around), lists are covariant in their item type, and an object or
    /// interface type is a subtype of every interface it implements.
    pub fn is_subtype_of(&self, schema: &Schema, other: &Self) -> bool {
        self.is_subtype_of_impl(&schema.types, other)
    }

    pub(crate) fn is_subtype_of_impl(
        &self,
        types_map: &IndexMap<String, GraphQLType>,
        other: &Self,
    ) -> bool {
        if self.nullable() && !other.nullable() {
            return false;
        }

        match (self, other) {
            (Self::List(self_list), Self::List(other_list))
                => self_list.inner_type_annotation().is_subtype_of_impl(
                    types_map,
                    other_list.inner_type_annotation(),
                ),
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_named_subtype_of_impl(types_map, other_named),
            (Self::List(_), Self::Named(_))
            | (Self::Named(_), Self::List(_))
                => false,
        }
    }

    /// Indicates if the outermost position of this [`TypeAnnotation`] is
    /// [nullable or non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(list_annot) => list_annot.nullable(),
            Self::Named(named_annot) => named_annot.nullable(),
        }
    }

    /// The configuration layer that decided the nullability of the outermost
    /// position.
    pub fn nullability_source(&self) -> NullabilitySource {
        match self {
            Self::List(list_annot) => list_annot.nullability_source(),
            Self::Named(named_annot) => named_annot.nullability_source(),
        }
    }

    /// Each position of this annotation, from outermost to innermost.
    ///
    /// `[[String!]]!` yields the outer list, the inner list, and the `String`
    /// position (in that order).
    pub fn positions(&self) -> Vec<&TypeAnnotation> {
        let mut positions = vec![self];
        let mut current = self;
        while let Self::List(list_annot) = current {
            current = list_annot.inner_type_annotation();
            positions.push(current);
        }
        positions
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`TypeAnnotation`] was declared.
    pub fn ref_location(&self) -> &loc::SourceLocation {
        match self {
            Self::List(annot) => annot.ref_location(),
            Self::Named(annot) => annot.ref_location(),
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
