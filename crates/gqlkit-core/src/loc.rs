use std::path::Path;
use std::path::PathBuf;

/// A position within a definition document: the file the document was loaded
/// from plus a [JSON pointer](https://www.rfc-editor.org/rfc/rfc6901) to the
/// element within that document.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DocumentPosition {
    pub file: Box<PathBuf>,
    pub pointer: String,
}

/// Indicates where some element of a [`Schema`](crate::Schema) was declared.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    /// Declared programmatically via one of the builder APIs.
    Builder,

    /// Implicitly defined by GraphQL itself (e.g. the `String` scalar).
    GraphQLBuiltIn,

    /// Declared within a definition document.
    Document(DocumentPosition),
}
impl SourceLocation {
    /// The location of the root of a definition document loaded from `file`.
    pub fn document(file: impl Into<PathBuf>) -> Self {
        Self::Document(DocumentPosition {
            file: Box::new(file.into()),
            pointer: String::new(),
        })
    }

    /// The location of an element nested under this one (e.g. the
    /// `fields/2` entry of a type definition).
    ///
    /// Only [`SourceLocation::Document`] locations carry enough information
    /// to describe a child, so all other locations are returned unchanged.
    pub fn child(&self, segment: impl std::fmt::Display) -> Self {
        match self {
            Self::Document(DocumentPosition { file, pointer }) =>
                Self::Document(DocumentPosition {
                    file: file.clone(),
                    pointer: format!("{pointer}/{segment}"),
                }),

            Self::Builder | Self::GraphQLBuiltIn => self.clone(),
        }
    }

    /// The definition document this location points into, if any.
    pub fn file(&self) -> Option<&Path> {
        if let Self::Document(pos) = self {
            Some(pos.file.as_path())
        } else {
            None
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builder => write!(f, "<builder>"),
            Self::GraphQLBuiltIn => write!(f, "<builtin>"),
            Self::Document(DocumentPosition { file, pointer }) =>
                write!(f, "{}#{pointer}", file.display()),
        }
    }
}
