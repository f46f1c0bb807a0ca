use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

const UTF8_BOM: &str = "\u{feff}";

/// Reads a definition document from disk. Editors on some platforms prefix
/// UTF-8 files with a byte order mark, which JSON parsers reject, so a leading
/// BOM is dropped.
pub(super) fn read_definition_file(
    file_path: &Path,
) -> Result<String, DefinitionFileError> {
    if !file_path.is_file() {
        return Err(DefinitionFileError::NotAFile {
            file_path: file_path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(file_path).map_err(|err| DefinitionFileError::Io {
        file_path: file_path.to_path_buf(),
        err,
    })?;
    let content = String::from_utf8(bytes).map_err(|err| DefinitionFileError::InvalidUtf8 {
        file_path: file_path.to_path_buf(),
        err,
    })?;

    Ok(match content.strip_prefix(UTF8_BOM) {
        Some(without_bom) => without_bom.to_string(),
        None => content,
    })
}

#[derive(Debug, Error)]
pub enum DefinitionFileError {
    #[error("Definition file `{}` is not valid UTF-8: {err}", file_path.display())]
    InvalidUtf8 {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read definition file `{}`: {err}", file_path.display())]
    Io {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("`{}` does not exist or is not a regular file", file_path.display())]
    NotAFile {
        file_path: PathBuf,
    },
}
impl DefinitionFileError {
    pub fn file_path(&self) -> &Path {
        match self {
            Self::InvalidUtf8 { file_path, .. }
            | Self::Io { file_path, .. }
            | Self::NotAFile { file_path } => file_path.as_path(),
        }
    }
}
// `io::Error` has no `PartialEq`, so I/O failures compare by kind.
impl std::cmp::PartialEq for DefinitionFileError {
    fn eq(&self, other: &Self) -> bool {
        if self.file_path() != other.file_path() {
            return false;
        }
        match (self, other) {
            (Self::InvalidUtf8 { err: lhs, .. }, Self::InvalidUtf8 { err: rhs, .. }) =>
                lhs.utf8_error() == rhs.utf8_error(),
            (Self::Io { err: lhs, .. }, Self::Io { err: rhs, .. }) =>
                lhs.kind() == rhs.kind(),
            (Self::NotAFile { .. }, Self::NotAFile { .. }) => true,
            _ => false,
        }
    }
}
