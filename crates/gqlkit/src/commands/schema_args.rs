use anyhow::Context;
use gqlkit_core::nullability::NonNullDefaults;
use gqlkit_core::Schema;
use gqlkit_core::SchemaBuilder;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Arguments shared by every command that needs a [`Schema`].
#[derive(Debug, clap::Args)]
pub(super) struct SchemaArgs {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for \
             definition documents within a directory.",
        long,
        value_delimiter = ',',
    )]
    definition_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more definition documents or directories \
             containing definition documents.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,

    #[arg(
        help="Override the global `nonNullDefaults.input` declared by the \
             definition documents.",
        long,
    )]
    non_null_input: Option<bool>,

    #[arg(
        help="Override the global `nonNullDefaults.output` declared by the \
             definition documents.",
        long,
    )]
    non_null_output: Option<bool>,
}
impl SchemaArgs {
    /// Finds every definition document at or under the given paths, in a
    /// stable order.
    pub(super) fn find_definition_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let file_exts: HashSet<&str> =
            self.definition_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut walk_errors = vec![];
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            let walker = WalkDir::new(path.as_path())
                .follow_links(true)
                .sort_by_file_name();
            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        walk_errors.push(err.to_string());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }

                let matches_ext =
                    entry_path.extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| file_exts.contains(ext));
                if matches_ext {
                    log::trace!("Found definition file at {entry_path:#?}.");
                    file_paths.push(canonicalize(entry_path.to_path_buf())?);
                }
            }
        }

        if !walk_errors.is_empty() {
            anyhow::bail!(
                "Failed to scan the input paths:\n{}",
                walk_errors.iter()
                    .map(|err| format!("  * {err}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        // A single explicitly-named file is loaded even when its extension
        // isn't one of --definition-file-exts.
        if file_paths.is_empty() && self.file_or_dir_paths.len() == 1 {
            let only_path = &self.file_or_dir_paths[0];
            if only_path.is_file() {
                log::warn!(
                    "Proceeding to load {only_path:#?} even though it doesn't \
                    match any of the --definition-file-exts ({}).",
                    self.definition_file_exts.iter()
                        .map(|ext| format!("`{ext}`"))
                        .collect::<Vec<_>>()
                        .join(", "),
                );
                file_paths.push(canonicalize(only_path.to_owned())?);
            }
        }

        let mut seen = HashSet::new();
        file_paths.retain(|path| seen.insert(path.to_owned()));

        if file_paths.is_empty() {
            anyhow::bail!("No definition documents were found at the given paths");
        }
        log::debug!("Found {} definition documents.", file_paths.len());
        Ok(file_paths)
    }

    /// Loads and builds the schema, applying any --non-null-* overrides on
    /// top of the defaults the documents declare.
    pub(super) fn load_schema(&self) -> anyhow::Result<Schema> {
        let file_paths = self.find_definition_files()?;
        let mut builder = SchemaBuilder::new().load_definition_files(file_paths)?;

        if self.non_null_input.is_some() || self.non_null_output.is_some() {
            let declared = builder.effective_non_null_defaults();
            let non_null_defaults = NonNullDefaults::new(
                self.non_null_input.unwrap_or(declared.input),
                self.non_null_output.unwrap_or(declared.output),
            );
            log::debug!("Overriding global nonNullDefaults with {non_null_defaults}.");
            builder = builder.non_null_defaults(non_null_defaults);
        }

        Ok(builder.build()?)
    }
}

fn canonicalize(path: PathBuf) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(&path)
        .with_context(|| format!("Failed to resolve {}", path.display()))
}
