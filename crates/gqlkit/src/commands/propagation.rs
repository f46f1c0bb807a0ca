use crate::commands::schema_args::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlkit_core::schema::NullPropagation;
use gqlkit_core::schema::RootOperationKind;

#[derive(Debug, clap::Args)]
pub(crate) struct PropagationCmd {
    #[arg(
        help="Print the result as JSON.",
        long,
    )]
    json: bool,

    #[arg(
        help="Dot-separated field path starting at the root operation type \
             (e.g. `viewer.friends.name`).",
        long,
    )]
    path: String,

    #[arg(
        default_value_t=RootOperation::Query,
        help="The root operation type the path starts at.",
        long,
        value_enum,
    )]
    root: RootOperation,

    #[command(flatten)]
    schema_args: SchemaArgs,
}
impl PropagationCmd {
    fn analyze(&self) -> anyhow::Result<Option<String>> {
        let path = split_field_path(self.path.as_str());
        let schema = self.schema_args.load_schema()?;
        let propagation = schema.null_propagation(self.root.into(), &path)?;

        if self.json {
            return Ok(Some(serde_json::to_string_pretty(&propagation)?));
        }
        Ok(Some(describe(self.path.as_str(), &propagation)))
    }
}

#[inherent::inherent]
impl RunnableCommand for PropagationCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.analyze().into()
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum RootOperation {
    Mutation,
    Query,
    Subscription,
}
impl std::convert::From<RootOperation> for RootOperationKind {
    fn from(value: RootOperation) -> Self {
        match value {
            RootOperation::Mutation => RootOperationKind::Mutation,
            RootOperation::Query => RootOperationKind::Query,
            RootOperation::Subscription => RootOperationKind::Subscription,
        }
    }
}
impl std::fmt::Display for RootOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", RootOperationKind::from(*self))
    }
}

/// Empty segments (`a..b`, a trailing `.`) are dropped.
pub(super) fn split_field_path(path: &str) -> Vec<&str> {
    path.split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

pub(super) fn describe(path: &str, propagation: &NullPropagation) -> String {
    format!(
        "A null from `{path}` is absorbed by {}.\n\
        Fields above it that lose their value: {}",
        propagation.absorbed_by,
        propagation.blast_radius,
    )
}
