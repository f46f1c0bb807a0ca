mod explain;
mod print;
mod propagation;
mod schema_args;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use explain::ExplainCmd;
use print::PrintCmd;
use propagation::PropagationCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlkit")]
pub(crate) enum CommandEnum {
    /// Describe which configuration layer decided the nullability of each
    /// position of a field, argument, or input field.
    Explain(Box<ExplainCmd>),

    /// Print the fully-resolved schema as GraphQL SDL.
    Print(Box<PrintCmd>),

    /// Report where a null produced by the last field of a path ends up.
    Propagation(Box<PropagationCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Explain(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Propagation(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
