use crate::commands::schema_args::SchemaArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Write the SDL to this file instead of stdout.",
        long,
    )]
    out: Option<PathBuf>,

    #[command(flatten)]
    schema_args: SchemaArgs,
}
impl PrintCmd {
    fn print(&self) -> anyhow::Result<Option<String>> {
        let schema = self.schema_args.load_schema()?;
        let sdl = schema.to_sdl();

        let Some(out_path) = &self.out else {
            return Ok(Some(sdl.trim_end().to_string()));
        };
        std::fs::write(out_path, sdl.as_bytes())
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
        log::debug!("Wrote {} bytes of SDL.", sdl.len());

        Ok(Some(format!(
            "{} Wrote the schema SDL to {}.",
            output_utils::GREEN_CHECK,
            out_path.display(),
        )))
    }
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.print().into()
    }
}
