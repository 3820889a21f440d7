use crate::prelude::*;
use clap::Parser;

mod mcp;
mod prelude;
mod tools;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Joke HR tools served over the Model Context Protocol"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "HILANET_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Seed for the random source. The same seed and input always produce the same text.
    #[clap(long, env = "HILANET_SEED", global = true)]
    seed: Option<u64>,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Model Context Protocol server
    MCP(crate::mcp::App),

    /// Run HR tools directly from the command line
    Tools(crate::tools::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
        SubCommands::Tools(sub_app) => crate::tools::run(sub_app, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
