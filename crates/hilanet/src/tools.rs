use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use hilanet_core::ToolError;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, clap::Parser)]
#[command(name = "tools")]
#[command(about = "Run HR tools directly from the command line")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List the available tools
    #[clap(name = "list")]
    List(ListOptions),

    /// Call a tool with JSON arguments
    #[clap(name = "call")]
    Call(CallOptions),
}

#[derive(Debug, clap::Args)]
pub struct ListOptions {
    /// Output the tools and their input schemas as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct CallOptions {
    /// Tool name (e.g., increase_salary)
    pub name: String,

    /// Tool arguments as a JSON object
    #[clap(short, long, default_value = "{}")]
    pub args: String,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::List(options) => list(options),
        Commands::Call(options) => call(options, &global),
    }
}

/// Run one tool with a fresh random source and today's local date.
///
/// With `--seed` every call starts from the same generator state.
pub fn call_tool(
    name: &str,
    arguments: serde_json::Value,
    global: &crate::Global,
) -> Result<String, ToolError> {
    let mut rng = match global.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let today = chrono::Local::now().date_naive();

    log::debug!("calling tool {name}");
    hilanet_core::call_tool(name, arguments, &mut rng, today)
}

fn list(options: ListOptions) -> Result<()> {
    let tools = hilanet_core::registry::tools();

    if options.json {
        let tools: Vec<serde_json::Value> = tools
            .iter()
            .map(|tool| {
                serde_json::json!({
                    "name": tool.name,
                    "description": tool.description,
                    "inputSchema": tool.input_schema(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    let mut table = new_table();
    table.set_titles(prettytable::row!["Tool", "Description"]);
    for tool in tools {
        table.add_row(prettytable::row![tool.name, tool.description]);
    }
    table.printstd();

    Ok(())
}

/// Fail early on a tool name the registry does not know, listing the valid ones.
fn ensure_known(name: &str) -> Result<()> {
    if hilanet_core::registry::find(name).is_some() {
        return Ok(());
    }

    let available: Vec<&str> = hilanet_core::registry::tools()
        .iter()
        .map(|tool| tool.name)
        .collect();
    Err(eyre!(
        "Unknown tool: {name}. Available tools: {}",
        available.join(", ")
    ))
}

fn call(options: CallOptions, global: &crate::Global) -> Result<()> {
    ensure_known(&options.name)?;

    let arguments: serde_json::Value = serde_json::from_str(&options.args)
        .map_err(|e| eyre!("Arguments must be a JSON object: {e}"))?;

    if global.verbose {
        eprintln!("Calling {} with {}", options.name, arguments);
    }

    match call_tool(&options.name, arguments, global) {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(err @ ToolError::NotFound(_)) => Err(eyre!(err)),
        Err(err) => {
            eprintln!("{}", f!("Rejected: {err}").red());
            Err(eyre!("{} was rejected", options.name))
        }
    }
}
