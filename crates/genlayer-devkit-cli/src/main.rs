//! genlayer CLI: developer tools for GenLayer intelligent contracts.
//!
//! Provides six commands: `init`, `generate`, `test`, `deploy`, `status`, and
//! `templates`. Rendering and validation are delegated to
//! [`genlayer_devkit_core`]; `deploy` and `status` only print advisory text and
//! never contact a network.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "genlayer",
    about = "GenLayer DevKit: scaffold and check GenLayer intelligent contracts",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to genlayer.json (default: ./genlayer.json)
    #[arg(long, global = true, default_value = "genlayer.json")]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new GenLayer project
    Init {
        /// Project name (creates a directory with this name)
        name: String,

        /// Archetype of the sample contract
        #[arg(long, default_value = "basic-storage")]
        template: String,
    },

    /// Generate a contract from a template
    Generate {
        /// Contract archetype (see `genlayer templates`)
        #[arg(long = "type", default_value = "basic-storage")]
        archetype: String,

        /// Contract class name (prompted for when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Template parameter as key=value (repeatable)
        #[arg(long = "param", value_parser = commands::generate::parse_param)]
        params: Vec<(String, String)>,

        /// Output directory (default: ./contracts, or . when it does not exist)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Check contract files for syntax, structure, and style
    Test {
        /// Contract files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print deployment instructions for a contract
    Deploy {
        /// Contract file
        file: PathBuf,

        /// Network from genlayer.json
        #[arg(long, default_value = "testnet")]
        network: String,
    },

    /// Show where to check a deployed contract
    Status {
        /// Contract address (0x...)
        address: String,

        /// Network from genlayer.json
        #[arg(long, default_value = "testnet")]
        network: String,
    },

    /// List available contract templates
    Templates,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { name, template } => {
            commands::init::run(&name, &template).await?;
        }
        Commands::Generate {
            archetype,
            name,
            params,
            out_dir,
            force,
        } => {
            commands::generate::run(&archetype, name, params, out_dir.as_deref(), force).await?;
        }
        Commands::Test { files, json } => {
            commands::test::run(&files, json).await?;
        }
        Commands::Deploy { file, network } => {
            commands::deploy::run(&cli.config, &file, &network).await?;
        }
        Commands::Status { address, network } => {
            commands::status::run(&cli.config, &address, &network).await?;
        }
        Commands::Templates => {
            commands::templates::run();
        }
    }

    Ok(())
}
