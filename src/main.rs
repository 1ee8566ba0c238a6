use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;

#[derive(Parser)]
#[command(name = "vibeforge")]
#[command(version, about = "Turn a natural-language app idea into themed, saveable mini web apps")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file. Defaults to ./vibeforge.toml, then the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the saved-app list. Overrides the config file.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate app variations from an idea, then review, theme, name, and save one
    Create {
        /// The app idea. Prompts interactively when omitted.
        idea: Option<String>,
    },
    /// List saved apps
    List,
    /// Remove a saved app
    Remove {
        /// Id of the app to remove (see `vibeforge list`)
        id: String,
    },
    /// Write a saved app's markup to a file so it can be opened in a browser
    Export {
        /// Id of the app to export
        id: String,
        /// Output file (defaults to <app-name>.html)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// View or initialize configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,
    /// Initialize a default vibeforge.toml file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Create { idea } => cmd::cmd_create(&cli, idea.as_deref()).await?,
        Commands::List => cmd::cmd_list(&cli)?,
        Commands::Remove { id } => cmd::cmd_remove(&cli, id)?,
        Commands::Export { id, output } => cmd::cmd_export(&cli, id, output.as_deref())?,
        Commands::Config { command } => cmd::cmd_config(&cli, command.clone())?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "vibeforge=debug"
    } else {
        "vibeforge=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
