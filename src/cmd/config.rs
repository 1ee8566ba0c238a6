//! Configuration commands — `vibeforge config show|init`.

use anyhow::Result;
use console::style;

use crate::{Cli, ConfigCommands};

const CONFIG_TEMPLATE: &str = r#"# Vibeforge configuration.
# Values here are overridden by VIBEFORGE_* environment variables and CLI flags.

[provider]
# endpoint = "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
# api_key = "..."            # or set VIBEFORGE_API_KEY / GEMINI_API_KEY
# request_timeout_secs = 60  # omit for no timeout (the default)

[store]
# path = "/path/to/apps.json"
"#;

pub fn cmd_config(cli: &Cli, command: Option<ConfigCommands>) -> Result<()> {
    match command.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => show(cli),
        ConfigCommands::Init => init(),
    }
}

fn show(cli: &Cli) -> Result<()> {
    let config = super::load_config(cli)?;

    println!("{}", style("Provider").bold());
    println!("  endpoint: {}", config.provider.endpoint);
    println!(
        "  api_key: {}",
        if config.provider.api_key.is_some() {
            "configured"
        } else {
            "not set"
        }
    );
    match config.provider.request_timeout_secs {
        Some(secs) => println!("  request_timeout: {secs}s"),
        None => println!("  request_timeout: none"),
    }

    println!("{}", style("Store").bold());
    println!("  path: {}", config.store_path().display());
    Ok(())
}

fn init() -> Result<()> {
    let path = std::path::Path::new("vibeforge.toml");
    if path.exists() {
        anyhow::bail!("vibeforge.toml already exists in this directory");
    }
    std::fs::write(path, CONFIG_TEMPLATE)?;
    println!("Wrote {}", path.display());
    Ok(())
}
