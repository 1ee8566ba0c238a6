//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module   | Commands handled            |
//! |----------|-----------------------------|
//! | `create` | `Create`                    |
//! | `apps`   | `List`, `Remove`, `Export`  |
//! | `config` | `Config`                    |

pub mod apps;
pub mod config;
pub mod create;

pub use apps::{cmd_export, cmd_list, cmd_remove};
pub use config::cmd_config;
pub use create::cmd_create;

use anyhow::Result;
use vibeforge::config::Config;

use crate::Cli;

/// Resolve configuration for a command: file, environment, then the
/// global CLI flags.
pub(crate) fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = &cli.store {
        config.store.path = Some(path.clone());
    }
    Ok(config)
}
