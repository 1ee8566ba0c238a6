//! Terminal presentation helpers.
//!
//! Everything user-facing the commands share: the generation-round
//! spinner, styled status lines, and emoji constants. Flow state never
//! lives here; the UI observes the controller and prints.

pub mod icons;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::store::Artifact;

/// Spinner shown while the generation round is in flight.
pub fn round_spinner(prompt: &str) -> ProgressBar {
    let spinner_style = ProgressStyle::default_spinner()
        .template("{prefix:.bold.dim} {spinner} {msg}")
        .expect("progress bar template is a valid static string");

    let bar = ProgressBar::new_spinner();
    bar.set_style(spinner_style);
    bar.set_prefix("Build");
    bar.set_message(format!("Generating 3 variations for \"{prompt}\"..."));
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

pub fn print_success(msg: &str) {
    println!("{}{}", icons::CHECK, style(msg).green());
}

pub fn print_warning(msg: &str) {
    println!("{}{}", icons::WARN, style(msg).yellow());
}

/// One saved-app row for listings.
pub fn artifact_line(artifact: &Artifact) -> String {
    format!(
        "{} {}  {}  {}",
        icons::symbol_glyph(&artifact.icon_symbol),
        style(&artifact.name).bold(),
        style(artifact.id).dim(),
        style(artifact.created_at.format("%Y-%m-%d %H:%M")).dim(),
    )
}
