//! Saved-app management — `vibeforge list`, `remove`, `export`.

use anyhow::{Context, Result};
use std::path::Path;
use uuid::Uuid;

use vibeforge::store::{Artifact, ArtifactStore, JsonFileStore};
use vibeforge::ui;

use crate::Cli;

pub fn cmd_list(cli: &Cli) -> Result<()> {
    let config = super::load_config(cli)?;
    let store = JsonFileStore::open(&config.store_path())?;

    if store.list().is_empty() {
        println!("No saved apps yet. Run `vibeforge create` to make one.");
        return Ok(());
    }

    for artifact in store.list() {
        println!("{}", ui::artifact_line(artifact));
    }
    Ok(())
}

pub fn cmd_remove(cli: &Cli, id: &str) -> Result<()> {
    let id: Uuid = id.parse().context("Invalid app id")?;
    let config = super::load_config(cli)?;
    let mut store = JsonFileStore::open(&config.store_path())?;

    if !store.remove(id)? {
        anyhow::bail!("No saved app with id {id}");
    }
    ui::print_success("Removed.");
    Ok(())
}

pub fn cmd_export(cli: &Cli, id: &str, output: Option<&Path>) -> Result<()> {
    let id: Uuid = id.parse().context("Invalid app id")?;
    let config = super::load_config(cli)?;
    let store = JsonFileStore::open(&config.store_path())?;

    let artifact = store
        .list()
        .iter()
        .find(|artifact| artifact.id == id)
        .ok_or_else(|| anyhow::anyhow!("No saved app with id {id}"))?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => default_export_path(artifact),
    };
    std::fs::write(&path, &artifact.markup)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    ui::print_success(&format!("Wrote {}", path.display()));
    Ok(())
}

fn default_export_path(artifact: &Artifact) -> std::path::PathBuf {
    format!("{}.html", slug(&artifact.name)).into()
}

/// Filesystem-safe slug of an app name.
fn slug(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "app".to_string()
    } else {
        trimmed.to_string()
    }
}
