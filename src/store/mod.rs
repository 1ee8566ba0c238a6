//! Saved-app persistence.
//!
//! An [`Artifact`] is a committed app: name, icon, markup, timestamp.
//! The store owns artifacts once appended; the in-memory list is the
//! source of truth for the current run and every mutation is flushed to
//! disk best-effort. A failed flush is reported to the caller but never
//! loses the in-memory copy, so the session the user just finished
//! stays consistent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::errors::StoreError;
use crate::icon::Icon;

/// A saved, launchable app. Immutable after commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: Uuid,
    pub name: String,
    pub icon_symbol: String,
    pub icon_color: String,
    pub markup: String,
    pub created_at: DateTime<Utc>,
}

impl Artifact {
    pub fn new(name: &str, icon: &Icon, markup: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            icon_symbol: icon.symbol.clone(),
            icon_color: icon.color.clone(),
            markup: markup.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Durable, ordered list of saved apps.
///
/// `list()` reflects prior `append`/`remove` calls; for the file-backed
/// implementation that holds across process restarts. Mutations take
/// `&mut self`, so writes are serialized by construction.
pub trait ArtifactStore {
    fn list(&self) -> &[Artifact];

    /// Append an artifact. On error the in-memory list has already been
    /// updated and only the durable copy is stale.
    fn append(&mut self, artifact: Artifact) -> Result<(), StoreError>;

    /// Remove by id. `Ok(false)` when no artifact had the id.
    fn remove(&mut self, id: Uuid) -> Result<bool, StoreError>;
}

/// JSON-file-backed store, one pretty-printed array per file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    artifacts: Vec<Artifact>,
}

impl JsonFileStore {
    /// Open a store, creating an empty one when the file is absent.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let artifacts = if path.exists() {
            let content = fs::read_to_string(path).map_err(|source| StoreError::ReadFailed {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            Vec::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            artifacts,
        })
    }

    /// Default location under the platform data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vibeforge")
            .join("apps.json")
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(&self.artifacts)
            .expect("artifact list serializes to JSON");
        fs::write(&self.path, content).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}

impl ArtifactStore for JsonFileStore {
    fn list(&self) -> &[Artifact] {
        &self.artifacts
    }

    fn append(&mut self, artifact: Artifact) -> Result<(), StoreError> {
        self.artifacts.push(artifact);
        self.flush()
    }

    fn remove(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let before = self.artifacts.len();
        self.artifacts.retain(|artifact| artifact.id != id);
        if self.artifacts.len() == before {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    artifacts: Vec<Artifact>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtifactStore for MemoryStore {
    fn list(&self) -> &[Artifact] {
        &self.artifacts
    }

    fn append(&mut self, artifact: Artifact) -> Result<(), StoreError> {
        self.artifacts.push(artifact);
        Ok(())
    }

    fn remove(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let before = self.artifacts.len();
        self.artifacts.retain(|artifact| artifact.id != id);
        Ok(self.artifacts.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn artifact(name: &str) -> Artifact {
        let icon = Icon {
            symbol: "star.fill".into(),
            color: "#3B82F6".into(),
        };
        Artifact::new(name, &icon, "<html></html>")
    }

    #[test]
    fn open_on_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(&dir.path().join("apps.json")).unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn list_reflects_appends_across_a_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("apps.json");

        let saved_id = {
            let mut store = JsonFileStore::open(&path).unwrap();
            let a = artifact("Todo");
            let id = a.id;
            store.append(a).unwrap();
            store.append(artifact("Timer")).unwrap();
            id
        };

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.list().len(), 2);
        assert_eq!(store.list()[0].id, saved_id);
        assert_eq!(store.list()[0].name, "Todo");
    }

    #[test]
    fn remove_reflects_across_a_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("apps.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        let a = artifact("Todo");
        let id = a.id;
        store.append(a).unwrap();

        assert!(store.remove(id).unwrap());
        assert!(!store.remove(id).unwrap());

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn corrupt_file_is_a_typed_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("apps.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn append_keeps_in_memory_copy_when_flush_fails() {
        let dir = tempdir().unwrap();
        // A store whose path is a directory cannot flush.
        let mut store = JsonFileStore::open(&dir.path().join("apps.json")).unwrap();
        store.path = dir.path().to_path_buf();

        let result = store.append(artifact("Todo"));
        assert!(result.is_err());
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn nested_parent_directories_are_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("apps.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.append(artifact("Todo")).unwrap();
        assert!(path.exists());
    }
}
