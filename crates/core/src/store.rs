//! Persistence port for computed results. The calculators never touch
//! storage themselves; callers append finished reports through this trait.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Calculation,
    Assessment,
}

impl RecordKind {
    fn prefix(&self) -> &'static str {
        match self {
            RecordKind::Calculation => "calculation",
            RecordKind::Assessment => "assessment",
        }
    }
}

/// Envelope around a stored result: generated id, creation timestamp, and
/// the report payload flattened alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRecord {
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub kind: RecordKind,
    #[serde(flatten)]
    pub payload: serde_json::Value,
}

impl SavedRecord {
    pub fn new(kind: RecordKind, payload: &impl Serialize) -> anyhow::Result<Self> {
        Ok(Self {
            id: format!("{}-{}", kind.prefix(), Uuid::new_v4()),
            created_at: Utc::now(),
            kind,
            payload: serde_json::to_value(payload).context("serialize record payload")?,
        })
    }
}

/// Append-only record list. Records are never updated or deleted
/// individually; `clear` drops the whole list.
pub trait RecordStore {
    fn list(&self) -> anyhow::Result<Vec<SavedRecord>>;
    fn append(&self, record: SavedRecord) -> anyhow::Result<()>;
    fn clear(&self) -> anyhow::Result<()>;
}

/// A single JSON array in a file. A missing file reads as an empty list.
/// Append is read-modify-write and is not atomic across concurrent writers;
/// two processes appending at once can lose a record.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn list(&self) -> anyhow::Result<Vec<SavedRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parse record list {}", self.path.display()))
    }

    fn append(&self, record: SavedRecord) -> anyhow::Result<()> {
        let mut records = self.list()?;
        records.push(record);
        let json = serde_json::to_vec_pretty(&records).context("serialize record list")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write {}", self.path.display()))
    }

    fn clear(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("remove {}", self.path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("records.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_lists_empty() {
        let (_dir, store) = store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn append_then_list_round_trips() {
        let (_dir, store) = store();
        let record =
            SavedRecord::new(RecordKind::Calculation, &json!({"total_kg": 42})).unwrap();
        let id = record.id.clone();
        store.append(record).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert!(id.starts_with("calculation-"));
        assert_eq!(listed[0].kind, RecordKind::Calculation);
        assert_eq!(listed[0].payload["total_kg"], 42);
    }

    #[test]
    fn envelope_uses_created_at_key() {
        let record = SavedRecord::new(RecordKind::Assessment, &json!({"overall": 80})).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["overall"], 80);
    }

    #[test]
    fn clear_empties_the_list() {
        let (_dir, store) = store();
        store
            .append(SavedRecord::new(RecordKind::Assessment, &json!({})).unwrap())
            .unwrap();
        store
            .append(SavedRecord::new(RecordKind::Calculation, &json!({})).unwrap())
            .unwrap();
        assert_eq!(store.list().unwrap().len(), 2);

        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
        // idempotent
        store.clear().unwrap();
    }
}
