//! File-backed translation history and preference store
//!
//! Stand-in for the host's persistence layer: an append-only list of
//! completed translations plus a single upserted target-language
//! preference, kept in one JSON document. The translation client
//! itself never touches this; the host writes here after a
//! successful call.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::models::{TranslationPreference, TranslationRecord};

/// On-disk shape of the store file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    /// Last-edited target-language preference, if any
    preference: Option<TranslationPreference>,
    /// Completed translations, oldest first
    history: Vec<TranslationRecord>,
}

/// JSON-file-backed store for translations and the target preference
#[derive(Debug)]
pub struct TranslationStore {
    path: PathBuf,
    data: StoreData,
}

impl TranslationStore {
    /// Open a store file, starting empty if it does not exist yet
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            StoreData::default()
        };
        Ok(Self { path, data })
    }

    /// Append a completed translation to the history
    pub fn append(&mut self, record: TranslationRecord) {
        debug!("recording translation of {} chars", record.source_text.len());
        self.data.history.push(record);
    }

    /// Upsert the target-language preference, refreshing its timestamp
    pub fn set_preference(&mut self, translate_as: impl Into<String>) {
        self.data.preference = Some(TranslationPreference::new(translate_as));
    }

    /// Last persisted target-language preference
    pub fn preference(&self) -> Option<&TranslationPreference> {
        self.data.preference.as_ref()
    }

    /// Most recent `limit` translations, newest first
    pub fn recent(&self, limit: usize) -> Vec<&TranslationRecord> {
        self.data.history.iter().rev().take(limit).collect()
    }

    /// Number of stored translations
    pub fn len(&self) -> usize {
        self.data.history.len()
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.data.history.is_empty()
    }

    /// Write the store back to its file
    pub fn save(&self) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
