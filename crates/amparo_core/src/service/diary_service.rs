//! Emotion diary use-case service.
//!
//! # Responsibility
//! - Provide the diary screen's list/add/delete entry points.
//! - Keep newest entries first, the order the screen renders.
//!
//! # Invariants
//! - Validation failures abort before any write.
//! - Deleting an id that is not present is a no-op, not an error.

use crate::model::diary::{DiaryEntry, Emotion};
use crate::model::ValidationError;
use crate::store::{KeyValueStore, RecordStore, StoreError, DIARY_COLLECTION};
use chrono::Utc;
use log::info;
use uuid::Uuid;

/// Service error for diary use-cases.
#[derive(Debug)]
pub enum DiaryServiceError {
    Validation(ValidationError),
    Store(StoreError),
}

impl std::fmt::Display for DiaryServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DiaryServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for DiaryServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for DiaryServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Diary screen facade over the record store.
pub struct DiaryService<K: KeyValueStore> {
    kv: K,
    store: RecordStore<DiaryEntry>,
}

impl<K: KeyValueStore> DiaryService<K> {
    pub fn new(kv: K) -> Self {
        Self {
            kv,
            store: RecordStore::new(DIARY_COLLECTION),
        }
    }

    /// Lists entries newest-first, degrading corrupt stored data to an
    /// empty diary.
    pub fn list_entries(&self) -> Result<Vec<DiaryEntry>, DiaryServiceError> {
        Ok(self.store.load_or_empty(&self.kv)?)
    }

    /// Validates form input, prepends the new entry and persists the
    /// full collection.
    ///
    /// # Contract
    /// - `emotion_label` is the selected chip label; empty means nothing
    ///   selected.
    /// - `intensity_raw` is the literal text field value.
    pub fn add_entry(
        &mut self,
        emotion_label: &str,
        intensity_raw: &str,
        notes: &str,
    ) -> Result<DiaryEntry, DiaryServiceError> {
        let emotion = resolve_emotion(emotion_label)?;
        let entry = DiaryEntry::from_input(Some(emotion), intensity_raw, notes, Utc::now())?;

        let mut entries = self.store.load_or_empty(&self.kv)?;
        entries.insert(0, entry.clone());
        self.store.save(&mut self.kv, &entries)?;

        info!(
            "event=diary_entry_added module=diary status=ok id={} emotion={}",
            entry.id,
            entry.emotion.label()
        );
        Ok(entry)
    }

    /// Removes one entry by id. Returns `false` (without writing) when
    /// the id is not present.
    pub fn delete_entry(&mut self, id: Uuid) -> Result<bool, DiaryServiceError> {
        let mut entries = self.store.load_or_empty(&self.kv)?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Ok(false);
        }

        self.store.save(&mut self.kv, &entries)?;
        info!("event=diary_entry_deleted module=diary status=ok id={id}");
        Ok(true)
    }
}

fn resolve_emotion(label: &str) -> Result<Emotion, ValidationError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingEmotion);
    }
    Emotion::from_label(trimmed).ok_or_else(|| ValidationError::UnknownEmotion(trimmed.to_string()))
}
