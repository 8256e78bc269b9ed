//! Emotion diary record.
//!
//! # Responsibility
//! - Define the persisted diary entry and its fixed emotion set.
//! - Validate raw form input (emotion selection, intensity text).
//!
//! # Invariants
//! - `intensity` is always within `1..=5` once a record exists.
//! - Emotion labels serialize exactly as the app has always stored them.

use crate::model::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed emotion vocabulary offered by the diary screen.
///
/// Serialized with the Portuguese labels the app has persisted since its
/// first release, so existing device data keeps deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emotion {
    #[serde(rename = "Feliz")]
    Happy,
    #[serde(rename = "Triste")]
    Sad,
    #[serde(rename = "Ansioso")]
    Anxious,
    #[serde(rename = "Calmo")]
    Calm,
    #[serde(rename = "Irritado")]
    Irritated,
    #[serde(rename = "Esperançoso")]
    Hopeful,
    #[serde(rename = "Cansado")]
    Tired,
    #[serde(rename = "Energético")]
    Energetic,
}

impl Emotion {
    /// All emotions in the order the diary screen renders its chips.
    pub const ALL: [Emotion; 8] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Anxious,
        Emotion::Calm,
        Emotion::Irritated,
        Emotion::Hopeful,
        Emotion::Tired,
        Emotion::Energetic,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Happy => "Feliz",
            Emotion::Sad => "Triste",
            Emotion::Anxious => "Ansioso",
            Emotion::Calm => "Calmo",
            Emotion::Irritated => "Irritado",
            Emotion::Hopeful => "Esperançoso",
            Emotion::Tired => "Cansado",
            Emotion::Energetic => "Energético",
        }
    }

    /// Resolves a chip label back to its emotion.
    pub fn from_label(label: &str) -> Option<Emotion> {
        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.label() == label)
    }
}

/// One persisted diary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Stable record identity, unique within the collection.
    pub id: Uuid,
    pub emotion: Emotion,
    /// Feeling intensity, `1..=5`.
    pub intensity: u8,
    /// Free-form day notes; may be empty.
    pub notes: String,
    /// Creation instant.
    pub date: DateTime<Utc>,
}

impl DiaryEntry {
    /// Builds an entry from raw form input.
    ///
    /// # Contract
    /// - `emotion` must be selected.
    /// - `intensity_raw` is the literal text field value and must parse
    ///   to a number within `1..=5`.
    /// - `notes` is kept as typed (not trimmed); empty notes are fine.
    pub fn from_input(
        emotion: Option<Emotion>,
        intensity_raw: &str,
        notes: &str,
        date: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let emotion = emotion.ok_or(ValidationError::MissingEmotion)?;
        let intensity = parse_intensity(intensity_raw)?;

        Ok(Self {
            id: Uuid::new_v4(),
            emotion,
            intensity,
            notes: notes.to_string(),
            date,
        })
    }
}

/// Parses the intensity text field, rejecting anything outside `1..=5`.
pub fn parse_intensity(raw: &str) -> Result<u8, ValidationError> {
    let parsed = raw
        .trim()
        .parse::<u8>()
        .map_err(|_| ValidationError::IntensityOutOfRange(raw.to_string()))?;

    if (1..=5).contains(&parsed) {
        Ok(parsed)
    } else {
        Err(ValidationError::IntensityOutOfRange(raw.to_string()))
    }
}
