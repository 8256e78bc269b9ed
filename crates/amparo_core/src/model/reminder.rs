//! Medication reminder record and daily trigger math.
//!
//! # Responsibility
//! - Define the persisted reminder shape, including the notification
//!   handle owned by the notification service.
//! - Parse and validate 24h `HH:MM` times and compute the first trigger
//!   instant for a daily schedule.
//!
//! # Invariants
//! - `notification_id` is `Some` exactly while a live scheduled trigger
//!   exists for this reminder.
//! - A time-of-day at or before "now" schedules for tomorrow, never for
//!   an instant already in the past.

use crate::model::ValidationError;
use chrono::{Duration, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("valid time regex"));

/// Time of day for a daily reminder, minute precision.
///
/// Persisted as the zero-padded `"HH:MM"` string the time picker
/// produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderTime {
    hour: u8,
    minute: u8,
}

impl ReminderTime {
    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// First instant a freshly scheduled daily trigger would fire.
    ///
    /// # Contract
    /// - Time-of-day strictly after `now` fires today.
    /// - Time-of-day at or before `now` fires tomorrow.
    pub fn next_occurrence(self, now: NaiveDateTime) -> NaiveDateTime {
        let time_of_day = NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .expect("hour and minute are range-checked at construction");
        let candidate = now.date().and_time(time_of_day);

        if candidate <= now {
            candidate + Duration::days(1)
        } else {
            candidate
        }
    }
}

impl FromStr for ReminderTime {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidTime(value.to_string());
        let caps = TIME_RE.captures(value.trim()).ok_or_else(invalid)?;
        let hour = caps[1].parse::<u8>().map_err(|_| invalid())?;
        let minute = caps[2].parse::<u8>().map_err(|_| invalid())?;
        Ok(Self { hour, minute })
    }
}

impl Display for ReminderTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ReminderTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReminderTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// One persisted medication reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationReminder {
    /// Stable record identity, unique within the collection.
    pub id: Uuid,
    /// Medication name, non-empty.
    pub medication: String,
    /// Dosage text, non-empty (e.g. "20mg, 1 comprimido").
    pub dosage: String,
    /// Daily trigger time of day.
    pub time: ReminderTime,
    pub enabled: bool,
    /// Opaque handle owned by the notification service; `Some` iff a
    /// live trigger exists.
    #[serde(rename = "notificationId")]
    pub notification_id: Option<String>,
}

impl MedicationReminder {
    /// Builds a reminder from raw form input.
    ///
    /// The record starts enabled with no notification handle; the
    /// scheduler attaches the handle once the trigger request succeeds.
    pub fn from_input(
        medication: &str,
        dosage: &str,
        time_raw: &str,
    ) -> Result<Self, ValidationError> {
        let medication = medication.trim();
        if medication.is_empty() {
            return Err(ValidationError::EmptyMedication);
        }

        let dosage = dosage.trim();
        if dosage.is_empty() {
            return Err(ValidationError::EmptyDosage);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            medication: medication.to_string(),
            dosage: dosage.to_string(),
            time: time_raw.parse()?,
            enabled: true,
            notification_id: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{MedicationReminder, ReminderTime};
    use crate::model::ValidationError;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(hh, mm, 0))
            .expect("valid test datetime")
    }

    #[test]
    fn time_parsing_requires_padded_24h_format() {
        assert!("08:00".parse::<ReminderTime>().is_ok());
        assert!("23:59".parse::<ReminderTime>().is_ok());

        for raw in ["24:00", "8:00", "12:60", "aa:bb", "", "12h30"] {
            assert!(
                matches!(
                    raw.parse::<ReminderTime>(),
                    Err(ValidationError::InvalidTime(_))
                ),
                "`{raw}` should be rejected"
            );
        }
    }

    #[test]
    fn time_earlier_than_now_schedules_for_tomorrow() {
        let time: ReminderTime = "08:00".parse().expect("valid time");
        let first = time.next_occurrence(at(2024, 5, 10, 9, 0));
        assert_eq!(first, at(2024, 5, 11, 8, 0));
    }

    #[test]
    fn time_equal_to_now_schedules_for_tomorrow() {
        let time: ReminderTime = "09:00".parse().expect("valid time");
        let first = time.next_occurrence(at(2024, 5, 10, 9, 0));
        assert_eq!(first, at(2024, 5, 11, 9, 0));
    }

    #[test]
    fn time_later_than_now_schedules_for_today() {
        let time: ReminderTime = "21:30".parse().expect("valid time");
        let first = time.next_occurrence(at(2024, 5, 10, 9, 0));
        assert_eq!(first, at(2024, 5, 10, 21, 30));
    }

    #[test]
    fn reminder_input_requires_medication_and_dosage() {
        assert!(matches!(
            MedicationReminder::from_input("  ", "50mg", "08:00"),
            Err(ValidationError::EmptyMedication)
        ));
        assert!(matches!(
            MedicationReminder::from_input("Sertralina", "", "08:00"),
            Err(ValidationError::EmptyDosage)
        ));

        let reminder = MedicationReminder::from_input("Sertralina", "50mg", "08:00")
            .expect("valid reminder");
        assert!(reminder.enabled);
        assert_eq!(reminder.notification_id, None);
    }

    #[test]
    fn reminder_serializes_time_and_handle_field_names() {
        let reminder =
            MedicationReminder::from_input("Fluoxetina", "20mg", "07:15").expect("valid reminder");
        let json = serde_json::to_string(&reminder).expect("serialize reminder");
        assert!(json.contains("\"time\":\"07:15\""));
        assert!(json.contains("\"notificationId\":null"));
    }
}
