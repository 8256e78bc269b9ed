//! Core domain logic for Amparo, a mental-health companion app.
//! This crate is the single source of truth for business invariants:
//! record validation, whole-collection persistence and the medication
//! reminder scheduler.

pub mod content;
pub mod db;
pub mod directory;
pub mod logging;
pub mod model;
pub mod notify;
pub mod service;
pub mod store;

pub use logging::init_logging;
pub use model::diary::{DiaryEntry, Emotion};
pub use model::post::{CommunityPost, DEFAULT_AUTHOR};
pub use model::reminder::{MedicationReminder, ReminderTime};
pub use model::ValidationError;
pub use notify::{
    NotificationContent, NotificationPriority, NotificationService, NotifyError, PendingTrigger,
    PermissionStatus, SqliteNotificationSpool,
};
pub use service::community_service::{CommunityService, CommunityServiceError};
pub use service::diary_service::{DiaryService, DiaryServiceError};
pub use service::reminder_service::{ReminderService, ReminderServiceError};
pub use store::{
    KeyValueStore, MemoryKeyValueStore, RecordStore, SqliteKeyValueStore, StoreError,
    DIARY_COLLECTION, POSTS_COLLECTION, REMINDERS_COLLECTION,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
