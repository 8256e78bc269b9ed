//! Medication reminder scheduler.
//!
//! # Responsibility
//! - Own the reminder lifecycle: create with a live daily trigger,
//!   enable/disable with trigger re-sync, delete with best-effort
//!   cancellation.
//! - Keep `notification_id` and the scheduled trigger in lockstep.
//!
//! # Invariants
//! - A record is only persisted after its notification-service call
//!   succeeded; a failed schedule or cancel leaves storage untouched.
//! - Disabling clears the handle once the cancel succeeds; a reminder
//!   never keeps a handle to a dead trigger.
//! - Deletion is never blocked by a cancellation failure.

use crate::model::reminder::MedicationReminder;
use crate::model::ValidationError;
use crate::notify::{
    NotificationContent, NotificationPriority, NotificationService, NotifyError, PermissionStatus,
};
use crate::store::{KeyValueStore, RecordStore, StoreError, REMINDERS_COLLECTION};
use chrono::Local;
use log::{info, warn};
use uuid::Uuid;

/// Service error for reminder use-cases.
#[derive(Debug)]
pub enum ReminderServiceError {
    /// Raw form input rejected; nothing was created.
    Validation(ValidationError),
    /// Notification permission refused; reminder creation is blocked.
    PermissionDenied,
    /// Schedule/cancel failure; the stored list was not mutated.
    Notification(NotifyError),
    /// Persistence failure.
    Store(StoreError),
}

impl std::fmt::Display for ReminderServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::PermissionDenied => write!(f, "notification permission denied"),
            Self::Notification(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ReminderServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::PermissionDenied => None,
            Self::Notification(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ReminderServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<NotifyError> for ReminderServiceError {
    fn from(value: NotifyError) -> Self {
        Self::Notification(value)
    }
}

impl From<StoreError> for ReminderServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Reminder scheduler facade over the record store and the notification
/// service.
pub struct ReminderService<K: KeyValueStore, N: NotificationService> {
    kv: K,
    notifier: N,
    store: RecordStore<MedicationReminder>,
}

impl<K: KeyValueStore, N: NotificationService> ReminderService<K, N> {
    pub fn new(kv: K, notifier: N) -> Self {
        Self {
            kv,
            notifier,
            store: RecordStore::new(REMINDERS_COLLECTION),
        }
    }

    /// Lists reminders in creation order.
    pub fn list_reminders(&self) -> Result<Vec<MedicationReminder>, ReminderServiceError> {
        Ok(self.store.load_or_empty(&self.kv)?)
    }

    /// Creates a reminder with a live daily trigger.
    ///
    /// # Contract
    /// - Permission denied aborts before anything is created.
    /// - The trigger is requested first; the record is appended and
    ///   persisted only once a handle exists.
    pub fn add_reminder(
        &mut self,
        medication: &str,
        dosage: &str,
        time_raw: &str,
    ) -> Result<MedicationReminder, ReminderServiceError> {
        let mut reminder = MedicationReminder::from_input(medication, dosage, time_raw)?;
        let mut reminders = self.store.load_or_empty(&self.kv)?;

        if self.notifier.request_permission()? == PermissionStatus::Denied {
            return Err(ReminderServiceError::PermissionDenied);
        }

        let content = alarm_content(&reminder);
        let handle = self.notifier.schedule_repeating_daily(
            reminder.time.hour(),
            reminder.time.minute(),
            &content,
        )?;
        reminder.notification_id = Some(handle);

        reminders.push(reminder.clone());
        if let Err(err) = self.store.save(&mut self.kv, &reminders) {
            // The record was never persisted; reap the fresh trigger.
            if let Some(handle) = reminder.notification_id.as_deref() {
                if let Err(cancel_err) = self.notifier.cancel(handle) {
                    warn!(
                        "event=trigger_cancel module=reminder status=error handle={handle} error={cancel_err}"
                    );
                }
            }
            return Err(err.into());
        }

        let first_fire = reminder.time.next_occurrence(Local::now().naive_local());
        info!(
            "event=reminder_added module=reminder status=ok id={} time={} first_fire={first_fire}",
            reminder.id, reminder.time
        );
        Ok(reminder)
    }

    /// Flips one reminder between enabled and disabled, re-syncing its
    /// trigger.
    ///
    /// Returns the updated record, or `None` (without writing) when the
    /// id is not present. A notification-service failure propagates
    /// before anything is persisted.
    pub fn toggle_reminder(
        &mut self,
        id: Uuid,
    ) -> Result<Option<MedicationReminder>, ReminderServiceError> {
        let mut reminders = self.store.load_or_empty(&self.kv)?;
        let Some(index) = reminders.iter().position(|reminder| reminder.id == id) else {
            return Ok(None);
        };

        let mut reminder = reminders[index].clone();
        if reminder.enabled {
            if let Some(handle) = reminder.notification_id.as_deref() {
                self.notifier.cancel(handle)?;
            }
            reminder.enabled = false;
            reminder.notification_id = None;
        } else {
            let content = routine_content(&reminder);
            let handle = self.notifier.schedule_repeating_daily(
                reminder.time.hour(),
                reminder.time.minute(),
                &content,
            )?;
            reminder.enabled = true;
            reminder.notification_id = Some(handle);
        }

        reminders[index] = reminder.clone();
        self.store.save(&mut self.kv, &reminders)?;

        info!(
            "event=reminder_toggled module=reminder status=ok id={id} enabled={}",
            reminder.enabled
        );
        Ok(Some(reminder))
    }

    /// Removes one reminder, cancelling its trigger when one exists.
    ///
    /// Returns `false` (without writing) when the id is not present.
    /// Cancellation failure is logged and deletion proceeds.
    pub fn delete_reminder(&mut self, id: Uuid) -> Result<bool, ReminderServiceError> {
        let mut reminders = self.store.load_or_empty(&self.kv)?;
        let Some(index) = reminders.iter().position(|reminder| reminder.id == id) else {
            return Ok(false);
        };

        let reminder = reminders.remove(index);
        if let Some(handle) = reminder.notification_id.as_deref() {
            if let Err(err) = self.notifier.cancel(handle) {
                warn!(
                    "event=trigger_cancel module=reminder status=error handle={handle} error={err}"
                );
            }
        }

        self.store.save(&mut self.kv, &reminders)?;
        info!("event=reminder_deleted module=reminder status=ok id={id}");
        Ok(true)
    }
}

fn alarm_content(reminder: &MedicationReminder) -> NotificationContent {
    NotificationContent {
        title: "⏰ ALARME DE MEDICAMENTO".to_string(),
        body: format!(
            "{} - {}\n\nTOQUE PARA DESATIVAR O ALARME",
            reminder.medication, reminder.dosage
        ),
        sound: true,
        priority: NotificationPriority::Max,
    }
}

fn routine_content(reminder: &MedicationReminder) -> NotificationContent {
    NotificationContent {
        title: "Hora do Medicamento".to_string(),
        body: format!("{} - {}", reminder.medication, reminder.dosage),
        sound: true,
        priority: NotificationPriority::High,
    }
}
