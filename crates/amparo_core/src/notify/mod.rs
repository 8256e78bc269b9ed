//! Notification service contract and the on-device trigger spool.
//!
//! # Responsibility
//! - Define the scheduling seam the reminder scheduler talks to:
//!   permission check, daily repeating trigger, cancellation.
//! - Provide the production implementation: a SQLite spool the mobile
//!   shell mirrors into the platform notification scheduler.
//!
//! # Invariants
//! - Handles are opaque strings; callers never parse them.
//! - Cancelling an unknown handle is a no-op, so delete flows can retry
//!   safely.
//! - The spool never prompts for permission itself; it reports the last
//!   answer the shell recorded.

use crate::db::DbError;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

pub type NotifyResult<T> = Result<T, NotifyError>;

/// Failure talking to the notification backend.
#[derive(Debug)]
pub enum NotifyError {
    /// Underlying database failure (spool implementation).
    Db(DbError),
    /// Trigger time-of-day out of the 24h range.
    InvalidTrigger { hour: u8, minute: u8 },
    /// Backend-specific scheduling or cancellation failure.
    Backend(String),
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidTrigger { hour, minute } => {
                write!(f, "trigger time {hour:02}:{minute:02} out of range")
            }
            Self::Backend(message) => write!(f, "notification backend failure: {message}"),
        }
    }
}

impl std::error::Error for NotifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidTrigger { .. } | Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for NotifyError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for NotifyError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Outcome of a permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Delivery urgency, passed through to the platform scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPriority {
    Default,
    High,
    Max,
}

impl NotificationPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::High => "high",
            Self::Max => "max",
        }
    }
}

/// Delivery configuration for one trigger. This is presentation data,
/// not business logic; the scheduler only forwards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub sound: bool,
    pub priority: NotificationPriority,
}

/// Scheduling seam between the reminder scheduler and the platform.
pub trait NotificationService {
    /// Reports whether notifications may be scheduled.
    fn request_permission(&mut self) -> NotifyResult<PermissionStatus>;

    /// Requests a repeating daily trigger and returns its opaque handle.
    fn schedule_repeating_daily(
        &mut self,
        hour: u8,
        minute: u8,
        content: &NotificationContent,
    ) -> NotifyResult<String>;

    /// Cancels the trigger behind `handle`. Unknown handles are a no-op.
    fn cancel(&mut self, handle: &str) -> NotifyResult<()>;
}

/// Read model of one spooled trigger, consumed by the mobile shell when
/// it mirrors the spool into the platform scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTrigger {
    pub handle: String,
    pub hour: u8,
    pub minute: u8,
    pub title: String,
    pub body: String,
    pub sound: bool,
    pub priority: String,
}

/// SQLite-backed notification spool.
///
/// The shell records the platform permission answer via
/// [`SqliteNotificationSpool::record_permission`] (typically right after
/// its startup prompt) and drains [`SqliteNotificationSpool::pending`]
/// to keep platform triggers in sync. Until an answer is recorded,
/// permission reads as denied and reminder creation stays blocked.
pub struct SqliteNotificationSpool<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNotificationSpool<'conn> {
    /// Constructs a spool from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> NotifyResult<Self> {
        let table_present = conn
            .query_row(
                "SELECT 1 FROM sqlite_master
                 WHERE type = 'table' AND name = 'notification_triggers';",
                [],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if !table_present {
            return Err(NotifyError::Backend(
                "notification_triggers table is missing; connection not migrated".to_string(),
            ));
        }
        Ok(Self { conn })
    }

    /// Stores the platform permission answer reported by the shell.
    pub fn record_permission(&mut self, granted: bool) -> NotifyResult<()> {
        self.conn.execute(
            "INSERT INTO notification_permission (id, granted) VALUES (1, ?1)
             ON CONFLICT (id) DO UPDATE SET granted = excluded.granted;",
            params![i64::from(granted)],
        )?;
        info!("event=permission_recorded module=notify status=ok granted={granted}");
        Ok(())
    }

    /// Lists all spooled triggers, oldest first.
    pub fn pending(&self) -> NotifyResult<Vec<PendingTrigger>> {
        let mut stmt = self.conn.prepare(
            "SELECT handle, hour, minute, title, body, sound, priority
             FROM notification_triggers
             ORDER BY created_at ASC, handle ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut triggers = Vec::new();
        while let Some(row) = rows.next()? {
            triggers.push(PendingTrigger {
                handle: row.get(0)?,
                hour: row.get(1)?,
                minute: row.get(2)?,
                title: row.get(3)?,
                body: row.get(4)?,
                sound: row.get::<_, i64>(5)? != 0,
                priority: row.get(6)?,
            });
        }
        Ok(triggers)
    }
}

impl NotificationService for SqliteNotificationSpool<'_> {
    fn request_permission(&mut self) -> NotifyResult<PermissionStatus> {
        let granted = self
            .conn
            .query_row(
                "SELECT granted FROM notification_permission WHERE id = 1;",
                [],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        match granted {
            Some(value) if value != 0 => Ok(PermissionStatus::Granted),
            Some(_) => Ok(PermissionStatus::Denied),
            None => {
                info!("event=permission_check module=notify status=unanswered");
                Ok(PermissionStatus::Denied)
            }
        }
    }

    fn schedule_repeating_daily(
        &mut self,
        hour: u8,
        minute: u8,
        content: &NotificationContent,
    ) -> NotifyResult<String> {
        if hour > 23 || minute > 59 {
            return Err(NotifyError::InvalidTrigger { hour, minute });
        }

        let handle = Uuid::new_v4().to_string();
        self.conn.execute(
            "INSERT INTO notification_triggers
                (handle, hour, minute, title, body, sound, priority)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                handle,
                i64::from(hour),
                i64::from(minute),
                content.title,
                content.body,
                i64::from(content.sound),
                content.priority.as_str(),
            ],
        )?;
        info!(
            "event=trigger_scheduled module=notify status=ok handle={handle} at={hour:02}:{minute:02}"
        );
        Ok(handle)
    }

    fn cancel(&mut self, handle: &str) -> NotifyResult<()> {
        let removed = self.conn.execute(
            "DELETE FROM notification_triggers WHERE handle = ?1;",
            params![handle],
        )?;
        info!("event=trigger_cancelled module=notify status=ok handle={handle} removed={removed}");
        Ok(())
    }
}
