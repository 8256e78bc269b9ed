//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, screen-level functions to Dart via FRB.
//! - Translate core errors into the Portuguese notices the app shows.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failure paths come back as `ok=false` envelopes, never as thrown
//!   errors.

use amparo_core::db::open_db;
use amparo_core::{
    content, core_version as core_version_inner, directory, init_logging as init_logging_inner,
    CommunityService, CommunityServiceError, DiaryService, DiaryServiceError, Emotion,
    ReminderService, ReminderServiceError, SqliteKeyValueStore, SqliteNotificationSpool,
    ValidationError,
};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const APP_DB_FILE_NAME: &str = "amparo.sqlite3";
static APP_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

const DB_UNAVAILABLE: &str = "Não foi possível acessar os dados do aplicativo.";

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; conflicting
///   reconfiguration returns an error message.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope shared by all mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Optional affected record id.
    pub id: Option<String>,
    /// User-facing notice (Portuguese); may be empty for quiet actions.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Diary entry read model for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryEntryItem {
    pub id: String,
    /// Emotion chip label (e.g. "Feliz").
    pub emotion: String,
    pub intensity: u8,
    pub notes: String,
    /// RFC 3339 creation instant.
    pub date: String,
}

/// Diary list envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryListResponse {
    pub items: Vec<DiaryEntryItem>,
    pub message: String,
}

/// Community post read model for feed rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostItem {
    pub id: String,
    pub content: String,
    pub author: String,
    pub likes: u32,
    /// RFC 3339 creation instant.
    pub timestamp: String,
}

/// Feed list envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListResponse {
    pub items: Vec<PostItem>,
    pub message: String,
}

/// Reminder read model for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderItem {
    pub id: String,
    pub medication: String,
    pub dosage: String,
    /// "HH:MM" time of day.
    pub time: String,
    pub enabled: bool,
    pub notification_id: Option<String>,
}

/// Reminder list envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderListResponse {
    pub items: Vec<ReminderItem>,
    pub message: String,
}

/// One spooled trigger the shell mirrors into the platform scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerItem {
    pub handle: String,
    pub hour: u8,
    pub minute: u8,
    pub title: String,
    pub body: String,
    pub sound: bool,
    pub priority: String,
}

/// Trigger list envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerListResponse {
    pub items: Vec<TriggerItem>,
    pub message: String,
}

/// Guided meditation catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeditationItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub icon: String,
}

/// Professional directory item.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfessionalItem {
    pub id: String,
    pub name: String,
    /// Gendered display label as rendered on the card.
    pub specialty: String,
    pub rating: f32,
    pub experience: String,
    pub description: String,
    pub available: bool,
}

/// Local support center card plus ready-to-open intent URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportCenterInfo {
    pub name: String,
    pub kind: String,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub dial_url: String,
    pub maps_url: String,
}

// ---------------------------------------------------------------------
// Diary screen
// ---------------------------------------------------------------------

/// Emotion chip labels in screen order.
#[flutter_rust_bridge::frb(sync)]
pub fn diary_emotions() -> Vec<String> {
    Emotion::ALL
        .into_iter()
        .map(|emotion| emotion.label().to_string())
        .collect()
}

/// Lists diary entries, newest first.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; failures yield an empty list plus a notice.
#[flutter_rust_bridge::frb(sync)]
pub fn diary_list_entries() -> DiaryListResponse {
    let conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => {
            return DiaryListResponse {
                items: Vec::new(),
                message,
            }
        }
    };
    let service = match diary_service(&conn) {
        Ok(service) => service,
        Err(message) => {
            return DiaryListResponse {
                items: Vec::new(),
                message,
            }
        }
    };

    match service.list_entries() {
        Ok(entries) => DiaryListResponse {
            items: entries
                .into_iter()
                .map(|entry| DiaryEntryItem {
                    id: entry.id.to_string(),
                    emotion: entry.emotion.label().to_string(),
                    intensity: entry.intensity,
                    notes: entry.notes,
                    date: entry.date.to_rfc3339(),
                })
                .collect(),
            message: String::new(),
        },
        Err(_) => DiaryListResponse {
            items: Vec::new(),
            message: "Erro ao carregar os registros".to_string(),
        },
    }
}

/// Saves one diary entry from raw form input.
#[flutter_rust_bridge::frb(sync)]
pub fn diary_add_entry(emotion: String, intensity: String, notes: String) -> ActionResponse {
    let conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => return ActionResponse::failure(message),
    };
    let mut service = match diary_service(&conn) {
        Ok(service) => service,
        Err(message) => return ActionResponse::failure(message),
    };

    match service.add_entry(&emotion, &intensity, &notes) {
        Ok(entry) => ActionResponse::success(
            "Registro salvo com sucesso!",
            Some(entry.id.to_string()),
        ),
        Err(DiaryServiceError::Validation(err)) => ActionResponse::failure(validation_notice(&err)),
        Err(DiaryServiceError::Store(_)) => {
            ActionResponse::failure("Erro ao salvar o registro. Tente novamente.")
        }
    }
}

/// Deletes one diary entry. Missing ids are a quiet no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn diary_delete_entry(id: String) -> ActionResponse {
    let parsed = match parse_id(&id) {
        Ok(parsed) => parsed,
        Err(message) => return ActionResponse::failure(message),
    };
    let conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => return ActionResponse::failure(message),
    };
    let mut service = match diary_service(&conn) {
        Ok(service) => service,
        Err(message) => return ActionResponse::failure(message),
    };

    match service.delete_entry(parsed) {
        Ok(_) => ActionResponse::success("Registro excluído com sucesso", Some(id)),
        Err(_) => ActionResponse::failure("Erro ao apagar o registro"),
    }
}

// ---------------------------------------------------------------------
// Community screen
// ---------------------------------------------------------------------

/// Lists feed posts, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn community_list_posts() -> PostListResponse {
    let conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => {
            return PostListResponse {
                items: Vec::new(),
                message,
            }
        }
    };
    let service = match community_service(&conn) {
        Ok(service) => service,
        Err(message) => {
            return PostListResponse {
                items: Vec::new(),
                message,
            }
        }
    };

    match service.list_posts() {
        Ok(posts) => PostListResponse {
            items: posts
                .into_iter()
                .map(|post| PostItem {
                    id: post.id.to_string(),
                    content: post.content,
                    author: post.author,
                    likes: post.likes,
                    timestamp: post.timestamp.to_rfc3339(),
                })
                .collect(),
            message: String::new(),
        },
        Err(_) => PostListResponse {
            items: Vec::new(),
            message: "Não foi possível carregar as publicações.".to_string(),
        },
    }
}

/// Publishes one post to the local feed.
#[flutter_rust_bridge::frb(sync)]
pub fn community_add_post(content: String) -> ActionResponse {
    let conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => return ActionResponse::failure(message),
    };
    let mut service = match community_service(&conn) {
        Ok(service) => service,
        Err(message) => return ActionResponse::failure(message),
    };

    match service.add_post(&content) {
        Ok(post) => ActionResponse::success(
            "Sua publicação foi compartilhada!",
            Some(post.id.to_string()),
        ),
        Err(CommunityServiceError::Validation(err)) => {
            ActionResponse::failure(validation_notice(&err))
        }
        Err(CommunityServiceError::Store(_)) => {
            ActionResponse::failure("Não foi possível salvar sua publicação.")
        }
    }
}

/// Applies one like action. Quiet on success, noticed on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn community_like_post(id: String) -> ActionResponse {
    let parsed = match parse_id(&id) {
        Ok(parsed) => parsed,
        Err(message) => return ActionResponse::failure(message),
    };
    let conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => return ActionResponse::failure(message),
    };
    let mut service = match community_service(&conn) {
        Ok(service) => service,
        Err(message) => return ActionResponse::failure(message),
    };

    match service.like_post(parsed) {
        Ok(_) => ActionResponse::success("", Some(id)),
        Err(_) => ActionResponse::failure("Não foi possível curtir a publicação."),
    }
}

/// Deletes one post. Missing ids are a quiet no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn community_delete_post(id: String) -> ActionResponse {
    let parsed = match parse_id(&id) {
        Ok(parsed) => parsed,
        Err(message) => return ActionResponse::failure(message),
    };
    let conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => return ActionResponse::failure(message),
    };
    let mut service = match community_service(&conn) {
        Ok(service) => service,
        Err(message) => return ActionResponse::failure(message),
    };

    match service.delete_post(parsed) {
        Ok(_) => ActionResponse::success("Publicação removida.", Some(id)),
        Err(_) => ActionResponse::failure("Não foi possível remover a publicação."),
    }
}

// ---------------------------------------------------------------------
// Reminders screen
// ---------------------------------------------------------------------

/// Lists medication reminders in creation order.
#[flutter_rust_bridge::frb(sync)]
pub fn reminders_list() -> ReminderListResponse {
    let conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => {
            return ReminderListResponse {
                items: Vec::new(),
                message,
            }
        }
    };
    let service = match reminder_service(&conn) {
        Ok(service) => service,
        Err(message) => {
            return ReminderListResponse {
                items: Vec::new(),
                message,
            }
        }
    };

    match service.list_reminders() {
        Ok(reminders) => ReminderListResponse {
            items: reminders
                .into_iter()
                .map(|reminder| ReminderItem {
                    id: reminder.id.to_string(),
                    medication: reminder.medication,
                    dosage: reminder.dosage,
                    time: reminder.time.to_string(),
                    enabled: reminder.enabled,
                    notification_id: reminder.notification_id,
                })
                .collect(),
            message: String::new(),
        },
        Err(_) => ReminderListResponse {
            items: Vec::new(),
            message: "Não foi possível carregar seus lembretes.".to_string(),
        },
    }
}

/// Creates a medication reminder with a live daily trigger.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Permission must have been recorded as granted
///   (see [`notifications_record_permission`]); otherwise creation is
///   blocked with an actionable notice.
#[flutter_rust_bridge::frb(sync)]
pub fn reminders_add(medication: String, dosage: String, time: String) -> ActionResponse {
    let conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => return ActionResponse::failure(message),
    };
    let mut service = match reminder_service(&conn) {
        Ok(service) => service,
        Err(message) => return ActionResponse::failure(message),
    };

    match service.add_reminder(&medication, &dosage, &time) {
        Ok(reminder) => ActionResponse::success(
            "Lembrete de medicação adicionado com sucesso!",
            Some(reminder.id.to_string()),
        ),
        Err(ReminderServiceError::Validation(err)) => {
            ActionResponse::failure(validation_notice(&err))
        }
        Err(ReminderServiceError::PermissionDenied) => ActionResponse::failure(
            "Por favor, permita as notificações para receber lembretes de medicação.",
        ),
        Err(ReminderServiceError::Notification(_)) => ActionResponse::failure(
            "Não foi possível configurar as notificações. Por favor, tente novamente.",
        ),
        Err(ReminderServiceError::Store(_)) => ActionResponse::failure(
            "Não foi possível adicionar o lembrete. Tente novamente.",
        ),
    }
}

/// Flips one reminder between enabled and disabled.
#[flutter_rust_bridge::frb(sync)]
pub fn reminders_toggle(id: String) -> ActionResponse {
    let parsed = match parse_id(&id) {
        Ok(parsed) => parsed,
        Err(message) => return ActionResponse::failure(message),
    };
    let conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => return ActionResponse::failure(message),
    };
    let mut service = match reminder_service(&conn) {
        Ok(service) => service,
        Err(message) => return ActionResponse::failure(message),
    };

    match service.toggle_reminder(parsed) {
        Ok(_) => ActionResponse::success("", Some(id)),
        Err(_) => {
            ActionResponse::failure("Não foi possível atualizar o lembrete. Tente novamente.")
        }
    }
}

/// Deletes one reminder, cancelling its trigger when one exists.
#[flutter_rust_bridge::frb(sync)]
pub fn reminders_delete(id: String) -> ActionResponse {
    let parsed = match parse_id(&id) {
        Ok(parsed) => parsed,
        Err(message) => return ActionResponse::failure(message),
    };
    let conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => return ActionResponse::failure(message),
    };
    let mut service = match reminder_service(&conn) {
        Ok(service) => service,
        Err(message) => return ActionResponse::failure(message),
    };

    match service.delete_reminder(parsed) {
        Ok(_) => ActionResponse::success("Lembrete removido com sucesso!", Some(id)),
        Err(_) => ActionResponse::failure("Não foi possível remover o lembrete. Tente novamente."),
    }
}

/// Records the platform permission answer reported by the shell.
///
/// The shell calls this right after its startup permission prompt and
/// whenever the answer changes in system settings.
#[flutter_rust_bridge::frb(sync)]
pub fn notifications_record_permission(granted: bool) -> ActionResponse {
    let conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => return ActionResponse::failure(message),
    };
    let mut spool = match SqliteNotificationSpool::try_new(&conn) {
        Ok(spool) => spool,
        Err(_) => return ActionResponse::failure(DB_UNAVAILABLE),
    };

    match spool.record_permission(granted) {
        Ok(()) => ActionResponse::success("", None),
        Err(_) => ActionResponse::failure(
            "Não foi possível configurar as notificações. Por favor, tente novamente.",
        ),
    }
}

/// Lists spooled triggers for the shell to mirror into the platform
/// scheduler.
#[flutter_rust_bridge::frb(sync)]
pub fn notifications_pending() -> TriggerListResponse {
    let conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => {
            return TriggerListResponse {
                items: Vec::new(),
                message,
            }
        }
    };
    let spool = match SqliteNotificationSpool::try_new(&conn) {
        Ok(spool) => spool,
        Err(_) => {
            return TriggerListResponse {
                items: Vec::new(),
                message: DB_UNAVAILABLE.to_string(),
            }
        }
    };

    match spool.pending() {
        Ok(triggers) => TriggerListResponse {
            items: triggers
                .into_iter()
                .map(|trigger| TriggerItem {
                    handle: trigger.handle,
                    hour: trigger.hour,
                    minute: trigger.minute,
                    title: trigger.title,
                    body: trigger.body,
                    sound: trigger.sound,
                    priority: trigger.priority,
                })
                .collect(),
            message: String::new(),
        },
        Err(_) => TriggerListResponse {
            items: Vec::new(),
            message: DB_UNAVAILABLE.to_string(),
        },
    }
}

// ---------------------------------------------------------------------
// Meditation, professionals, resources
// ---------------------------------------------------------------------

/// Guided meditation catalog in screen order.
#[flutter_rust_bridge::frb(sync)]
pub fn meditation_catalog() -> Vec<MeditationItem> {
    content::guided_meditations()
        .iter()
        .map(|meditation| MeditationItem {
            id: meditation.id.to_string(),
            title: meditation.title.to_string(),
            description: meditation.description.to_string(),
            video_url: meditation.video_url.to_string(),
            icon: meditation.icon.to_string(),
        })
        .collect()
}

/// Filter chip labels for the directory screen, "Todos" first.
#[flutter_rust_bridge::frb(sync)]
pub fn professionals_specialties() -> Vec<String> {
    vec![
        "Todos".to_string(),
        "Psicólogo".to_string(),
        "Psiquiatra".to_string(),
        "Terapeuta".to_string(),
    ]
}

/// Searches professionals by free-text query and specialty chip label
/// ("Todos" or empty means no specialty filter).
#[flutter_rust_bridge::frb(sync)]
pub fn professionals_search(query: String, specialty: String) -> Vec<ProfessionalItem> {
    let filter = directory::Specialty::from_label(&specialty);
    directory::search(&query, filter)
        .into_iter()
        .map(|professional| ProfessionalItem {
            id: professional.id.to_string(),
            name: professional.name.to_string(),
            specialty: professional.specialty_label.to_string(),
            rating: professional.rating,
            experience: professional.experience.to_string(),
            description: professional.description.to_string(),
            available: professional.available,
        })
        .collect()
}

/// Requests an appointment with one professional.
#[flutter_rust_bridge::frb(sync)]
pub fn professionals_request_appointment(id: String) -> ActionResponse {
    match directory::request_appointment(&id) {
        Ok(professional) => ActionResponse::success(
            format!(
                "Sua consulta com {} foi agendada com sucesso! Entraremos em contato para \
confirmar o horário.",
                professional.name
            ),
            Some(id),
        ),
        Err(directory::DirectoryError::Unavailable(_)) => ActionResponse::failure(
            "Este profissional não está disponível no momento. Por favor, escolha outro \
profissional.",
        ),
        Err(directory::DirectoryError::NotFound(_)) => {
            ActionResponse::failure("Profissional não encontrado.")
        }
    }
}

/// Local support center card plus ready-to-open intent URLs.
#[flutter_rust_bridge::frb(sync)]
pub fn support_center() -> SupportCenterInfo {
    let center = content::SUPPORT_CENTER;
    SupportCenterInfo {
        name: center.name.to_string(),
        kind: center.kind.to_string(),
        address: center.address.to_string(),
        phone: center.phone.to_string(),
        opening_hours: center.opening_hours.to_string(),
        description: center.description.to_string(),
        latitude: center.latitude,
        longitude: center.longitude,
        dial_url: content::dial_url(center.phone),
        maps_url: content::maps_search_url(center.latitude, center.longitude),
    }
}

/// WhatsApp deep link for appointment scheduling.
#[flutter_rust_bridge::frb(sync)]
pub fn scheduling_whatsapp_url() -> String {
    content::whatsapp_url(content::SCHEDULING_WHATSAPP)
}

// ---------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------

fn resolve_app_db_path() -> PathBuf {
    APP_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("AMPARO_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(APP_DB_FILE_NAME)
        })
        .clone()
}

fn open_app_db() -> Result<Connection, String> {
    open_db(resolve_app_db_path()).map_err(|err| {
        log::error!("event=ffi_db_open module=ffi status=error error={err}");
        DB_UNAVAILABLE.to_string()
    })
}

fn diary_service(conn: &Connection) -> Result<DiaryService<SqliteKeyValueStore<'_>>, String> {
    let kv = SqliteKeyValueStore::try_new(conn).map_err(|_| DB_UNAVAILABLE.to_string())?;
    Ok(DiaryService::new(kv))
}

fn community_service(
    conn: &Connection,
) -> Result<CommunityService<SqliteKeyValueStore<'_>>, String> {
    let kv = SqliteKeyValueStore::try_new(conn).map_err(|_| DB_UNAVAILABLE.to_string())?;
    Ok(CommunityService::new(kv))
}

fn reminder_service(
    conn: &Connection,
) -> Result<ReminderService<SqliteKeyValueStore<'_>, SqliteNotificationSpool<'_>>, String> {
    let kv = SqliteKeyValueStore::try_new(conn).map_err(|_| DB_UNAVAILABLE.to_string())?;
    let spool = SqliteNotificationSpool::try_new(conn).map_err(|_| DB_UNAVAILABLE.to_string())?;
    Ok(ReminderService::new(kv, spool))
}

fn parse_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| "Registro não encontrado.".to_string())
}

fn validation_notice(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingEmotion | ValidationError::UnknownEmotion(_) => {
            "Por favor, selecione uma emoção".to_string()
        }
        ValidationError::IntensityOutOfRange(_) => {
            "A intensidade deve ser um número de 1 a 5.".to_string()
        }
        ValidationError::EmptyPostContent => "Por favor, escreva algo para publicar.".to_string(),
        ValidationError::EmptyMedication | ValidationError::EmptyDosage => {
            "Por favor, preencha o nome do medicamento e a dosagem.".to_string()
        }
        ValidationError::InvalidTime(_) => "Horário inválido. Use o formato HH:MM.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        community_add_post, community_like_post, community_list_posts, core_version,
        diary_add_entry, diary_delete_entry, diary_emotions, diary_list_entries, init_logging,
        meditation_catalog, notifications_pending, notifications_record_permission,
        professionals_request_appointment, professionals_search, reminders_add, reminders_delete,
        reminders_list, reminders_toggle, scheduling_whatsapp_url, support_center,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn diary_flow_adds_lists_and_deletes() {
        let token = unique_token("diario");
        let created = diary_add_entry("Feliz".to_string(), "3".to_string(), token.clone());
        assert!(created.ok, "{}", created.message);
        let created_id = created.id.clone().expect("created entry id");

        let listed = diary_list_entries();
        assert!(listed
            .items
            .iter()
            .any(|item| item.id == created_id && item.notes == token));

        let deleted = diary_delete_entry(created_id.clone());
        assert!(deleted.ok, "{}", deleted.message);
        assert!(!diary_list_entries()
            .items
            .iter()
            .any(|item| item.id == created_id));
    }

    #[test]
    fn diary_rejects_out_of_range_intensity_with_notice() {
        let response = diary_add_entry("Feliz".to_string(), "6".to_string(), String::new());
        assert!(!response.ok);
        assert!(response.message.contains("1 a 5"));
    }

    #[test]
    fn diary_emotions_lists_all_chips() {
        let labels = diary_emotions();
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[0], "Feliz");
    }

    #[test]
    fn community_flow_publishes_and_likes() {
        let token = unique_token("publicacao");
        let created = community_add_post(token.clone());
        assert!(created.ok, "{}", created.message);
        let created_id = created.id.clone().expect("created post id");

        let liked = community_like_post(created_id.clone());
        assert!(liked.ok, "{}", liked.message);

        let listed = community_list_posts();
        let post = listed
            .items
            .iter()
            .find(|item| item.id == created_id)
            .expect("post in feed");
        assert_eq!(post.likes, 1);
        assert_eq!(post.content, token);
    }

    #[test]
    fn reminder_flow_schedules_toggles_and_deletes() {
        // The spool only schedules once the shell recorded permission.
        let recorded = notifications_record_permission(true);
        assert!(recorded.ok, "{}", recorded.message);

        let token = unique_token("Medicamento");
        let created = reminders_add(token.clone(), "50mg".to_string(), "08:00".to_string());
        assert!(created.ok, "{}", created.message);
        let created_id = created.id.clone().expect("created reminder id");

        let listed = reminders_list();
        let item = listed
            .items
            .iter()
            .find(|item| item.id == created_id)
            .expect("reminder listed");
        assert!(item.enabled);
        let handle = item.notification_id.clone().expect("live handle");
        assert!(notifications_pending()
            .items
            .iter()
            .any(|trigger| trigger.handle == handle));

        let toggled = reminders_toggle(created_id.clone());
        assert!(toggled.ok, "{}", toggled.message);
        assert!(!notifications_pending()
            .items
            .iter()
            .any(|trigger| trigger.handle == handle));

        let deleted = reminders_delete(created_id.clone());
        assert!(deleted.ok, "{}", deleted.message);
        assert!(!reminders_list()
            .items
            .iter()
            .any(|item| item.id == created_id));
    }

    #[test]
    fn reminders_reject_missing_fields_with_notice() {
        let response = reminders_add(String::new(), "50mg".to_string(), "08:00".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("medicamento"));
    }

    #[test]
    fn professionals_search_and_appointment_gating() {
        let psychiatrists = professionals_search("psiquiatra".to_string(), String::new());
        assert_eq!(psychiatrists.len(), 1);
        assert_eq!(psychiatrists[0].name, "Dr. João Santos");

        let unavailable = professionals_request_appointment("3".to_string());
        assert!(!unavailable.ok);
        assert!(unavailable.message.contains("não está disponível"));

        let confirmed = professionals_request_appointment("1".to_string());
        assert!(confirmed.ok);
        assert!(confirmed.message.contains("Dra. Maria Silva"));
    }

    #[test]
    fn static_content_endpoints_expose_catalog_and_links() {
        assert_eq!(meditation_catalog().len(), 5);

        let center = support_center();
        assert_eq!(center.dial_url, "tel:3334213345");
        assert!(center.maps_url.contains("-18.7771"));

        assert_eq!(
            scheduling_whatsapp_url(),
            "whatsapp://send?phone=5533991968730"
        );
    }
}
