use amparo_core::{
    DiaryService, DiaryServiceError, KeyValueStore, MemoryKeyValueStore, ValidationError,
    DIARY_COLLECTION,
};
use uuid::Uuid;

#[test]
fn added_entries_render_newest_first() {
    let mut service = DiaryService::new(MemoryKeyValueStore::new());

    service.add_entry("Feliz", "3", "manhã boa").unwrap();
    let newest = service.add_entry("Cansado", "2", "noite longa").unwrap();

    let entries = service.list_entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, newest.id);
    assert_eq!(entries[0].notes, "noite longa");
}

#[test]
fn emotion_selection_is_required() {
    let mut service = DiaryService::new(MemoryKeyValueStore::new());

    let err = service.add_entry("", "3", "").unwrap_err();
    assert!(matches!(
        err,
        DiaryServiceError::Validation(ValidationError::MissingEmotion)
    ));

    let err = service.add_entry("Entediado", "3", "").unwrap_err();
    assert!(matches!(
        err,
        DiaryServiceError::Validation(ValidationError::UnknownEmotion(_))
    ));

    assert!(service.list_entries().unwrap().is_empty());
}

#[test]
fn intensity_boundaries_block_the_action() {
    let mut service = DiaryService::new(MemoryKeyValueStore::new());

    for raw in ["0", "6", "dez"] {
        let err = service.add_entry("Triste", raw, "").unwrap_err();
        assert!(
            matches!(
                err,
                DiaryServiceError::Validation(ValidationError::IntensityOutOfRange(_))
            ),
            "intensity `{raw}` should be rejected"
        );
    }
    assert!(service.list_entries().unwrap().is_empty());

    let entry = service.add_entry("Triste", "3", "").unwrap();
    assert_eq!(entry.intensity, 3);
}

#[test]
fn deleting_an_entry_removes_exactly_that_entry() {
    let mut service = DiaryService::new(MemoryKeyValueStore::new());

    let keep = service.add_entry("Calmo", "1", "").unwrap();
    let gone = service.add_entry("Irritado", "5", "").unwrap();

    assert!(service.delete_entry(gone.id).unwrap());

    let entries = service.list_entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, keep.id);
}

#[test]
fn deleting_a_missing_id_is_a_noop() {
    let mut service = DiaryService::new(MemoryKeyValueStore::new());
    service.add_entry("Energético", "4", "").unwrap();

    assert!(!service.delete_entry(Uuid::new_v4()).unwrap());
    assert_eq!(service.list_entries().unwrap().len(), 1);
}

#[test]
fn corrupt_stored_diary_degrades_to_empty_and_recovers_on_next_save() {
    let mut kv = MemoryKeyValueStore::new();
    kv.set(DIARY_COLLECTION, "{broken").unwrap();

    let mut service = DiaryService::new(kv);
    assert!(service.list_entries().unwrap().is_empty());

    let entry = service.add_entry("Esperançoso", "4", "recomeço").unwrap();
    let entries = service.list_entries().unwrap();
    assert_eq!(entries, vec![entry]);
}
