use amparo_core::db::{open_db, open_db_in_memory};
use amparo_core::{
    CommunityPost, DiaryEntry, Emotion, KeyValueStore, MedicationReminder, RecordStore,
    SqliteKeyValueStore, StoreError, DIARY_COLLECTION, POSTS_COLLECTION, REMINDERS_COLLECTION,
};
use chrono::Utc;
use rusqlite::Connection;

#[test]
fn absent_collection_loads_as_empty() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKeyValueStore::try_new(&conn).unwrap();

    let store: RecordStore<DiaryEntry> = RecordStore::new(DIARY_COLLECTION);
    assert!(store.load(&kv).unwrap().is_empty());
}

#[test]
fn save_and_load_round_trip() {
    let conn = open_db_in_memory().unwrap();
    let mut kv = SqliteKeyValueStore::try_new(&conn).unwrap();

    let store: RecordStore<DiaryEntry> = RecordStore::new(DIARY_COLLECTION);
    let entry = DiaryEntry::from_input(Some(Emotion::Calm), "2", "tarde tranquila", Utc::now())
        .unwrap();
    store.save(&mut kv, std::slice::from_ref(&entry)).unwrap();

    let loaded = store.load(&kv).unwrap();
    assert_eq!(loaded, vec![entry]);
}

#[test]
fn save_fully_replaces_prior_value() {
    let conn = open_db_in_memory().unwrap();
    let mut kv = SqliteKeyValueStore::try_new(&conn).unwrap();

    let store: RecordStore<CommunityPost> = RecordStore::new(POSTS_COLLECTION);
    let first = CommunityPost::from_input("primeira publicação", Utc::now()).unwrap();
    let second = CommunityPost::from_input("segunda publicação", Utc::now()).unwrap();

    store.save(&mut kv, &[first.clone(), second.clone()]).unwrap();
    store.save(&mut kv, std::slice::from_ref(&second)).unwrap();

    assert_eq!(store.load(&kv).unwrap(), vec![second]);
}

#[test]
fn stored_bytes_are_stable_for_every_entity_type() {
    let conn = open_db_in_memory().unwrap();
    let mut kv = SqliteKeyValueStore::try_new(&conn).unwrap();

    let diary: RecordStore<DiaryEntry> = RecordStore::new(DIARY_COLLECTION);
    let posts: RecordStore<CommunityPost> = RecordStore::new(POSTS_COLLECTION);
    let reminders: RecordStore<MedicationReminder> = RecordStore::new(REMINDERS_COLLECTION);

    let entry =
        DiaryEntry::from_input(Some(Emotion::Anxious), "4", "dia difícil", Utc::now()).unwrap();
    let post = CommunityPost::from_input("seguimos juntos", Utc::now()).unwrap();
    let mut reminder = MedicationReminder::from_input("Sertralina", "50mg", "08:00").unwrap();
    reminder.notification_id = Some("handle-1".to_string());

    diary.save(&mut kv, &[entry]).unwrap();
    posts.save(&mut kv, &[post]).unwrap();
    reminders.save(&mut kv, &[reminder]).unwrap();

    for key in [DIARY_COLLECTION, POSTS_COLLECTION, REMINDERS_COLLECTION] {
        let before = kv.get(key).unwrap().expect("stored value");
        match key {
            DIARY_COLLECTION => {
                let loaded = diary.load(&kv).unwrap();
                diary.save(&mut kv, &loaded).unwrap();
            }
            POSTS_COLLECTION => {
                let loaded = posts.load(&kv).unwrap();
                posts.save(&mut kv, &loaded).unwrap();
            }
            _ => {
                let loaded = reminders.load(&kv).unwrap();
                reminders.save(&mut kv, &loaded).unwrap();
            }
        }
        let after = kv.get(key).unwrap().expect("stored value");
        assert_eq!(before, after, "stored bytes changed for key `{key}`");
    }
}

#[test]
fn corrupt_payload_surfaces_as_corrupt_data() {
    let conn = open_db_in_memory().unwrap();
    let mut kv = SqliteKeyValueStore::try_new(&conn).unwrap();
    kv.set(DIARY_COLLECTION, "][ not json").unwrap();

    let store: RecordStore<DiaryEntry> = RecordStore::new(DIARY_COLLECTION);
    let err = store.load(&kv).unwrap_err();
    assert!(matches!(err, StoreError::CorruptData { ref key, .. } if key == DIARY_COLLECTION));

    // Degraded read keeps the screen alive with an empty collection.
    assert!(store.load_or_empty(&kv).unwrap().is_empty());
}

#[test]
fn store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteKeyValueStore::try_new(&conn) {
        Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn collections_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("amparo.sqlite3");

    let post = CommunityPost::from_input("persistido em disco", Utc::now()).unwrap();
    let store: RecordStore<CommunityPost> = RecordStore::new(POSTS_COLLECTION);

    {
        let conn = open_db(&db_path).unwrap();
        let mut kv = SqliteKeyValueStore::try_new(&conn).unwrap();
        store.save(&mut kv, std::slice::from_ref(&post)).unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let kv = SqliteKeyValueStore::try_new(&conn).unwrap();
    assert_eq!(store.load(&kv).unwrap(), vec![post]);
}
