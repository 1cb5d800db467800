use chrono::{NaiveDate, TimeZone, Utc};
use outreach_core::{
    ErrorKind, OutreachId, OutreachNew, OutreachRecord, OutreachStatus, OutreachType, Platform,
};
use outreach_store::error::StoreError;
use outreach_store::{
    DurableSlot, MemoryNotifier, MemorySlot, NoticeLevel, OutreachStore, SilentNotifier, Store,
};
use tempfile::TempDir;

fn input(name: &str) -> OutreachNew {
    OutreachNew {
        client_name: name.to_string(),
        platform: Platform::LinkedIn,
        outreach_type: OutreachType::Dm,
        status: OutreachStatus::Waiting,
        follow_up_date: None,
        notes: None,
    }
}

fn parse_slot(slot: &MemorySlot) -> Vec<OutreachRecord> {
    let raw = slot.value().expect("slot written");
    serde_json::from_str(&raw).expect("slot holds records")
}

#[test]
fn empty_slot_loads_empty_collection() {
    let store = OutreachStore::open(MemorySlot::new(), Box::new(SilentNotifier));
    let snapshot = store.snapshot();
    assert!(!snapshot.loading);
    assert!(snapshot.records.is_empty());
    assert_eq!(snapshot.error, None);
}

#[test]
fn add_assigns_id_and_created_at_and_persists() {
    let slot = MemorySlot::new();
    let notifier = MemoryNotifier::new();
    let mut store = OutreachStore::open(slot.clone(), Box::new(notifier.clone()));

    let now = Utc.with_ymd_and_hms(2030, 1, 16, 10, 0, 0).unwrap();
    let record = store.add(now, input("Acme")).expect("add");

    assert!(!record.id.is_empty());
    assert_eq!(record.created_at, now);
    assert_eq!(store.snapshot().records, &[record.clone()]);
    assert_eq!(parse_slot(&slot), vec![record]);
    assert_eq!(slot.write_count(), 1);

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert_eq!(notices[0].description, "Outreach added successfully");
}

#[test]
fn add_keeps_insertion_order_and_unique_ids() {
    let slot = MemorySlot::new();
    let mut store = OutreachStore::open(slot.clone(), Box::new(SilentNotifier));
    let now = Utc.with_ymd_and_hms(2030, 1, 16, 10, 0, 0).unwrap();

    let first = store.add(now, input("Acme")).expect("add first");
    let second = store.add(now, input("Globex")).expect("add second");

    assert_ne!(first.id, second.id);
    let names: Vec<_> = parse_slot(&slot)
        .into_iter()
        .map(|record| record.client_name)
        .collect();
    assert_eq!(names, vec!["Acme", "Globex"]);
}

#[test]
fn add_rejects_blank_client_name_without_writing() {
    let slot = MemorySlot::new();
    let notifier = MemoryNotifier::new();
    let mut store = OutreachStore::open(slot.clone(), Box::new(notifier.clone()));

    let err = store
        .add(Utc::now(), input("   "))
        .expect_err("blank name rejected");
    assert!(matches!(err, StoreError::Core(_)));
    assert!(store.snapshot().records.is_empty());
    assert_eq!(slot.write_count(), 0);
    assert_eq!(notifier.errors()[0].description, "Failed to add outreach");
}

#[test]
fn update_replaces_in_place_and_pins_created_at() {
    let slot = MemorySlot::new();
    let notifier = MemoryNotifier::new();
    let mut store = OutreachStore::open(slot.clone(), Box::new(notifier.clone()));
    let created = Utc.with_ymd_and_hms(2030, 1, 14, 8, 0, 0).unwrap();

    let first = store.add(created, input("Acme")).expect("add");
    let second = store.add(created, input("Globex")).expect("add");

    let mut edited = first.clone();
    edited.status = OutreachStatus::DealDone;
    edited.follow_up_date = NaiveDate::from_ymd_opt(2030, 2, 1);
    edited.created_at = Utc.with_ymd_and_hms(2031, 1, 1, 0, 0, 0).unwrap();
    store.update(edited).expect("update");

    let records = parse_slot(&slot);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, first.id);
    assert_eq!(records[0].status, OutreachStatus::DealDone);
    assert_eq!(records[0].created_at, created);
    assert_eq!(records[1], second);
    assert_eq!(
        notifier.notices().last().map(|notice| notice.description.as_str()),
        Some("Outreach updated successfully")
    );
}

#[test]
fn update_with_unknown_id_leaves_collection_unchanged() {
    let slot = MemorySlot::new();
    let mut store = OutreachStore::open(slot.clone(), Box::new(SilentNotifier));
    let added = store.add(Utc::now(), input("Acme")).expect("add");

    let mut stranger = added.clone();
    stranger.id = OutreachId::new("missing").expect("id");
    stranger.client_name = "Stranger".to_string();
    store.update(stranger).expect("update");

    assert_eq!(parse_slot(&slot), vec![added]);
}

#[test]
fn unreadable_slot_reports_load_failure() {
    let notifier = MemoryNotifier::new();
    let store = OutreachStore::open(
        MemorySlot::with_value("{not json"),
        Box::new(notifier.clone()),
    );

    let snapshot = store.snapshot();
    assert!(!snapshot.loading);
    assert!(snapshot.records.is_empty());
    assert_eq!(snapshot.error, Some(ErrorKind::LoadFailure));

    let errors = notifier.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].description, "Failed to load outreaches");
    assert_eq!(errors[0].kind, Some(ErrorKind::LoadFailure));
}

#[test]
fn failed_write_keeps_change_in_memory() {
    let slot = MemorySlot::new();
    let notifier = MemoryNotifier::new();
    let mut store = OutreachStore::open(slot.clone(), Box::new(notifier.clone()));
    slot.set_fail_writes(true);

    let err = store
        .add(Utc::now(), input("Acme"))
        .expect_err("write fails");
    assert!(matches!(err, StoreError::Persistence { .. }));
    assert_eq!(err.error_kind(), Some(ErrorKind::PersistenceFailure));
    assert_eq!(store.snapshot().records.len(), 1);
    assert!(slot.value().is_none());

    let errors = notifier.errors();
    assert_eq!(errors[0].description, "Failed to add outreach");
    assert_eq!(errors[0].kind, Some(ErrorKind::PersistenceFailure));
}

#[test]
fn mutations_before_load_are_rejected() {
    let slot = MemorySlot::new();
    let mut store = OutreachStore::new(slot.clone(), Box::new(SilentNotifier));
    assert!(store.snapshot().loading);

    let err = store
        .add(Utc::now(), input("Acme"))
        .expect_err("still loading");
    assert!(matches!(err, StoreError::Loading));
    assert_eq!(slot.write_count(), 0);

    store.load();
    store.add(Utc::now(), input("Acme")).expect("add after load");
}

#[test]
fn reads_collection_written_by_web_app() {
    let legacy = r#"[
        {"clientName":"Globex","platform":"Upwork","outreachType":"Gig Proposal",
         "status":"Deal Done ✅","followUpDate":"","notes":"",
         "id":"1712345678901","createdAt":"2024-04-05T19:34:38.901Z"},
        {"clientName":"Initech","platform":"Email","outreachType":"Cold Email",
         "status":"Follow-up Scheduled","followUpDate":"2024-04-12","notes":"call back",
         "id":"1712345678999","createdAt":"2024-04-05T20:00:00.000Z"}
    ]"#;
    let store = OutreachStore::open(MemorySlot::with_value(legacy), Box::new(SilentNotifier));

    let records = store.snapshot().records;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].status, OutreachStatus::DealDone);
    assert_eq!(records[0].notes, None);
    assert_eq!(
        records[1].follow_up_date,
        NaiveDate::from_ymd_opt(2024, 4, 12)
    );
    let id = OutreachId::new("1712345678999").expect("id");
    assert_eq!(
        store.get(&id).map(|record| record.client_name.as_str()),
        Some("Initech")
    );
}

#[test]
fn collection_survives_reopen_of_sqlite_slot() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("outreach.sqlite3");
    let now = Utc.with_ymd_and_hms(2030, 1, 16, 10, 0, 0).unwrap();

    let added = {
        let db = Store::open(&db_path).expect("open store");
        db.migrate().expect("migrate");
        let mut store = db.outreaches("outreaches", Box::new(SilentNotifier));
        store.add(now, input("Acme")).expect("add")
    };

    let db = Store::open(&db_path).expect("reopen store");
    db.migrate().expect("migrate");
    let store = db.outreaches("outreaches", Box::new(SilentNotifier));
    assert_eq!(store.snapshot().records, &[added]);
    assert!(store.slot().read().expect("read").is_some());
}

#[test]
fn failed_update_write_keeps_replacement_in_memory() {
    let slot = MemorySlot::new();
    let notifier = MemoryNotifier::new();
    let mut store = OutreachStore::open(slot.clone(), Box::new(notifier.clone()));
    let added = store.add(Utc::now(), input("Acme")).expect("add");
    slot.set_fail_writes(true);

    let mut edited = added.clone();
    edited.status = OutreachStatus::NoResponse;
    let err = store.update(edited).expect_err("write fails");

    assert!(matches!(err, StoreError::Persistence { .. }));
    assert_eq!(
        store.get(&added.id).map(|record| record.status),
        Some(OutreachStatus::NoResponse)
    );
    assert_eq!(parse_slot(&slot), vec![added]);

    let errors = notifier.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].description, "Failed to update outreach");
    assert_eq!(errors[0].kind, Some(ErrorKind::PersistenceFailure));
}

#[test]
fn blank_notes_on_update_survive_reload_unchanged() {
    let slot = MemorySlot::new();
    let mut store = OutreachStore::open(slot.clone(), Box::new(SilentNotifier));
    let mut record = store
        .add(
            Utc::now(),
            OutreachNew {
                notes: Some("first call".to_string()),
                ..input("Acme")
            },
        )
        .expect("add");

    record.notes = Some("  ".to_string());
    record.client_name = " Acme ".to_string();
    store.update(record).expect("update");
    let before = store.snapshot().records.to_vec();

    let reopened = OutreachStore::open(slot, Box::new(SilentNotifier));
    assert_eq!(reopened.snapshot().records, before.as_slice());
    assert_eq!(before[0].notes, None);
    assert_eq!(before[0].client_name, "Acme");
}

#[test]
fn full_collection_survives_reopen_field_by_field() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("outreach.sqlite3");
    let fixtures = [
        ("Acme", Platform::LinkedIn, OutreachType::Dm, OutreachStatus::Waiting, 1),
        ("Globex", Platform::Upwork, OutreachType::GigProposal, OutreachStatus::DealDone, 2),
        (
            "Initech",
            Platform::Email,
            OutreachType::ColdEmail,
            OutreachStatus::FollowUpScheduled,
            3,
        ),
    ];

    let written: Vec<OutreachRecord> = {
        let db = Store::open(&db_path).expect("open store");
        db.migrate().expect("migrate");
        let mut store = db.outreaches("outreaches", Box::new(SilentNotifier));
        for (name, platform, outreach_type, status, day) in fixtures {
            store
                .add(
                    Utc.with_ymd_and_hms(2030, 1, day, 9, 15, 30).unwrap(),
                    OutreachNew {
                        client_name: name.to_string(),
                        platform,
                        outreach_type,
                        status,
                        follow_up_date: NaiveDate::from_ymd_opt(2030, 2, day),
                        notes: Some(format!("notes for {name}")),
                    },
                )
                .expect("add");
        }
        store.snapshot().records.to_vec()
    };

    let db = Store::open(&db_path).expect("reopen store");
    let store = db.outreaches("outreaches", Box::new(SilentNotifier));
    let loaded = store.snapshot().records;

    assert_eq!(loaded.len(), written.len());
    for (loaded, written) in loaded.iter().zip(&written) {
        assert_eq!(loaded.id, written.id);
        assert_eq!(loaded.client_name, written.client_name);
        assert_eq!(loaded.platform, written.platform);
        assert_eq!(loaded.outreach_type, written.outreach_type);
        assert_eq!(loaded.status, written.status);
        assert_eq!(loaded.follow_up_date, written.follow_up_date);
        assert_eq!(loaded.notes, written.notes);
        assert_eq!(loaded.created_at, written.created_at);
    }
    let names: Vec<&str> = loaded
        .iter()
        .map(|record| record.client_name.as_str())
        .collect();
    assert_eq!(names, vec!["Acme", "Globex", "Initech"]);
}
