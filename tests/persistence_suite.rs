use std::fs;

use chrono::NaiveDate;
use depot_core::{
    domain::{Bus, BusStatus, Client, Credit, Person, Role},
    errors::StoreError,
    store::Depot,
};

mod common;

fn sample_depot() -> Depot {
    let mut depot = Depot::new();
    depot.buses.add(Bus::new("Smith", 7));
    depot.buses.add(Bus::new("Jones", 3));
    depot
        .buses
        .transition(2, BusStatus::InPark, BusStatus::OnRoute);
    depot
        .clients
        .add(Client::new("Anna Smirnova", "5550101").expect("valid client"));
    depot.credits.add(
        Credit::new(
            1500.0,
            4.5,
            NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            "seasonal repair loan",
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        )
        .expect("valid credit"),
    );
    depot.people.add(Person::new(
        "Petr Petrov",
        45,
        Role::Teacher {
            subject: "Mathematics".into(),
            years_experience: 20,
        },
    ));
    depot
}

#[test]
fn round_trip_preserves_records_ids_and_order() {
    let store = common::setup_store();
    let depot = sample_depot();

    store.save_depot(&depot).expect("save depot");
    let loaded = store.load_depot().expect("load depot");

    let buses: Vec<&Bus> = loaded.buses.iter().collect();
    let original: Vec<&Bus> = depot.buses.iter().collect();
    assert_eq!(buses, original);

    let clients: Vec<&Client> = loaded.clients.iter().collect();
    assert_eq!(clients, depot.clients.iter().collect::<Vec<_>>());

    let credits: Vec<&Credit> = loaded.credits.iter().collect();
    assert_eq!(credits, depot.credits.iter().collect::<Vec<_>>());

    let people: Vec<&Person> = loaded.people.iter().collect();
    assert_eq!(people, depot.people.iter().collect::<Vec<_>>());
}

#[test]
fn loaded_store_continues_the_id_sequence() {
    let store = common::setup_store();
    store.save_depot(&sample_depot()).expect("save depot");

    let mut loaded = store.load_depot().expect("load depot");
    let next = loaded.buses.add(Bus::new("Brown", 9));
    assert_eq!(next, 3);
}

#[test]
fn missing_files_load_as_empty_store() {
    let store = common::setup_store();
    let depot = store.load_depot().expect("load from empty dir");
    assert_eq!(depot.total_records(), 0);
}

#[test]
fn malformed_file_is_reported_with_its_name() {
    let store = common::setup_store();
    fs::write(store.base().join("buses.json"), "{ this is not json").unwrap();

    let err = store.load_depot().expect_err("malformed file must fail");
    match err {
        StoreError::Malformed { file, .. } => assert_eq!(file, "buses.json"),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn failed_atomic_save_preserves_previous_snapshot() {
    let store = common::setup_store();
    let mut depot = sample_depot();
    store.save_depot(&depot).expect("initial save");

    let path = store.base().join("buses.json");
    let original = fs::read_to_string(&path).expect("read original file");

    // Collide with the staging path to make the write fail.
    let tmp = store.base().join("buses.tmp");
    fs::create_dir_all(&tmp).unwrap();

    depot.buses.add(Bus::new("Brown", 9));
    assert!(store.save_depot(&depot).is_err());

    let current = fs::read_to_string(&path).expect("read after failed save");
    assert_eq!(current, original);

    let _ = fs::remove_dir_all(&tmp);
}
