use depot_core::auth::{AuthError, CredentialVault};

mod common;

#[test]
fn vault_round_trips_through_storage() {
    let store = common::setup_store();

    let mut vault = CredentialVault::new();
    vault.register("alice", "pw1").unwrap();
    vault.register("bob", "pw2").unwrap();
    store.save_vault(&vault).expect("save vault");

    let loaded = store.load_vault().expect("load vault");
    assert_eq!(loaded.len(), 2);
    assert!(loaded.verify("alice", "pw1"));
    assert!(loaded.verify("bob", "pw2"));
    assert!(!loaded.verify("alice", "pw2"));
}

#[test]
fn missing_vault_file_loads_empty() {
    let store = common::setup_store();
    let vault = store.load_vault().expect("load vault");
    assert!(vault.is_empty());
}

#[test]
fn duplicate_registration_leaves_persisted_vault_unchanged() {
    let store = common::setup_store();

    let mut vault = CredentialVault::new();
    vault.register("alice", "pw1").unwrap();
    store.save_vault(&vault).unwrap();

    assert_eq!(
        vault.register("alice", "pw2").unwrap_err(),
        AuthError::DuplicateUser("alice".into())
    );
    store.save_vault(&vault).unwrap();

    let loaded = store.load_vault().unwrap();
    assert!(loaded.verify("alice", "pw1"));
    assert!(!loaded.verify("alice", "pw2"));
}

#[test]
fn persisted_file_never_contains_cleartext_passwords() {
    let store = common::setup_store();

    let mut vault = CredentialVault::new();
    vault.register("alice", "hunter2").unwrap();
    store.save_vault(&vault).unwrap();

    let raw = std::fs::read_to_string(store.base().join("users.json")).unwrap();
    assert!(raw.contains("alice"));
    assert!(!raw.contains("hunter2"));
}
