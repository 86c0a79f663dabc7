//! User store integration tests.

use pretty_assertions::assert_eq;
use roster_protocol::{NewUser, UserProfile};
use roster_store::{StoreError, UserStore, seed_users};
use serde_json::json;
use std::sync::Arc;
use std::thread;

fn payload(value: serde_json::Value) -> NewUser {
    serde_json::from_value(value).expect("payload")
}

/// A seeded store lists the five seed records in id order.
#[test]
fn seeded_store_lists_seed_records_in_order() {
    let store = UserStore::seeded();
    let users = store.list();
    assert_eq!(users.len(), 5);
    assert_eq!(
        users.iter().map(|user| user.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
    assert_eq!(
        users.iter().filter_map(|user| user.name()).collect::<Vec<_>>(),
        vec!["Alice", "Bob", "Charlie", "Diana", "Eve"]
    );
    assert_eq!(users, seed_users());
}

/// Every seed id resolves to its own record.
#[test]
fn get_finds_every_seed_record() {
    let store = UserStore::seeded();
    for user in seed_users() {
        assert_eq!(store.get(user.id).expect("seed user"), user);
    }
    assert_eq!(
        store.get(3).expect("charlie").profile(),
        Some(UserProfile::new("Charlie", 22, "charlie@example.com", "UK"))
    );
}

/// Unknown ids report not found.
#[test]
fn get_unknown_id_is_not_found() {
    let store = UserStore::seeded();
    assert_eq!(store.get(0), Err(StoreError::NotFound(0)));
    assert_eq!(store.get(6), Err(StoreError::NotFound(6)));
}

/// Adding to a fresh store assigns id 6 and the record becomes readable.
#[test]
fn add_assigns_next_id_and_appends() {
    let store = UserStore::seeded();
    let user = store.add(payload(
        json!({"name": "Zed", "age": 40, "email": "z@z.com", "country": "Nowhere"}),
    ));
    assert_eq!(
        serde_json::to_value(&user).expect("serialize"),
        json!({"id": 6, "name": "Zed", "age": 40, "email": "z@z.com", "country": "Nowhere"})
    );
    assert_eq!(store.get(6).expect("added"), user);
    assert_eq!(store.list().last(), Some(&user));
    assert_eq!(store.len(), 6);
}

/// A caller-supplied id is overwritten with len + 1.
#[test]
fn add_overwrites_caller_id() {
    let store = UserStore::seeded();
    let user = store.add(payload(json!({"id": 999, "name": "X"})));
    assert_eq!(user.id, 6);
    assert_eq!(store.get(999), Err(StoreError::NotFound(999)));
}

/// Reads leave the store untouched.
#[test]
fn reads_do_not_mutate() {
    let store = UserStore::seeded();
    let before = store.list();
    let _ = store.get(2);
    let _ = store.get(42);
    assert_eq!(store.list(), before);
}

/// Concurrent adds never hand out the same id.
#[test]
fn concurrent_adds_get_unique_ids() {
    let store = Arc::new(UserStore::seeded());
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                (0..25)
                    .map(|n| store.add(payload(json!({"name": format!("w{worker}-{n}")}))).id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|handle| handle.join().expect("worker"))
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (6..=205).collect::<Vec<u64>>());
    assert_eq!(store.len(), 205);
}
