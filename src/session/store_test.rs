use super::*;

#[test]
fn memory_store_round_trips_a_credential() {
    let store = MemoryStore::default();
    assert!(store.load().is_none());

    store.save("tok-1");
    assert_eq!(store.load().as_deref(), Some("tok-1"));
}

#[test]
fn save_replaces_the_previous_credential() {
    let store = MemoryStore::default();
    store.save("tok-1");
    store.save("tok-2");
    assert_eq!(store.load().as_deref(), Some("tok-2"));
}

#[test]
fn clear_is_idempotent() {
    let store = MemoryStore::default();
    store.save("tok-1");

    store.clear();
    assert!(store.load().is_none());
    store.clear();
    assert!(store.load().is_none());
}

#[test]
fn browser_store_degrades_to_empty_outside_the_browser() {
    let store = BrowserStore;
    store.save("tok-1");
    assert!(store.load().is_none());
    store.clear();
}
