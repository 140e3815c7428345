use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.get("user"), None);
    storage.set("user", "{\"id\":1}");
    assert_eq!(storage.get("user").as_deref(), Some("{\"id\":1}"));
    storage.set("user", "{\"id\":2}");
    assert_eq!(storage.get("user").as_deref(), Some("{\"id\":2}"));
    storage.remove("user");
    assert_eq!(storage.get("user"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_empty_outside_browser() {
    let storage = LocalStorage;
    storage.set("user", "x");
    assert_eq!(storage.get("user"), None);
    storage.remove("user");
}
