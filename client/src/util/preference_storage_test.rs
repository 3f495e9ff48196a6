#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn browser_storage_is_unavailable_outside_the_browser() {
    let storage = BrowserStorage;
    assert_eq!(storage.read("theme"), Err(StorageError::Unavailable));
    assert_eq!(storage.write("theme", "dark"), Err(StorageError::Unavailable));
}

#[test]
fn memory_storage_reads_back_writes() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.read("theme"), Ok(None));
    storage.write("theme", "light").unwrap();
    assert_eq!(storage.read("theme"), Ok(Some("light".to_owned())));
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.write("theme", "dark").unwrap();
    assert_eq!(b.read("theme"), Ok(Some("dark".to_owned())));
}

#[test]
fn memory_storage_with_entry_prepopulates() {
    let storage = MemoryStorage::with_entry("theme", "purple");
    assert_eq!(storage.peek("theme").as_deref(), Some("purple"));
}

#[test]
fn memory_storage_injected_read_failure() {
    let storage = MemoryStorage::with_entry("theme", "light");
    storage.fail_reads(true);
    assert!(matches!(storage.read("theme"), Err(StorageError::Read { .. })));
    storage.fail_reads(false);
    assert_eq!(storage.read("theme"), Ok(Some("light".to_owned())));
}

#[test]
fn memory_storage_injected_write_failure_keeps_old_value() {
    let storage = MemoryStorage::with_entry("theme", "dark");
    storage.fail_writes(true);
    let err = storage.write("theme", "light").unwrap_err();
    assert!(err.to_string().contains("quota exceeded"));
    assert_eq!(storage.peek("theme").as_deref(), Some("dark"));
}
