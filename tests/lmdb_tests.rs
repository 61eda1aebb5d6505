//! Integration tests for LmdbKeyValueStore using the storage test harness.
//!
//! Each test opens a fresh environment in its own temporary directory.

#![cfg(feature = "lmdb")]

#[macro_use]
mod storage_harness;

use hrnet::prelude::*;
use hrnet::storage::LmdbKeyValueStore;
use storage_harness::*;

#[allow(deprecated)]
fn open_temp() -> LmdbKeyValueStore {
    let dir = tempfile::tempdir().unwrap().into_path();
    LmdbKeyValueStore::open(dir).unwrap()
}

key_value_store_tests!(open_temp());

#[test]
fn test_employees_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = EmployeeStore::new(LmdbKeyValueStore::open(dir.path()).unwrap());
        store
            .append(sample_employee("Ana", "05/01/1990", "02108"))
            .unwrap();
    }

    let store = EmployeeStore::new(LmdbKeyValueStore::open(dir.path()).unwrap());
    let all = store.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].first_name, "Ana");
    assert_eq!(
        store
            .append(sample_employee("Bob", "01/01/2000", "9999"))
            .unwrap()
            .id,
        2
    );
}
