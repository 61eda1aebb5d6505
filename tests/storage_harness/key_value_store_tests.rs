//! Macro-generated test suite for `KeyValueStore` contract validation.
//!
//! The `key_value_store_tests!` macro generates a test module that validates
//! any `KeyValueStore` implementation, both directly and through an
//! `EmployeeStore` layered on top of it.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use hrnet::storage::InMemoryKeyValueStore;
//!
//! key_value_store_tests!(InMemoryKeyValueStore::new());
//! ```
//!
//! # Generated Tests
//!
//! ## Slots
//! - `test_get_missing_slot`: unknown key reads as None
//! - `test_set_then_get`: written value reads back
//! - `test_set_replaces`: second write replaces the first
//! - `test_slots_are_independent`: keys do not leak into each other
//!
//! ## Employee store
//! - `test_get_all_empty`: empty backend lists nothing
//! - `test_append_assigns_next_id`: ids 1, 2, 3 in insertion order
//! - `test_persisted_format`: slot holds a JSON array in the documented shape
//! - `test_search_over_backend`: query pipeline over stored records

#[macro_export]
macro_rules! key_value_store_tests {
    ($factory:expr) => {
        mod key_value_store_contract {
            use super::*;
            use hrnet::prelude::*;

            // ==================================================================
            // Slots
            // ==================================================================

            #[test]
            fn test_get_missing_slot() {
                let store = $factory;
                assert_eq!(store.get("employees").unwrap(), None);
            }

            #[test]
            fn test_set_then_get() {
                let store = $factory;
                store.set("employees", "[]").unwrap();
                assert_eq!(store.get("employees").unwrap().as_deref(), Some("[]"));
            }

            #[test]
            fn test_set_replaces() {
                let store = $factory;
                store.set("employees", "[]").unwrap();
                store.set("employees", "[{}]").unwrap();
                assert_eq!(store.get("employees").unwrap().as_deref(), Some("[{}]"));
            }

            #[test]
            fn test_slots_are_independent() {
                let store = $factory;
                store.set("employees", "a").unwrap();
                store.set("settings", "b").unwrap();
                assert_eq!(store.get("employees").unwrap().as_deref(), Some("a"));
                assert_eq!(store.get("settings").unwrap().as_deref(), Some("b"));
            }

            // ==================================================================
            // Employee store
            // ==================================================================

            #[test]
            fn test_get_all_empty() {
                let store = EmployeeStore::new($factory);
                assert!(store.get_all().is_empty());
            }

            #[test]
            fn test_append_assigns_next_id() {
                let store = EmployeeStore::new($factory);
                let ids: Vec<u64> = sample_batch(3)
                    .into_iter()
                    .map(|e| store.append(e).unwrap().id)
                    .collect();
                assert_eq!(ids, vec![1, 2, 3]);

                let all = store.get_all();
                assert_eq!(all.len(), 3);
                assert_eq!(all[2].first_name, "Employee 3");
            }

            #[test]
            fn test_persisted_format() {
                let store = EmployeeStore::new($factory);
                store
                    .append(sample_employee("Ana", "05/01/1990", "02108"))
                    .unwrap();

                let raw = store.backend().get(EMPLOYEES_KEY).unwrap().unwrap();
                let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
                let records = json.as_array().unwrap();
                assert_eq!(records.len(), 1);
                assert_eq!(records[0]["id"], 1);
                assert_eq!(records[0]["firstName"], "Ana");
                assert_eq!(records[0]["dateOfBirth"], "05/01/1990");
                assert_eq!(records[0].as_object().unwrap().len(), 10);
            }

            #[test]
            fn test_search_over_backend() {
                let store = EmployeeStore::new($factory);
                store
                    .append(sample_employee("Bob", "01/01/2000", "9999"))
                    .unwrap();
                store
                    .append(sample_employee("Ana", "01/01/1990", "10001"))
                    .unwrap();

                let result = store.search(&QueryParams::default().with_sort("zip", "asc"));
                assert_eq!(result.total_items(), 2);
                assert_eq!(result.items[0].first_name, "Bob");
                assert_eq!(result.sort_field, "zip");
            }
        }
    };
}
