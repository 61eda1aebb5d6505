//! Shared test harness for key-value backend testing
//!
//! Provides sample employees and `GatedStore`, a wrapper that holds readers
//! at a barrier so interleavings of concurrent appends can be reproduced.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod key_value_store_tests;

use hrnet::prelude::*;
use std::sync::Barrier;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Build an unsaved employee with distinguishable fields
pub fn sample_employee(first_name: &str, date_of_birth: &str, zip: &str) -> NewEmployee {
    NewEmployee {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        date_of_birth: date_of_birth.to_string(),
        start_date: "01/01/2020".to_string(),
        street: "1 Main St".to_string(),
        city: "Boston".to_string(),
        state: "MA".to_string(),
        zip: zip.to_string(),
        department: "Sales".to_string(),
    }
}

/// `count` employees named `Employee 1`, `Employee 2`, ...
pub fn sample_batch(count: usize) -> Vec<NewEmployee> {
    (1..=count)
        .map(|i| sample_employee(&format!("Employee {}", i), "01/01/1990", "02108"))
        .collect()
}

/// Stored employees with ids `1..=count`, for pure pipeline tests
pub fn stored_batch(count: usize) -> Vec<Employee> {
    sample_batch(count)
        .into_iter()
        .enumerate()
        .map(|(i, e)| e.with_id(i as u64 + 1))
        .collect()
}

/// Store wrapper whose first `readers` reads wait for each other
///
/// Each gated read takes its snapshot before waiting, so every gated
/// reader sees the slot as it was before any of them could write.
pub struct GatedStore<S> {
    inner: S,
    pending: AtomicUsize,
    barrier: Barrier,
}

impl<S: KeyValueStore> GatedStore<S> {
    pub fn new(inner: S, readers: usize) -> Self {
        Self {
            inner,
            pending: AtomicUsize::new(readers),
            barrier: Barrier::new(readers),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: KeyValueStore> KeyValueStore for GatedStore<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let snapshot = self.inner.get(key)?;
        let gated = self
            .pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if gated {
            self.barrier.wait();
        }
        Ok(snapshot)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }
}
