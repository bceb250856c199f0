// crates/ddc-core/src/sequence.rs

//! # Sequence Allocator
//!
//! Mints the 4-digit location number, unique per
//! (state, LGA, area type, area code) scope.
//!
//! The allocator is the one stateful piece of the engine, so it lives
//! behind [`SequenceStore`]: production implements it over an atomic
//! database counter (`INCREMENT scope_key`); [`InMemorySequenceStore`] is
//! the process-local equivalent for tests, demos and single-instance use.
//! Counters start at 1, never repeat and never decrement; `0000` is never
//! minted.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{DdcError, Result};
use crate::model::{AdministrativeMatch, AreaIdentifier, AreaType, SequenceNumber};

/// The tuple a sequence counter is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceScope {
    state_code: String,
    lga_code: String,
    area_type: AreaType,
    area_code: String,
}

impl SequenceScope {
    pub fn new(admin: &AdministrativeMatch, area: &AreaIdentifier) -> Self {
        Self {
            state_code: admin.state_code().to_string(),
            lga_code: admin.lga_code().to_string(),
            area_type: area.area_type(),
            area_code: area.code().to_string(),
        }
    }
}

impl std::fmt::Display for SequenceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}{}",
            self.state_code,
            self.lga_code,
            self.area_type.prefix(),
            self.area_code
        )
    }
}

/// Atomic per-scope counter storage.
///
/// Two concurrent `increment` calls for the same scope must never return
/// the same value — implementations back this with an atomic primitive
/// (database sequence, compare-and-swap, or a lock as below).
pub trait SequenceStore: Send + Sync {
    /// Allocate the next value for a scope.
    ///
    /// # Errors
    ///
    /// [`DdcError::SequenceExhausted`] once the scope has used all 9999
    /// values; [`DdcError::StoreUnavailable`] when the backing store
    /// cannot be reached.
    fn increment(&self, scope: &SequenceScope) -> Result<SequenceNumber>;
}

/// Mutex-guarded in-process counters.
#[derive(Debug, Default)]
pub struct InMemorySequenceStore {
    counters: Mutex<HashMap<SequenceScope, u16>>,
}

impl InMemorySequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a scope's counter from persisted state, e.g. after restoring
    /// allocations recorded elsewhere. Later increments continue from
    /// `max(current, value)`.
    pub fn preload(&self, scope: SequenceScope, value: u16) {
        let mut counters = match self.counters.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let entry = counters.entry(scope).or_insert(0);
        *entry = (*entry).max(value.min(9999));
    }
}

impl SequenceStore for InMemorySequenceStore {
    fn increment(&self, scope: &SequenceScope) -> Result<SequenceNumber> {
        let mut counters = match self.counters.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let counter = counters.entry(scope.clone()).or_insert(0);
        if *counter >= 9999 {
            return Err(DdcError::SequenceExhausted {
                scope: scope.to_string(),
            });
        }
        *counter += 1;
        Ok(SequenceNumber::from_counter(*counter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn scope() -> SequenceScope {
        let admin = AdministrativeMatch::new("LA", "15").unwrap();
        let area = AreaIdentifier::new(AreaType::Zone, "1").unwrap();
        SequenceScope::new(&admin, &area)
    }

    #[test]
    fn first_allocation_is_0001() {
        let store = InMemorySequenceStore::new();
        assert_eq!(store.increment(&scope()).unwrap().as_str(), "0001");
        assert_eq!(store.increment(&scope()).unwrap().as_str(), "0002");
    }

    #[test]
    fn scopes_are_independent() {
        let store = InMemorySequenceStore::new();
        let other = SequenceScope::new(
            &AdministrativeMatch::new("FC", "01").unwrap(),
            &AreaIdentifier::new(AreaType::Zone, "1").unwrap(),
        );
        store.increment(&scope()).unwrap();
        store.increment(&scope()).unwrap();
        assert_eq!(store.increment(&other).unwrap().as_str(), "0001");
    }

    #[test]
    fn exhaustion_is_a_hard_failure() {
        let store = InMemorySequenceStore::new();
        store.preload(scope(), 9998);
        assert_eq!(store.increment(&scope()).unwrap().as_str(), "9999");
        let err = store.increment(&scope()).unwrap_err();
        assert!(matches!(err, DdcError::SequenceExhausted { .. }));
        // And stays failed.
        assert!(store.increment(&scope()).is_err());
    }

    #[test]
    fn concurrent_allocations_are_distinct() {
        let store = Arc::new(InMemorySequenceStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                (0..50)
                    .map(|_| store.increment(&scope()).unwrap().value())
                    .collect::<Vec<u16>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().unwrap() {
                assert!(seen.insert(value), "duplicate sequence value {value}");
            }
        }
        assert_eq!(seen.len(), 400);
    }

    #[test]
    fn scope_display_is_slash_separated() {
        assert_eq!(scope().to_string(), "LA/15/Z001");
    }
}
