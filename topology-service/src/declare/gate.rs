//! Per-(kind, name) serialization of the declare-or-find window.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::{Mutex, OwnedMutexGuard};
use topology_model::ResourceKind;

struct GateSlot {
    ref_count: usize,
    lock: Arc<Mutex<()>>,
}

/// Refcounted registry of per-name declare locks.
///
/// The declare protocol's check-then-act sequence suspends at every
/// collaborator call, so two concurrent declares of one name could both
/// observe "not found" and both create. Holding a [`DeclareGuard`] across
/// the reverse-lookup-through-persist window closes that race; declares of
/// different names proceed independently. Slots are dropped at refcount
/// zero so the map does not grow with the set of names ever declared.
pub(crate) struct DeclareGate {
    slots: Arc<StdMutex<HashMap<(ResourceKind, String), GateSlot>>>,
}

impl DeclareGate {
    pub(crate) fn new() -> Self {
        Self {
            slots: Arc::new(StdMutex::new(HashMap::new())),
        }
    }

    /// Acquires the lock for `(kind, name)`, waiting for an in-flight
    /// declare of the same name to finish first.
    pub(crate) async fn acquire(&self, kind: ResourceKind, name: &str) -> DeclareGuard {
        let key = (kind, name.to_string());
        let lock = {
            let mut slots = self.slots.lock().expect("declare gate poisoned");
            let slot = slots.entry(key.clone()).or_insert_with(|| GateSlot {
                ref_count: 0,
                lock: Arc::new(Mutex::new(())),
            });
            slot.ref_count += 1;
            slot.lock.clone()
        };

        let permit = lock.lock_owned().await;
        DeclareGuard {
            slots: self.slots.clone(),
            key,
            _permit: permit,
        }
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.lock().expect("declare gate poisoned").len()
    }
}

/// Held for the duration of one declare; releasing it wakes the next
/// declare of the same name.
pub(crate) struct DeclareGuard {
    slots: Arc<StdMutex<HashMap<(ResourceKind, String), GateSlot>>>,
    key: (ResourceKind, String),
    _permit: OwnedMutexGuard<()>,
}

impl Drop for DeclareGuard {
    fn drop(&mut self) {
        let mut slots = self.slots.lock().expect("declare gate poisoned");
        if let Some(slot) = slots.get_mut(&self.key) {
            slot.ref_count -= 1;
            if slot.ref_count == 0 {
                slots.remove(&self.key);
            }
        }
    }
}
