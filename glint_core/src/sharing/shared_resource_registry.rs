//! Named reference counts for resources shared across context groups.
//!
//! Each name maps to its own atomic counter. The map lock is only taken for
//! writing when a name is seen for the first time (or on purge), so
//! increments and decrements on known names never block each other.
//!
//! Counts never go negative. Decrementing an unknown name, or a name already
//! at zero, is a silent no-op: release paths may race and cannot always know
//! whether they are the last owner.
//!
//! "Reached zero" is advisory. Another owner may increment right after the
//! decrement that observed zero, so callers that destroy the GPU object must
//! hold their own mutual exclusion around check-then-destroy.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use glint_core::glint::sharing::SharedResourceRegistry;
//!
//! let registry = Arc::new(SharedResourceRegistry::new());
//! registry.increment("shadow_map");
//! {
//!     let _guard = registry.acquire("shadow_map");
//!     assert_eq!(registry.count("shadow_map"), 2);
//! }
//! assert_eq!(registry.decrement("shadow_map"), Some(0));
//! assert_eq!(registry.decrement("unknown"), None);
//! ```

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use rustc_hash::FxHashMap;

const SOURCE: &str = "glint::SharedResourceRegistry";

// ============================================================================
// REGISTRY
// ============================================================================

/// Thread-safe map from resource name to reference count
///
/// Entries are created on first increment and kept at zero once released,
/// until [`SharedResourceRegistry::purge_released`] drops them.
#[derive(Debug, Default)]
pub struct SharedResourceRegistry {
    counts: RwLock<FxHashMap<String, AtomicU32>>,
}

impl SharedResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Counters stay consistent even if a holder of the map lock panicked,
    // so a poisoned lock is simply recovered.

    fn read_counts(&self) -> std::sync::RwLockReadGuard<'_, FxHashMap<String, AtomicU32>> {
        self.counts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_counts(&self) -> std::sync::RwLockWriteGuard<'_, FxHashMap<String, AtomicU32>> {
        self.counts.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add one reference, creating the entry if needed. Returns the new count.
    ///
    /// Saturates at `u32::MAX`.
    pub fn increment(&self, name: &str) -> u32 {
        {
            let counts = self.read_counts();
            if let Some(counter) = counts.get(name) {
                return add_one(counter, name);
            }
        }

        let mut counts = self.write_counts();
        // Another thread may have inserted the name between the two locks
        let counter = counts
            .entry(name.to_string())
            .or_insert_with(|| AtomicU32::new(0));
        add_one(counter, name)
    }

    /// Remove one reference
    ///
    /// Returns `Some(new_count)` when a reference was removed, `None` when the
    /// name is unknown or already at zero (nothing changes in that case).
    /// `Some(0)` means this call released the last reference.
    pub fn decrement(&self, name: &str) -> Option<u32> {
        let counts = self.read_counts();
        let Some(counter) = counts.get(name) else {
            crate::engine_trace!(SOURCE, "Decrement of unknown resource '{}' ignored", name);
            return None;
        };

        match counter.fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| count.checked_sub(1)) {
            Ok(previous) => {
                let count = previous - 1;
                if count == 0 {
                    crate::engine_debug!(SOURCE, "Resource '{}' released by all owners", name);
                }
                Some(count)
            }
            Err(_) => {
                crate::engine_trace!(SOURCE, "Decrement of released resource '{}' ignored", name);
                None
            }
        }
    }

    /// Current count, 0 for unknown names
    pub fn count(&self, name: &str) -> u32 {
        self.read_counts()
            .get(name)
            .map_or(0, |counter| counter.load(Ordering::Acquire))
    }

    /// Whether at least one owner holds the resource
    pub fn is_held(&self, name: &str) -> bool {
        self.count(name) > 0
    }

    /// Number of tracked names, including released ones kept at zero
    pub fn len(&self) -> usize {
        self.read_counts().len()
    }

    /// Whether no name is tracked
    pub fn is_empty(&self) -> bool {
        self.read_counts().is_empty()
    }

    /// Names currently held by at least one owner, sorted
    pub fn held_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .read_counts()
            .iter()
            .filter(|(_, counter)| counter.load(Ordering::Acquire) > 0)
            .map(|(name, _)| name.clone())
            .collect();
        names.sort_unstable();
        names
    }

    /// Drop entries whose count is zero. Returns how many were removed.
    pub fn purge_released(&self) -> usize {
        let mut counts = self.write_counts();
        let before = counts.len();
        counts.retain(|_, counter| counter.load(Ordering::Acquire) > 0);
        let removed = before - counts.len();
        if removed > 0 {
            crate::engine_debug!(SOURCE, "Purged {} released entries", removed);
        }
        removed
    }

    // ===== SCOPED ACQUISITION =====

    /// Increment `name` and return a guard that decrements it when dropped
    pub fn acquire(self: &Arc<Self>, name: &str) -> SharedResourceGuard {
        self.increment(name);
        SharedResourceGuard {
            registry: Some(Arc::clone(self)),
            name: name.to_string(),
        }
    }
}

fn add_one(counter: &AtomicU32, name: &str) -> u32 {
    match counter.fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| count.checked_add(1)) {
        Ok(previous) => previous + 1,
        Err(count) => {
            crate::engine_warn!(SOURCE, "Reference count of '{}' saturated", name);
            count
        }
    }
}

// ============================================================================
// GUARD
// ============================================================================

/// One reference held on a named resource
///
/// Created by [`SharedResourceRegistry::acquire`]. The reference is released
/// exactly once: explicitly via [`SharedResourceGuard::release`] or on drop.
#[derive(Debug)]
pub struct SharedResourceGuard {
    registry: Option<Arc<SharedResourceRegistry>>,
    name: String,
}

impl SharedResourceGuard {
    /// Name of the held resource
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Release now, returning what [`SharedResourceRegistry::decrement`] returned
    ///
    /// `Some(0)` means this guard held the last reference.
    pub fn release(mut self) -> Option<u32> {
        self.registry
            .take()
            .and_then(|registry| registry.decrement(&self.name))
    }
}

impl Drop for SharedResourceGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.take() {
            registry.decrement(&self.name);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "shared_resource_registry_tests.rs"]
mod tests;
