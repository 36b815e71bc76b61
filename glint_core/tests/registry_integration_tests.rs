//! Integration tests for shared resource tracking across context groups
//!
//! Run with: cargo test --test registry_integration_tests

use glint_core::glint::sharing::{SharedResourceGuard, SharedResourceRegistry};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// A context group holding guards on the resources it uses
struct ContextGroup {
    guards: Vec<SharedResourceGuard>,
}

impl ContextGroup {
    fn new(registry: &Arc<SharedResourceRegistry>, resources: &[&str]) -> Self {
        Self {
            guards: resources.iter().map(|name| registry.acquire(name)).collect(),
        }
    }

    /// Release every resource, returning the ones this group released last
    fn shutdown(self) -> Vec<String> {
        let mut last = Vec::new();
        for guard in self.guards {
            let name = guard.name().to_string();
            if guard.release() == Some(0) {
                last.push(name);
            }
        }
        last
    }
}

#[test]
fn test_integration_shared_texture_destroyed_by_last_group() {
    let registry = Arc::new(SharedResourceRegistry::new());

    let editor = ContextGroup::new(&registry, &["atlas", "editor_fbo"]);
    let preview = ContextGroup::new(&registry, &["atlas", "preview_fbo"]);
    assert_eq!(registry.count("atlas"), 2);

    assert_eq!(editor.shutdown(), vec!["editor_fbo".to_string()]);
    assert!(registry.is_held("atlas"));

    assert_eq!(preview.shutdown(), vec!["atlas".to_string(), "preview_fbo".to_string()]);
    assert!(registry.held_names().is_empty());
}

#[test]
fn test_integration_each_resource_destroyed_exactly_once() {
    const GROUPS: usize = 16;
    const RESOURCES: [&str; 4] = ["atlas", "sampler", "shader", "fbo"];

    let registry = Arc::new(SharedResourceRegistry::new());
    let destroyed = Mutex::new(Vec::new());

    // Every group acquires before anyone releases
    let groups: Vec<ContextGroup> = (0..GROUPS)
        .map(|_| ContextGroup::new(&registry, &RESOURCES))
        .collect();

    thread::scope(|scope| {
        for group in groups {
            let destroyed = &destroyed;
            scope.spawn(move || {
                let released_last = group.shutdown();
                destroyed.lock().unwrap().extend(released_last);
            });
        }
    });

    let mut destroyed = destroyed.into_inner().unwrap();
    destroyed.sort();
    assert_eq!(destroyed, vec!["atlas", "fbo", "sampler", "shader"]);
    for name in RESOURCES {
        assert_eq!(registry.count(name), 0);
    }
}

#[test]
fn test_integration_concurrent_increments_on_many_names() {
    const THREADS: usize = 8;
    const ITERATIONS: usize = 2000;

    let registry = SharedResourceRegistry::new();
    let total = AtomicUsize::new(0);

    thread::scope(|scope| {
        for t in 0..THREADS {
            let registry = &registry;
            let total = &total;
            scope.spawn(move || {
                for i in 0..ITERATIONS {
                    registry.increment(&format!("name_{}", (t + i) % 5));
                    total.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });

    let counted: u32 = (0..5).map(|n| registry.count(&format!("name_{}", n))).sum();
    assert_eq!(counted as usize, THREADS * ITERATIONS);
    assert_eq!(total.load(Ordering::Relaxed), THREADS * ITERATIONS);
}
