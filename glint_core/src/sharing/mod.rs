//! Shared-resource lifetime tracking
//!
//! GPU objects shared by several context groups are reference counted by
//! name. The registry only counts; whoever observes the count reach zero
//! owns the teardown decision.

mod shared_resource_registry;

pub use shared_resource_registry::{SharedResourceRegistry, SharedResourceGuard};
