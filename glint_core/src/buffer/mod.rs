//! Buffer sub-range access
//!
//! Bounds validation for `(offset, stride, element count)` accesses and a
//! CPU staging buffer that routes every access through it.

pub mod access;
pub mod staging_buffer;

pub use access::{is_valid_access, access_range};
pub use staging_buffer::StagingBuffer;
