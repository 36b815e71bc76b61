/// CPU-side staging buffer.
///
/// A fixed-size byte buffer mirroring the mapped memory handed to the
/// upload layer. Every read and write goes through `is_valid_access`, so
/// signed, caller-provided `(offset, stride, element_count)` triples can be
/// forwarded without pre-checking.

use bytemuck::Pod;
use crate::buffer::access::access_range;
use crate::engine_bail;
use crate::error::Result;

const SOURCE: &str = "glint::StagingBuffer";

/// Fixed-size byte buffer with bounds-checked sub-range access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingBuffer {
    data: Vec<u8>,
}

impl StagingBuffer {
    /// Create a zero-filled buffer of `size` bytes
    pub fn new(size: usize) -> Self {
        Self { data: vec![0; size] }
    }

    /// Wrap existing bytes (the size is fixed from here on)
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Total size in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Whole buffer contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn checked_range(
        &self,
        offset: isize,
        stride: isize,
        element_count: isize,
    ) -> Result<std::ops::Range<usize>> {
        // A Vec never holds more than isize::MAX bytes
        let length = self.data.len() as isize;
        match access_range(offset, stride, element_count, length) {
            Some(range) => Ok(range),
            None => engine_bail!(OutOfBounds => SOURCE,
                "Access (offset {}, stride {}, count {}) exceeds buffer size {}",
                offset, stride, element_count, length),
        }
    }

    // ===== RAW ACCESS =====

    /// Copy `data` into `element_count` elements of `stride` bytes at `offset`
    ///
    /// `data` must cover the accessed span exactly.
    pub fn write(&mut self, offset: isize, stride: isize, element_count: isize, data: &[u8]) -> Result<()> {
        let range = self.checked_range(offset, stride, element_count)?;
        if data.len() != range.len() {
            engine_bail!(OutOfBounds => SOURCE,
                "Data size {} doesn't match accessed span {}", data.len(), range.len());
        }
        self.data[range].copy_from_slice(data);
        Ok(())
    }

    /// Borrow `element_count` elements of `stride` bytes at `offset`
    pub fn read(&self, offset: isize, stride: isize, element_count: isize) -> Result<&[u8]> {
        let range = self.checked_range(offset, stride, element_count)?;
        Ok(&self.data[range])
    }

    // ===== TYPED ACCESS =====

    /// Write a slice of plain-old-data elements at `offset`
    pub fn write_elements<T: Pod>(&mut self, offset: isize, elements: &[T]) -> Result<()> {
        let (stride, count) = typed_span::<T>(elements.len())?;
        self.write(offset, stride, count, bytemuck::cast_slice(elements))
    }

    /// Read `count` plain-old-data elements starting at `offset`
    pub fn read_elements<T: Pod>(&self, offset: isize, count: usize) -> Result<Vec<T>> {
        let (stride, element_count) = typed_span::<T>(count)?;
        let bytes = self.read(offset, stride, element_count)?;
        // Offsets are arbitrary, so elements may be unaligned
        Ok(bytes
            .chunks_exact(stride as usize)
            .map(bytemuck::pod_read_unaligned)
            .collect())
    }
}

/// Stride and count of a typed access as signed operands
fn typed_span<T: Pod>(count: usize) -> Result<(isize, isize)> {
    let size = std::mem::size_of::<T>();
    if size == 0 {
        engine_bail!(InvalidResource => SOURCE, "Zero-sized element type");
    }
    match (isize::try_from(size), isize::try_from(count)) {
        (Ok(stride), Ok(count)) => Ok((stride, count)),
        _ => engine_bail!(OutOfBounds => SOURCE, "Element count {} too large", count),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "staging_buffer_tests.rs"]
mod tests;
