/// Sub-range access validation.
///
/// An access touches the byte range `[offset, offset + stride * element_count)`
/// of a buffer of `buffer_length` bytes. Operands are signed so the wrapper
/// layer can forward caller-provided values untouched; every negative operand
/// is rejected before any arithmetic, and the range end is computed with
/// checked arithmetic so overflow is a rejection rather than a wrap.

use std::ops::Range;

/// Check whether an `(offset, stride, element_count)` access fits in a buffer
///
/// Never panics and never allocates.
///
/// # Example
///
/// ```
/// use glint_core::glint::buffer::is_valid_access;
///
/// assert!(is_valid_access(0, 4, 4, 16));
/// assert!(!is_valid_access(1, 4, 4, 16));
/// assert!(!is_valid_access(-4, 4, 1, 16));
/// ```
pub const fn is_valid_access(
    offset: isize,
    stride: isize,
    element_count: isize,
    buffer_length: isize,
) -> bool {
    if offset < 0 || stride < 0 || element_count < 0 || buffer_length < 0 {
        return false;
    }
    let span = match stride.checked_mul(element_count) {
        Some(span) => span,
        None => return false,
    };
    let end = match offset.checked_add(span) {
        Some(end) => end,
        None => return false,
    };
    end <= buffer_length
}

/// Validated byte range of an access, ready for slicing
///
/// Returns `None` exactly when [`is_valid_access`] returns `false`.
pub fn access_range(
    offset: isize,
    stride: isize,
    element_count: isize,
    buffer_length: isize,
) -> Option<Range<usize>> {
    if !is_valid_access(offset, stride, element_count, buffer_length) {
        return None;
    }
    // All operands are non-negative and the product/sum did not overflow
    let start = offset as usize;
    let end = start + (stride as usize) * (element_count as usize);
    Some(start..end)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "access_tests.rs"]
mod tests;
