use super::*;

// ============================================================================
// Reference cases
// ============================================================================

#[test]
fn test_empty_access_on_empty_buffer() {
    assert!(is_valid_access(0, 0, 0, 0));
}

#[test]
fn test_exact_fit() {
    assert!(is_valid_access(0, 4, 4, 16));
}

#[test]
fn test_one_past_end() {
    assert!(!is_valid_access(1, 4, 4, 16));
}

#[test]
fn test_tail_access() {
    assert!(is_valid_access(12, 4, 1, 16));
    assert!(!is_valid_access(13, 4, 1, 16));
}

// ============================================================================
// Zero counts and strides
// ============================================================================

#[test]
fn test_zero_count_inside_buffer() {
    assert!(is_valid_access(0, 16, 0, 16));
    assert!(is_valid_access(16, 16, 0, 16));
}

#[test]
fn test_zero_count_past_end_is_invalid() {
    assert!(!is_valid_access(17, 4, 0, 16));
}

#[test]
fn test_zero_stride_touches_nothing() {
    assert!(is_valid_access(8, 0, 1000, 16));
}

// ============================================================================
// Negative operands
// ============================================================================

#[test]
fn test_any_negative_operand_is_rejected() {
    assert!(!is_valid_access(-1, 4, 1, 16));
    assert!(!is_valid_access(0, -4, 1, 16));
    assert!(!is_valid_access(0, 4, -1, 16));
    assert!(!is_valid_access(0, 0, 0, -1));
}

#[test]
fn test_negatives_cannot_cancel_out() {
    // -4 * -1 = 4 and -4 + 4 = 0 would look fine without the sign checks
    assert!(!is_valid_access(-4, -4, -1, 16));
    assert!(!is_valid_access(8, -4, -1, 16));
    assert!(!is_valid_access(20, 4, -2, 16));
}

// ============================================================================
// Overflow
// ============================================================================

#[test]
fn test_product_overflow_is_rejected() {
    assert!(!is_valid_access(0, isize::MAX, 2, isize::MAX));
    assert!(!is_valid_access(0, 1 << 40, 1 << 40, isize::MAX));
}

#[test]
fn test_sum_overflow_is_rejected() {
    assert!(!is_valid_access(isize::MAX, 1, 1, isize::MAX));
    assert!(is_valid_access(isize::MAX, 1, 0, isize::MAX));
}

#[test]
fn test_is_usable_in_const_context() {
    const VALID: bool = is_valid_access(0, 4, 2, 8);
    assert!(VALID);
}

// ============================================================================
// access_range
// ============================================================================

#[test]
fn test_access_range_matches_validation() {
    assert_eq!(access_range(4, 4, 2, 16), Some(4..12));
    assert_eq!(access_range(0, 0, 0, 0), Some(0..0));
    assert_eq!(access_range(1, 4, 4, 16), None);
    assert_eq!(access_range(-1, 4, 1, 16), None);
}
