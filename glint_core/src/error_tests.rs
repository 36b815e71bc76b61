//! Unit tests for error.rs
//!
//! Tests all Error variants, their trait implementations and the
//! engine_err!/engine_bail! macros.

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_out_of_bounds_display() {
    let err = Error::OutOfBounds("offset 20 exceeds size 16".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Out of bounds"));
    assert!(display.contains("offset 20 exceeds size 16"));
}

#[test]
fn test_invalid_mesh_display() {
    let err = Error::InvalidMesh("index 9 out of range".to_string());
    let display = format!("{}", err);
    assert_eq!(display, "Invalid mesh: index 9 out of range");
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("Texture not found".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid resource"));
    assert!(display.contains("Texture not found"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::OutOfBounds("x".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug1 = format!("{:?}", Error::OutOfBounds("a".to_string()));
    assert!(debug1.contains("OutOfBounds"));

    let debug2 = format!("{:?}", Error::InvalidMesh("b".to_string()));
    assert!(debug2.contains("InvalidMesh"));

    let debug3 = format!("{:?}", Error::InvalidResource("c".to_string()));
    assert!(debug3.contains("InvalidResource"));
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::InvalidMesh("test".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::InvalidResource("test".to_string()));
}

// ============================================================================
// ERROR PROPAGATION TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<i32> {
        Err(Error::OutOfBounds("inner".to_string()))
    }

    fn outer() -> Result<i32> {
        inner()?;
        Ok(42)
    }

    assert_eq!(outer(), Err(Error::OutOfBounds("inner".to_string())));
}

// ============================================================================
// MACRO TESTS
// ============================================================================

#[test]
fn test_engine_err_defaults_to_invalid_resource() {
    let err = crate::engine_err!("glint::Test", "resource {} missing", "albedo");
    assert_eq!(err, Error::InvalidResource("resource albedo missing".to_string()));
}

#[test]
fn test_engine_err_with_variant() {
    let err = crate::engine_err!(InvalidMesh => "glint::Test", "bad count {}", 7);
    assert_eq!(err, Error::InvalidMesh("bad count 7".to_string()));
}

#[test]
fn test_engine_bail_returns_early() {
    fn check(value: i32) -> Result<i32> {
        if value < 0 {
            crate::engine_bail!(OutOfBounds => "glint::Test", "negative value {}", value);
        }
        Ok(value * 2)
    }

    assert_eq!(check(4), Ok(8));
    assert_eq!(check(-1), Err(Error::OutOfBounds("negative value -1".to_string())));
}
