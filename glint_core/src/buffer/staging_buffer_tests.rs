use super::*;
use crate::error::Error;

// ============================================================================
// Creation
// ============================================================================

#[test]
fn test_new_is_zero_filled() {
    let buffer = StagingBuffer::new(16);
    assert_eq!(buffer.size(), 16);
    assert!(buffer.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_from_bytes_keeps_contents() {
    let buffer = StagingBuffer::from_bytes(vec![1, 2, 3]);
    assert_eq!(buffer.as_bytes(), &[1, 2, 3]);
    assert_eq!(buffer.into_bytes(), vec![1, 2, 3]);
}

// ============================================================================
// Raw access
// ============================================================================

#[test]
fn test_write_then_read_sub_range() {
    let mut buffer = StagingBuffer::new(16);
    buffer.write(4, 2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();

    assert_eq!(buffer.read(4, 2, 3).unwrap(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(&buffer.as_bytes()[..4], &[0, 0, 0, 0]);
    assert_eq!(&buffer.as_bytes()[10..], &[0; 6]);
}

#[test]
fn test_write_past_end_is_rejected_and_leaves_buffer_untouched() {
    let mut buffer = StagingBuffer::new(16);
    let result = buffer.write(1, 4, 4, &[0xFF; 16]);

    assert!(matches!(result, Err(Error::OutOfBounds(_))));
    assert!(buffer.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_negative_operands_are_rejected() {
    let mut buffer = StagingBuffer::new(16);
    assert!(buffer.read(-1, 1, 1).is_err());
    assert!(buffer.read(0, -1, 1).is_err());
    assert!(buffer.read(0, 1, -1).is_err());
    assert!(buffer.write(-4, -4, -1, &[0; 4]).is_err());
}

#[test]
fn test_data_length_must_match_span() {
    let mut buffer = StagingBuffer::new(16);
    let result = buffer.write(0, 4, 2, &[0; 4]);
    assert!(matches!(result, Err(Error::OutOfBounds(msg)) if msg.contains("doesn't match")));
}

#[test]
fn test_empty_read_at_end_is_valid() {
    let buffer = StagingBuffer::new(8);
    assert_eq!(buffer.read(8, 4, 0).unwrap(), &[] as &[u8]);
}

// ============================================================================
// Typed access
// ============================================================================

#[test]
fn test_typed_round_trip_at_unaligned_offset() {
    let mut buffer = StagingBuffer::new(32);
    buffer.write_elements(3, &[1.5f32, -2.0, 8.25]).unwrap();

    let values: Vec<f32> = buffer.read_elements(3, 3).unwrap();
    assert_eq!(values, vec![1.5, -2.0, 8.25]);
}

#[test]
fn test_typed_write_overflowing_buffer_is_rejected() {
    let mut buffer = StagingBuffer::new(8);
    assert!(buffer.write_elements(0, &[1u32, 2, 3]).is_err());
    assert!(buffer.read_elements::<u32>(4, 2).is_err());
    assert!(buffer.read_elements::<u32>(4, 1).is_ok());
}

#[test]
fn test_typed_access_of_vec3_positions() {
    let mut buffer = StagingBuffer::new(24);
    let positions = [glam::Vec3::new(1.0, 2.0, 3.0), glam::Vec3::new(-1.0, 0.0, 0.5)];
    buffer.write_elements(0, &positions).unwrap();

    let read: Vec<glam::Vec3> = buffer.read_elements(0, 2).unwrap();
    assert_eq!(read, positions.to_vec());
}
