use super::*;

#[test]
fn new_is_transparent_and_sized() {
    let b = Bitmap::new(3, 2);
    assert_eq!(b.data.len(), 3 * 2 * 4);
    assert!(b.data.iter().all(|&v| v == 0));
    assert!(!b.is_empty());
}

#[test]
fn zero_area_is_empty() {
    assert!(Bitmap::new(0, 5).is_empty());
    assert!(Bitmap::new(5, 0).is_empty());
}

#[test]
fn from_raw_validates_length() {
    assert!(Bitmap::from_raw(2, 2, vec![0u8; 16]).is_ok());
    let err = Bitmap::from_raw(2, 2, vec![0u8; 15]).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn offset_is_row_major() {
    let b = Bitmap::new(4, 4);
    assert_eq!(b.offset(0, 0), 0);
    assert_eq!(b.offset(3, 0), 12);
    assert_eq!(b.offset(0, 1), 16);
    assert_eq!(b.offset(2, 3), (3 * 4 + 2) * 4);
}
