use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert_eq!(
        TapewarpError::EmptyAnimation.to_string(),
        "empty animation: no frame patches supplied"
    );
    assert_eq!(
        TapewarpError::InvalidDimensions {
            width: 0,
            height: 9
        }
        .to_string(),
        "invalid dimensions: 0x9"
    );
    assert!(
        TapewarpError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TapewarpError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
