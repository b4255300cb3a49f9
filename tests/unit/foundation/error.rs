use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CanvasError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CanvasError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(CanvasError::export("x").to_string().contains("export error:"));
    assert!(
        CanvasError::NonPositiveDepth(0)
            .to_string()
            .contains("depth must be >= 1")
    );
}

#[test]
fn unknown_stage_lists_valid_names() {
    let msg = CanvasError::unknown_stage("nonexistent").to_string();
    assert!(msg.contains("unknown stage 'nonexistent'"));
    assert!(msg.contains("observation"));
    assert!(msg.contains("audit"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CanvasError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
