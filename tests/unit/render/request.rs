use super::*;

#[test]
fn empty_object_uses_defaults() {
    let req = RenderRequest::from_json_str("{}").unwrap();
    assert_eq!(req, RenderRequest::default());
    assert_eq!(req.stages.len(), 8);
    assert_eq!((req.canvas_width, req.canvas_height), (1200, 800));
    assert_eq!(req.layout_mode, LayoutMode::Linear);
}

#[test]
fn camel_case_fields_parse() {
    let req = RenderRequest::from_json_str(
        r##"{
            "stages": ["observation", "audit"],
            "layoutMode": "radial",
            "canvasWidth": 640,
            "canvasHeight": 480,
            "auditDepth": 2,
            "perStageIntensity": { "audit": 1.0 },
            "concurrent": [["observation", "audit"]],
            "document": { "background": "#000000" }
        }"##,
    )
    .unwrap();
    assert_eq!(req.layout_mode, LayoutMode::Radial);
    assert_eq!(req.audit_depth, 2);
    assert_eq!(req.document.title, SerializeOpts::default().title);

    let resolved = req.resolve().unwrap();
    assert_eq!(resolved.stages, vec![StageId::Observation, StageId::Audit]);
    assert_eq!(resolved.canvas, Canvas::new(640, 480).unwrap());
    assert_eq!(resolved.compose.intensities.get(&StageId::Audit), Some(&1.0));
    assert_eq!(
        resolved.compose.concurrent,
        vec![vec![StageId::Observation, StageId::Audit]]
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let err = RenderRequest::from_json_str(r#"{"stagez": []}"#).unwrap_err();
    assert!(matches!(err, CanvasError::Serde(_)));
}

#[test]
fn unknown_names_surface_as_unknown_stage() {
    let mut req = RenderRequest {
        stages: vec!["observation".to_owned(), "nonexistent".to_owned()],
        ..RenderRequest::default()
    };
    assert!(matches!(
        req.validate().unwrap_err(),
        CanvasError::UnknownStage(ref s) if s == "nonexistent"
    ));

    req.stages = vec!["observation".to_owned()];
    req.per_stage_intensity.insert("bogus".to_owned(), 0.5);
    assert!(matches!(
        req.validate().unwrap_err(),
        CanvasError::UnknownStage(_)
    ));
}

#[test]
fn zero_canvas_fails_validation() {
    let req = RenderRequest {
        canvas_width: 0,
        ..RenderRequest::default()
    };
    assert!(matches!(
        req.validate().unwrap_err(),
        CanvasError::Validation(_)
    ));
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = RenderRequest::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open render request"));
}
