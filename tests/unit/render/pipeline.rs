use super::*;
use crate::foundation::core::Point;

fn req(stages: &[&str]) -> RenderRequest {
    RenderRequest {
        stages: stages.iter().map(|s| (*s).to_owned()).collect(),
        ..RenderRequest::default()
    }
}

#[test]
fn render_default_request_covers_every_stage() {
    let res = render(&RenderRequest::default()).unwrap();
    assert_eq!(res.stages.len(), 8);
    assert!(res.document.starts_with("<?xml"));
    assert_eq!(res.fingerprint.len(), 16);
    assert_eq!(
        res.fingerprint,
        crate::render::response::document_fingerprint(&res.document)
    );

    let z: Vec<i32> = res.stages.iter().map(|s| s.z_index).collect();
    let mut sorted = z.clone();
    sorted.sort();
    assert_eq!(z, sorted);
}

#[test]
fn payload_mirrors_registry_attributes() {
    let res = render(&req(&["revision"])).unwrap();
    let p = &res.stages[0];
    assert_eq!(p.stage, StageId::Revision);
    assert_eq!(p.color.to_hex(), "#28a745");
    assert_eq!(p.timing.motion, p.motion);
    assert_eq!(p.position, Point::new(600.0, 400.0));
    assert_eq!(p.blend_group, None);
}

#[test]
fn render_is_deterministic() {
    let mut r = req(&["observation", "testing", "propagation"]);
    r.audit_depth = 4;
    r.concurrent = vec![vec!["observation".to_owned(), "propagation".to_owned()]];
    let a = render(&r).unwrap();
    let b = render(&r).unwrap();
    assert_eq!(a.document, b.document);
    assert_eq!(a.fingerprint, b.fingerprint);
}

#[test]
fn payload_serializes_camel_case() {
    let mut r = req(&["observation", "audit"]);
    r.concurrent = vec![vec!["observation".to_owned(), "audit".to_owned()]];
    let res = render(&r).unwrap();
    let v = serde_json::to_value(&res).unwrap();
    assert_eq!(v["layoutMode"], "linear");
    assert_eq!(v["stages"][0]["zIndex"], 0);
    assert_eq!(v["stages"][0]["blendGroup"], 0);
    assert_eq!(v["blendGroups"][0]["mixColor"], "#646886");
}

#[test]
fn stage_fragment_for_single_stage() {
    let frag = render_stage_fragment("propagation", Canvas::default()).unwrap();
    assert!(frag.contains(r#"data-stage="propagation""#));
    assert!(!frag.contains("<?xml"));
    assert!(matches!(
        render_stage_fragment("nope", Canvas::default()).unwrap_err(),
        CanvasError::UnknownStage(_)
    ));
}

#[test]
fn batch_matches_serial_and_keeps_order() {
    let reqs = vec![
        req(&["observation"]),
        req(&["nonexistent"]),
        RenderRequest {
            layout_mode: LayoutMode::Radial,
            audit_depth: 3,
            ..RenderRequest::default()
        },
    ];
    let out = render_batch(&reqs, &RenderBatchOpts { threads: Some(2) }).unwrap();
    assert_eq!(out.len(), 3);
    assert_eq!(
        out[0].as_ref().unwrap().document,
        render(&reqs[0]).unwrap().document
    );
    assert!(matches!(out[1], Err(CanvasError::UnknownStage(_))));
    assert_eq!(
        out[2].as_ref().unwrap().fingerprint,
        render(&reqs[2]).unwrap().fingerprint
    );
}

#[test]
fn batch_rejects_zero_threads() {
    let err = render_batch(&[], &RenderBatchOpts { threads: Some(0) }).unwrap_err();
    assert!(err.to_string().contains("threads"));
}
