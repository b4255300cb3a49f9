use crate::{
    animation::timing::MotionTiming,
    audit::chain::AuditRing,
    compose::scene::{BlendGroup, BlendGroupId, Scene},
    foundation::core::{Canvas, Point, Rgb8},
    layout::solver::LayoutMode,
    registry::stage::{MotionKind, ShapeKind, StageId},
};

/// Resolved visual attributes for one stage, for a client-side animation runtime.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StagePayload {
    pub stage: StageId,
    pub color: Rgb8,
    pub shape: ShapeKind,
    pub motion: MotionKind,
    pub position: Point,
    pub size: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_group: Option<BlendGroupId>,
    pub timing: MotionTiming,
}

/// The SVG document plus the same information as structured data.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub document: String,
    /// Hex xxh3-64 of `document`; equal documents share a fingerprint.
    pub fingerprint: String,
    pub canvas: Canvas,
    pub layout_mode: LayoutMode,
    /// Draw order.
    pub stages: Vec<StagePayload>,
    pub audit_rings: Vec<AuditRing>,
    pub audit_center: Point,
    pub blend_groups: Vec<BlendGroup>,
}

impl RenderResponse {
    pub fn from_scene(scene: Scene, document: String) -> Self {
        let stages = scene
            .elements
            .iter()
            .map(|e| {
                let d = e.descriptor();
                StagePayload {
                    stage: e.stage,
                    color: d.color,
                    shape: d.shape,
                    motion: d.motion,
                    position: e.position,
                    size: e.size,
                    scale: e.scale,
                    opacity: e.opacity,
                    z_index: e.z_index,
                    blend_group: e.blend_group,
                    timing: MotionTiming::for_motion(d.motion),
                }
            })
            .collect();
        Self {
            fingerprint: document_fingerprint(&document),
            document,
            canvas: scene.canvas,
            layout_mode: scene.layout_mode,
            stages,
            audit_rings: scene.audit_rings,
            audit_center: scene.audit_center,
            blend_groups: scene.blend_groups,
        }
    }
}

pub fn document_fingerprint(document: &str) -> String {
    format!("{:016x}", xxhash_rust::xxh3::xxh3_64(document.as_bytes()))
}
