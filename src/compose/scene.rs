use crate::{
    audit::chain::AuditRing,
    foundation::core::{Canvas, Point, Rgb8},
    layout::solver::LayoutMode,
    registry::stage::{StageDescriptor, StageId},
    shape::geometry::Geometry,
};

/// Tag shared by stages rendered as simultaneously active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct BlendGroupId(pub u32);

impl std::fmt::Display for BlendGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "blend-{}", self.0)
    }
}

/// A set of concurrently active stages and the color they mix to.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendGroup {
    pub id: BlendGroupId,
    /// Canonical pipeline order.
    pub members: Vec<StageId>,
    pub mix_color: Rgb8,
}

/// One resolved stage, ready to serialize.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedElement {
    pub stage: StageId,
    pub geometry: Geometry,
    pub position: Point,
    pub size: f64,
    pub scale: f64,
    /// Final opacity, blend attenuation included.
    pub opacity: f64,
    pub z_index: i32,
    pub blend_group: Option<BlendGroupId>,
}

impl RenderedElement {
    pub fn descriptor(&self) -> &'static StageDescriptor {
        self.stage.descriptor()
    }
}

/// The complete output of one render request.
///
/// `elements` is in draw order: later elements render on top of earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub canvas: Canvas,
    pub layout_mode: LayoutMode,
    pub elements: Vec<RenderedElement>,
    /// Innermost first.
    pub audit_rings: Vec<AuditRing>,
    pub audit_center: Point,
    pub blend_groups: Vec<BlendGroup>,
}

impl Scene {
    /// A scene with nothing on it; serializes to a bare canvas.
    pub fn empty(canvas: Canvas, layout_mode: LayoutMode) -> Self {
        Self {
            canvas,
            layout_mode,
            elements: Vec::new(),
            audit_rings: Vec::new(),
            audit_center: canvas.center(),
            blend_groups: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.audit_rings.is_empty()
    }

    pub fn element(&self, stage: StageId) -> Option<&RenderedElement> {
        self.elements.iter().find(|e| e.stage == stage)
    }

    pub fn blend_group(&self, id: BlendGroupId) -> Option<&BlendGroup> {
        self.blend_groups.iter().find(|g| g.id == id)
    }
}
