use std::collections::BTreeMap;

use crate::{
    audit::chain::generate_chain,
    compose::blend::{BLEND_OPACITY_FACTOR, resolve_blend_groups},
    compose::scene::{RenderedElement, Scene},
    foundation::core::{Canvas, Point},
    foundation::error::{CanvasError, CanvasResult},
    foundation::math::is_unit,
    layout::solver::{LayoutMode, layout},
    registry::stage::StageId,
    shape::resolve::resolve,
};

/// Intensity used for stages without an override: the midpoint of every range.
pub const DEFAULT_INTENSITY: f64 = 0.5;
/// Minimum audit base radius, as a fraction of the canvas's shorter side.
pub const AUDIT_BASE_FRACTION: f64 = 0.35;

/// Optional inputs to [`compose_with`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComposeOpts {
    /// Number of audit rings; `0` draws none.
    pub audit_depth: u32,
    /// Per-stage intensity in `[0, 1]`, replacing [`DEFAULT_INTENSITY`].
    pub intensities: BTreeMap<StageId, f64>,
    /// Groups of stages marked as simultaneously active.
    pub concurrent: Vec<Vec<StageId>>,
}

/// Compose `stage_ids` into a scene with default intensities and no blend groups.
pub fn compose(
    stage_ids: &[StageId],
    layout_mode: LayoutMode,
    canvas: Canvas,
    audit_depth: u32,
) -> CanvasResult<Scene> {
    let opts = ComposeOpts {
        audit_depth,
        ..ComposeOpts::default()
    };
    compose_with(stage_ids, layout_mode, canvas, &opts)
}

/// [`compose`] over stage names; any unknown name fails the whole call.
pub fn compose_named<S: AsRef<str>>(
    names: &[S],
    layout_mode: LayoutMode,
    canvas: Canvas,
    audit_depth: u32,
) -> CanvasResult<Scene> {
    let ids = parse_stage_names(names)?;
    compose(&ids, layout_mode, canvas, audit_depth)
}

pub(crate) fn parse_stage_names<S: AsRef<str>>(names: &[S]) -> CanvasResult<Vec<StageId>> {
    names.iter().map(|n| n.as_ref().parse()).collect()
}

/// Build a scene: lay out stages, resolve their shapes, tag blend groups, add audit rings,
/// then order elements by z-index (stable, so ties keep pipeline order).
#[tracing::instrument(skip(opts), fields(audit_depth = opts.audit_depth))]
pub fn compose_with(
    stage_ids: &[StageId],
    layout_mode: LayoutMode,
    canvas: Canvas,
    opts: &ComposeOpts,
) -> CanvasResult<Scene> {
    let layout = layout(stage_ids, layout_mode, canvas)?;

    for (&stage, &intensity) in &opts.intensities {
        if layout.position_of(stage).is_none() {
            return Err(CanvasError::validation(format!(
                "intensity override for stage '{stage}' which is not being rendered"
            )));
        }
        if !is_unit(intensity) {
            return Err(CanvasError::InvalidIntensity(intensity));
        }
    }

    let (blend_groups, membership) = resolve_blend_groups(&opts.concurrent, &layout)?;

    let mut elements = Vec::with_capacity(layout.len());
    for &(stage, position) in &layout.slots {
        let desc = stage.descriptor();
        let intensity = opts
            .intensities
            .get(&stage)
            .copied()
            .unwrap_or(DEFAULT_INTENSITY);
        let shape = resolve(desc, position, intensity)?;
        let blend_group = membership.get(&stage).copied();
        let opacity = match blend_group {
            Some(_) => shape.opacity * BLEND_OPACITY_FACTOR,
            None => shape.opacity,
        };
        elements.push(RenderedElement {
            stage,
            geometry: shape.geometry,
            position,
            size: shape.size,
            scale: shape.scale,
            opacity,
            z_index: desc.z_index,
            blend_group,
        });
    }

    let audit_center = layout.center;
    let audit_rings = if opts.audit_depth > 0 {
        let base = audit_base_radius(canvas, audit_center, &elements);
        generate_chain(opts.audit_depth, base)?
    } else {
        Vec::new()
    };

    elements.sort_by_key(|e| e.z_index);

    tracing::debug!(
        elements = elements.len(),
        rings = audit_rings.len(),
        blend_groups = blend_groups.len(),
        "scene composed"
    );
    Ok(Scene {
        canvas,
        layout_mode,
        elements,
        audit_rings,
        audit_center,
        blend_groups,
    })
}

/// Smallest radius that keeps every element inside the innermost ring, but never tighter
/// than [`AUDIT_BASE_FRACTION`] of the canvas.
fn audit_base_radius(canvas: Canvas, center: Point, elements: &[RenderedElement]) -> f64 {
    let extent = elements
        .iter()
        .map(|e| {
            let b = e.geometry.bounding_box();
            [
                Point::new(b.x0, b.y0),
                Point::new(b.x1, b.y0),
                Point::new(b.x0, b.y1),
                Point::new(b.x1, b.y1),
            ]
            .into_iter()
            .map(|p| p.distance(center))
            .fold(0.0, f64::max)
        })
        .fold(0.0, f64::max);
    (canvas.min_side() * AUDIT_BASE_FRACTION).max(extent)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
