use std::f64::consts::TAU;

use crate::{
    foundation::core::{Canvas, Point},
    foundation::error::{CanvasError, CanvasResult},
    registry::stage::StageId,
};

/// Radius of the radial ring, as a fraction of the canvas's shorter side.
pub const RADIAL_RADIUS_FRACTION: f64 = 0.28;

/// Spatial arrangement of stages on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Evenly spaced along a horizontal line through the vertical center.
    #[default]
    Linear,
    /// Evenly spaced around the canvas center. The first stage sits at 12 o'clock and
    /// later stages follow clockwise.
    Radial,
}

impl LayoutMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
        }
    }
}

/// Positions for an ordered set of stages.
#[derive(Clone, Debug, PartialEq)]
pub struct StageLayout {
    pub mode: LayoutMode,
    pub canvas: Canvas,
    /// Stage positions in canonical pipeline order.
    pub slots: Vec<(StageId, Point)>,
    /// Center of the occupied region; audit rings are concentric about it.
    pub center: Point,
}

impl StageLayout {
    pub fn position_of(&self, id: StageId) -> Option<Point> {
        self.slots.iter().find(|(s, _)| *s == id).map(|(_, p)| *p)
    }

    pub fn stages(&self) -> impl Iterator<Item = StageId> + '_ {
        self.slots.iter().map(|(s, _)| *s)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Sort `ids` into pipeline order, rejecting empty input and duplicates.
pub fn canonicalize(ids: &[StageId]) -> CanvasResult<Vec<StageId>> {
    if ids.is_empty() {
        return Err(CanvasError::EmptyStageSet);
    }
    let mut out = ids.to_vec();
    out.sort_unstable();
    if let Some(w) = out.windows(2).find(|w| w[0] == w[1]) {
        return Err(CanvasError::validation(format!(
            "stage '{}' requested more than once",
            w[0]
        )));
    }
    Ok(out)
}

/// Place `stage_ids` on `canvas` under `mode`.
///
/// Input order does not matter: stages are laid out in canonical pipeline order.
pub fn layout(
    stage_ids: &[StageId],
    mode: LayoutMode,
    canvas: Canvas,
) -> CanvasResult<StageLayout> {
    canvas.validate()?;
    let ids = canonicalize(stage_ids)?;
    let n = ids.len() as f64;

    let (slots, center) = match mode {
        LayoutMode::Linear => {
            let spacing = canvas.width_f64() / (n + 1.0);
            let y = canvas.height_f64() * 0.5;
            let slots: Vec<(StageId, Point)> = ids
                .iter()
                .enumerate()
                .map(|(i, &id)| (id, Point::new(spacing * (i as f64 + 1.0), y)))
                .collect();
            let first = slots[0].1;
            let last = slots[slots.len() - 1].1;
            (slots, first.midpoint(last))
        }
        LayoutMode::Radial => {
            let center = canvas.center();
            let radius = canvas.min_side() * RADIAL_RADIUS_FRACTION;
            let slots = ids
                .iter()
                .enumerate()
                .map(|(i, &id)| {
                    let theta = TAU * i as f64 / n;
                    (
                        id,
                        Point::new(
                            center.x + radius * theta.sin(),
                            center.y - radius * theta.cos(),
                        ),
                    )
                })
                .collect();
            (slots, center)
        }
    };

    tracing::debug!(mode = mode.as_str(), stages = ids.len(), "layout resolved");
    Ok(StageLayout {
        mode,
        canvas,
        slots,
        center,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
