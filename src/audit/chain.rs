use crate::foundation::error::{CanvasError, CanvasResult};

/// Radial distance between consecutive audit rings.
pub const RING_SPACING: f64 = 30.0;
/// Opacity of the innermost (most recent) ring.
pub const MAX_OPACITY: f64 = 0.9;
/// Per-level opacity multiplier, in `(0, 1)`.
pub const DECAY_FACTOR: f64 = 0.75;
/// Deepest chain the generator accepts.
pub const MAX_AUDIT_DEPTH: u32 = 64;
/// Stroke width of each ring outline.
pub const RING_STROKE: f64 = 2.0;

/// One historical audit pass, drawn as a concentric outline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AuditRing {
    /// 1-based; 1 is innermost and newest.
    pub level: u32,
    pub radius: f64,
    pub opacity: f64,
}

/// Build `depth` rings around a shared center, starting just outside `base_radius`.
///
/// `radius(k) = base_radius + k * RING_SPACING` and
/// `opacity(k) = MAX_OPACITY * DECAY_FACTOR^(k - 1)` for `k = 1..=depth`.
pub fn generate_chain(depth: u32, base_radius: f64) -> CanvasResult<Vec<AuditRing>> {
    if depth == 0 {
        return Err(CanvasError::NonPositiveDepth(depth));
    }
    if depth > MAX_AUDIT_DEPTH {
        return Err(CanvasError::validation(format!(
            "audit depth {depth} exceeds maximum {MAX_AUDIT_DEPTH}"
        )));
    }
    if !base_radius.is_finite() || base_radius < 0.0 {
        return Err(CanvasError::validation(format!(
            "audit base radius must be finite and >= 0, got {base_radius}"
        )));
    }

    let mut opacity = MAX_OPACITY;
    let rings = (1..=depth)
        .map(|level| {
            let ring = AuditRing {
                level,
                radius: base_radius + f64::from(level) * RING_SPACING,
                opacity,
            };
            opacity *= DECAY_FACTOR;
            ring
        })
        .collect();
    Ok(rings)
}

#[cfg(test)]
#[path = "../../tests/unit/audit/chain.rs"]
mod tests;
