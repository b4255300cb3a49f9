//! Static blend tagging for concurrently active stages.
//!
//! Members of a group keep their own geometry and color. Each member's opacity is scaled by
//! [`BLEND_OPACITY_FACTOR`], the serializer paints members with [`BLEND_MODE`], and the group
//! carries a mix color: the per-channel mean of the members' colors, rounded half up.

use std::collections::BTreeMap;

use crate::{
    compose::scene::{BlendGroup, BlendGroupId},
    foundation::core::Rgb8,
    foundation::error::{CanvasError, CanvasResult},
    layout::solver::StageLayout,
    registry::stage::StageId,
};

pub const BLEND_OPACITY_FACTOR: f64 = 0.75;
/// CSS `mix-blend-mode` used for group members.
pub const BLEND_MODE: &str = "screen";

/// Validate caller groups against the laid-out stages and assign ids.
///
/// Groups with fewer than two members carry no interaction and are dropped.
pub(crate) fn resolve_blend_groups(
    groups: &[Vec<StageId>],
    layout: &StageLayout,
) -> CanvasResult<(Vec<BlendGroup>, BTreeMap<StageId, BlendGroupId>)> {
    let mut out = Vec::new();
    let mut membership = BTreeMap::new();

    for group in groups {
        let mut members = group.clone();
        members.sort_unstable();
        members.dedup();
        if members.len() < 2 {
            tracing::debug!(?members, "ignoring blend group with fewer than two stages");
            continue;
        }

        let id = BlendGroupId(out.len() as u32);
        for &stage in &members {
            if layout.position_of(stage).is_none() {
                return Err(CanvasError::validation(format!(
                    "blend group names stage '{stage}' which is not being rendered"
                )));
            }
            if let Some(prev) = membership.insert(stage, id) {
                return Err(CanvasError::validation(format!(
                    "stage '{stage}' is in more than one blend group ({prev} and {id})"
                )));
            }
        }

        let colors: Vec<Rgb8> = members.iter().map(|s| s.descriptor().color).collect();
        let mix_color = Rgb8::mean(&colors)
            .ok_or_else(|| CanvasError::validation("blend group has no members"))?;
        out.push(BlendGroup {
            id,
            members,
            mix_color,
        });
    }

    Ok((out, membership))
}
