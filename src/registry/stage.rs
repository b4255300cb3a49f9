//! The fixed stage-to-visual table.
//!
//! The table is a `static` array: it exists before `main` runs and is never written to, so a
//! stage id resolves to the same descriptor for the lifetime of the process.

use std::{collections::BTreeMap, str::FromStr};

use crate::foundation::core::{Range, Rgb8};
use crate::foundation::error::{CanvasError, CanvasResult};

/// One of the eight pipeline stages, in canonical order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    Observation,
    Hypothesis,
    Testing,
    Refutation,
    Revision,
    Consolidation,
    Propagation,
    Audit,
}

impl StageId {
    /// All stages in canonical pipeline order.
    pub const ALL: [Self; 8] = [
        Self::Observation,
        Self::Hypothesis,
        Self::Testing,
        Self::Refutation,
        Self::Revision,
        Self::Consolidation,
        Self::Propagation,
        Self::Audit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Observation => "observation",
            Self::Hypothesis => "hypothesis",
            Self::Testing => "testing",
            Self::Refutation => "refutation",
            Self::Revision => "revision",
            Self::Consolidation => "consolidation",
            Self::Propagation => "propagation",
            Self::Audit => "audit",
        }
    }

    /// Position in the canonical pipeline sequence.
    pub fn pipeline_index(self) -> usize {
        self as usize
    }

    pub fn descriptor(self) -> &'static StageDescriptor {
        &STAGE_DESCRIPTORS[self.pipeline_index()]
    }
}

impl FromStr for StageId {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CanvasError::unknown_stage(s))
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of primitive constructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Circle,
    Triangle,
    Grid,
    FracturedPolygon,
    Spiral,
    Lattice,
    WaveFront,
    Ring,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Grid => "grid",
            Self::FracturedPolygon => "fracturedPolygon",
            Self::Spiral => "spiral",
            Self::Lattice => "lattice",
            Self::WaveFront => "waveFront",
            Self::Ring => "ring",
        }
    }
}

/// Closed set of motion behaviours. Timing for each lives in [`crate::MotionTiming`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum MotionKind {
    RadialPulse,
    DriftOscillate,
    ScanPattern,
    ShatterScatter,
    ConvergeInward,
    Solidify,
    ExpandOutward,
    Contract,
}

impl MotionKind {
    pub const ALL: [Self; 8] = [
        Self::RadialPulse,
        Self::DriftOscillate,
        Self::ScanPattern,
        Self::ShatterScatter,
        Self::ConvergeInward,
        Self::Solidify,
        Self::ExpandOutward,
        Self::Contract,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RadialPulse => "radialPulse",
            Self::DriftOscillate => "driftOscillate",
            Self::ScanPattern => "scanPattern",
            Self::ShatterScatter => "shatterScatter",
            Self::ConvergeInward => "convergeInward",
            Self::Solidify => "solidify",
            Self::ExpandOutward => "expandOutward",
            Self::Contract => "contract",
        }
    }

    /// Kebab-case CSS class name emitted on stage groups.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::RadialPulse => "radial-pulse",
            Self::DriftOscillate => "drift-oscillate",
            Self::ScanPattern => "scan-pattern",
            Self::ShatterScatter => "shatter-scatter",
            Self::ConvergeInward => "converge-inward",
            Self::Solidify => "solidify",
            Self::ExpandOutward => "expand-outward",
            Self::Contract => "contract",
        }
    }
}

/// Fixed visual attributes bound to one stage.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageDescriptor {
    pub id: StageId,
    pub color: Rgb8,
    pub shape: ShapeKind,
    pub motion: MotionKind,
    pub z_index: i32,
    /// `0 <= min < max <= 1`.
    pub opacity_range: Range,
    /// `0 < min < max`.
    pub scale_range: Range,
}

const OPACITY_RANGE: Range = Range::new(0.4, 1.0);
const SCALE_RANGE: Range = Range::new(0.8, 1.2);

const fn descriptor(
    id: StageId,
    rgb: u32,
    shape: ShapeKind,
    motion: MotionKind,
    z_index: i32,
) -> StageDescriptor {
    StageDescriptor {
        id,
        color: Rgb8::from_u32(rgb),
        shape,
        motion,
        z_index,
        opacity_range: OPACITY_RANGE,
        scale_range: SCALE_RANGE,
    }
}

static STAGE_DESCRIPTORS: [StageDescriptor; 8] = [
    descriptor(
        StageId::Observation,
        0x1a1a4e,
        ShapeKind::Circle,
        MotionKind::RadialPulse,
        0,
    ),
    descriptor(
        StageId::Hypothesis,
        0xf5a623,
        ShapeKind::Triangle,
        MotionKind::DriftOscillate,
        1,
    ),
    descriptor(
        StageId::Testing,
        0x00d4ff,
        ShapeKind::Grid,
        MotionKind::ScanPattern,
        2,
    ),
    descriptor(
        StageId::Refutation,
        0xdc3545,
        ShapeKind::FracturedPolygon,
        MotionKind::ShatterScatter,
        3,
    ),
    descriptor(
        StageId::Revision,
        0x28a745,
        ShapeKind::Spiral,
        MotionKind::ConvergeInward,
        4,
    ),
    descriptor(
        StageId::Consolidation,
        0x6f42c1,
        ShapeKind::Lattice,
        MotionKind::Solidify,
        5,
    ),
    descriptor(
        StageId::Propagation,
        0xffc107,
        ShapeKind::WaveFront,
        MotionKind::ExpandOutward,
        6,
    ),
    descriptor(
        StageId::Audit,
        0xadb5bd,
        ShapeKind::Ring,
        MotionKind::Contract,
        7,
    ),
];

/// Resolve a stage name to its descriptor.
pub fn lookup(name: &str) -> CanvasResult<&'static StageDescriptor> {
    Ok(name.parse::<StageId>()?.descriptor())
}

/// All eight descriptors in canonical pipeline order.
pub fn all_stages() -> &'static [StageDescriptor] {
    &STAGE_DESCRIPTORS
}

pub fn stage_names() -> Vec<&'static str> {
    StageId::ALL.iter().map(|id| id.as_str()).collect()
}

pub fn stage_count() -> usize {
    STAGE_DESCRIPTORS.len()
}

pub fn stage_color(name: &str) -> CanvasResult<Rgb8> {
    Ok(lookup(name)?.color)
}

/// Stage name -> `#rrggbb`, keyed in canonical order.
pub fn all_colors() -> BTreeMap<StageId, String> {
    STAGE_DESCRIPTORS
        .iter()
        .map(|d| (d.id, d.color.to_hex()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/registry/stage.rs"]
mod tests;
