use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point, Rect};

/// Primitive geometry for one stage, in absolute canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// Filled disc.
    Circle { center: Point, radius: f64 },
    /// Filled closed polygon.
    Polygon { points: Vec<Point> },
    /// Filled axis-aligned cells.
    Cells { cells: Vec<Rect> },
    /// Filled polygon fragments, each closed.
    Shards { shards: Vec<Vec<Point>> },
    /// Stroked open path.
    Path { path: BezPath, stroke_width: f64 },
    /// Filled nodes joined by thin stroked edges (indices into `nodes`).
    Lattice {
        nodes: Vec<Point>,
        node_radius: f64,
        edges: Vec<(usize, usize)>,
    },
    /// Stroked concentric polylines with individual opacity.
    Wave { fronts: Vec<WaveFront> },
    /// Stroked circle outline.
    Ring {
        center: Point,
        radius: f64,
        stroke_width: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct WaveFront {
    pub points: Vec<Point>,
    pub opacity: f64,
    pub stroke_width: f64,
}

impl Geometry {
    /// Axis-aligned bounds, including stroke half-widths.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Circle { center, radius } => circle_bounds(*center, *radius),
            Self::Polygon { points } => points_bounds(points.iter().copied()),
            Self::Cells { cells } => cells
                .iter()
                .copied()
                .reduce(|a, b| a.union(b))
                .unwrap_or_default(),
            Self::Shards { shards } => points_bounds(shards.iter().flatten().copied()),
            Self::Path { path, stroke_width } => path.bounding_box().inflate(
                stroke_width * 0.5,
                stroke_width * 0.5,
            ),
            Self::Lattice {
                nodes, node_radius, ..
            } => points_bounds(nodes.iter().copied()).inflate(*node_radius, *node_radius),
            Self::Wave { fronts } => {
                let half = fronts
                    .iter()
                    .map(|f| f.stroke_width * 0.5)
                    .fold(0.0, f64::max);
                points_bounds(fronts.iter().flat_map(|f| f.points.iter().copied()))
                    .inflate(half, half)
            }
            Self::Ring {
                center,
                radius,
                stroke_width,
            } => circle_bounds(*center, radius + stroke_width * 0.5),
        }
    }
}

fn circle_bounds(center: Point, radius: f64) -> Rect {
    Rect::new(
        center.x - radius,
        center.y - radius,
        center.x + radius,
        center.y + radius,
    )
}

fn points_bounds(mut points: impl Iterator<Item = Point>) -> Rect {
    let Some(first) = points.next() else {
        return Rect::default();
    };
    points.fold(Rect::from_points(first, first), |r, p| r.union_pt(p))
}
