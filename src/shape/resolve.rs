//! Descriptor + position + intensity -> geometry.
//!
//! Every construction is proportional to the resolved `size`. The reference proportions
//! come from a base size of 40 units, so at intensity 0.5 (scale 1.0) the shapes keep their
//! classic dimensions.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6, PI, TAU};

use crate::{
    foundation::core::{BezPath, Point, Rect, Vec2},
    foundation::error::{CanvasError, CanvasResult},
    foundation::math::{is_unit, unit_hash},
    registry::stage::{ShapeKind, StageDescriptor},
    shape::geometry::{Geometry, WaveFront},
};

/// Size in canvas units of a shape at scale 1.0.
pub const BASE_SIZE: f64 = 40.0;

const GRID_CELL: f64 = 0.375;
const GRID_GAP: f64 = 0.1;

const SHARD_SEED: u64 = 0x5348_4152_4453;
const MAX_EXTRA_SHARDS: f64 = 11.0;
const MAX_SHARD_DISPLACEMENT: f64 = 0.35;

const SPIRAL_POINTS: usize = 80;
const SPIRAL_ANGLE_STEP: f64 = 0.15;
const SPIRAL_RADIUS_STEP: f64 = 0.015;
const SPIRAL_STROKE: f64 = 2.5;

const LATTICE_OFFSETS: [(f64, f64); 6] = [
    (-0.75, -0.5),
    (0.0, -0.875),
    (0.75, -0.5),
    (-0.375, 0.25),
    (0.375, 0.25),
    (0.0, 0.875),
];
const LATTICE_NODE_RADIUS: f64 = 0.2;
const LATTICE_EDGE_REACH: f64 = 1.125;

const WAVE_RADII: [f64; 3] = [0.5, 0.875, 1.25];
const WAVE_OPACITY: [f64; 3] = [0.9, 0.7, 0.5];
const WAVE_SEGMENTS: usize = 36;
const WAVE_STROKE: f64 = 2.0;

const RING_STROKE: f64 = 3.0;

/// Output of [`resolve`]: geometry plus the interpolated visual scalars.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedShape {
    pub geometry: Geometry,
    pub size: f64,
    pub scale: f64,
    pub opacity: f64,
}

/// Build the primitive geometry for `desc` centered on `position`.
///
/// `intensity` selects a point inside the descriptor's scale and opacity ranges. It must be
/// within `[0, 1]`.
pub fn resolve(
    desc: &StageDescriptor,
    position: Point,
    intensity: f64,
) -> CanvasResult<ResolvedShape> {
    if !is_unit(intensity) {
        return Err(CanvasError::InvalidIntensity(intensity));
    }
    let scale = desc.scale_range.lerp(intensity);
    let opacity = desc.opacity_range.lerp(intensity);
    let size = BASE_SIZE * scale;

    let geometry = match desc.shape {
        ShapeKind::Circle => Geometry::Circle {
            center: position,
            radius: size,
        },
        ShapeKind::Triangle => triangle(position, size),
        ShapeKind::Grid => grid(position, size),
        ShapeKind::FracturedPolygon => fractured_polygon(position, size, intensity),
        ShapeKind::Spiral => spiral(position, size),
        ShapeKind::Lattice => lattice(position, size),
        ShapeKind::WaveFront => wave_front(position, size),
        ShapeKind::Ring => Geometry::Ring {
            center: position,
            radius: size,
            stroke_width: RING_STROKE,
        },
    };

    Ok(ResolvedShape {
        geometry,
        size,
        scale,
        opacity,
    })
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::from_angle(angle) * radius
}

fn triangle(c: Point, size: f64) -> Geometry {
    // Apex up, then bottom-left, bottom-right.
    Geometry::Polygon {
        points: vec![
            polar(c, size, -FRAC_PI_2),
            polar(c, size, PI - FRAC_PI_6),
            polar(c, size, FRAC_PI_6),
        ],
    }
}

fn grid(c: Point, size: f64) -> Geometry {
    let cell = GRID_CELL * size;
    let pitch = cell + GRID_GAP * size;
    let mut cells = Vec::with_capacity(9);
    for row in -1..=1 {
        for col in -1..=1 {
            let x0 = c.x + f64::from(col) * pitch - cell * 0.5;
            let y0 = c.y + f64::from(row) * pitch - cell * 0.5;
            cells.push(Rect::new(x0, y0, x0 + cell, y0 + cell));
        }
    }
    Geometry::Cells { cells }
}

/// Number of shards a fractured polygon splits into at `intensity`.
pub fn shard_count(intensity: f64) -> usize {
    1 + ((1.0 - intensity) * MAX_EXTRA_SHARDS).round() as usize
}

fn hexagon_vertex_angle(k: usize) -> f64 {
    -FRAC_PI_2 + (k as f64) * FRAC_PI_3
}

/// Point on the boundary of a vertex-up regular hexagon with circumradius `size`.
fn hexagon_boundary(c: Point, size: f64, angle: f64) -> Point {
    let apothem = size * FRAC_PI_6.cos();
    let phase = (angle + FRAC_PI_2).rem_euclid(FRAC_PI_3);
    polar(c, apothem / (phase - FRAC_PI_6).cos(), angle)
}

fn fractured_polygon(c: Point, size: f64, intensity: f64) -> Geometry {
    let count = shard_count(intensity);
    if count == 1 {
        let hex = (0..6)
            .map(|k| polar(c, size, hexagon_vertex_angle(k)))
            .collect();
        return Geometry::Shards {
            shards: vec![hex],
        };
    }

    let displacement = (1.0 - intensity) * MAX_SHARD_DISPLACEMENT * size;
    let wedge = TAU / count as f64;
    let eps = 1e-9;
    let mut shards = Vec::with_capacity(count);
    for i in 0..count {
        let a0 = -FRAC_PI_2 + wedge * i as f64;
        let a1 = a0 + wedge;

        let mut corners: Vec<(f64, Point)> = (0..6)
            .filter_map(|k| {
                let rel = (hexagon_vertex_angle(k) - a0).rem_euclid(TAU);
                (rel > eps && rel < wedge - eps)
                    .then(|| (rel, polar(c, size, hexagon_vertex_angle(k))))
            })
            .collect();
        corners.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut shard = Vec::with_capacity(corners.len() + 3);
        shard.push(c);
        shard.push(hexagon_boundary(c, size, a0));
        shard.extend(corners.into_iter().map(|(_, p)| p));
        shard.push(hexagon_boundary(c, size, a1));

        let push = Vec2::from_angle((a0 + a1) * 0.5)
            * (displacement * (0.5 + unit_hash(SHARD_SEED, i as u64)));
        shards.push(shard.into_iter().map(|p| p + push).collect());
    }
    Geometry::Shards { shards }
}

fn spiral(c: Point, size: f64) -> Geometry {
    let mut path = BezPath::new();
    path.move_to(c);
    for i in 1..SPIRAL_POINTS {
        let step = i as f64;
        path.line_to(polar(
            c,
            step * SPIRAL_RADIUS_STEP * size,
            step * SPIRAL_ANGLE_STEP,
        ));
    }
    Geometry::Path {
        path,
        stroke_width: SPIRAL_STROKE,
    }
}

fn lattice(c: Point, size: f64) -> Geometry {
    let nodes: Vec<Point> = LATTICE_OFFSETS
        .iter()
        .map(|&(dx, dy)| c + Vec2::new(dx * size, dy * size))
        .collect();
    let mut edges = Vec::new();
    for (i, a) in LATTICE_OFFSETS.iter().enumerate() {
        for (j, b) in LATTICE_OFFSETS.iter().enumerate().skip(i + 1) {
            if (a.0 - b.0).hypot(a.1 - b.1) < LATTICE_EDGE_REACH {
                edges.push((i, j));
            }
        }
    }
    Geometry::Lattice {
        nodes,
        node_radius: LATTICE_NODE_RADIUS * size,
        edges,
    }
}

fn wave_front(c: Point, size: f64) -> Geometry {
    let fronts = WAVE_RADII
        .iter()
        .zip(WAVE_OPACITY)
        .map(|(&r, opacity)| WaveFront {
            points: (0..=WAVE_SEGMENTS)
                .map(|i| polar(c, r * size, TAU * i as f64 / WAVE_SEGMENTS as f64))
                .collect(),
            opacity,
            stroke_width: WAVE_STROKE,
        })
        .collect();
    Geometry::Wave { fronts }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/resolve.rs"]
mod tests;
