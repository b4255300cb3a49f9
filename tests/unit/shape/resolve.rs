use super::*;
use crate::registry::stage::StageId;

fn at(id: StageId, intensity: f64) -> ResolvedShape {
    resolve(id.descriptor(), Point::new(100.0, 50.0), intensity).unwrap()
}

#[test]
fn scale_and_opacity_interpolate_ranges() {
    let low = at(StageId::Observation, 0.0);
    assert_eq!(low.scale, 0.8);
    assert_eq!(low.opacity, 0.4);
    assert_eq!(low.size, 32.0);

    let high = at(StageId::Observation, 1.0);
    assert_eq!(high.scale, 1.2);
    assert_eq!(high.opacity, 1.0);

    let mid = at(StageId::Observation, 0.5);
    assert!((mid.size - BASE_SIZE).abs() < 1e-9);
    assert!((mid.opacity - 0.7).abs() < 1e-9);
}

#[test]
fn intensity_outside_unit_interval_is_rejected() {
    let d = StageId::Testing.descriptor();
    for bad in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
        let err = resolve(d, Point::ORIGIN, bad).unwrap_err();
        assert!(matches!(err, CanvasError::InvalidIntensity(_)));
    }
}

#[test]
fn circle_radius_equals_size() {
    let r = at(StageId::Observation, 0.5);
    let Geometry::Circle { center, radius } = r.geometry else {
        panic!("observation must resolve to a circle");
    };
    assert_eq!(center, Point::new(100.0, 50.0));
    assert_eq!(radius, r.size);
}

#[test]
fn triangle_apex_points_up() {
    let r = at(StageId::Hypothesis, 0.5);
    let Geometry::Polygon { points } = r.geometry else {
        panic!("hypothesis must resolve to a polygon");
    };
    assert_eq!(points.len(), 3);
    assert!((points[0].x - 100.0).abs() < 1e-9);
    assert!((points[0].y - (50.0 - r.size)).abs() < 1e-9);
    assert!(points[1].x < points[2].x);
    assert!((points[1].y - points[2].y).abs() < 1e-9);
}

#[test]
fn grid_is_three_by_three_and_centered() {
    let r = at(StageId::Testing, 0.5);
    let Geometry::Cells { cells } = &r.geometry else {
        panic!("testing must resolve to cells");
    };
    assert_eq!(cells.len(), 9);
    let middle = cells[4].center();
    assert!((middle.x - 100.0).abs() < 1e-9 && (middle.y - 50.0).abs() < 1e-9);
    let bounds = r.geometry.bounding_box();
    assert!((bounds.center().x - 100.0).abs() < 1e-9);
}

#[test]
fn fracture_increases_as_intensity_drops() {
    assert_eq!(shard_count(1.0), 1);
    assert_eq!(shard_count(0.0), 12);
    assert!(shard_count(0.25) > shard_count(0.75));

    let intact = at(StageId::Refutation, 1.0);
    let Geometry::Shards { shards } = &intact.geometry else {
        panic!("refutation must resolve to shards");
    };
    assert_eq!(shards.len(), 1);
    assert_eq!(shards[0].len(), 6);

    let shattered = at(StageId::Refutation, 0.0);
    let Geometry::Shards { shards } = &shattered.geometry else {
        panic!("refutation must resolve to shards");
    };
    assert_eq!(shards.len(), 12);
    // Displaced shards spread further than the intact hexagon would at the same size.
    let spread = shattered.geometry.bounding_box();
    assert!(spread.width() > 2.0 * shattered.size * FRAC_PI_6.cos());
}

#[test]
fn fractured_polygon_is_deterministic() {
    assert_eq!(at(StageId::Refutation, 0.3), at(StageId::Refutation, 0.3));
}

#[test]
fn spiral_is_an_open_stroked_path() {
    let r = at(StageId::Revision, 0.5);
    let Geometry::Path { path, stroke_width } = &r.geometry else {
        panic!("revision must resolve to a path");
    };
    assert_eq!(path.elements().len(), 80);
    assert!(!path
        .elements()
        .iter()
        .any(|el| matches!(el, kurbo::PathEl::ClosePath)));
    assert_eq!(*stroke_width, 2.5);
}

#[test]
fn lattice_connects_near_neighbours_only() {
    let r = at(StageId::Consolidation, 0.5);
    let Geometry::Lattice {
        nodes,
        node_radius,
        edges,
    } = &r.geometry
    else {
        panic!("consolidation must resolve to a lattice");
    };
    assert_eq!(nodes.len(), 6);
    assert!((node_radius - 8.0).abs() < 1e-9);
    assert_eq!(
        edges,
        &vec![(0, 1), (0, 3), (1, 2), (2, 4), (3, 4), (3, 5), (4, 5)]
    );
}

#[test]
fn wave_fronts_fade_outward() {
    let r = at(StageId::Propagation, 0.5);
    let Geometry::Wave { fronts } = &r.geometry else {
        panic!("propagation must resolve to wave fronts");
    };
    assert_eq!(fronts.len(), 3);
    assert!(fronts.iter().all(|f| f.points.len() == 37));
    assert!(fronts[0].opacity > fronts[1].opacity && fronts[1].opacity > fronts[2].opacity);
}

#[test]
fn ring_is_stroked_outline() {
    let r = at(StageId::Audit, 1.0);
    let Geometry::Ring {
        radius,
        stroke_width,
        ..
    } = r.geometry
    else {
        panic!("audit must resolve to a ring");
    };
    assert_eq!(radius, 48.0);
    assert_eq!(stroke_width, 3.0);
}
