//! Scene -> self-contained SVG text.
//!
//! Output is a pure function of the scene and options: numbers go through one formatter,
//! CSS rules follow canonical motion order, and nothing depends on hash iteration order.

use std::fmt::{self, Write as _};

use crate::{
    animation::timing::{Iterations, MotionTiming},
    audit::chain::RING_STROKE,
    compose::blend::BLEND_MODE,
    compose::scene::{RenderedElement, Scene},
    foundation::core::{BezPath, Point, Rgb8},
    foundation::error::{CanvasError, CanvasResult},
    foundation::math::fmt_num,
    registry::stage::{MotionKind, StageId},
    shape::geometry::Geometry,
};

pub const DEFAULT_BACKGROUND: Rgb8 = Rgb8::from_u32(0x0d1117);
pub const DEFAULT_TITLE: &str = "Governance as Performance Art - 8-Phase Orchestration Pipeline";

const LATTICE_EDGE_STROKE: f64 = 1.0;
const LATTICE_EDGE_OPACITY: f64 = 0.4;

/// Document-level options for [`serialize_with`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SerializeOpts {
    pub background: Rgb8,
    pub title: String,
    /// Fail with [`CanvasError::EmptyScene`] instead of emitting a bare canvas.
    pub require_non_empty: bool,
}

impl Default for SerializeOpts {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            title: DEFAULT_TITLE.to_owned(),
            require_non_empty: false,
        }
    }
}

/// Serialize with [`SerializeOpts::default`].
pub fn serialize(scene: &Scene) -> CanvasResult<String> {
    serialize_with(scene, &SerializeOpts::default())
}

pub fn serialize_with(scene: &Scene, opts: &SerializeOpts) -> CanvasResult<String> {
    if opts.require_non_empty && scene.is_empty() {
        return Err(CanvasError::EmptyScene);
    }
    let mut out = String::with_capacity(4096 + scene.elements.len() * 2048);
    write_document(&mut out, scene, opts).map_err(write_failed)?;
    Ok(out)
}

/// The `<g>` fragment for one stage of `scene`, as it appears inside the full document.
pub fn stage_fragment(scene: &Scene, stage: StageId) -> CanvasResult<String> {
    let el = scene.element(stage).ok_or_else(|| {
        CanvasError::validation(format!("stage '{stage}' is not part of this scene"))
    })?;
    let mut out = String::new();
    write_element(&mut out, scene, el, "").map_err(write_failed)?;
    Ok(out)
}

fn write_failed(e: fmt::Error) -> CanvasError {
    CanvasError::serde(format!("write svg: {e}"))
}

fn write_document(out: &mut String, scene: &Scene, opts: &SerializeOpts) -> fmt::Result {
    let w = scene.canvas.width;
    let h = scene.canvas.height;
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" data-layout="{}">"#,
        scene.layout_mode.as_str()
    )?;
    writeln!(out, "  <title>{}</title>", escape_xml(&opts.title))?;
    write_style(out, scene)?;
    writeln!(
        out,
        r#"  <rect width="{w}" height="{h}" fill="{}"/>"#,
        opts.background
    )?;

    if scene.elements.is_empty() {
        writeln!(out, r#"  <g id="stages"/>"#)?;
    } else {
        writeln!(out, r#"  <g id="stages">"#)?;
        for el in &scene.elements {
            write_element(out, scene, el, "    ")?;
        }
        writeln!(out, "  </g>")?;
    }

    if !scene.audit_rings.is_empty() {
        write_audit_chain(out, scene)?;
    }
    writeln!(out, "</svg>")
}

fn motions_present(scene: &Scene) -> Vec<MotionKind> {
    let mut motions: Vec<MotionKind> = scene
        .elements
        .iter()
        .map(|e| e.descriptor().motion)
        .collect();
    motions.sort_unstable();
    motions.dedup();
    motions
}

fn write_style(out: &mut String, scene: &Scene) -> fmt::Result {
    writeln!(out, "  <style>")?;
    writeln!(
        out,
        "    .stage {{ transform-box: fill-box; transform-origin: center; }}"
    )?;
    let timings: Vec<MotionTiming> = motions_present(scene)
        .into_iter()
        .map(MotionTiming::for_motion)
        .collect();
    for t in &timings {
        writeln!(
            out,
            "    .{} {{ animation: {}; }}",
            t.motion.css_class(),
            t.css_shorthand()
        )?;
    }
    for t in &timings {
        writeln!(out, "    @keyframes {} {{ {} }}", t.keyframes, t.keyframes_css())?;
    }
    writeln!(out, "  </style>")
}

fn write_element(
    out: &mut String,
    scene: &Scene,
    el: &RenderedElement,
    indent: &str,
) -> fmt::Result {
    let desc = el.descriptor();
    let timing = MotionTiming::for_motion(desc.motion);
    let iterations = match timing.iterations {
        Iterations::Infinite => "infinite",
        Iterations::Once => "once",
    };
    write!(
        out,
        r#"{indent}<g id="stage-{id}" class="stage {class}" data-stage="{id}" data-z="{z}" data-motion="{motion}" data-start="{start}s" data-duration="{duration}s" data-easing="{easing}" data-iterations="{iterations}""#,
        id = el.stage,
        class = desc.motion.css_class(),
        z = el.z_index,
        motion = desc.motion.as_str(),
        start = fmt_num(timing.start_offset_s),
        duration = fmt_num(timing.duration_s),
        easing = timing.easing.css_name(),
    )?;
    if let Some(group) = el.blend_group.and_then(|id| scene.blend_group(id)) {
        write!(
            out,
            r#" data-blend-group="{}" data-blend-color="{}" style="mix-blend-mode: {BLEND_MODE}""#,
            group.id, group.mix_color
        )?;
    }
    writeln!(out, ">")?;

    // Keyframes may animate opacity on the outer group; the resolved value lives one level
    // down so the two multiply.
    writeln!(
        out,
        r#"{indent}  <g class="stage-body" opacity="{}">"#,
        fmt_num(el.opacity)
    )?;
    let inner = format!("{indent}    ");
    write_geometry(out, &el.geometry, desc.color, &inner)?;
    writeln!(out, "{indent}  </g>")?;
    writeln!(out, "{indent}</g>")
}

fn write_geometry(out: &mut String, geometry: &Geometry, color: Rgb8, indent: &str) -> fmt::Result {
    match geometry {
        Geometry::Circle { center, radius } => writeln!(
            out,
            r#"{indent}<circle cx="{}" cy="{}" r="{}" fill="{color}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(*radius)
        ),
        Geometry::Polygon { points } => writeln!(
            out,
            r#"{indent}<polygon points="{}" fill="{color}"/>"#,
            points_attr(points)
        ),
        Geometry::Cells { cells } => {
            for c in cells {
                writeln!(
                    out,
                    r#"{indent}<rect x="{}" y="{}" width="{}" height="{}" fill="{color}"/>"#,
                    fmt_num(c.x0),
                    fmt_num(c.y0),
                    fmt_num(c.width()),
                    fmt_num(c.height())
                )?;
            }
            Ok(())
        }
        Geometry::Shards { shards } => {
            for shard in shards {
                writeln!(
                    out,
                    r#"{indent}<polygon class="shard" points="{}" fill="{color}"/>"#,
                    points_attr(shard)
                )?;
            }
            Ok(())
        }
        Geometry::Path { path, stroke_width } => writeln!(
            out,
            r#"{indent}<path d="{}" fill="none" stroke="{color}" stroke-width="{}" stroke-linecap="round"/>"#,
            path_data(path),
            fmt_num(*stroke_width)
        ),
        Geometry::Lattice {
            nodes,
            node_radius,
            edges,
        } => {
            for &(a, b) in edges {
                let (Some(p), Some(q)) = (nodes.get(a), nodes.get(b)) else {
                    continue;
                };
                writeln!(
                    out,
                    r#"{indent}<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="{}" opacity="{}"/>"#,
                    fmt_num(p.x),
                    fmt_num(p.y),
                    fmt_num(q.x),
                    fmt_num(q.y),
                    fmt_num(LATTICE_EDGE_STROKE),
                    fmt_num(LATTICE_EDGE_OPACITY)
                )?;
            }
            for n in nodes {
                writeln!(
                    out,
                    r#"{indent}<circle cx="{}" cy="{}" r="{}" fill="{color}"/>"#,
                    fmt_num(n.x),
                    fmt_num(n.y),
                    fmt_num(*node_radius)
                )?;
            }
            Ok(())
        }
        Geometry::Wave { fronts } => {
            for f in fronts {
                writeln!(
                    out,
                    r#"{indent}<polyline points="{}" fill="none" stroke="{color}" stroke-width="{}" opacity="{}"/>"#,
                    points_attr(&f.points),
                    fmt_num(f.stroke_width),
                    fmt_num(f.opacity)
                )?;
            }
            Ok(())
        }
        Geometry::Ring {
            center,
            radius,
            stroke_width,
        } => writeln!(
            out,
            r#"{indent}<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{color}" stroke-width="{}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(*radius),
            fmt_num(*stroke_width)
        ),
    }
}

fn write_audit_chain(out: &mut String, scene: &Scene) -> fmt::Result {
    let c = scene.audit_center;
    let color = StageId::Audit.descriptor().color;
    writeln!(
        out,
        r#"  <g id="audit-chain" data-depth="{}">"#,
        scene.audit_rings.len()
    )?;
    for ring in &scene.audit_rings {
        writeln!(
            out,
            r#"    <circle class="audit-ring audit-ring-{}" cx="{}" cy="{}" r="{}" fill="none" stroke="{color}" stroke-width="{}" opacity="{}"/>"#,
            ring.level,
            fmt_num(c.x),
            fmt_num(c.y),
            fmt_num(ring.radius),
            fmt_num(RING_STROKE),
            fmt_num(ring.opacity)
        )?;
    }
    writeln!(out, "  </g>")
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn path_data(path: &BezPath) -> String {
    use kurbo::PathEl;

    let mut d = Vec::with_capacity(path.elements().len());
    for el in path.elements() {
        d.push(match *el {
            PathEl::MoveTo(p) => format!("M {} {}", fmt_num(p.x), fmt_num(p.y)),
            PathEl::LineTo(p) => format!("L {} {}", fmt_num(p.x), fmt_num(p.y)),
            PathEl::QuadTo(a, p) => format!(
                "Q {} {} {} {}",
                fmt_num(a.x),
                fmt_num(a.y),
                fmt_num(p.x),
                fmt_num(p.y)
            ),
            PathEl::CurveTo(a, b, p) => format!(
                "C {} {} {} {} {} {}",
                fmt_num(a.x),
                fmt_num(a.y),
                fmt_num(b.x),
                fmt_num(b.y),
                fmt_num(p.x),
                fmt_num(p.y)
            ),
            PathEl::ClosePath => "Z".to_owned(),
        });
    }
    d.join(" ")
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/svg.rs"]
mod tests;
