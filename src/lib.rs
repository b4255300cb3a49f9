//! Epistemic Canvas turns an ordered subset of an eight-stage governance pipeline into a
//! deterministic, self-contained animated SVG scene.
//!
//! # Pipeline overview
//!
//! 1. **Lookup**: stage names resolve against a fixed registry of [`StageDescriptor`]s
//! 2. **Layout**: [`layout`] places stages on a line or a circle around the canvas center
//! 3. **Compose**: [`compose_with`] resolves shapes, blend groups and audit rings into a [`Scene`]
//! 4. **Serialize**: [`serialize_with`] writes the scene as SVG text with CSS keyframes
//! 5. **Export** (optional): [`rasterize`] renders the document to RGBA8 pixels
//!
//! [`render`] runs steps 1-4 for a JSON-facing [`RenderRequest`] and returns the document
//! alongside a structured [`RenderResponse`].
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: equal inputs produce byte-identical documents.
//! - **All or nothing**: any invalid input aborts the call without a partial scene.
#![forbid(unsafe_code)]

mod animation;
mod audit;
mod compose;
mod export;
mod foundation;
mod layout;
mod registry;
mod render;
mod serialize;
mod shape;

pub use animation::ease::Easing;
pub use animation::timing::{Iterations, MotionTiming};
pub use audit::chain::{
    AuditRing, DECAY_FACTOR, MAX_AUDIT_DEPTH, MAX_OPACITY, RING_SPACING, RING_STROKE,
    generate_chain,
};
pub use compose::blend::{BLEND_MODE, BLEND_OPACITY_FACTOR};
pub use compose::composer::{
    AUDIT_BASE_FRACTION, ComposeOpts, DEFAULT_INTENSITY, compose, compose_named, compose_with,
};
pub use compose::scene::{BlendGroup, BlendGroupId, RenderedElement, Scene};
pub use export::raster::{
    MAX_RASTER_EDGE, RasterImage, encode_png, parse_document, rasterize, write_png,
};
pub use foundation::core::{BezPath, Canvas, Point, Range, Rect, Rgb8, Vec2};
pub use foundation::error::{CanvasError, CanvasResult};
pub use layout::solver::{LayoutMode, RADIAL_RADIUS_FRACTION, StageLayout, layout};
pub use registry::stage::{
    MotionKind, ShapeKind, StageDescriptor, StageId, all_colors, all_stages, lookup, stage_color,
    stage_count, stage_names,
};
pub use render::pipeline::{RenderBatchOpts, render, render_batch, render_stage_fragment};
pub use render::request::RenderRequest;
pub use render::response::{RenderResponse, StagePayload, document_fingerprint};
pub use serialize::svg::{
    DEFAULT_BACKGROUND, DEFAULT_TITLE, SerializeOpts, serialize, serialize_with, stage_fragment,
};
pub use shape::geometry::{Geometry, WaveFront};
pub use shape::resolve::{BASE_SIZE, ResolvedShape, resolve, shard_count};
