use rayon::prelude::*;

use crate::{
    compose::composer::{compose, compose_with},
    foundation::core::Canvas,
    foundation::error::{CanvasError, CanvasResult},
    layout::solver::LayoutMode,
    registry::stage::StageId,
    render::request::RenderRequest,
    render::response::RenderResponse,
    serialize::svg::{serialize_with, stage_fragment},
};

/// Compose + serialize one request.
///
/// Pipeline:
/// 1. [`RenderRequest`] names are resolved against the stage registry
/// 2. [`compose_with`](crate::compose_with) builds the scene
/// 3. [`serialize_with`](crate::serialize_with) writes the SVG document
#[tracing::instrument(skip_all, fields(stages = req.stages.len(), mode = req.layout_mode.as_str()))]
pub fn render(req: &RenderRequest) -> CanvasResult<RenderResponse> {
    let resolved = req.resolve()?;
    let scene = compose_with(
        &resolved.stages,
        req.layout_mode,
        resolved.canvas,
        &resolved.compose,
    )?;
    let document = serialize_with(&scene, &req.document)?;
    let response = RenderResponse::from_scene(scene, document);
    tracing::debug!(
        fingerprint = %response.fingerprint,
        bytes = response.document.len(),
        "rendered"
    );
    Ok(response)
}

/// The `<g>` fragment for one stage at its slot in the full linear pipeline.
pub fn render_stage_fragment(name: &str, canvas: Canvas) -> CanvasResult<String> {
    let stage: StageId = name.parse()?;
    let scene = compose(&StageId::ALL, LayoutMode::Linear, canvas, 0)?;
    stage_fragment(&scene, stage)
}

#[derive(Clone, Debug, Default)]
pub struct RenderBatchOpts {
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Render independent requests in parallel.
///
/// Results are returned in input order. A failing request does not affect the others; the
/// outer error only reports thread pool setup failures.
pub fn render_batch(
    reqs: &[RenderRequest],
    opts: &RenderBatchOpts,
) -> CanvasResult<Vec<CanvasResult<RenderResponse>>> {
    let pool = build_thread_pool(opts.threads)?;
    Ok(pool.install(|| reqs.par_iter().map(render).collect()))
}

fn build_thread_pool(threads: Option<usize>) -> CanvasResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CanvasError::validation(
            "render_batch 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CanvasError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
