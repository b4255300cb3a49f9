use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::{
    compose::composer::{ComposeOpts, parse_stage_names},
    foundation::core::Canvas,
    foundation::error::{CanvasError, CanvasResult},
    layout::solver::LayoutMode,
    registry::stage::{StageId, stage_names},
    serialize::svg::SerializeOpts,
};

/// JSON-facing render request.
///
/// Every field has a default, so `{}` renders all eight stages linearly on a 1200x800
/// canvas. Stage names stay strings here so unknown names surface as
/// [`CanvasError::UnknownStage`] rather than a parse failure.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RenderRequest {
    pub stages: Vec<String>,
    pub layout_mode: LayoutMode,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub audit_depth: u32,
    pub per_stage_intensity: BTreeMap<String, f64>,
    /// Groups of stage names rendered as simultaneously active.
    pub concurrent: Vec<Vec<String>>,
    pub document: SerializeOpts,
}

impl Default for RenderRequest {
    fn default() -> Self {
        let canvas = Canvas::default();
        Self {
            stages: stage_names().into_iter().map(str::to_owned).collect(),
            layout_mode: LayoutMode::default(),
            canvas_width: canvas.width,
            canvas_height: canvas.height,
            audit_depth: 0,
            per_stage_intensity: BTreeMap::new(),
            concurrent: Vec::new(),
            document: SerializeOpts::default(),
        }
    }
}

/// A request with every name resolved, ready for the composer.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ResolvedRequest {
    pub(crate) stages: Vec<StageId>,
    pub(crate) canvas: Canvas,
    pub(crate) compose: ComposeOpts,
}

impl RenderRequest {
    pub fn from_reader<R: std::io::Read>(r: R) -> CanvasResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CanvasError::serde(format!("parse render request JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> CanvasResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| CanvasError::serde(format!("parse render request JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CanvasError::validation(format!("open render request '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check names and canvas without composing anything.
    pub fn validate(&self) -> CanvasResult<()> {
        self.resolve().map(|_| ())
    }

    pub(crate) fn resolve(&self) -> CanvasResult<ResolvedRequest> {
        let stages = parse_stage_names(&self.stages)?;
        let canvas = Canvas::new(self.canvas_width, self.canvas_height)?;

        let mut intensities = BTreeMap::new();
        for (name, &value) in &self.per_stage_intensity {
            intensities.insert(name.parse::<StageId>()?, value);
        }
        let concurrent = self
            .concurrent
            .iter()
            .map(|group| parse_stage_names(group))
            .collect::<CanvasResult<Vec<_>>>()?;

        Ok(ResolvedRequest {
            stages,
            canvas,
            compose: ComposeOpts {
                audit_depth: self.audit_depth,
                intensities,
                concurrent,
            },
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/request.rs"]
mod tests;
