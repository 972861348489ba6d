//! Pipeline export loading.
//!
//! Missing exports are normal (the pipeline may not have produced every
//! target yet) and are replaced by empty documents. Present-but-corrupt
//! exports abort the run.
use crate::paths::ExportPaths;
use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// The three export documents a story pack is built from.
#[derive(Debug, Clone)]
pub struct PipelineInputs {
    pub visual_index: Value,
    pub scene_manifest: Value,
    pub pipeline_summary: Value,
}

impl PipelineInputs {
    /// Return the layer records from the visual index.
    ///
    /// An index that is not an object, or whose `layers` is missing or not an
    /// array, has no layers.
    pub fn layers(&self) -> &[Value] {
        self.visual_index
            .get("layers")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Load the visual index, scene manifest, and pipeline summary.
pub fn load_inputs(paths: &ExportPaths) -> Result<PipelineInputs> {
    let visual_index = read_json_or(&paths.visual_index_path(), json!({ "layers": [] }))?;
    let scene_manifest = read_json_or(&paths.scene_manifest_path(), json!({ "scenes": [] }))?;
    let pipeline_summary = read_json_or(&paths.pipeline_summary_path(), json!({}))?;
    Ok(PipelineInputs {
        visual_index,
        scene_manifest,
        pipeline_summary,
    })
}

/// Parse the JSON document at `path`, or return `default` if it does not exist.
pub fn read_json_or(path: &Path, default: Value) -> Result<Value> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "export missing; using default");
        return Ok(default);
    }
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let value =
        serde_json::from_slice(&bytes).with_context(|| format!("parse JSON {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded export");
    Ok(value)
}
