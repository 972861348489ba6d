//! Top-level story-pack manifest.
//!
//! Records when the pack was built, what it was scoped to, and the absolute
//! paths of every export consumed and manifest produced.
use crate::config::PackConfig;
use crate::output::write_json;
use crate::paths::{ExportPaths, PackPaths};
use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryManifest {
    pub kind: &'static str,
    pub created_at: String,
    pub jurisdiction: String,
    pub corridor: String,
    pub pipeline_root: String,
    pub inputs: StoryInputs,
    pub outputs: StoryOutputs,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryInputs {
    pub visual_index: String,
    pub remotion_manifest: String,
    pub remotion_summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoryOutputs {
    pub report: String,
    pub web: String,
    pub motion: String,
}

impl StoryManifest {
    /// Build the manifest with a freshly captured `createdAt`.
    pub fn new(config: &PackConfig, exports: &ExportPaths, pack: &PackPaths) -> Self {
        Self {
            kind: "story-pack",
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            jurisdiction: config.jurisdiction.clone(),
            corridor: config.corridor.clone(),
            pipeline_root: path_string(exports.pipeline_root()),
            inputs: StoryInputs {
                visual_index: path_string(&exports.visual_index_path()),
                remotion_manifest: path_string(&exports.scene_manifest_path()),
                remotion_summary: path_string(&exports.pipeline_summary_path()),
            },
            outputs: StoryOutputs {
                report: path_string(&pack.report_manifest_path()),
                web: path_string(&pack.web_manifest_path()),
                motion: path_string(&pack.motion_manifest_path()),
            },
        }
    }
}

/// Write `manifest.json` at the pack root and return its JSON text.
pub fn write_story_manifest(pack: &PackPaths, manifest: &StoryManifest) -> Result<String> {
    write_json(&pack.story_manifest_path(), manifest)
}

pub fn path_string(path: &Path) -> String {
    path.display().to_string()
}
