//! Typed paths into the pipeline export tree and the story-pack layout.
//!
//! Centralizing path construction keeps the loader, writer, and pack manifest
//! in agreement about where every file lives.
use std::path::{Path, PathBuf};

pub const REPORT_DIR: &str = "report";
pub const WEB_DIR: &str = "web";
pub const MOTION_DIR: &str = "motion";

/// Locations of the pipeline exports consumed by a run.
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pipeline_root: PathBuf,
}

impl ExportPaths {
    /// Create a path helper rooted at the (already resolved) pipeline root.
    pub fn new(pipeline_root: PathBuf) -> Self {
        Self { pipeline_root }
    }

    pub fn pipeline_root(&self) -> &Path {
        &self.pipeline_root
    }

    /// Return the `exports/` directory path.
    pub fn exports_dir(&self) -> PathBuf {
        self.pipeline_root.join("exports")
    }

    /// Return the `exports/visual-boards/layer-index.json` path.
    pub fn visual_index_path(&self) -> PathBuf {
        self.exports_dir()
            .join("visual-boards")
            .join("layer-index.json")
    }

    /// Return the `exports/remotion/scene-manifest.json` path.
    pub fn scene_manifest_path(&self) -> PathBuf {
        self.exports_dir()
            .join("remotion")
            .join("scene-manifest.json")
    }

    /// Return the `exports/remotion/pipeline-summary.json` path.
    pub fn pipeline_summary_path(&self) -> PathBuf {
        self.exports_dir()
            .join("remotion")
            .join("pipeline-summary.json")
    }
}

/// Locations inside one story pack.
#[derive(Debug, Clone)]
pub struct PackPaths {
    root: PathBuf,
}

impl PackPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Return the pack root, `<output-dir>/<timestamp>_<jurisdiction>_<corridor>`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn report_dir(&self) -> PathBuf {
        self.root.join(REPORT_DIR)
    }

    pub fn web_dir(&self) -> PathBuf {
        self.root.join(WEB_DIR)
    }

    pub fn motion_dir(&self) -> PathBuf {
        self.root.join(MOTION_DIR)
    }

    /// Return the per-target directories in creation order.
    pub fn target_dirs(&self) -> [PathBuf; 3] {
        [self.report_dir(), self.web_dir(), self.motion_dir()]
    }

    /// Return the `report/report-manifest.json` path.
    pub fn report_manifest_path(&self) -> PathBuf {
        self.report_dir().join("report-manifest.json")
    }

    /// Return the `web/web-manifest.json` path.
    pub fn web_manifest_path(&self) -> PathBuf {
        self.web_dir().join("web-manifest.json")
    }

    /// Return the `motion/remotion-manifest.json` path.
    pub fn motion_manifest_path(&self) -> PathBuf {
        self.motion_dir().join("remotion-manifest.json")
    }

    /// Return the top-level `manifest.json` path.
    pub fn story_manifest_path(&self) -> PathBuf {
        self.root.join("manifest.json")
    }
}
