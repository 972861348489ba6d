//! Story-pack assembly.
//!
//! One linear pass: load exports, derive the per-target manifests, lay out
//! and write the pack, then record the top-level manifest.
use crate::config::PackConfig;
use crate::input::{load_inputs, PipelineInputs};
use crate::manifest::{path_string, write_story_manifest, StoryManifest};
use crate::output::{create_pack_layout, write_manifests};
use crate::paths::{ExportPaths, PackPaths};
use crate::transform::{motion_manifest, report_manifest, web_manifest, GeneratedManifests};
use anyhow::Result;

/// Result of a completed run.
#[derive(Debug)]
pub struct StoryPack {
    pub paths: PackPaths,
    pub manifest: StoryManifest,
    /// `manifest.json` exactly as written to disk.
    pub manifest_json: String,
}

/// Assemble a story pack for `config`.
pub fn assemble(config: &PackConfig) -> Result<StoryPack> {
    let exports = ExportPaths::new(config.pipeline_root.clone());
    let inputs = load_inputs(&exports)?;
    let manifests = generate_manifests(&exports, &inputs);
    tracing::info!(
        layers = manifests.report.layer_count,
        scenes = manifests.motion.scene_count,
        "derived target manifests"
    );

    let paths = create_pack_layout(&config.output_dir, &config.jurisdiction, &config.corridor)?;
    write_manifests(&paths, &manifests)?;

    let manifest = StoryManifest::new(config, &exports, &paths);
    let manifest_json = write_story_manifest(&paths, &manifest)?;
    Ok(StoryPack {
        paths,
        manifest,
        manifest_json,
    })
}

/// Derive the report, web, and motion manifests from loaded exports.
pub fn generate_manifests(exports: &ExportPaths, inputs: &PipelineInputs) -> GeneratedManifests {
    let visual_source = path_string(&exports.visual_index_path());
    let layers = inputs.layers();
    GeneratedManifests {
        report: report_manifest(&visual_source, layers),
        web: web_manifest(&visual_source, layers),
        motion: motion_manifest(
            &path_string(&exports.scene_manifest_path()),
            &inputs.scene_manifest,
            &inputs.pipeline_summary,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::fs;
    use std::path::Path;

    fn write_file(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(path, contents.as_bytes()).expect("write file");
    }

    fn config_for(pipeline_root: &Path, output_dir: &Path) -> PackConfig {
        PackConfig {
            pipeline_root: pipeline_root.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            jurisdiction: "oakland".to_string(),
            corridor: "broadway".to_string(),
        }
    }

    #[test]
    fn assemble_writes_every_manifest() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let pipeline = temp.path().join("pipeline");
        let exports = ExportPaths::new(pipeline.clone());
        write_file(
            &exports.visual_index_path(),
            r#"{"layers": [{"name": "parcels", "svg_path": "parcels.svg"}, {"id": "transit"}]}"#,
        );
        write_file(
            &exports.scene_manifest_path(),
            r#"{"scenes": [{"id": "intro"}]}"#,
        );

        let pack = assemble(&config_for(&pipeline, &temp.path().join("out"))).expect("assemble");

        for path in [
            pack.paths.report_manifest_path(),
            pack.paths.web_manifest_path(),
            pack.paths.motion_manifest_path(),
            pack.paths.story_manifest_path(),
        ] {
            assert!(path.is_file(), "missing {}", path.display());
        }
        let on_disk =
            fs::read_to_string(pack.paths.story_manifest_path()).expect("read manifest.json");
        assert_eq!(on_disk, pack.manifest_json);

        let report: Value = serde_json::from_str(
            &fs::read_to_string(pack.paths.report_manifest_path()).expect("read report"),
        )
        .expect("parse report");
        assert_eq!(report["layerCount"], json!(2));
        assert_eq!(report["assets"][1]["layer"], json!("transit"));

        let motion: Value = serde_json::from_str(
            &fs::read_to_string(pack.paths.motion_manifest_path()).expect("read motion"),
        )
        .expect("parse motion");
        assert_eq!(motion["sceneCount"], json!(1));
        assert_eq!(motion["summary"], json!({}));
    }

    #[test]
    fn generate_manifests_tolerates_missing_exports() {
        let exports = ExportPaths::new(Path::new("/nonexistent/pipeline").to_path_buf());
        let inputs = load_inputs(&exports).expect("load defaults");
        let manifests = generate_manifests(&exports, &inputs);
        assert_eq!(manifests.report.layer_count, 0);
        assert_eq!(manifests.web.layer_count, 0);
        assert_eq!(manifests.motion.scene_count, 0);
        assert_eq!(manifests.motion.manifest, json!({ "scenes": [] }));
        assert_eq!(
            manifests.report.source,
            "/nonexistent/pipeline/exports/visual-boards/layer-index.json"
        );
    }

    #[test]
    fn malformed_export_aborts_before_writing() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let pipeline = temp.path().join("pipeline");
        write_file(
            &ExportPaths::new(pipeline.clone()).pipeline_summary_path(),
            "not json",
        );
        let output_dir = temp.path().join("out");

        let err = assemble(&config_for(&pipeline, &output_dir)).expect_err("malformed summary");
        assert!(format!("{err:#}").contains("pipeline-summary.json"));
        assert!(!output_dir.exists());
    }
}
