//! Target-specific manifests derived from pipeline exports.
//!
//! Each transformer is a pure function of the loaded exports. Field names and
//! key order are part of the contract with downstream consumers (PDF
//! assembly, map publishing, Remotion rendering) and must not drift.
use crate::lookup::first_present;
use serde::Serialize;
use serde_json::Value;

const LAYER_KEYS: &[&str] = &["name", "id"];
const SVG_KEYS: &[&str] = &["svg_path", "svgPath"];
const PNG_KEYS: &[&str] = &["png_path", "pngPath"];
const BBOX_KEYS: &[&str] = &["bbox", "bounds"];
const REMOTION_ASSET_KEYS: &[&str] = &["remotion_asset_path", "remotionAssetPath"];

pub const REPORT_NOTES: [&str; 2] = [
    "Attach council/report caption text and disclaimer block before external release.",
    "Optional PDF plate assembly step can be added as a post-processor.",
];

pub const WEB_NOTES: [&str; 2] = [
    "Mapbox static/interactive publish step intentionally left as lane-level extension point.",
    "Add attribution and alt text before publishing.",
];

/// Static-asset manifest for report/PDF assembly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportManifest {
    pub kind: &'static str,
    pub source: String,
    pub layer_count: usize,
    pub assets: Vec<ReportAsset>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportAsset {
    pub layer: Value,
    pub svg: Value,
    pub png: Value,
}

/// Layer manifest for web map publishing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebManifest {
    pub kind: &'static str,
    pub source: String,
    pub layer_count: usize,
    pub assets: Vec<WebAsset>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebAsset {
    pub layer: Value,
    pub svg: Value,
    pub bbox: Value,
    pub remotion_asset: Value,
}

/// Scene manifest wrapper for motion rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionManifest {
    pub kind: &'static str,
    pub source: String,
    pub scene_count: usize,
    pub manifest: Value,
    pub summary: Value,
}

/// The three per-target manifests produced by one run.
#[derive(Debug, Clone)]
pub struct GeneratedManifests {
    pub report: ReportManifest,
    pub web: WebManifest,
    pub motion: MotionManifest,
}

pub fn report_manifest(source: &str, layers: &[Value]) -> ReportManifest {
    let assets = layers
        .iter()
        .map(|layer| ReportAsset {
            layer: first_present(layer, LAYER_KEYS),
            svg: first_present(layer, SVG_KEYS),
            png: first_present(layer, PNG_KEYS),
        })
        .collect();
    ReportManifest {
        kind: "report",
        source: source.to_string(),
        layer_count: layers.len(),
        assets,
        notes: REPORT_NOTES.iter().map(|note| note.to_string()).collect(),
    }
}

pub fn web_manifest(source: &str, layers: &[Value]) -> WebManifest {
    let assets = layers
        .iter()
        .map(|layer| WebAsset {
            layer: first_present(layer, LAYER_KEYS),
            svg: first_present(layer, SVG_KEYS),
            bbox: first_present(layer, BBOX_KEYS),
            remotion_asset: first_present(layer, REMOTION_ASSET_KEYS),
        })
        .collect();
    WebManifest {
        kind: "web",
        source: source.to_string(),
        layer_count: layers.len(),
        assets,
        notes: WEB_NOTES.iter().map(|note| note.to_string()).collect(),
    }
}

/// Wrap the scene manifest and pipeline summary verbatim.
pub fn motion_manifest(source: &str, scene_manifest: &Value, summary: &Value) -> MotionManifest {
    MotionManifest {
        kind: "motion",
        source: source.to_string(),
        scene_count: scene_count(scene_manifest),
        manifest: scene_manifest.clone(),
        summary: summary.clone(),
    }
}

fn scene_count(scene_manifest: &Value) -> usize {
    scene_manifest
        .get("scenes")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
