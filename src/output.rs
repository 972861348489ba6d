//! Story-pack directory layout and manifest writing.
//!
//! Writes go straight to their final paths; a failed run may leave a
//! partially populated pack directory behind.
use crate::paths::PackPaths;
use crate::transform::GeneratedManifests;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Compact UTC timestamp prefix used for pack directory names.
const PACK_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Name of the pack directory for a run started at `now`.
pub fn pack_dir_name(now: DateTime<Utc>, jurisdiction: &str, corridor: &str) -> String {
    format!(
        "{}_{jurisdiction}_{corridor}",
        now.format(PACK_TIMESTAMP_FORMAT)
    )
}

/// Create `<output_dir>/<timestamp>_<jurisdiction>_<corridor>/{report,web,motion}`.
///
/// The base directory is created if needed and canonicalized, so every path
/// derived from the returned layout is absolute.
pub fn create_pack_layout(
    output_dir: &Path,
    jurisdiction: &str,
    corridor: &str,
) -> Result<PackPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let base = output_dir
        .canonicalize()
        .with_context(|| format!("resolve output dir {}", output_dir.display()))?;
    let paths = PackPaths::new(base.join(pack_dir_name(Utc::now(), jurisdiction, corridor)));
    for dir in paths.target_dirs() {
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    }
    tracing::info!(root = %paths.root().display(), "created story pack layout");
    Ok(paths)
}

/// Serialize `value` as 2-space indented JSON and write it to `path`,
/// replacing any existing file. Returns the written text.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("serialize {}", path.display()))?;
    fs::write(path, &json).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote manifest");
    Ok(json)
}

/// Write the report, web, and motion manifests into their target directories.
pub fn write_manifests(paths: &PackPaths, manifests: &GeneratedManifests) -> Result<()> {
    write_json(&paths.report_manifest_path(), &manifests.report)?;
    write_json(&paths.web_manifest_path(), &manifests.web)?;
    write_json(&paths.motion_manifest_path(), &manifests.motion)?;
    Ok(())
}
