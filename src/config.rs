//! Run configuration threaded through assembly.
//!
//! All run parameters live in one value built from the CLI; nothing in the
//! assembly path reads process-global state.
use crate::cli::RootArgs;
use anyhow::{anyhow, Context, Result};
use std::path::{Component, Path, PathBuf};

/// Parameters for a single story-pack run.
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Absolute path of the map-data pipeline project root.
    pub pipeline_root: PathBuf,
    /// Base output directory, as given; resolved once it has been created.
    pub output_dir: PathBuf,
    pub jurisdiction: String,
    pub corridor: String,
}

impl PackConfig {
    /// Build a config from parsed CLI flags, rejecting slugs that contain path
    /// separators.
    pub fn from_args(args: &RootArgs) -> Result<Self> {
        validate_slug("jurisdiction", &args.jurisdiction)?;
        validate_slug("corridor", &args.corridor)?;
        Ok(Self {
            pipeline_root: resolve_path(&args.pipeline_root)?,
            output_dir: args.output_dir.clone(),
            jurisdiction: args.jurisdiction.clone(),
            corridor: args.corridor.clone(),
        })
    }
}

/// Resolve `path` to an absolute path, canonical when it exists.
///
/// Missing paths are still recorded as provenance: the longest existing
/// ancestor is canonicalized and the missing tail is appended with `.` and
/// `..` applied lexically.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("resolve {}", path.display()));
    }
    let absolute =
        std::path::absolute(path).with_context(|| format!("resolve {}", path.display()))?;
    let components: Vec<Component<'_>> = absolute.components().collect();

    let mut split = components.len();
    let mut existing: PathBuf = components.iter().collect();
    while split > 1 && !existing.exists() {
        split -= 1;
        existing = components[..split].iter().collect();
    }

    let mut resolved = existing
        .canonicalize()
        .with_context(|| format!("resolve {}", existing.display()))?;
    for component in &components[split..] {
        match component {
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => resolved.push(name),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    Ok(resolved)
}

fn validate_slug(label: &str, slug: &str) -> Result<()> {
    if slug.contains('/') || slug.contains('\\') {
        return Err(anyhow!(
            "{label} slug must not contain path separators: {slug}"
        ));
    }
    Ok(())
}
