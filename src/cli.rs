//! CLI argument parsing for story-pack assembly.
//!
//! The CLI is a flat flag set; every flag has a default so a bare
//! `story-pack` invocation assembles a sample pack.
use clap::Parser;
use std::path::PathBuf;

/// Default map-data pipeline project root, relative to the working directory.
pub const DEFAULT_PIPELINE_ROOT: &str = "map-data-pipeline";
/// Default base directory that receives timestamped story packs.
pub const DEFAULT_OUTPUT_DIR: &str = ".artifacts/story-pack";
pub const DEFAULT_JURISDICTION: &str = "sample-jurisdiction";
pub const DEFAULT_CORRIDOR: &str = "sample-corridor";

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "story-pack",
    version,
    about = "Assemble report/web/motion story packs from map-data pipeline exports",
    after_help = "Inputs (read if present, else defaulted):\n  <pipeline-root>/exports/visual-boards/layer-index.json\n  <pipeline-root>/exports/remotion/scene-manifest.json\n  <pipeline-root>/exports/remotion/pipeline-summary.json\n\nExamples:\n  story-pack --pipeline-root ../map-data-pipeline --jurisdiction oakland --corridor broadway\n  story-pack --output-dir /tmp/packs -v"
)]
pub struct RootArgs {
    /// Path to the map-data pipeline project root
    #[arg(
        long,
        value_name = "DIR",
        env = "STORY_PACK_PIPELINE_ROOT",
        default_value = DEFAULT_PIPELINE_ROOT
    )]
    pub pipeline_root: PathBuf,

    /// Base output directory for generated story packs
    #[arg(
        long,
        value_name = "DIR",
        env = "STORY_PACK_OUTPUT_DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output_dir: PathBuf,

    /// Jurisdiction slug
    #[arg(
        long,
        value_name = "SLUG",
        env = "STORY_PACK_JURISDICTION",
        default_value = DEFAULT_JURISDICTION
    )]
    pub jurisdiction: String,

    /// Corridor slug
    #[arg(
        long,
        value_name = "SLUG",
        env = "STORY_PACK_CORRIDOR",
        default_value = DEFAULT_CORRIDOR
    )]
    pub corridor: String,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
