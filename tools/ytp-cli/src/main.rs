//! YTP+ CLI: manage a project file, export job plans, render and preview.
//!
//! Usage:
//!   ytpplus init                  Write a default project file
//!   ytpplus add <PATHS>...        Add source media
//!   ytpplus effect <ID> --enable  Toggle an effect
//!   ytpplus plan                  Export the job plan JSON
//!   ytpplus render                Render the video sources with ffmpeg
//!   ytpplus preview               Open the first video source in a previewer
//!   ytpplus check                 Check external tools

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ytp_common::config::{AppConfig, LoggingConfig};

mod commands;

#[derive(Parser)]
#[command(
    name = "ytpplus",
    about = "Remix videos by compiling effect toggles into ffmpeg filter graphs",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project file (defaults to the configured project file)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default project file
    Init {
        /// Overwrite an existing project file
        #[arg(long)]
        force: bool,
    },

    /// Show project information
    Info,

    /// Add source media files
    Add {
        /// Media kind: video, image, gif, audio, transition (inferred when omitted)
        #[arg(short, long)]
        kind: Option<String>,

        /// Files to add
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Add a remote media URL
    AddUrl { url: String },

    /// Remove one source by its zero-based index
    Remove {
        #[arg(short, long)]
        kind: String,

        index: usize,
    },

    /// Remove one URL by its zero-based index
    RemoveUrl { index: usize },

    /// Clear sources of one kind, or all sources and URLs
    Clear {
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// List the effect catalog with this project's configuration
    Effects,

    /// Configure one effect
    Effect {
        /// Effect identifier, e.g. `reverse`
        id: String,

        #[arg(long, conflicts_with = "disable")]
        enable: bool,

        #[arg(long)]
        disable: bool,

        #[arg(long)]
        probability: Option<f64>,

        #[arg(long)]
        max_level: Option<u32>,
    },

    /// Set one project setting by name
    Set { field: String, value: String },

    /// Restore sources, settings, effects and tools to defaults
    Reset,

    /// Export the job plan JSON
    Plan {
        /// Output file (defaults to <temp_dir>/ytp_plan.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the video sources to <temp_dir>/tempoutput.mp4
    Render {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the video sources to <temp_dir>/ytp_output.mp4
    Create,

    /// Preview the first video source
    Preview {
        /// Render a clip of this many seconds instead of launching a previewer
        #[arg(long, num_args = 0..=1, value_name = "SECONDS")]
        clip: Option<Option<u32>>,
    },

    /// Check that the configured tools can be found
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    // Initialize logging
    let logging = if cli.verbose {
        LoggingConfig {
            level: "debug".to_string(),
            ..config.logging.clone()
        }
    } else {
        config.logging.clone()
    };
    ytp_common::logging::init_logging(&logging);

    let project = cli.project.unwrap_or_else(|| config.project_file.clone());
    tracing::debug!(project = %project.display(), "Using project file");

    match cli.command {
        Commands::Init { force } => commands::init::run(&project, force),
        Commands::Info => commands::info::run(&project),
        Commands::Add { kind, paths } => commands::sources::add(&project, kind, paths),
        Commands::AddUrl { url } => commands::sources::add_url(&project, &url),
        Commands::Remove { kind, index } => commands::sources::remove(&project, &kind, index),
        Commands::RemoveUrl { index } => commands::sources::remove_url(&project, index),
        Commands::Clear { kind } => commands::sources::clear(&project, kind),
        Commands::Effects => commands::effects::list(&project),
        Commands::Effect {
            id,
            enable,
            disable,
            probability,
            max_level,
        } => {
            let enabled = match (enable, disable) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            commands::effects::configure(&project, &id, enabled, probability, max_level)
        }
        Commands::Set { field, value } => commands::settings::set(&project, &field, &value),
        Commands::Reset => commands::settings::reset(&project),
        Commands::Plan { output } => commands::plan::run(&project, output, &config),
        Commands::Render { output } => {
            commands::render::run(&project, output, &config.render.render_file_name)
        }
        Commands::Create => commands::render::run(&project, None, &config.render.create_file_name),
        Commands::Preview { clip } => {
            let clip = clip.map(|secs| secs.unwrap_or(config.render.preview_seconds));
            commands::preview::run(&project, clip)
        }
        Commands::Check => commands::check::run(&project),
    }
}
