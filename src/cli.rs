use clap::{Parser, Subcommand};
use placard::{OutputFormat, Preset};
use std::path::PathBuf;

/// Compose the NextStep posters as PDF, or snapshot their HTML rendition
#[derive(Parser)]
#[command(name = "placard", about, version, propagate_version = true)]
pub struct Cli {
    /// Defaults to `compose` with the showcase preset
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lay out a preset poster and save it
    Compose(ComposeArgs),
    /// Capture an HTML poster as a PNG with headless Chrome
    Snapshot {
        /// HTML file to render
        html: PathBuf,
        #[arg(short, long, default_value = "NextStep_Poster.png")]
        output: PathBuf,
        /// Browser window width in pixels
        #[arg(long, default_value_t = 4800)]
        width: u32,
        /// Browser window height in pixels
        #[arg(long, default_value_t = 3600)]
        height: u32,
    },
    /// List the available presets
    Presets,
}

#[derive(clap::Args, Default)]
pub struct ComposeArgs {
    #[arg(short, long, value_enum, default_value_t)]
    pub preset: Preset,
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
    /// JSON theme file replacing the preset's look
    #[arg(long)]
    pub theme: Option<PathBuf>,
    /// Directory searched for section images (default: working directory)
    #[arg(long)]
    pub assets: Option<PathBuf>,
    /// Save to exactly this path instead of the preset's locations
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
