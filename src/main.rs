mod cli;

use clap::Parser;
use cli::{Cli, Command, ComposeArgs};
use placard::snapshot;
use placard::{PipelineError, PosterPipeline, Preset};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command.unwrap_or(Command::Compose(ComposeArgs::default())) {
        Command::Compose(args) => compose(args),
        Command::Snapshot {
            html,
            output,
            width,
            height,
        } => run_snapshot(&html, &output, width, height),
        Command::Presets => {
            list_presets();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn compose(args: ComposeArgs) -> Result<(), PipelineError> {
    let mut pipeline = PosterPipeline::new(args.preset).with_format(args.format);
    if let Some(theme) = &args.theme {
        pipeline = pipeline.with_theme_file(theme)?;
    }
    if let Some(assets) = &args.assets {
        pipeline = pipeline.with_assets_dir(assets);
    }
    if let Some(output) = args.output {
        pipeline = pipeline.with_output(output);
    }

    let path = pipeline.run()?;
    println!("{}", path.display());
    Ok(())
}

#[cfg(feature = "snapshot")]
fn run_snapshot(html: &Path, output: &Path, width: u32, height: u32) -> Result<(), PipelineError> {
    let chrome = snapshot::ChromeSnapshotter { width, height };
    snapshot::snapshot_file(&chrome, html, output)?;
    log::info!("Snapshot saved to {}", output.display());
    Ok(())
}

#[cfg(not(feature = "snapshot"))]
fn run_snapshot(_html: &Path, _output: &Path, _width: u32, _height: u32) -> Result<(), PipelineError> {
    Err(snapshot::RenderError::Launch("built without the `snapshot` feature".to_string()).into())
}

fn list_presets() {
    for preset in Preset::all() {
        let content = preset.content();
        let titles: Vec<&str> = content.sections.iter().map(|s| s.title.as_str()).collect();
        println!("{:<10} {}", preset.name(), titles.join(" | "));
    }
}
