use anyhow::Context;
use clap::{ArgAction, Parser};
use mapdraw::config::Config;
use mapdraw::input::DrawToolsOptions;
use mapdraw::replay::{self, ReplayOptions, Script};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mapdraw")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("MAPDRAW_GIT_HASH"), ")"),
    about = "Point and extent draw tools for map views"
)]
struct Cli {
    /// Replay script (TOML) describing the view and the input steps
    #[arg(long, short = 's', value_name = "FILE")]
    script: PathBuf,

    /// Deactivate the tool after every completed draw
    #[arg(long, action = ArgAction::SetTrue)]
    one_shot: bool,

    /// Use drawn extents as the spatial filter
    #[arg(long, action = ArgAction::SetTrue)]
    spatial_filter: bool,

    /// Attribute filter passed to the stream service
    #[arg(long = "where", value_name = "CLAUSE")]
    where_clause: Option<String>,

    /// Show the pointer tooltip (overrides the config file)
    #[arg(long, action = ArgAction::SetTrue)]
    show_tooltips: bool,

    /// Tooltip offset in pixels (overrides the config file)
    #[arg(long, value_name = "PX")]
    tooltip_offset: Option<i32>,

    /// Config file to use instead of ~/.config/mapdraw/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut tools = DrawToolsOptions::from(&config);
    if cli.show_tooltips {
        tools.show_tooltips = true;
    }
    if let Some(offset) = cli.tooltip_offset {
        if !(0..=200).contains(&offset) {
            log::warn!("Invalid --tooltip-offset {offset}, clamping to 0-200 range");
        }
        tools.tooltip_offset = offset.clamp(0, 200);
    }

    let text = fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script {}", cli.script.display()))?;
    let script = Script::from_toml(&text)?;
    log::info!(
        "Replaying {} ({} steps)",
        cli.script.display(),
        script.steps.len()
    );

    let options = ReplayOptions {
        tools,
        one_shot: cli.one_shot,
        spatial_filter: cli.spatial_filter,
        where_clause: cli.where_clause,
    };
    let report = replay::run(&script, &options)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
