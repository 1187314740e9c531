use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrollscrub::{FileLoader, Script, ScrollSection, SectionConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scrollscrub", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay scripted scroll/hover input against an animation and dump a frame trace.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Lottie animation JSON.
    #[arg(long)]
    asset: PathBuf,

    /// SVG snapshot of the rendered animation (enables clip-path lookup and hit testing).
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Section config JSON (defaults to the landing page layout).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Event script JSON (defaults to a full scroll-then-hover walkthrough).
    #[arg(long)]
    script: Option<PathBuf>,

    /// Refresh rate of the simulated display.
    #[arg(long, default_value_t = 60.0)]
    hz: f64,

    /// Output trace path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => SectionConfig::from_path(path)?,
        None => SectionConfig::default(),
    };
    let regions: Vec<String> = config
        .keyframes
        .iter()
        .map(|k| k.region().to_owned())
        .collect();

    let mut loader = FileLoader::new(&args.asset);
    if let Some(svg) = &args.svg {
        loader = loader.with_svg_snapshot(svg);
    }

    let mut section = ScrollSection::mount(config, Box::new(loader))?;
    let script = match &args.script {
        Some(path) => Script::from_path(path)?,
        None => Script::walkthrough(section.pin_window().1, &regions),
    };
    let trace = script.replay(&mut section, args.hz);
    section.dispose();
    let trace = trace?;

    let json = serde_json::to_string_pretty(&trace).context("serialize frame trace")?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write trace '{}'", out.display()))?;
            eprintln!("wrote {} frames to {}", trace.len(), out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
