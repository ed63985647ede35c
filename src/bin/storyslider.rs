use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use storyslider::{HeadlessRenderer, Point, SlideRegistry, SliderConfig, StorySlider, Timeline};

#[derive(Parser, Debug)]
#[command(name = "storyslider", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an input script against a headless slider and print derived state per step.
    Simulate(SimulateArgs),
    /// Print per-category slide counts and progress-bar shares.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Slide registry JSON (array of slide records).
    #[arg(long)]
    slides: PathBuf,

    /// Input script JSON (array of steps).
    #[arg(long)]
    script: PathBuf,

    /// Optional slider config JSON; defaults are used for missing fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Clock step used when a `tick` is replayed, in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_secs: f64,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Slide registry JSON (array of slide records).
    #[arg(long)]
    slides: PathBuf,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
enum Step {
    Wheel(f64),
    Touch { from: [f64; 2], to: [f64; 2] },
    Advance,
    Retreat,
    Jump(String),
    Tick(f64),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn read_text(path: &Path, what: &str) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("open {what} '{}'", path.display()))
}

fn read_registry(path: &Path) -> anyhow::Result<SlideRegistry> {
    let s = read_text(path, "slide registry")?;
    Ok(SlideRegistry::from_json(&s).with_context(|| "parse slide registry JSON")?)
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let registry = read_registry(&args.slides)?;
    let out = serde_json::json!({
        "slides": registry.len(),
        "categories": registry.category_shares(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if !(args.frame_secs.is_finite() && args.frame_secs > 0.0) {
        anyhow::bail!("--frame-secs must be > 0");
    }

    let registry = read_registry(&args.slides)?;
    let config = match &args.config {
        Some(path) => SliderConfig::from_json(&read_text(path, "config")?)
            .with_context(|| "parse slider config JSON")?,
        None => SliderConfig::default(),
    };
    let steps: Vec<Step> = serde_json::from_str(&read_text(&args.script, "input script")?)
        .with_context(|| "parse input script JSON")?;

    let mut slider = StorySlider::mount(
        registry,
        config,
        Timeline::new(),
        &mut HeadlessRenderer::new(),
    )?;

    for (i, step) in steps.into_iter().enumerate() {
        let started = match &step {
            Step::Wheel(delta) => slider.wheel(*delta),
            Step::Touch { from, to } => {
                slider.touch_start(Point::new(from[0], from[1]));
                slider.touch_move(Point::new(to[0], to[1]));
                slider.touch_end()
            }
            Step::Advance => slider.advance(),
            Step::Retreat => slider.retreat(),
            Step::Jump(category) => slider.jump_to_category(category),
            Step::Tick(secs) => {
                replay_tick(&mut slider, *secs, args.frame_secs)
                    .with_context(|| format!("replay step {i}"))?;
                false
            }
        };

        let line = serde_json::json!({
            "step": i,
            "started": started,
            "state": slider.state(),
            "derived": slider.derived(),
        });
        println!("{line}");
    }
    Ok(())
}

/// Upper bound on frames replayed for a single `tick` step.
const MAX_TICK_FRAMES: u64 = 1_000_000;

/// Advance the clock by `secs` in `frame_secs` slices. Stops early once no
/// transition is in flight and the engine is idle.
fn replay_tick(
    slider: &mut StorySlider<Timeline>,
    secs: f64,
    frame_secs: f64,
) -> anyhow::Result<()> {
    if !(secs.is_finite() && secs >= 0.0) {
        anyhow::bail!("tick must be finite and >= 0, got {secs}");
    }

    let frames = (secs / frame_secs).ceil().min(MAX_TICK_FRAMES as f64) as u64;
    for frame in 0..frames {
        if !slider.is_locked() && slider.engine().is_idle() {
            break;
        }
        let left = secs - frame as f64 * frame_secs;
        if left <= 0.0 {
            break;
        }
        slider.tick(left.min(frame_secs));
    }
    Ok(())
}
