use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use ledscene::{Color, Image, Installation, SampleCtx};

#[derive(Parser, Debug)]
#[command(name = "ledscene", version)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the CSS rgba() preview of one RGBW color.
    Rgba(RgbaArgs),
    /// Render one frame of a device.
    Frame(FrameArgs),
    /// Export an animated-color layer as a JSON timeline.
    Timeline(TimelineArgs),
    /// Check an installation file.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct RgbaArgs {
    #[arg(long, default_value_t = 0.0)]
    red: f64,
    #[arg(long, default_value_t = 0.0)]
    green: f64,
    #[arg(long, default_value_t = 0.0)]
    blue: f64,
    #[arg(long, default_value_t = 0.0)]
    white: f64,
    #[arg(long, default_value_t = 1.0)]
    opacity: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FrameFormat {
    /// One CSS rgba() string per LED.
    Css,
    /// One hex WS281x word per LED.
    Ws281x,
    /// The frame as JSON.
    Json,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input installation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Device key.
    #[arg(long)]
    device: String,

    /// Sample time in seconds since the UNIX epoch (defaults to now).
    #[arg(long)]
    at: Option<f64>,

    #[arg(long, value_enum, default_value_t = FrameFormat::Css)]
    format: FrameFormat,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Input installation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scene key.
    #[arg(long)]
    scene: String,

    /// Layer index within the scene (0 = bottom).
    #[arg(long, default_value_t = 0)]
    layer: usize,

    /// Reference "now" in seconds since the UNIX epoch (defaults to now).
    #[arg(long)]
    at: Option<f64>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input installation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Rgba(args) => cmd_rgba(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn sample_ctx(at: Option<f64>) -> SampleCtx {
    at.map(SampleCtx::at).unwrap_or_else(SampleCtx::wall_clock)
}

fn load(path: &Path) -> anyhow::Result<Installation> {
    let inst = Installation::from_path(path)
        .with_context(|| format!("load installation '{}'", path.display()))?;
    inst.validate()
        .with_context(|| format!("validate installation '{}'", path.display()))?;
    Ok(inst)
}

fn cmd_rgba(args: RgbaArgs) -> anyhow::Result<()> {
    let color = Color {
        red: args.red,
        green: args.green,
        blue: args.blue,
        white: args.white,
        opacity: args.opacity,
    };
    let css = ledscene::to_css_rgba(&color).context("convert color")?;
    println!("{css}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let inst = load(&args.in_path)?;
    let device = inst
        .devices
        .get(&args.device)
        .with_context(|| format!("unknown device '{}'", args.device))?;
    let frame = inst
        .render_device(&args.device, sample_ctx(args.at))
        .with_context(|| format!("render device '{}'", args.device))?;

    match args.format {
        FrameFormat::Css => {
            for px in &frame.pixels {
                println!("{}", ledscene::blend_white_lossy(px));
            }
        }
        FrameFormat::Ws281x => {
            for word in frame.to_ws281x(device.strip_type) {
                println!("0x{word:08x}");
            }
        }
        FrameFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
    }
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let inst = load(&args.in_path)?;
    let scene = inst
        .scenes
        .get(&args.scene)
        .with_context(|| format!("unknown scene '{}'", args.scene))?;
    let layer = scene
        .layers
        .get(args.layer)
        .with_context(|| format!("scene '{}' has no layer {}", args.scene, args.layer))?;

    let Image::ColorAnimation(anim) = &layer.image else {
        anyhow::bail!("layer {} is not an animated color", args.layer);
    };
    let timeline = ledscene::css_color_timeline(anim, sample_ctx(args.at))
        .context("export timeline")?
        .context("animation is not clock driven")?;

    println!("{}", serde_json::to_string_pretty(&timeline)?);
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let inst = load(&args.in_path)?;
    eprintln!(
        "ok: {} devices, {} scenes",
        inst.devices.len(),
        inst.scenes.len()
    );
    Ok(())
}
