use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tapewarp::{Bitmap, Disposal, EffectParameters, FramePatch, RenderThreading};

#[derive(Parser, Debug)]
#[command(name = "tapewarp", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply the effect chain to a still image and write a PNG.
    Frame(FrameArgs),
    /// Composite an animated GIF and write one processed PNG per frame.
    Frames(FramesArgs),
    /// List the builtin presets.
    Presets,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input image (PNG, JPEG, ...).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    effect: EffectArgs,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input animated GIF.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for frame_###.png files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Process frames on a worker pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    #[command(flatten)]
    effect: EffectArgs,
}

#[derive(Args, Debug)]
struct EffectArgs {
    /// Builtin preset name (see `tapewarp presets`).
    #[arg(long)]
    preset: Option<String>,

    /// JSON file with a partial parameter bundle; unspecified fields stay
    /// neutral. Takes precedence over --preset.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Seed for the noise, dust, and scratch stages.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Resize to this width before the effect chain (nearest-neighbor).
    #[arg(long)]
    width: Option<u32>,

    /// Resize to this height before the effect chain (nearest-neighbor).
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Presets => cmd_presets(),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let params = resolve_params(&args.effect)?;
    let img = image::open(&args.in_path)
        .with_context(|| format!("decode image '{}'", args.in_path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    let frame = Bitmap::from_raw(width, height, img.into_raw())?;
    let frame = resize_if_requested(frame, &args.effect)?;

    let out = tapewarp::apply_effects_seeded(&frame, &params, args.effect.seed);
    write_png(&args.out, &out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let params = resolve_params(&args.effect)?;
    let (patches, canvas_w, canvas_h) = decode_gif_patches(&args.in_path)?;
    let frames = tapewarp::compose_frames(&patches, canvas_w, canvas_h)?;
    let frames = frames
        .into_iter()
        .map(|f| resize_if_requested(f, &args.effect))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let threading = RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let processed = tapewarp::process_frames(&frames, &params, &threading, args.effect.seed)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for (i, frame) in processed.iter().enumerate() {
        write_png(&args.out_dir.join(format!("frame_{:03}.png", i + 1)), frame)?;
    }
    eprintln!(
        "wrote {} frames to {}",
        processed.len(),
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    for preset in tapewarp::builtin_presets() {
        println!("{}", preset.name);
    }
    Ok(())
}

fn resolve_params(args: &EffectArgs) -> anyhow::Result<EffectParameters> {
    if let Some(path) = &args.params {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read params '{}'", path.display()))?;
        return serde_json::from_str(&text)
            .with_context(|| format!("parse params '{}'", path.display()));
    }
    match &args.preset {
        Some(name) => {
            tapewarp::find_preset(name).with_context(|| format!("unknown preset '{name}'"))
        }
        None => Ok(EffectParameters::default()),
    }
}

/// The engine never resamples; target sizing happens here, before the
/// effect chain, with nearest-neighbor to keep hard pixel edges.
fn resize_if_requested(frame: Bitmap, args: &EffectArgs) -> anyhow::Result<Bitmap> {
    if args.width.is_none() && args.height.is_none() {
        return Ok(frame);
    }
    let target_w = args.width.unwrap_or(frame.width);
    let target_h = args.height.unwrap_or(frame.height);
    if (target_w, target_h) == (frame.width, frame.height) {
        return Ok(frame);
    }
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.data)
        .context("bitmap buffer does not match its dimensions")?;
    let resized = image::imageops::resize(
        &img,
        target_w,
        target_h,
        image::imageops::FilterType::Nearest,
    );
    Ok(Bitmap::from_raw(target_w, target_h, resized.into_raw())?)
}

fn decode_gif_patches(path: &Path) -> anyhow::Result<(Vec<FramePatch>, u32, u32)> {
    let file =
        std::fs::File::open(path).with_context(|| format!("open gif '{}'", path.display()))?;
    let mut opts = gif::DecodeOptions::new();
    opts.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = opts
        .read_info(std::io::BufReader::new(file))
        .context("read gif header")?;

    let canvas_w = u32::from(decoder.width());
    let canvas_h = u32::from(decoder.height());
    let mut patches = Vec::new();
    while let Some(frame) = decoder.read_next_frame().context("decode gif frame")? {
        let disposal = match frame.dispose {
            gif::DisposalMethod::Background => Disposal::Background,
            gif::DisposalMethod::Previous => Disposal::Previous,
            gif::DisposalMethod::Any | gif::DisposalMethod::Keep => Disposal::Keep,
        };
        patches.push(FramePatch {
            left: u32::from(frame.left),
            top: u32::from(frame.top),
            width: u32::from(frame.width),
            height: u32::from(frame.height),
            disposal,
            rgba: frame.buffer.to_vec(),
        });
    }
    Ok((patches, canvas_w, canvas_h))
}

fn write_png(path: &Path, frame: &Bitmap) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
