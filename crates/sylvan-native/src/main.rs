use anyhow::{bail, Context};
use clap::Parser;
use rand::rngs::StdRng;
use std::path::PathBuf;
use sylvan_core::random::seeded;
use sylvan_core::{
    ClickOutcome, FrameDriver, FrameStatus, RecordingSurface, SceneConfig, SceneVariant, Surface,
    TreeCapacity,
};

mod pixmap;

use pixmap::PixmapSurface;

#[derive(Parser, Debug)]
#[command(name = "sylvan", about = "Render the sylvan scene headlessly to PNG frames")]
struct Args {
    /// Scene to compose: forest or lettering
    #[arg(long, default_value = "forest")]
    variant: SceneVariant,
    #[arg(long, default_value_t = 960)]
    width: u32,
    #[arg(long, default_value_t = 540)]
    height: u32,
    /// Frames to simulate
    #[arg(long, default_value_t = 360)]
    frames: u32,
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    #[arg(long, default_value_t = 7)]
    seed: u64,
    /// Directory PNG frames are written to
    #[arg(long, default_value = "frames")]
    out: PathBuf,
    /// Write every Nth frame
    #[arg(long, default_value_t = 30)]
    every: u32,
    /// Scripted click as FRAME:X,Y (repeatable)
    #[arg(long = "click", value_parser = parse_click)]
    clicks: Vec<Click>,
    /// Tree pool size; 0 keeps every tree
    #[arg(long)]
    max_trees: Option<usize>,
    /// Record draw commands instead of rasterizing
    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Click {
    frame: u32,
    x: f32,
    y: f32,
}

fn parse_click(s: &str) -> Result<Click, String> {
    let (frame, pos) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FRAME:X,Y, got {s:?}"))?;
    let (x, y) = pos
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y after ':', got {pos:?}"))?;
    Ok(Click {
        frame: frame.trim().parse().map_err(|e| format!("frame: {e}"))?,
        x: x.trim().parse().map_err(|e| format!("x: {e}"))?,
        y: y.trim().parse().map_err(|e| format!("y: {e}"))?,
    })
}

/// Clicks used when none are given on the command line.
fn default_clicks(variant: SceneVariant, width: u32, height: u32, frames: u32) -> Vec<Click> {
    let (w, h) = (width as f32, height as f32);
    match variant {
        SceneVariant::Forest => vec![
            Click { frame: 20, x: w * 0.3, y: h * 0.78 },
            Click { frame: 60, x: w * 0.55, y: h * 0.82 },
            Click { frame: 120, x: w * 0.75, y: h * 0.8 },
        ],
        SceneVariant::Lettering => vec![
            Click { frame: frames / 2, x: w * 0.5, y: h * 0.5 },
            Click { frame: frames * 3 / 4, x: w * 0.5, y: h * 0.5 },
        ],
    }
}

fn config(args: &Args) -> SceneConfig {
    let mut config = SceneConfig::default().with_variant(args.variant);
    match args.max_trees {
        Some(0) => config.tree_capacity = TreeCapacity::Unbounded,
        Some(n) => config.tree_capacity = TreeCapacity::Capped(n),
        None => {}
    }
    config
}

/// Drives `frames` simulated frames, applying the scripted clicks before the
/// frame they are scheduled on. `after` sees every drawn frame.
fn simulate<S: Surface>(
    driver: &mut FrameDriver<S, StdRng>,
    args: &Args,
    clicks: &[Click],
    mut after: impl FnMut(u32, &mut S) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let step_ms = 1000.0 / args.fps;
    for frame in 0..args.frames {
        for click in clicks.iter().filter(|c| c.frame == frame) {
            match driver.on_pointer_click(click.x, click.y) {
                ClickOutcome::Ignored => log::warn!("click at ({}, {}) ignored", click.x, click.y),
                outcome => log::info!("frame {frame}: {outcome:?}"),
            }
        }
        if driver.on_frame(frame as f64 * step_ms) == FrameStatus::Stopped {
            break;
        }
        after(frame, driver.surface_mut())?;
    }
    driver.dispose();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if args.fps <= 0.0 || !args.fps.is_finite() {
        bail!("fps must be positive, got {}", args.fps);
    }
    let every = args.every.max(1);
    let clicks = if args.clicks.is_empty() {
        default_clicks(args.variant, args.width, args.height, args.frames)
    } else {
        args.clicks.clone()
    };
    log::info!(
        "{} scene {}x{} for {} frames (seed {})",
        args.variant,
        args.width,
        args.height,
        args.frames,
        args.seed
    );

    if args.dry_run {
        let surface = RecordingSurface::new(args.width as f32, args.height as f32);
        let mut driver = FrameDriver::create(Some(surface), config(&args), seeded(args.seed))?;
        let mut total = 0usize;
        simulate(&mut driver, &args, &clicks, |frame, surface| {
            let count = surface.primitive_count();
            surface.take();
            total += count;
            if frame % every == 0 {
                log::info!("frame {frame}: {count} primitives");
            }
            Ok(())
        })?;
        log::info!("dry run complete, {total} primitives counted");
        return Ok(());
    }

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let surface = PixmapSurface::new(args.width, args.height);
    let mut driver = FrameDriver::create(surface, config(&args), seeded(args.seed))?;
    let mut written = 0u32;
    simulate(&mut driver, &args, &clicks, |frame, surface| {
        if frame % every == 0 || frame + 1 == args.frames {
            let path = args.out.join(format!("frame_{frame:05}.png"));
            surface
                .save_png(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            written += 1;
        }
        Ok(())
    })?;
    log::info!("wrote {written} frames to {}", args.out.display());
    Ok(())
}
