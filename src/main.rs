//! Glyph Drift entry point
//!
//! Headless host: drives the wallpaper at its fixed cadence and reports
//! particle positions as JSON lines or a run summary.

use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use glam::Vec2;
use serde::Serialize;

use glyph_drift::sim::{ParticleView, TickReport};
use glyph_drift::{FieldSettings, FrameInput, Wallpaper, is_usable_canvas};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Print a summary line at the end of the run
    Summary,
    /// One JSON line per frame with every particle
    Frames,
}

#[derive(Parser, Debug)]
#[command(name = "glyph-drift")]
#[command(about = "Bouncing glyph wallpaper simulation")]
#[command(version)]
struct Cli {
    /// Settings file (JSON); defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas width
    #[arg(long, default_value_t = 390.0)]
    width: f32,

    /// Canvas height
    #[arg(long, default_value_t = 844.0)]
    height: f32,

    /// Frames to run
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// RNG seed (overrides the settings file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Particle count (overrides the settings file)
    #[arg(long)]
    count: Option<usize>,

    /// Simulate a tap every N frames
    #[arg(long)]
    reset_every: Option<u64>,

    /// Sleep one tick interval between frames
    #[arg(long)]
    realtime: bool,

    /// Output mode
    #[arg(long, value_enum, default_value_t = Emit::Summary)]
    emit: Emit,

    /// Write the effective settings to this path and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

#[derive(Serialize)]
struct FrameLine<'a> {
    frame: u64,
    seeded: bool,
    wall_hits: u32,
    pair_collisions: u32,
    particles: Vec<ParticleView<'a, String>>,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Canvas from `--width`/`--height`, rejecting sizes nothing can be placed on
fn canvas_size(width: f32, height: f32) -> Result<Vec2> {
    let canvas = Vec2::new(width, height);
    ensure!(
        is_usable_canvas(canvas),
        "canvas must be finite and positive, got {width}x{height}"
    );
    Ok(canvas)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let canvas = canvas_size(cli.width, cli.height)?;

    let mut settings = match &cli.config {
        Some(path) => FieldSettings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => FieldSettings::default(),
    };
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    if let Some(count) = cli.count {
        settings.params.target_count = count;
    }
    settings.validate().context("invalid settings")?;

    if let Some(path) = &cli.write_config {
        settings
            .save(path)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        return Ok(());
    }

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Glyph Drift starting (seed {seed}, canvas {}x{})", cli.width, cli.height);

    let mut wallpaper = Wallpaper::new(settings.build_field(seed));
    let interval = Duration::from_secs_f32(settings.params.tick_interval);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut totals = TickReport::default();
    let mut fewest = usize::MAX;

    for frame in 1..=cli.ticks {
        let reset = cli.reset_every.is_some_and(|n| n > 0 && frame % n == 0);
        let report = wallpaper.frame(&FrameInput {
            canvas: Some(canvas),
            reset,
        });
        totals.merge(report.tick);
        if report.seeded {
            fewest = fewest.min(report.particles);
        }

        if cli.emit == Emit::Frames {
            let line = FrameLine {
                frame: report.frame,
                seeded: report.seeded,
                wall_hits: report.tick.wall_hits,
                pair_collisions: report.tick.pair_collisions,
                particles: wallpaper.snapshot(),
            };
            serde_json::to_writer(&mut out, &line)?;
            writeln!(out)?;
        }

        if cli.realtime {
            std::thread::sleep(interval);
        }
    }

    let target = settings.params.target_count;
    if fewest != usize::MAX && fewest < target {
        log::warn!("Crowded canvas: as few as {fewest}/{target} particles placed in a session");
    }
    if cli.emit == Emit::Summary {
        writeln!(
            out,
            "frames={} sessions={} particles={} wall_hits={} pair_collisions={}",
            wallpaper.frames(),
            wallpaper.sessions(),
            wallpaper.field().len(),
            totals.wall_hits,
            totals.pair_collisions
        )?;
    }
    out.flush()?;

    log::info!("Glyph Drift finished");
    Ok(())
}
