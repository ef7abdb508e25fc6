//! # Ember Sim
//!
//! Headless emitter runner. Loads an emitter document, drives it at the
//! fixed 60 Hz tick (or wall-clock with `--realtime`), renders every frame
//! into a recording adapter and prints a summary.
//!
//! ```text
//! ember_sim assets/fountain.toml 600 42
//! RUST_LOG=ember_core=trace ember_sim assets/vortex.toml --realtime
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ember::config;
use ember::core::{ParticleEmitter, FIXED_TICK_SECONDS};
use ember::rendering::{BlendFactor, DrawOffset, EmitterRenderer, RecordingAdapter};
use ember::FrameClock;

#[derive(Parser, Debug)]
#[command(name = "ember_sim", about = "Run a particle emitter headless")]
struct Args {
    /// Emitter document (TOML)
    config: PathBuf,

    /// Frames to simulate
    #[arg(default_value_t = 600)]
    frames: u32,

    /// Random seed
    #[arg(default_value_t = 0)]
    seed: u64,

    /// Use wall-clock deltas instead of the fixed tick
    #[arg(long)]
    realtime: bool,

    /// Draw offset applied to every sprite (x, y)
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    offset: Option<Vec<f32>>,
}

/// Aggregates over the whole run.
#[derive(Debug, Default)]
struct RunSummary {
    frames: u64,
    spawned: u64,
    died: u64,
    peak_alive: usize,
    final_alive: usize,
    sprites_drawn: usize,
    bytes_uploaded: usize,
    emission_stopped_at: Option<u64>,
    wall_time: Duration,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let emitter_config = config::load_from_path(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    let mut emitter = ParticleEmitter::with_seed(args.seed);
    emitter
        .configure(emitter_config.clone())
        .context("configuring emitter")?;
    debug!(
        path = %args.config.display(),
        kind = ?emitter_config.kind,
        max_particles = emitter_config.max_particles,
        seed = args.seed,
        "emitter configured"
    );

    let mut renderer = EmitterRenderer::new(&emitter_config);
    if let Some([x, y]) = args.offset.as_deref() {
        renderer.set_offset(DrawOffset::new(*x, *y));
    }
    let mut adapter = RecordingAdapter::new();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                         EMBER SIM                                ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();
    println!("Document:  {}", args.config.display());
    println!(
        "Emitter:   {:?}, {} particles, {:.2}s lifespan, seed {}",
        emitter_config.kind, emitter_config.max_particles, emitter_config.particle_lifespan, args.seed
    );
    println!(
        "Timing:    {} frames, {}",
        args.frames,
        if args.realtime { "wall clock" } else { "fixed 60 Hz" }
    );
    println!();

    let summary = run(&mut emitter, &mut renderer, &mut adapter, &args);
    print_summary(&summary, &renderer);

    Ok(())
}

fn run(
    emitter: &mut ParticleEmitter,
    renderer: &mut EmitterRenderer,
    adapter: &mut RecordingAdapter,
    args: &Args,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut clock = FrameClock::new().with_max_delta(0.1);
    let frame_budget = Duration::from_secs_f32(FIXED_TICK_SECONDS);
    let start = Instant::now();

    for frame in 0..u64::from(args.frames) {
        let delta = if args.realtime {
            std::thread::sleep(frame_budget.saturating_sub(clock.last_update().elapsed()));
            clock.tick()
        } else {
            FIXED_TICK_SECONDS
        };

        let was_active = emitter.is_active();
        emitter.update(delta);
        if was_active && !emitter.is_active() {
            info!(
                frame = frame + 1,
                elapsed = emitter.elapsed_time(),
                "emission stopped"
            );
            summary.emission_stopped_at = Some(frame + 1);
        }

        let stats = emitter.stats();
        summary.spawned += stats.spawned_this_frame as u64;
        summary.died += stats.died_this_frame as u64;
        summary.peak_alive = summary.peak_alive.max(stats.alive_count);

        renderer.render(&*emitter, adapter);
        summary.sprites_drawn += adapter.total_sprites();
        summary.bytes_uploaded += adapter.calls().iter().map(|c| c.byte_len).sum::<usize>();
        adapter.clear();
    }

    summary.frames = emitter.stats().frames;
    summary.final_alive = emitter.active_count();
    summary.wall_time = start.elapsed();
    info!(
        frames = summary.frames,
        spawned = summary.spawned,
        died = summary.died,
        "simulation finished"
    );
    summary
}

fn print_summary(summary: &RunSummary, renderer: &EmitterRenderer) {
    let batch = renderer.batch();
    let blend = batch.blend();
    let factor = |f: BlendFactor| match f {
        BlendFactor::Raw(value) => format!("raw 0x{value:04x}"),
        known => format!("{known:?}"),
    };

    println!("┌─ SIMULATION ───────────────────────────────────────────────────┐");
    println!("│ Frames:             {:<43}│", summary.frames);
    println!("│ Spawned:            {:<43}│", summary.spawned);
    println!("│ Died:               {:<43}│", summary.died);
    println!("│ Peak Alive:         {:<43}│", summary.peak_alive);
    println!("│ Final Alive:        {:<43}│", summary.final_alive);
    match summary.emission_stopped_at {
        Some(frame) => println!("│ Emission Stopped:   frame {:<37}│", frame),
        None => println!("│ Emission Stopped:   {:<43}│", "never"),
    }
    println!("└────────────────────────────────────────────────────────────────┘");
    println!();
    println!("┌─ RENDERING ────────────────────────────────────────────────────┐");
    println!("│ Sprites Drawn:      {:<43}│", summary.sprites_drawn);
    println!("│ Bytes Uploaded:     {:<43}│", summary.bytes_uploaded);
    println!("│ Blend:              {:<43}│", format!("{} / {}", factor(blend.source), factor(blend.destination)));
    println!("│ Blend Mode:         {:<43}│", format!("{:?}", blend.mode()));
    println!("│ Texture:            {:<43}│", batch.texture().unwrap_or("(none)"));
    println!("└────────────────────────────────────────────────────────────────┘");
    println!();
    println!("┌─ TIMING ───────────────────────────────────────────────────────┐");
    #[allow(clippy::cast_precision_loss)]
    let per_frame_us = if summary.frames == 0 {
        0.0
    } else {
        summary.wall_time.as_secs_f64() * 1_000_000.0 / summary.frames as f64
    };
    println!("│ Wall Time:          {:<43}│", format!("{:.3} ms", summary.wall_time.as_secs_f64() * 1000.0));
    println!("│ Per Frame:          {:<43}│", format!("{per_frame_us:.1} µs"));
    println!("└────────────────────────────────────────────────────────────────┘");
}
