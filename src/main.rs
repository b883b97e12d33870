extern crate sdl2;

pub mod aberration;
pub mod config;
pub mod error;
pub mod field_lines;
pub mod history;
pub mod logging;
pub mod motion;
pub mod render;
pub mod simulation;
pub mod vector;

use anyhow::ensure;
use clap::Parser;
use config::{LineStyle, MotionConfig, SimulationConfig};
use log::{error, info, LevelFilter};
use motion::{MotionKind, MotionModel, SharedPointer};
use render::{init_graphics, DisplayConfig};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use simulation::{Clock, FrameLoop, SystemClock};
use std::time::{Duration, Instant};

const FRAME_TIME_CAP: Duration = Duration::from_millis(16);

/// Field lines of a moving point charge, drawn from light-speed circles.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// How the charge moves.
    #[arg(long, value_enum, default_value_t = MotionKind::PointerFollowing)]
    motion: MotionKind,
    #[arg(long, default_value_t = SimulationConfig::default().width)]
    width: u32,
    #[arg(long, default_value_t = SimulationConfig::default().height)]
    height: u32,
    /// Propagation speed in pixels per second.
    #[arg(long, default_value_t = SimulationConfig::default().propagation_speed)]
    speed: f64,
    /// Seconds between emissions.
    #[arg(long, default_value_t = SimulationConfig::default().sample_interval)]
    interval: f64,
    /// Number of field lines.
    #[arg(long, default_value_t = SimulationConfig::default().directions)]
    directions: usize,
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

impl Args {
    fn simulation_config(&self) -> anyhow::Result<SimulationConfig> {
        ensure!(self.width > 0 && self.height > 0, "playfield must not be empty");
        ensure!(self.speed > 0., "propagation speed must be positive");
        ensure!(self.interval > 0., "emission interval must be positive");
        ensure!(self.directions > 0, "need at least one field line");
        Ok(SimulationConfig {
            width: self.width,
            height: self.height,
            propagation_speed: self.speed,
            sample_interval: self.interval,
            directions: self.directions,
            ..SimulationConfig::default()
        })
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let simulation_config = args.simulation_config()?;
    let mut graphics = init_graphics(DisplayConfig {
        width: simulation_config.width,
        height: simulation_config.height,
    })?;
    let mut event_pump = graphics.event_pump()?;

    let pointer = SharedPointer::new();
    let motion = MotionModel::from_config(
        args.motion,
        &simulation_config,
        &MotionConfig::default(),
        Box::new(pointer.clone()),
    );
    let mut frame_loop = FrameLoop::new(simulation_config, motion);
    let style = LineStyle::default();
    let clock = SystemClock::new();

    'running: loop {
        let frame_start = Instant::now();
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                _ => {}
            }
        }
        graphics.sync_pointer(&pointer, &event_pump);

        frame_loop.tick(clock.now())?;
        frame_loop.render(&mut graphics, &style)?;

        if let Some(remaining) = FRAME_TIME_CAP.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    if let Some(kind) = frame_loop.motion_kind() {
        info!(
            "Stopping {} charge at t = {:.2}s",
            kind,
            frame_loop.simulation_time()
        );
    }
    Ok(())
}

pub fn main() {
    let args = Args::parse();
    if let Err(e) = logging::init_logging(args.log_level) {
        eprintln!("Failed to set up logging: {:#}", e);
        std::process::exit(1);
    }
    if let Err(e) = run(&args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
