use crate::{
    config::{LineStyle, SimulationConfig},
    error::{AberrationError, SimulationError},
    field_lines::{FieldLineAssembler, FieldLines},
    history::RetardedHistory,
    motion::{MotionKind, MotionModel},
    render::{draw_field_lines, Renderer},
};
use legion::*;
use log::{debug, info};
use std::time::Instant;

const FRAME_RATE_INTERVAL: f64 = 0.3;

/// Seconds on a monotonic clock.
pub trait Clock {
    fn now(&self) -> f64;
}

pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationData {
    /// Simulated seconds, the sum of all accepted steps.
    pub time: f64,
    pub time_delta: f64,
    /// Latest clock reading handed to the loop.
    pub clock: f64,
    pub last_clock: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub frames: u32,
    pub elapsed: f64,
}

/// First fatal error raised by a system this tick.
#[derive(Debug, Default)]
pub struct Fault(Option<SimulationError>);

pub fn init_simulation(resources: &mut Resources, simulation_config: SimulationConfig) {
    resources.insert(SimulationData {
        time: 0.,
        time_delta: 0.,
        clock: 0.,
        last_clock: None,
    });
    resources.insert(FieldLineAssembler::new(
        simulation_config.directions,
        simulation_config.propagation_speed,
    ));
    resources.insert(FrameStats::default());
    resources.insert(Fault::default());
    resources.insert(simulation_config);
}

#[system]
pub fn advance_time(
    #[resource] simulation_data: &mut SimulationData,
    #[resource] simulation_config: &SimulationConfig,
) {
    let elapsed = match simulation_data.last_clock {
        Some(last) => simulation_data.clock - last,
        None => 0.,
    };
    simulation_data.last_clock = Some(simulation_data.clock);
    if elapsed < 0. {
        debug!("Clock went back {}s, holding simulation time", -elapsed);
    }
    simulation_data.time_delta = elapsed.max(0.).min(simulation_config.max_time_step);
    simulation_data.time += simulation_data.time_delta;
}

#[system(for_each)]
pub fn advance_charge(motion: &mut MotionModel, #[resource] simulation_data: &SimulationData) {
    motion.advance(simulation_data.time_delta);
}

#[system(for_each)]
pub fn sample_history(
    motion: &MotionModel,
    history: &mut RetardedHistory,
    #[resource] simulation_data: &SimulationData,
    #[resource] simulation_config: &SimulationConfig,
) {
    let state = motion.state();
    if history.sample(state, simulation_data.time_delta, simulation_data.time) {
        debug!(
            "Emission at {:.3}: position {:?} velocity {:?}",
            simulation_data.time, state.position, state.velocity
        );
    }
    history.evict_expired(
        simulation_data.time,
        simulation_config.propagation_speed,
        simulation_config.visible_radius(),
    );
    history.evict_overflow();
}

#[system(for_each)]
pub fn assemble_field_lines(
    motion: &MotionModel,
    history: &RetardedHistory,
    field_lines: &mut FieldLines,
    #[resource] simulation_data: &SimulationData,
    #[resource] assembler: &FieldLineAssembler,
    #[resource] fault: &mut Fault,
) {
    match assembler.assemble(history, simulation_data.time) {
        Ok(lines) => *field_lines = lines,
        Err(source) => {
            let AberrationError::Superluminal { velocity, .. } = source;
            fault.0.get_or_insert(SimulationError::Superluminal {
                model: motion.kind(),
                velocity,
                source,
            });
        }
    }
}

#[system]
pub fn report_frame_rate(
    #[resource] frame_stats: &mut FrameStats,
    #[resource] simulation_data: &SimulationData,
) {
    frame_stats.frames += 1;
    frame_stats.elapsed += simulation_data.time_delta;
    if frame_stats.elapsed >= FRAME_RATE_INTERVAL {
        info!("FPS {:.1}", frame_stats.frames as f64 / frame_stats.elapsed);
        *frame_stats = FrameStats::default();
    }
}

/// Owns the charge and everything derived from it, and advances them one
/// frame at a time.
pub struct FrameLoop {
    world: World,
    resources: Resources,
    schedule: Schedule,
}

impl FrameLoop {
    pub fn new(simulation_config: SimulationConfig, motion: MotionModel) -> FrameLoop {
        info!(
            "Starting {} charge, {} lines, history of {} samples",
            motion.kind(),
            simulation_config.directions,
            simulation_config.history_capacity()
        );
        let mut world = World::default();
        world.push((
            motion,
            RetardedHistory::new(
                simulation_config.sample_interval,
                simulation_config.history_capacity(),
            ),
            FieldLines::empty(simulation_config.directions),
        ));

        let mut resources = Resources::default();
        init_simulation(&mut resources, simulation_config);

        let schedule = Schedule::builder()
            .add_system(advance_time_system())
            .add_system(advance_charge_system())
            .add_system(sample_history_system())
            .add_system(assemble_field_lines_system())
            .add_system(report_frame_rate_system())
            .build();

        FrameLoop {
            world,
            resources,
            schedule,
        }
    }

    /// Runs one frame with the clock reading `now`.
    ///
    /// On error the field lines of the previous frame are kept.
    pub fn tick(&mut self, now: f64) -> Result<(), SimulationError> {
        if let Some(mut simulation_data) = self.resources.get_mut::<SimulationData>() {
            simulation_data.clock = now;
        }
        self.schedule.execute(&mut self.world, &mut self.resources);
        match self
            .resources
            .get_mut::<Fault>()
            .and_then(|mut fault| fault.0.take())
        {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    pub fn simulation_time(&self) -> f64 {
        self.resources
            .get::<SimulationData>()
            .map_or(0., |simulation_data| simulation_data.time)
    }

    pub fn motion_kind(&self) -> Option<MotionKind> {
        self.inspect(|motion, _, _| motion.kind())
    }

    /// Runs `f` against the charge's current state.
    pub fn inspect<T>(
        &self,
        f: impl FnOnce(&MotionModel, &RetardedHistory, &FieldLines) -> T,
    ) -> Option<T> {
        <(&MotionModel, &RetardedHistory, &FieldLines)>::query()
            .iter(&self.world)
            .next()
            .map(|(motion, history, field_lines)| f(motion, history, field_lines))
    }

    pub fn render<R: Renderer>(
        &self,
        renderer: &mut R,
        style: &LineStyle,
    ) -> Result<(), SimulationError> {
        renderer.clear(style.background)?;
        for field_lines in <&FieldLines>::query().iter(&self.world) {
            draw_field_lines(renderer, field_lines, style)?;
        }
        renderer.present()
    }
}
