//! Frame-paced host loop: input, render, advance, sleep

pub mod input;
pub mod pacer;

pub use input::{HostEvent, InputSource, LineInput, ScriptedInput};
pub use pacer::FramePacer;

use crate::game_of_life::Simulation;
use crate::render::{FrameStatus, Renderer};
use anyhow::Result;
use log::{debug, info, warn};
use std::time::Duration;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub generation: u64,
    pub living_cells: usize,
    pub quit_requested: bool,
}

pub struct Host<R: Renderer, I: InputSource> {
    renderer: R,
    input: I,
    pacer: FramePacer,
    max_generations: Option<u64>,
}

impl<R: Renderer, I: InputSource> Host<R, I> {
    pub fn new(renderer: R, input: I, frame_interval: Duration) -> Self {
        Self {
            renderer,
            input,
            pacer: FramePacer::new(frame_interval),
            max_generations: None,
        }
    }

    /// Stop once this generation has been drawn
    pub fn with_max_generations(mut self, max_generations: Option<u64>) -> Self {
        self.max_generations = max_generations;
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run until a quit event or the generation limit.
    ///
    /// Each frame drains pending input, draws the current generation,
    /// advances if running, then sleeps out the frame budget.
    pub fn run(&mut self, simulation: &mut Simulation) -> Result<RunSummary> {
        info!(
            "Starting {}x{} simulation at {:?} per frame",
            simulation.grid().side_length(),
            simulation.grid().side_length(),
            self.pacer.target_frame_time()
        );

        let mut frames = 0;
        let mut quit_requested = false;

        loop {
            self.pacer.begin_frame();

            for event in self.input.poll_events() {
                match event {
                    HostEvent::TogglePause => {
                        simulation.toggle_running();
                    }
                    HostEvent::Step if simulation.is_running() => {
                        debug!("Ignoring step while running");
                    }
                    HostEvent::Step => simulation.step(),
                    HostEvent::Quit => quit_requested = true,
                }
            }

            if !quit_requested && !simulation.is_running() && self.input.is_closed() {
                warn!(
                    "Input closed while paused at generation {}, stopping",
                    simulation.generation()
                );
                break;
            }

            if quit_requested {
                info!("Quit requested at generation {}", simulation.generation());
                break;
            }

            self.renderer
                .render(simulation.grid(), &FrameStatus::capture(simulation))?;
            frames += 1;

            if self
                .max_generations
                .is_some_and(|max| simulation.generation() >= max)
            {
                info!("Reached generation limit {}", simulation.generation());
                break;
            }

            simulation.tick();
            self.pacer.finish_frame();
        }

        Ok(RunSummary {
            frames,
            generation: simulation.generation(),
            living_cells: simulation.grid().living_count(),
            quit_requested,
        })
    }
}
