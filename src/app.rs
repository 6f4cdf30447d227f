/*
 * Application Module
 *
 * This module defines the application model and the frame driver.
 *
 * The FrameDriver owns the world and the loop state (running, pending
 * resize, stop flag) and knows nothing about nannou, so it can be driven
 * with synthetic events. The nannou glue (model, update) feeds it the
 * window size every frame and pauses for the fixed frame delay.
 */

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use log::{debug, error, info};
use nannou::prelude::*;
use nannou::window;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::debug::DebugInfo;
use crate::input::{self, InputEvent};
use crate::params::SimulationParams;
use crate::renderer;
use crate::shutdown;
use crate::world::{Viewport, World};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    WindowClosed,
    Signal,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::WindowClosed => write!(f, "window closed"),
            StopReason::Signal => write!(f, "termination signal received"),
        }
    }
}

pub struct FrameDriver {
    world: World,
    running: bool,
    resized: Option<Viewport>,
    stop: &'static AtomicBool,
    debug_info: DebugInfo,
    report_interval: u64,
}

impl FrameDriver {
    pub fn new(world: World, stop: &'static AtomicBool, report_interval: u64) -> Self {
        Self {
            world,
            running: true,
            resized: None,
            stop,
            debug_info: DebugInfo::default(),
            report_interval,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn debug_info(&self) -> &DebugInfo {
        &self.debug_info
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Close => self.running = false,
            InputEvent::Resize(viewport) => self.resized = Some(viewport),
            InputEvent::Other => {}
        }
    }

    // Signals win over a closed window so the log names the signal
    pub fn stop_reason(&self) -> Option<StopReason> {
        if self.stop.load(Ordering::SeqCst) {
            Some(StopReason::Signal)
        } else if !self.running {
            Some(StopReason::WindowClosed)
        } else {
            None
        }
    }

    // Run one frame of physics against the viewport queried this frame
    pub fn advance(&mut self, viewport: Viewport, frame_time: Duration) {
        if let Some(reported) = self.resized.take() {
            info!(
                "window resized to {}x{} (using {}x{})",
                reported.width, reported.height, viewport.width, viewport.height
            );
        }

        self.world.set_viewport(viewport);
        self.world.step();

        if self.debug_info.record(frame_time, self.report_interval) {
            let frames = self.debug_info.frames;
            debug!(
                "frame {}: average frame time {:.2} ms, kinetic energy {:.2}",
                frames,
                self.debug_info.take_average().as_secs_f64() * 1000.0,
                self.world.kinetic_energy()
            );
        }
    }
}

// Main model for the application
pub struct Model {
    pub driver: FrameDriver,
    pub params: SimulationParams,
    pub window_id: window::Id,
    pub last_update_time: Instant,
}

// Initialize the model, exits the process if the window cannot be created
pub fn model(app: &App) -> Model {
    match build_model(app, SimulationParams::default()) {
        Ok(model) => model,
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn build_model(app: &App, params: SimulationParams) -> Result<Model> {
    // Only closing the window or a signal ends the program
    app.set_exit_on_escape(false);

    let window_id = app
        .new_window()
        .title(params.window_title.clone())
        .size(params.window_width, params.window_height)
        .resizable(true)
        .view(renderer::view)
        .event(input::event)
        .build()
        .map_err(|err| {
            anyhow!(
                "failed to create {}x{} window: {err:?}",
                params.window_width,
                params.window_height
            )
        })?;

    let seed = params.seed.unwrap_or_else(wall_clock_seed);
    let viewport = Viewport::new(params.window_width, params.window_height);
    let mut rng = StdRng::seed_from_u64(seed);
    let world = World::new(params.num_bodies, viewport, &mut rng);

    info!(
        "created {} bodies in a {}x{} window (seed {seed})",
        world.len(),
        viewport.width,
        viewport.height
    );

    Ok(Model {
        driver: FrameDriver::new(world, shutdown::stop_flag(), params.report_interval),
        params,
        window_id,
        last_update_time: Instant::now(),
    })
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

// Update the model
pub fn update(app: &App, model: &mut Model, _update: Update) {
    // The window may already be gone if it was closed this frame
    let window_rect = app.window(model.window_id).map(|window| window.rect());
    if window_rect.is_none() {
        model.driver.handle_event(InputEvent::Close);
    }

    if let Some(reason) = model.driver.stop_reason() {
        info!("shutting down: {reason}");
        app.quit();
        return;
    }

    let now = Instant::now();
    let frame_time = now.duration_since(model.last_update_time);
    model.last_update_time = now;

    if let Some(rect) = window_rect {
        model.driver.advance(Viewport::from_size(rect.w(), rect.h()), frame_time);
    }

    std::thread::sleep(model.params.frame_delay);
}
