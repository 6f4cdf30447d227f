/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that holds the settings
 * the application starts with: how many bodies to create, the initial
 * window, the frame cadence and how often frame diagnostics are logged.
 */

use std::time::Duration;

use crate::body::Rgba;
use crate::{NUM_BODIES, WINDOW_HEIGHT, WINDOW_WIDTH};

pub struct SimulationParams {
    pub num_bodies: usize,
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub background: Rgba,
    // Fixed pause after every frame, not corrected for time spent simulating
    pub frame_delay: Duration,
    // None seeds the random source from the wall clock
    pub seed: Option<u64>,
    // Frames between diagnostic log lines
    pub report_interval: u64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_bodies: NUM_BODIES,
            window_title: String::from("Bouncing Bodies"),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            background: Rgba::WHITE,
            frame_delay: Duration::from_millis(50),
            seed: None,
            report_interval: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_setup() {
        let params = SimulationParams::default();
        assert_eq!(params.num_bodies, 50);
        assert_eq!((params.window_width, params.window_height), (640, 480));
        assert_eq!(params.frame_delay, Duration::from_millis(50));
        assert_eq!(params.background, Rgba::WHITE);
        assert!(params.seed.is_none());
    }
}
