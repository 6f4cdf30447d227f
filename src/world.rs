/*
 * World Module
 *
 * This module holds the fixed collection of bodies together with the
 * viewport they bounce inside. Bodies are created once and never added
 * or removed, only the viewport changes as the window is resized.
 */

use rand::Rng;

use crate::body::Body;
use crate::physics;

/// Drawable area in whole window points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    // Convert a floating point window size, as reported by nannou
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0).round() as u32,
            height: height.max(0.0).round() as u32,
        }
    }
}

pub struct World {
    bodies: Vec<Body>,
    viewport: Viewport,
}

impl World {
    pub fn new<R: Rng>(count: usize, viewport: Viewport, rng: &mut R) -> Self {
        let bodies = (0..count).map(|_| Body::random(rng, viewport)).collect();
        Self { bodies, viewport }
    }

    pub fn from_bodies(bodies: Vec<Body>, viewport: Viewport) -> Self {
        Self { bodies, viewport }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    // Advance every body by one frame inside the current viewport
    pub fn step(&mut self) {
        physics::step(&mut self.bodies, self.viewport);
    }

    /// Total kinetic energy with every body treated as unit mass.
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| 0.5 * b.speed_squared()).sum()
    }
}
