/*
 * Body Module
 *
 * This module defines the Body struct, a circular particle with a position,
 * a velocity, a radius and a color. Radius and color are fixed when the body
 * is created and can only be read afterwards.
 */

use rand::Rng;

use crate::world::Viewport;

// Initial velocity components are (k - VELOCITY_STEPS / 2) / VELOCITY_DIVISOR
const VELOCITY_STEPS: i32 = 40;
const VELOCITY_DIVISOR: f64 = 5.0;

// Radius is MIN_RADIUS plus a whole number below RADIUS_SPREAD
const MIN_RADIUS: u32 = 5;
const RADIUS_SPREAD: u32 = 5;

// Each half of the packed color word comes from 0..COLOR_HALF_RANGE
const COLOR_HALF_RANGE: u32 = 32768;

/// A color stored as four bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(0xFF, 0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks a 32-bit color word with red in the lowest byte and alpha in
    /// the highest.
    pub fn from_packed(word: u32) -> Self {
        let [r, g, b, a] = word.to_le_bytes();
        Self { r, g, b, a }
    }

    pub fn to_packed(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    radius: f64,
    color: Rgba,
}

impl Body {
    pub fn new(x: f64, y: f64, radius: f64, dx: f64, dy: f64, color: Rgba) -> Self {
        Self { x, y, dx, dy, radius, color }
    }

    // Create a body at a random spot inside the viewport
    pub fn random<R: Rng>(rng: &mut R, viewport: Viewport) -> Self {
        // A zero-sized window still gets a valid range
        let x = rng.gen_range(0..viewport.width.max(1));
        let y = rng.gen_range(0..viewport.height.max(1));
        let dx = rng.gen_range(0..VELOCITY_STEPS) - VELOCITY_STEPS / 2;
        let dy = rng.gen_range(0..VELOCITY_STEPS) - VELOCITY_STEPS / 2;
        let radius = MIN_RADIUS + rng.gen_range(0..RADIUS_SPREAD);

        // Two 15-bit halves, then flip the red byte
        let high = rng.gen_range(0..COLOR_HALF_RANGE);
        let low = rng.gen_range(0..COLOR_HALF_RANGE);
        let color = Rgba::from_packed(((high << 16) | low) ^ 0xFF);

        Self {
            x: f64::from(x),
            y: f64::from(y),
            dx: f64::from(dx) / VELOCITY_DIVISOR,
            dy: f64::from(dy) / VELOCITY_DIVISOR,
            radius: f64::from(radius),
            color,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn speed_squared(&self) -> f64 {
        self.dx * self.dx + self.dy * self.dy
    }
}
