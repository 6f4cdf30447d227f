/*
 * Bouncing Bodies - Module Definitions
 *
 * This file defines the module structure for the bouncing bodies application.
 * The physics core (body, world, physics) has no dependency on the window,
 * the frame driver (app, input, renderer, shutdown) connects it to nannou.
 */

// Re-export key components for easier access
pub use body::{Body, Rgba};
pub use world::{Viewport, World};
pub use params::SimulationParams;
pub use debug::DebugInfo;
pub use app::{FrameDriver, Model};
pub use input::InputEvent;
pub use renderer::Canvas;

// Define modules
pub mod body;
pub mod world;
pub mod physics;
pub mod params;
pub mod debug;
pub mod app;
pub mod input;
pub mod renderer;
pub mod shutdown;

// Constants
pub const NUM_BODIES: usize = 50;
pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 480;
