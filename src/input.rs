/*
 * Input Module
 *
 * This module turns nannou window events into the few input events the
 * frame driver cares about: the window closing and the window changing size.
 * Everything else (keys, mouse, focus) is ignored.
 */

use nannou::event::WindowEvent;
use nannou::prelude::*;

use crate::app::Model;
use crate::world::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Close,
    Resize(Viewport),
    Other,
}

impl InputEvent {
    pub fn from_window_event(event: &WindowEvent) -> Self {
        match event {
            WindowEvent::Closed => InputEvent::Close,
            WindowEvent::Resized(size) => InputEvent::Resize(Viewport::from_size(size.x, size.y)),
            _ => InputEvent::Other,
        }
    }
}

// Window event handler
pub fn event(_app: &App, model: &mut Model, event: WindowEvent) {
    model.driver.handle_event(InputEvent::from_window_event(&event));
}
