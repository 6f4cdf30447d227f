/*
 * Renderer Module
 *
 * This module draws the world: the background is cleared and every body
 * is drawn as a filled circle in its own color.
 *
 * Bodies live in window coordinates (origin top-left, y down) while nannou
 * draws around the window centre with y up, so positions are converted
 * on the way out.
 */

use nannou::color::{rgba8, Rgba8};
use nannou::prelude::*;

use crate::app::Model;
use crate::body::Rgba;
use crate::world::World;

/// Drawing surface for a frame.
pub trait Canvas {
    fn clear(&mut self, color: Rgba);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
}

// Draw one frame of the world
pub fn render<C: Canvas>(canvas: &mut C, world: &World, background: Rgba) {
    canvas.clear(background);
    for body in world.bodies() {
        canvas.fill_circle(body.x, body.y, body.radius(), body.color());
    }
}

// Convert a window position to nannou's centred, y-up space
pub fn to_screen(x: f64, y: f64, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + x as f32, window_rect.top() - y as f32)
}

fn to_nannou(color: Rgba) -> Rgba8 {
    rgba8(color.r, color.g, color.b, color.a)
}

// Canvas backed by a nannou Draw
struct DrawCanvas<'a> {
    draw: &'a Draw,
    window_rect: Rect,
}

impl Canvas for DrawCanvas<'_> {
    fn clear(&mut self, color: Rgba) {
        self.draw.background().color(to_nannou(color));
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        let position = to_screen(x, y, self.window_rect);
        self.draw
            .ellipse()
            .xy(position)
            .radius(radius as f32)
            .color(to_nannou(color));
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let mut canvas = DrawCanvas {
        draw: &draw,
        window_rect: app.window_rect(),
    };

    render(&mut canvas, model.driver.world(), model.params.background);

    if let Err(err) = draw.to_frame(app, &frame) {
        log::warn!("failed to present frame: {err:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Body;
    use crate::world::Viewport;

    #[derive(Debug, PartialEq)]
    enum Command {
        Clear(Rgba),
        Circle(f64, f64, f64, Rgba),
    }

    #[derive(Default)]
    struct RecordingCanvas {
        commands: Vec<Command>,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, color: Rgba) {
            self.commands.push(Command::Clear(color));
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
            self.commands.push(Command::Circle(x, y, radius, color));
        }
    }

    #[test]
    fn frame_clears_then_draws_every_body() {
        let red = Rgba::new(0xFF, 0, 0, 0x40);
        let blue = Rgba::new(0, 0, 0xFF, 0x7F);
        let world = World::from_bodies(
            vec![
                Body::new(10.0, 20.0, 5.0, 1.0, 1.0, red),
                Body::new(30.0, 40.0, 9.0, -1.0, 0.0, blue),
            ],
            Viewport::new(640, 480),
        );

        let mut canvas = RecordingCanvas::default();
        render(&mut canvas, &world, Rgba::WHITE);

        assert_eq!(
            canvas.commands,
            vec![
                Command::Clear(Rgba::WHITE),
                Command::Circle(10.0, 20.0, 5.0, red),
                Command::Circle(30.0, 40.0, 9.0, blue),
            ]
        );
    }

    #[test]
    fn empty_world_only_clears() {
        let world = World::from_bodies(Vec::new(), Viewport::new(640, 480));
        let mut canvas = RecordingCanvas::default();
        render(&mut canvas, &world, Rgba::WHITE);
        assert_eq!(canvas.commands, vec![Command::Clear(Rgba::WHITE)]);
    }

    #[test]
    fn window_corners_map_to_rect_corners() {
        let rect = Rect::from_w_h(640.0, 480.0);
        assert_eq!(to_screen(0.0, 0.0, rect), pt2(-320.0, 240.0));
        assert_eq!(to_screen(640.0, 480.0, rect), pt2(320.0, -240.0));
        assert_eq!(to_screen(320.0, 240.0, rect), pt2(0.0, 0.0));
    }
}
