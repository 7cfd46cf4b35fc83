//! The lent 2D drawing surface.
//!
//! Simulators do not talk to a window or a GPU directly. Each frame the
//! coordinator lends them a [`Canvas`], they append [`DrawCommand`]s to it,
//! and the host (the Bevy render system, a test, anything) consumes the
//! command list afterwards. Commands are ordered back-to-front.

use bevy::prelude::*;

/// A single 2D draw call produced by a simulator.
///
/// Coordinates are in canvas pixels with the origin at the top-left corner
/// and y growing downwards, matching pointer coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// A filled circle (steam puffs, jet droplets, stars).
    FillCircle {
        /// Center in canvas pixels.
        center: Vec2,
        /// Radius in pixels.
        radius: f32,
        /// Fill color, alpha included.
        color: Color,
    },
    /// An unfilled circle outline (bubbles).
    StrokeCircle {
        /// Center in canvas pixels.
        center: Vec2,
        /// Radius in pixels.
        radius: f32,
        /// Stroke color, alpha included.
        color: Color,
        /// Line width in pixels.
        line_width: f32,
    },
}

/// A canvas-sized command buffer, cleared and refilled once per frame.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl Canvas {
    /// Creates a surface with the given pixel dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Updates the pixel dimensions, keeping queued commands.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Drops all queued commands. Called at the top of each frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Queues a filled circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    /// Queues a circle outline.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }

    /// The commands queued so far this frame, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_keep_insertion_order() {
        let mut canvas = Canvas::new(100.0, 50.0);
        canvas.fill_circle(Vec2::new(1.0, 2.0), 3.0, Color::WHITE);
        canvas.stroke_circle(Vec2::new(4.0, 5.0), 6.0, Color::WHITE, 2.0);

        assert_eq!(canvas.commands().len(), 2);
        assert!(matches!(canvas.commands()[0], DrawCommand::FillCircle { .. }));
        assert!(matches!(
            canvas.commands()[1],
            DrawCommand::StrokeCircle { .. }
        ));
    }

    #[test]
    fn resize_keeps_commands_clear_drops_them() {
        let mut canvas = Canvas::new(100.0, 50.0);
        canvas.fill_circle(Vec2::ZERO, 1.0, Color::WHITE);

        canvas.resize(200.0, 80.0);
        assert_eq!(canvas.width(), 200.0);
        assert_eq!(canvas.height(), 80.0);
        assert_eq!(canvas.commands().len(), 1);

        canvas.clear();
        assert!(canvas.commands().is_empty());
    }
}
