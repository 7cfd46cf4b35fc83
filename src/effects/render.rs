//! Gizmo-based rendering of the engine's draw commands.
//!
//! The simulators emit [`DrawCommand`]s in canvas coordinates (top-left
//! origin, y down). This module maps them into Bevy's world space (center
//! origin, y up) and draws them with 2D gizmos. Filled circles are
//! approximated with a few concentric gizmo rings; bubbles stay true
//! outlines.

use bevy::prelude::*;

use super::canvas::DrawCommand;

/// Rendering knobs for the gizmo backend.
#[derive(Resource, Clone, Debug, Reflect)]
#[reflect(Resource)]
pub struct RenderConfig {
    /// Tint multiplied into every command's color.
    pub tint: Color,
    /// Number of concentric rings used to suggest a filled circle.
    pub fill_rings: u32,
    /// Global scale applied to command radii.
    pub size_scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tint: Color::WHITE,
            fill_rings: 3,
            size_scale: 1.0,
        }
    }
}

/// Converts a canvas-space point to world space for a surface of `size`.
pub fn canvas_to_world(point: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(point.x - size.x * 0.5, size.y * 0.5 - point.y)
}

/// Draws one command with gizmos.
pub fn draw_command(gizmos: &mut Gizmos, command: &DrawCommand, size: Vec2, config: &RenderConfig) {
    match *command {
        DrawCommand::FillCircle {
            center,
            radius,
            color,
        } => {
            let center = canvas_to_world(center, size);
            let color = modulate(color, config.tint);
            let rings = config.fill_rings.max(1);
            for i in 0..rings {
                let t = (i + 1) as f32 / rings as f32;
                gizmos.circle_2d(center, radius * t * config.size_scale, color);
            }
        }
        DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            ..
        } => {
            let center = canvas_to_world(center, size);
            gizmos.circle_2d(
                center,
                radius * config.size_scale,
                modulate(color, config.tint),
            );
        }
    }
}

fn modulate(color: Color, tint: Color) -> Color {
    let c = color.to_linear();
    let t = tint.to_linear();
    Color::linear_rgba(
        c.red * t.red,
        c.green * t.green,
        c.blue * t.blue,
        c.alpha * t.alpha,
    )
}
