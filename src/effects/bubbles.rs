//! Pointer-driven bubbles.
//!
//! Bubbles are spawned on demand (the host calls [`BubbleSystem::spawn`] on
//! pointer movement) and float upward with a sinusoidal horizontal wobble.
//! The wobble dial couples sway width and sway frequency: it scales both the
//! amplitude and the phase advance.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::canvas::Canvas;

/// Life lost per update. ~100 updates from spawn to removal.
const LIFE_DECAY: f32 = 0.01;
/// Base stroke alpha of the bubble layer.
const BUBBLE_ALPHA: f32 = 0.6;
/// Outline width in pixels.
const LINE_WIDTH: f32 = 2.0;

/// One bubble, in canvas pixels.
#[derive(Clone, Copy, Debug)]
struct Bubble {
    position: Vec2,
    radius: f32,
    /// Rise speed in pixels per millisecond (before the 0.05 motion
    /// constant).
    speed: f32,
    wobble_phase: f32,
    wobble_speed: f32,
    life: f32,
}

/// On-demand bubbles that rise and sway.
pub struct BubbleSystem {
    bubbles: Vec<Bubble>,
    wobble_intensity: f32,
    rng: StdRng,
}

impl Default for BubbleSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleSystem {
    /// Creates an empty system with wobble 0.5.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Like [`new`](Self::new) but with a caller-provided RNG.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            bubbles: Vec::new(),
            wobble_intensity: 0.5,
            rng,
        }
    }

    /// Sets the wobble amplitude/frequency scalar.
    pub fn set_wobble(&mut self, value: f32) {
        self.wobble_intensity = if value.is_nan() { 0.0 } else { value.max(0.0) };
    }

    /// Adds one bubble at `position` with full life and randomized size,
    /// rise speed and wobble timing.
    pub fn spawn(&mut self, position: Vec2) {
        self.bubbles.push(Bubble {
            position,
            radius: self.rng.gen_range(4.0..12.0),
            speed: self.rng.gen_range(1.0..3.0),
            wobble_phase: self.rng.gen_range(0.0..std::f32::consts::TAU),
            wobble_speed: self.rng.gen_range(1.0..3.0),
            life: 1.0,
        });
    }

    /// Number of live bubbles.
    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    /// Whether no bubbles are alive.
    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    /// Position of bubble `i`, for diagnostics and tests.
    pub fn position(&self, i: usize) -> Option<Vec2> {
        self.bubbles.get(i).map(|b| b.position)
    }

    /// Remaining life of bubble `i`, for diagnostics and tests.
    pub fn life(&self, i: usize) -> Option<f32> {
        self.bubbles.get(i).map(|b| b.life)
    }

    /// Moves, sways, ages and culls bubbles. `dt_ms` is the frame delta in
    /// milliseconds.
    pub fn update(&mut self, dt_ms: f32) {
        let wobble = self.wobble_intensity;
        for b in &mut self.bubbles {
            b.position.y -= b.speed * dt_ms * 0.05;
            b.position.x += b.wobble_phase.sin() * wobble * 2.0;
            b.wobble_phase += b.wobble_speed * dt_ms * 0.02 * wobble;
            b.life -= LIFE_DECAY;
        }
        self.bubbles.retain(|b| b.life > 0.0);
    }

    /// Queues one circle outline per bubble; the outline distinguishes
    /// bubbles from the filled steam and jet particles.
    pub fn draw(&self, canvas: &mut Canvas) {
        for b in &self.bubbles {
            canvas.stroke_circle(
                b.position,
                b.radius,
                Color::WHITE.with_alpha(BUBBLE_ALPHA * b.life),
                LINE_WIDTH,
            );
        }
    }
}
