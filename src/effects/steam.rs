//! Rising steam.
//!
//! Particles spawn along the bottom edge with probability equal to the
//! current intensity and drift upwards until their life runs out. Intensity
//! also feeds the draw alpha, so turning the dial down fades the whole layer
//! immediately instead of waiting for the last puffs to decay.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::canvas::Canvas;

/// Life lost per update. ~100 updates from spawn to removal.
const LIFE_DECAY: f32 = 0.01;
/// Base fill alpha of the steam layer.
const STEAM_ALPHA: f32 = 0.3;

/// One steam puff. Position is normalized; the radius is in canvas pixels.
#[derive(Clone, Copy, Debug)]
struct SteamParticle {
    position: Vec2,
    radius: f32,
    /// Upward speed in normalized units per millisecond (before the 0.01
    /// motion constant).
    speed: f32,
    life: f32,
}

/// Upward-drifting steam particles with an intensity dial.
pub struct SteamEffect {
    particles: Vec<SteamParticle>,
    intensity: f32,
    rng: StdRng,
}

impl Default for SteamEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl SteamEffect {
    /// Creates a steam effect with intensity 0 (off).
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Like [`new`](Self::new) but with a caller-provided RNG.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            intensity: 0.0,
            rng,
        }
    }

    /// Sets the emission intensity, clamped to `[0, 1]`.
    pub fn set_intensity(&mut self, value: f32) {
        self.intensity = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
    }

    /// Current intensity.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether no particles are alive.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Spawns, moves and culls particles. `dt_ms` is the frame delta in
    /// milliseconds. A no-op while the intensity is 0.
    pub fn update(&mut self, dt_ms: f32) {
        if self.intensity <= 0.0 {
            return;
        }

        // One spawn roll per update, probability = intensity.
        if self.rng.gen_range(0.0..1.0) < self.intensity {
            self.particles.push(SteamParticle {
                position: Vec2::new(self.rng.gen_range(0.0..1.0), 1.0),
                radius: self.rng.gen_range(10.0..30.0) * self.intensity,
                speed: self.rng.gen_range(0.1..0.3) * self.intensity,
                life: 1.0,
            });
        }

        for p in &mut self.particles {
            p.position.y -= p.speed * dt_ms * 0.01;
            p.life -= LIFE_DECAY;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    /// Queues one filled circle per particle, faded by `life * intensity`.
    pub fn draw(&self, canvas: &mut Canvas) {
        let size = Vec2::new(canvas.width(), canvas.height());
        for p in &self.particles {
            let alpha = STEAM_ALPHA * p.life * self.intensity;
            canvas.fill_circle(p.position * size, p.radius, Color::WHITE.with_alpha(alpha));
        }
    }
}
