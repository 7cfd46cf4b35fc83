//! Twinkling star field.
//!
//! A fixed population of stars at normalized positions. Each star runs an
//! independent twinkle schedule: it sits at full opacity until its scheduled
//! twinkle instant, pulses through a short half-sine, then reschedules.
//! Nothing spawns and nothing dies; [`StarField::update`] only recomputes
//! opacity and radius from the absolute timestamp.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::canvas::Canvas;

/// Twinkle pulse duration in milliseconds.
const TWINKLE_DURATION_MS: f32 = 800.0;
/// Opacity added on top of the half-sine pulse while twinkling.
const TWINKLE_BIAS: f32 = 0.6;
/// Base fill alpha of the star layer.
const STAR_ALPHA: f32 = 0.8;

/// One star. Position is normalized to `[0, 1]` on both axes so the field
/// survives surface resizes without redistribution.
#[derive(Clone, Copy, Debug)]
struct Star {
    position: Vec2,
    size: f32,
    /// Absolute timestamp of the next scheduled twinkle. `None` until the
    /// first update provides a time base.
    next_twinkle: Option<f32>,
    twinkling: bool,
    twinkle_start: f32,
    /// Computed by `update`, consumed by `draw`.
    opacity: f32,
    draw_radius: f32,
}

/// Ambient twinkling dots behind everything else.
pub struct StarField {
    stars: Vec<Star>,
    rng: StdRng,
}

impl Default for StarField {
    fn default() -> Self {
        Self::new(50)
    }
}

impl StarField {
    /// Creates a field with `count` stars at random normalized positions.
    /// The population is fixed for the lifetime of the field.
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, StdRng::from_entropy())
    }

    /// Like [`new`](Self::new) but with a caller-provided RNG, for
    /// deterministic tests.
    pub fn with_rng(count: usize, mut rng: StdRng) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                position: Vec2::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)),
                size: rng.gen_range(1.0..3.0),
                next_twinkle: None,
                twinkling: false,
                twinkle_start: 0.0,
                opacity: 1.0,
                draw_radius: 0.0,
            })
            .collect();
        Self { stars, rng }
    }

    /// Number of stars. Constant after construction.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Recomputes every star's opacity and radius for the given absolute
    /// time in milliseconds.
    pub fn update(&mut self, time_ms: f32) {
        // Shared slow size pulse, same phase for the whole field.
        let pulse = (time_ms * 0.001).sin() * 0.1 + 1.0;
        let Self { stars, rng } = self;

        for star in stars {
            // First update establishes the time base for the schedule.
            let next = *star
                .next_twinkle
                .get_or_insert_with(|| time_ms + rng.gen_range(1000.0..5000.0));

            if time_ms >= next && !star.twinkling {
                star.twinkling = true;
                star.twinkle_start = time_ms;
            }

            star.opacity = 1.0;
            if star.twinkling {
                let elapsed = time_ms - star.twinkle_start;
                if elapsed <= TWINKLE_DURATION_MS {
                    star.opacity =
                        (elapsed / TWINKLE_DURATION_MS * std::f32::consts::PI).sin() + TWINKLE_BIAS;
                } else {
                    star.twinkling = false;
                    star.next_twinkle = Some(time_ms + rng.gen_range(1000.0..5000.0));
                }
            }

            star.draw_radius = star.size * pulse / 3.0;
        }
    }

    /// Queues one filled circle per star. Read-only with respect to the
    /// field's state.
    pub fn draw(&self, canvas: &mut Canvas) {
        let size = Vec2::new(canvas.width(), canvas.height());
        for star in &self.stars {
            let alpha = (STAR_ALPHA * star.opacity).min(1.0);
            canvas.fill_circle(
                star.position * size,
                star.draw_radius,
                Color::WHITE.with_alpha(alpha),
            );
        }
    }

    /// Current opacities, for diagnostics and tests.
    pub fn opacities(&self) -> impl Iterator<Item = f32> + '_ {
        self.stars.iter().map(|s| s.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize) -> StarField {
        StarField::with_rng(count, StdRng::seed_from_u64(7))
    }

    #[test]
    fn population_is_fixed_and_opacity_bounded() {
        let mut field = seeded(50);

        // 51 samples across five seconds of animation.
        for i in 0..=50 {
            field.update(i as f32 * 100.0);
            assert_eq!(field.len(), 50);
            for opacity in field.opacities() {
                assert!(opacity.is_finite());
                assert!((0.0..=2.0).contains(&opacity), "opacity {opacity} escaped");
            }
        }
    }

    #[test]
    fn stars_eventually_twinkle_and_recover() {
        let mut field = seeded(10);

        // The first schedule lands within 1-5 s, so some star must leave the
        // steady opacity of 1.0 within 6 s...
        let mut saw_twinkle = false;
        for i in 0..600 {
            field.update(i as f32 * 10.0);
            if field.opacities().any(|o| (o - 1.0).abs() > 1e-3) {
                saw_twinkle = true;
            }
        }
        assert!(saw_twinkle);

        // ...and once every pulse has run its course the whole field settles
        // back at the steady opacity with fresh schedules at least 1 s out.
        field.update(100_000.0);
        field.update(100_900.0);
        assert!(field.opacities().all(|o| (o - 1.0).abs() < 1e-3));
    }

    #[test]
    fn draw_does_not_mutate_state() {
        let mut field = seeded(20);
        field.update(1234.0);

        let mut first = Canvas::new(100.0, 100.0);
        let mut second = Canvas::new(100.0, 100.0);
        field.draw(&mut first);
        field.draw(&mut second);

        assert_eq!(first.commands(), second.commands());
        assert_eq!(first.commands().len(), 20);
    }
}
