//! Directional water jets.
//!
//! Each jet is a persistent emission point with a base angle. Every update,
//! active jets spray a burst of short-lived particles whose angles are
//! perturbed by a two-frequency wobble wave plus per-particle jitter. One jet
//! may be designated the follow jet; its angle is retargeted toward the
//! pointer on every pointer event while the others keep their construction
//! angle.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::canvas::Canvas;

/// Life lost per update. Much slower than steam and bubbles, tuned for a
/// visible trail.
const LIFE_DECAY: f32 = 0.001;
/// Base fill alpha of the jet layer.
const JET_ALPHA: f32 = 0.6;
/// Vertical draw offset in pixels, sinking the spray into the water line.
const DRAW_OFFSET_Y: f32 = 15.0;

/// A persistent emission point.
#[derive(Clone, Copy, Debug)]
pub struct Jet {
    /// Emission origin in canvas pixels.
    pub position: Vec2,
    /// Emission angle in radians. Fixed at creation unless this is the
    /// follow jet.
    pub angle: f32,
    /// Inactive jets spawn nothing but do not remove particles in flight.
    pub active: bool,
}

/// One droplet of spray.
#[derive(Clone, Copy, Debug)]
struct JetParticle {
    position: Vec2,
    /// Distance travelled per update tick, already scaled by intensity.
    speed: f32,
    angle: f32,
    life: f32,
    radius: f32,
    wobble_phase: f32,
}

/// A set of jets and their particles, with global intensity and wobble dials.
pub struct JetSystem {
    jets: Vec<Jet>,
    particles: Vec<JetParticle>,
    follow_jet: Option<usize>,
    pointer: Vec2,
    intensity: f32,
    wobble_intensity: f32,
    /// Monotonic wobble clock, advanced by `dt * 0.001` each update.
    wobble_time: f32,
    rng: StdRng,
}

impl Default for JetSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl JetSystem {
    /// Creates an empty system with intensity 1 and wobble 0.5.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Like [`new`](Self::new) but with a caller-provided RNG.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            jets: Vec::new(),
            particles: Vec::new(),
            follow_jet: None,
            pointer: Vec2::ZERO,
            intensity: 1.0,
            wobble_intensity: 0.5,
            wobble_time: 0.0,
            rng,
        }
    }

    /// Registers a jet at `position` with the given base `angle`.
    ///
    /// Passing `follow = true` makes this the follow jet; any previous
    /// designation is dropped so at most one jet tracks the pointer.
    pub fn add_jet(&mut self, position: Vec2, angle: f32, follow: bool) {
        if follow {
            self.follow_jet = Some(self.jets.len());
        }
        self.jets.push(Jet {
            position,
            angle,
            active: true,
        });
    }

    /// Retargets the follow jet toward the pointer. The angle is the
    /// `atan2` of the pointer-minus-jet vector; a pointer sitting exactly on
    /// the jet yields `atan2(0, 0) = 0` rather than an error.
    pub fn update_pointer(&mut self, position: Vec2) {
        self.pointer = position;
        if let Some(i) = self.follow_jet {
            let d = position - self.jets[i].position;
            self.jets[i].angle = d.y.atan2(d.x);
        }
    }

    /// Sets the global intensity (spawn count, speed, size), clamped to be
    /// non-negative.
    pub fn set_intensity(&mut self, value: f32) {
        self.intensity = if value.is_nan() { 0.0 } else { value.max(0.0) };
    }

    /// Sets the wobble amplitude scalar.
    pub fn set_wobble(&mut self, value: f32) {
        self.wobble_intensity = if value.is_nan() { 0.0 } else { value.max(0.0) };
    }

    /// Activates or deactivates every jet at once.
    pub fn set_active(&mut self, active: bool) {
        for jet in &mut self.jets {
            jet.active = active;
        }
    }

    /// Registered jets.
    pub fn jets(&self) -> &[Jet] {
        &self.jets
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether no particles are alive.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Ages and culls existing particles, then spawns from active jets.
    /// `dt_ms` is the frame delta in milliseconds.
    pub fn update(&mut self, dt_ms: f32) {
        self.wobble_time += dt_ms * 0.001;
        let wt = self.wobble_time;
        let wobble = self.wobble_intensity;

        // Cull first: a burst spawned this update is always drawn at least
        // once before its life can reach zero.
        for p in &mut self.particles {
            p.position.x += p.angle.cos() * p.speed;
            p.position.y += p.angle.sin() * p.speed;
            p.life -= LIFE_DECAY;
        }
        self.particles.retain(|p| p.life > 0.0);

        // Slow wave plus fast ripple, both scaled by the wobble dial. Shared
        // by every particle spawned this update.
        let wave_offset = ((wt * 2.0).sin() * 0.4 + (wt * 5.0).sin() * 0.2) * wobble;
        let spawn_count = (3.0 * self.intensity) as usize + 1;

        for jet in self.jets.iter().filter(|j| j.active) {
            for _ in 0..spawn_count {
                let jitter = (self.rng.gen_range(0.0..1.0) - 0.8) * 0.5 * wobble;
                self.particles.push(JetParticle {
                    position: Vec2::new(
                        jet.position.x + (wt * 3.0).sin() * 2.0 * wobble,
                        jet.position.y,
                    ),
                    speed: self.rng.gen_range(4.0..7.0) * self.intensity,
                    angle: jet.angle + wave_offset + jitter,
                    life: 0.12 * self.rng.gen_range(0.0..1.0),
                    radius: self.rng.gen_range(2.0..6.0) * self.intensity,
                    wobble_phase: self.rng.gen_range(0.0..std::f32::consts::TAU),
                });
            }
        }

        // Lateral sway on top of straight-line motion, per-particle phase.
        for p in &mut self.particles {
            p.position.x += (wt * 4.0 + p.wobble_phase).sin() * 0.3 * wobble;
        }
    }

    /// Queues one filled circle per particle.
    pub fn draw(&self, canvas: &mut Canvas) {
        for p in &self.particles {
            let alpha = JET_ALPHA * p.life * 0.5;
            canvas.fill_circle(
                p.position + Vec2::new(0.0, DRAW_OFFSET_Y),
                p.radius * 1.5,
                Color::WHITE.with_alpha(alpha),
            );
        }
    }

    #[cfg(test)]
    fn particle_angles(&self) -> impl Iterator<Item = f32> + '_ {
        self.particles.iter().map(|p| p.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_4, PI};

    fn seeded() -> JetSystem {
        JetSystem::with_rng(StdRng::seed_from_u64(99))
    }

    #[test]
    fn follow_jet_tracks_pointer_exactly() {
        let mut jets = seeded();
        jets.add_jet(Vec2::new(10.0, 20.0), -FRAC_PI_4, false);
        jets.add_jet(Vec2::new(50.0, 80.0), 1.0, true);

        jets.update_pointer(Vec2::new(110.0, 140.0));

        let expected = (140.0f32 - 80.0).atan2(110.0 - 50.0);
        assert_eq!(jets.jets()[1].angle, expected);
        // Non-follow jets keep their construction angle.
        assert_eq!(jets.jets()[0].angle, -FRAC_PI_4);
    }

    #[test]
    fn pointer_on_top_of_follow_jet_is_angle_zero() {
        let mut jets = seeded();
        jets.add_jet(Vec2::new(30.0, 40.0), 2.0, true);
        jets.update_pointer(Vec2::new(30.0, 40.0));
        assert_eq!(jets.jets()[0].angle, 0.0);
    }

    #[test]
    fn latest_follow_designation_wins() {
        let mut jets = seeded();
        jets.add_jet(Vec2::new(0.0, 0.0), 0.5, true);
        jets.add_jet(Vec2::new(100.0, 0.0), 1.5, true);

        jets.update_pointer(Vec2::new(100.0, 100.0));

        // Only the second jet moved.
        assert_eq!(jets.jets()[0].angle, 0.5);
        assert_eq!(jets.jets()[1].angle, (100.0f32).atan2(0.0));
    }

    #[test]
    fn one_update_spawns_the_full_burst_within_the_wobble_envelope() {
        let mut jets = seeded();
        jets.add_jet(Vec2::new(100.0, 200.0), -FRAC_PI_4, false);
        jets.set_intensity(1.0);

        jets.update(16.0);

        // floor(3 * 1) + 1 droplets, none culled yet.
        assert_eq!(jets.len(), 4);

        // Wave and jitter together stay inside +/- wobble * 1.0.
        let bound = 0.5 * 2.0;
        for angle in jets.particle_angles() {
            assert!(
                (angle - (-FRAC_PI_4)).abs() <= bound + 1e-6,
                "angle {angle} outside envelope"
            );
        }
    }

    #[test]
    fn inactive_jets_spawn_nothing_but_flight_continues() {
        let mut jets = seeded();
        jets.add_jet(Vec2::new(0.0, 0.0), -PI / 3.0, false);
        jets.update(16.0);
        let in_flight = jets.len();
        assert!(in_flight > 0);

        jets.set_active(false);
        jets.update(16.0);
        // No new spawns; at most the existing burst, aging away.
        assert!(jets.len() <= in_flight);

        // Life starts at most at 0.12 and decays 0.001 per update, so the
        // burst is fully culled within its budget and never grows.
        let mut previous = jets.len();
        for _ in 0..130 {
            jets.update(16.0);
            assert!(jets.len() <= previous);
            previous = jets.len();
        }
        assert!(jets.is_empty());
    }

    #[test]
    fn draw_does_not_mutate_state() {
        let mut jets = seeded();
        jets.add_jet(Vec2::new(50.0, 50.0), -FRAC_PI_4, false);
        jets.update(16.0);
        jets.update(16.0);

        let mut first = Canvas::new(200.0, 200.0);
        let mut second = Canvas::new(200.0, 200.0);
        jets.draw(&mut first);
        jets.draw(&mut second);
        assert_eq!(first.commands(), second.commands());
    }
}
