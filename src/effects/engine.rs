//! The per-frame effects coordinator.
//!
//! [`EffectsEngine`] owns the four simulators and the command-buffer surface,
//! and holds no simulation state of its own beyond the last frame timestamp.
//! Each frame it clears the surface, computes the delta time, pushes the
//! current parameters into the simulators and runs update-then-draw in a
//! fixed back-to-front order: stars, steam, jets, bubbles.
//!
//! One engine serves one visual element. Hosts that want several elements
//! sharing a star field do so by sharing an engine explicitly; there is no
//! hidden global instance.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::PI;

use super::bubbles::BubbleSystem;
use super::canvas::{Canvas, DrawCommand};
use super::jets::JetSystem;
use super::params::EffectsParams;
use super::stars::StarField;
use super::steam::SteamEffect;

/// Default jet placement as fractions of the surface size, with base angles.
/// Two outer jets spray inward at 45 degrees, two inner at 60.
const DEFAULT_JETS: [(f32, f32, f32); 4] = [
    (0.2, 0.9, -PI / 4.0),
    (0.4, 0.9, -PI / 3.0),
    (0.6, 0.9, -PI * 2.0 / 3.0),
    (0.8, 0.9, -PI * 3.0 / 4.0),
];

/// Coordinates the star, steam, jet and bubble simulators over one surface.
#[derive(Resource)]
pub struct EffectsEngine {
    /// Twinkling background stars.
    pub stars: StarField,
    /// Rising steam layer.
    pub steam: SteamEffect,
    /// Directional water jets.
    pub jets: JetSystem,
    /// Pointer-driven bubbles.
    pub bubbles: BubbleSystem,
    /// `None` until [`attach`](Self::attach); every entry point is a safe
    /// no-op without a surface.
    canvas: Option<Canvas>,
    last_time_ms: Option<f32>,
}

impl Default for EffectsEngine {
    fn default() -> Self {
        Self::new(&EffectsParams::default())
    }
}

impl EffectsEngine {
    /// Creates an engine with entropy-seeded simulators. The star population
    /// is fixed from `params.star_count`.
    pub fn new(params: &EffectsParams) -> Self {
        Self {
            stars: StarField::new(params.star_count),
            steam: SteamEffect::new(),
            jets: JetSystem::new(),
            bubbles: BubbleSystem::new(),
            canvas: None,
            last_time_ms: None,
        }
    }

    /// Like [`new`](Self::new) but fully deterministic, for tests.
    pub fn seeded(params: &EffectsParams, seed: u64) -> Self {
        Self {
            stars: StarField::with_rng(params.star_count, StdRng::seed_from_u64(seed)),
            steam: SteamEffect::with_rng(StdRng::seed_from_u64(seed.wrapping_add(1))),
            jets: JetSystem::with_rng(StdRng::seed_from_u64(seed.wrapping_add(2))),
            bubbles: BubbleSystem::with_rng(StdRng::seed_from_u64(seed.wrapping_add(3))),
            canvas: None,
            last_time_ms: None,
        }
    }

    /// Whether a drawing surface is attached.
    pub fn is_attached(&self) -> bool {
        self.canvas.is_some()
    }

    /// Surface size in pixels, if attached.
    pub fn surface_size(&self) -> Option<Vec2> {
        self.canvas.as_ref().map(|c| Vec2::new(c.width(), c.height()))
    }

    /// Installs the drawing surface and, on first attach, registers the four
    /// default jets along the bottom of the surface. Jets added by the host
    /// before attach are kept. Attaching again only resizes.
    pub fn attach(&mut self, width: f32, height: f32) {
        if let Some(canvas) = &mut self.canvas {
            canvas.resize(width, height);
            return;
        }
        self.canvas = Some(Canvas::new(width, height));
        for (fx, fy, angle) in DEFAULT_JETS {
            self.jets
                .add_jet(Vec2::new(width * fx, height * fy), angle, false);
        }
    }

    /// Updates the surface dimensions. Jets keep their pixel positions; the
    /// normalized-coordinate layers rescale on their own.
    pub fn resize(&mut self, width: f32, height: f32) {
        if let Some(canvas) = &mut self.canvas {
            canvas.resize(width, height);
        }
    }

    /// Forwards a pointer position in surface pixels: retargets the follow
    /// jet and, when ripples are enabled, spawns a bubble under the pointer.
    /// A no-op before a surface is attached.
    pub fn pointer_moved(&mut self, position: Vec2, params: &EffectsParams) {
        if self.canvas.is_none() {
            return;
        }
        self.jets.update_pointer(position);
        if params.ripple_intensity > 0.0 {
            self.bubbles.spawn(position);
        }
    }

    /// Runs one frame at the absolute timestamp `now_ms` (milliseconds).
    ///
    /// Computes the delta against the previous frame (zero on the first),
    /// clears the surface and runs each active simulator's update-then-draw
    /// in back-to-front order. A no-op before a surface is attached.
    pub fn frame(&mut self, now_ms: f32, params: &EffectsParams) {
        let Some(canvas) = &mut self.canvas else {
            return;
        };

        let dt_ms = now_ms - self.last_time_ms.unwrap_or(now_ms);
        self.last_time_ms = Some(now_ms);
        canvas.clear();

        // Dials are pushed every frame so host-side parameter edits take
        // effect between frames without a separate notification path.
        self.steam.set_intensity(params.steam_intensity);
        self.jets.set_intensity(params.jet_intensity);
        self.jets.set_wobble(params.wobble_intensity);
        self.jets.set_active(params.jets_enabled);
        self.bubbles.set_wobble(params.wobble_intensity);

        if params.starry {
            self.stars.update(now_ms);
            self.stars.draw(canvas);
        }
        if self.steam.intensity() > 0.0 {
            self.steam.update(dt_ms);
            self.steam.draw(canvas);
        }
        if params.jets_enabled {
            self.jets.update(dt_ms);
            self.jets.draw(canvas);
        }
        self.bubbles.update(dt_ms);
        self.bubbles.draw(canvas);
    }

    /// The draw commands produced by the latest [`frame`](Self::frame), in
    /// back-to-front order. Empty before attach.
    pub fn commands(&self) -> &[DrawCommand] {
        self.canvas.as_ref().map_or(&[], |c| c.commands())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_is_a_noop_before_attach() {
        let params = EffectsParams::night();
        let mut engine = EffectsEngine::seeded(&params, 1);

        engine.pointer_moved(Vec2::new(10.0, 10.0), &params);
        engine.frame(16.0, &params);
        engine.frame(32.0, &params);

        assert!(!engine.is_attached());
        assert!(engine.commands().is_empty());
        assert!(engine.bubbles.is_empty());
    }

    #[test]
    fn attach_registers_the_default_jets_once() {
        let params = EffectsParams::default();
        let mut engine = EffectsEngine::seeded(&params, 2);

        engine.attach(500.0, 300.0);
        assert_eq!(engine.jets.jets().len(), 4);
        assert_eq!(engine.jets.jets()[0].position, Vec2::new(100.0, 270.0));

        // Re-attach is a resize, not a duplicate registration.
        engine.attach(800.0, 400.0);
        assert_eq!(engine.jets.jets().len(), 4);
        assert_eq!(engine.surface_size(), Some(Vec2::new(800.0, 400.0)));
    }

    #[test]
    fn layers_draw_back_to_front() {
        let mut params = EffectsParams::night();
        params.steam_intensity = 1.0;
        let mut engine = EffectsEngine::seeded(&params, 3);
        engine.attach(400.0, 200.0);

        engine.pointer_moved(Vec2::new(200.0, 100.0), &params);
        engine.frame(0.0, &params);
        engine.frame(16.0, &params);

        let commands = engine.commands();
        assert!(!commands.is_empty());

        // Stars first (50 fills), bubbles last (the only strokes).
        assert!(matches!(commands[0], DrawCommand::FillCircle { .. }));
        let first_stroke = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
            .expect("pointer movement with ripples spawns a bubble");
        assert!(commands[first_stroke..]
            .iter()
            .all(|c| matches!(c, DrawCommand::StrokeCircle { .. })));
    }

    #[test]
    fn disabled_layers_do_not_draw() {
        let params = EffectsParams {
            starry: false,
            steam_intensity: 0.0,
            jets_enabled: false,
            ripple_intensity: 0.0,
            ..Default::default()
        };
        let mut engine = EffectsEngine::seeded(&params, 4);
        engine.attach(400.0, 200.0);

        engine.pointer_moved(Vec2::new(50.0, 50.0), &params);
        engine.frame(0.0, &params);
        engine.frame(16.0, &params);

        assert!(engine.commands().is_empty());
    }

    #[test]
    fn first_frame_uses_a_zero_delta() {
        let params = EffectsParams::default();
        let mut engine = EffectsEngine::seeded(&params, 5);
        engine.attach(400.0, 200.0);

        engine.pointer_moved(Vec2::new(120.0, 90.0), &params);
        let spawned_at = engine.bubbles.position(0).unwrap();
        engine.frame(1_000_000.0, &params);

        // A huge first timestamp must not fling the bubble off-screen: the
        // first frame's delta is zero, so only the dt-free sway applies.
        let after = engine.bubbles.position(0).unwrap();
        assert_eq!(after.y, spawned_at.y);
    }
}
