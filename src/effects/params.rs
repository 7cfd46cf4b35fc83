//! Effect parameters.
//!
//! These parameters control which effects run and how strongly. They can be
//! modified at runtime through the Bevy resource system, or merged in bulk
//! from a [`ParamsUpdate`].

use bevy::prelude::*;

/// Parameters controlling the hot tub effects.
///
/// All scalar fields are conventionally in `[0.0, 1.0]` except
/// [`jet_intensity`](Self::jet_intensity), which tolerates values above 1 for
/// a more violent spray. Values merged through [`ParamsUpdate::apply`] are
/// clamped; direct field writes are the caller's responsibility.
#[derive(Resource, Clone, Debug, Reflect)]
#[reflect(Resource)]
pub struct EffectsParams {
    /// Steam emission probability per frame and the steam layer's overall
    /// opacity. 0 disables the effect entirely.
    pub steam_intensity: f32,

    /// Whether the water jets emit new particles.
    pub jets_enabled: bool,

    /// Gates bubble spawning on pointer movement. 0 disables ripples.
    pub ripple_intensity: f32,

    /// Amplitude of the sinusoidal lateral sway applied to jet and bubble
    /// trajectories.
    pub wobble_intensity: f32,

    /// Scales jet spawn count, particle speed and particle size.
    pub jet_intensity: f32,

    /// Whether the twinkling star field is drawn.
    pub starry: bool,

    /// Star population, fixed at engine construction.
    pub star_count: usize,
}

impl Default for EffectsParams {
    fn default() -> Self {
        Self {
            steam_intensity: 0.0,
            jets_enabled: true,
            ripple_intensity: 0.5,
            wobble_intensity: 0.5,
            jet_intensity: 1.0,
            starry: false,
            star_count: 50,
        }
    }
}

impl EffectsParams {
    /// A starry night soak: stars on, gentle steam.
    pub fn night() -> Self {
        Self {
            starry: true,
            steam_intensity: 0.6,
            ..Self::default()
        }
    }

    /// Everything turned up.
    pub fn party() -> Self {
        Self {
            starry: true,
            steam_intensity: 0.8,
            wobble_intensity: 1.0,
            jet_intensity: 1.0,
            ripple_intensity: 1.0,
            ..Self::default()
        }
    }

    /// Still water: no jets, no steam, no ripples.
    pub fn calm() -> Self {
        Self {
            jets_enabled: false,
            ripple_intensity: 0.0,
            wobble_intensity: 0.2,
            ..Self::default()
        }
    }
}

/// A partial update to [`EffectsParams`].
///
/// Unset fields keep their previous values, so hosts can forward sparse
/// control events ("the steam slider moved") without reading state back.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParamsUpdate {
    /// New steam intensity, clamped to `[0, 1]` on apply.
    pub steam_intensity: Option<f32>,
    /// New jet emission flag.
    pub jets_enabled: Option<bool>,
    /// New ripple intensity, clamped to `[0, 1]` on apply.
    pub ripple_intensity: Option<f32>,
    /// New wobble intensity, clamped to `[0, 1]` on apply.
    pub wobble_intensity: Option<f32>,
    /// New jet intensity, clamped to be non-negative on apply.
    pub jet_intensity: Option<f32>,
    /// New star field flag.
    pub starry: Option<bool>,
}

impl ParamsUpdate {
    /// Merges the set fields into `params`, clamping scalars.
    pub fn apply(&self, params: &mut EffectsParams) {
        if let Some(v) = self.steam_intensity {
            params.steam_intensity = unit(v);
        }
        if let Some(v) = self.jets_enabled {
            params.jets_enabled = v;
        }
        if let Some(v) = self.ripple_intensity {
            params.ripple_intensity = unit(v);
        }
        if let Some(v) = self.wobble_intensity {
            params.wobble_intensity = unit(v);
        }
        if let Some(v) = self.jet_intensity {
            params.jet_intensity = if v.is_nan() { 0.0 } else { v.max(0.0) };
        }
        if let Some(v) = self.starry {
            params.starry = v;
        }
    }
}

/// Clamps to `[0, 1]`, mapping NaN to 0.
fn unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_keeps_unset_fields() {
        let mut params = EffectsParams::default();
        let before = params.clone();

        ParamsUpdate {
            steam_intensity: Some(0.6),
            ..Default::default()
        }
        .apply(&mut params);

        assert_eq!(params.steam_intensity, 0.6);
        assert_eq!(params.jets_enabled, before.jets_enabled);
        assert_eq!(params.ripple_intensity, before.ripple_intensity);
        assert_eq!(params.wobble_intensity, before.wobble_intensity);
        assert_eq!(params.starry, before.starry);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut params = EffectsParams::default();

        ParamsUpdate {
            steam_intensity: Some(4.2),
            ripple_intensity: Some(-1.0),
            wobble_intensity: Some(f32::NAN),
            jet_intensity: Some(-3.0),
            ..Default::default()
        }
        .apply(&mut params);

        assert_eq!(params.steam_intensity, 1.0);
        assert_eq!(params.ripple_intensity, 0.0);
        // NaN clamps to a bound rather than propagating.
        assert!(params.wobble_intensity >= 0.0 && params.wobble_intensity <= 1.0);
        assert_eq!(params.jet_intensity, 0.0);
    }
}
