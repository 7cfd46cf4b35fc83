//! Hot tub particle effects for a 2D surface.
//!
//! Four independent simulators share a per-frame time step and draw onto a
//! lent command-buffer surface:
//!
//! - [`stars`]: fixed-population twinkling star field
//! - [`steam`]: intensity-driven rising steam
//! - [`jets`]: directional water jets with wobble and a pointer-follow jet
//! - [`bubbles`]: pointer-spawned rising bubbles
//!
//! The [`engine`] coordinator runs them in back-to-front order each frame;
//! [`params`] carries the host-facing configuration; [`canvas`] defines the
//! draw-command surface; [`plugin`] and [`render`] wire everything into Bevy.
//!
//! # Example
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use thermae::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(HotTubPlugin)
//!         .insert_resource(EffectsParams::night())
//!         .run();
//! }
//! ```

pub mod bubbles;
pub mod canvas;
pub mod engine;
pub mod jets;
pub mod params;
pub mod plugin;
pub mod render;
pub mod stars;
pub mod steam;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::bubbles::BubbleSystem;
    pub use super::canvas::{Canvas, DrawCommand};
    pub use super::engine::EffectsEngine;
    pub use super::jets::{Jet, JetSystem};
    pub use super::params::{EffectsParams, ParamsUpdate};
    pub use super::plugin::HotTubPlugin;
    pub use super::render::RenderConfig;
    pub use super::stars::StarField;
    pub use super::steam::SteamEffect;
}
