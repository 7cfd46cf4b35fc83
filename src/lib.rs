//! Thermae - hot tub ambience for Bevy
//!
//! This library renders a decorative, interactive hot tub behind your 2D
//! scene: twinkling stars, rising steam, directional water jets and
//! pointer-triggered bubbles, composited every frame in a fixed
//! back-to-front order.
//!
//! # Features
//!
//! - **Four independent simulators**: star field, steam, jets, bubbles, each
//!   with its own spawn/update/cull/draw lifecycle
//! - **Interactive controls**: intensity dials, wobble sway, a jet that
//!   follows the pointer, bubbles under the cursor
//! - **Host-owned scheduling**: the engine is a pure `frame(time) -> draw
//!   commands` step; Bevy integration is a thin plugin on top
//! - **Deterministic testing**: every simulator accepts a seeded RNG
//!
//! # Quick Start
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
//!         .add_systems(Startup, setup)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands) {
//!     commands.spawn(Camera2d);
//! }
//! ```
//!
//! Driving the engine without Bevy's scheduler works too: construct an
//! [`EffectsEngine`](crate::effects::engine::EffectsEngine), call
//! `attach(width, height)`, then `frame(now_ms, &params)` once per display
//! refresh and consume `commands()`.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`effects`]: the effects engine
//!   - [`effects::params`]: host-facing configuration
//!   - [`effects::canvas`]: the lent draw-command surface
//!   - [`effects::stars`]: twinkling star field
//!   - [`effects::steam`]: rising steam
//!   - [`effects::jets`]: directional water jets
//!   - [`effects::bubbles`]: pointer-driven bubbles
//!   - [`effects::engine`]: per-frame coordinator
//!   - [`effects::render`]: gizmo rendering of draw commands
//!   - [`effects::plugin`]: Bevy plugin

pub mod effects;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::effects::prelude::*;
}
