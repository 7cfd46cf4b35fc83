//! Bevy plugin wiring the effects engine to a window.
//!
//! The plugin owns the scheduling contract: once per `Update` it feeds the
//! window size, pointer events and clock into the [`EffectsEngine`] and then
//! renders the resulting command list. The engine itself never touches the
//! window or the clock.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use super::engine::EffectsEngine;
use super::params::EffectsParams;
use super::render::{draw_command, RenderConfig};

/// Plugin that runs hot tub effects over the primary window.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use thermae::prelude::*;
///
/// fn main() {
///     App::new()
///         .add_plugins(DefaultPlugins)
///         .add_plugins(HotTubPlugin)
///         .run();
/// }
/// ```
pub struct HotTubPlugin;

impl Plugin for HotTubPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<EffectsParams>()
            .register_type::<RenderConfig>();

        app.init_resource::<EffectsParams>()
            .init_resource::<RenderConfig>()
            .init_resource::<EffectsEngine>();

        app.add_systems(
            Update,
            (sync_surface, handle_pointer, step_effects, draw_effects).chain(),
        );
    }
}

/// Attaches the engine to the primary window and tracks resizes.
fn sync_surface(
    mut engine: ResMut<EffectsEngine>,
    mut resized: MessageReader<WindowResized>,
    window: Query<&Window, With<PrimaryWindow>>,
) {
    if !engine.is_attached() {
        if let Ok(window) = window.single() {
            engine.attach(window.width(), window.height());
            info!(
                "effects surface attached: {}x{}",
                window.width(),
                window.height()
            );
        }
        return;
    }

    if let Some(event) = resized.read().last() {
        engine.resize(event.width, event.height);
    }
}

/// Forwards cursor movement into the engine (follow jet + ripple bubbles).
fn handle_pointer(
    mut engine: ResMut<EffectsEngine>,
    params: Res<EffectsParams>,
    mut moved: MessageReader<CursorMoved>,
) {
    for event in moved.read() {
        engine.pointer_moved(event.position, &params);
    }
}

/// Runs one engine frame against the app clock.
fn step_effects(mut engine: ResMut<EffectsEngine>, params: Res<EffectsParams>, time: Res<Time>) {
    engine.frame(time.elapsed_secs() * 1000.0, &params);
}

/// Translates the latest command list into gizmos.
fn draw_effects(engine: Res<EffectsEngine>, config: Res<RenderConfig>, mut gizmos: Gizmos) {
    let Some(size) = engine.surface_size() else {
        return;
    };
    for command in engine.commands() {
        draw_command(&mut gizmos, command, size, &config);
    }
}
