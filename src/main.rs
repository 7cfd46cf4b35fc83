//! Thermae - hot tub effects demo
//!
//! Move the mouse over the window to stir up bubbles and steer the follow
//! jet; use the keyboard to toggle the individual layers.

use bevy::prelude::*;
use bevy::window::WindowResolution;
use thermae::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Thermae - Hot Tub Effects".to_string(),
                resolution: WindowResolution::new(1024, 576),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(HotTubPlugin)
        .insert_resource(EffectsParams::night())
        .insert_resource(ClearColor(Color::srgb(0.05, 0.10, 0.18)))
        .add_systems(Startup, setup_scene)
        .add_systems(Update, (handle_input, update_status_text))
        .run();
}

/// Marker for the status text.
#[derive(Component)]
struct StatusText;

fn setup_scene(mut commands: Commands, mut engine: ResMut<EffectsEngine>) {
    commands.spawn(Camera2d);

    // A fifth jet that chases the pointer, on top of the four fixed ones the
    // engine registers on attach.
    engine.jets.add_jet(Vec2::new(512.0, 520.0), -std::f32::consts::FRAC_PI_2, true);

    commands.spawn((
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        StatusText,
    ));
}

/// Keyboard controls, forwarded as partial parameter updates.
fn handle_input(keyboard: Res<ButtonInput<KeyCode>>, mut params: ResMut<EffectsParams>) {
    let mut update = ParamsUpdate::default();

    if keyboard.just_pressed(KeyCode::KeyN) {
        update.starry = Some(!params.starry);
    }
    if keyboard.just_pressed(KeyCode::KeyS) {
        update.steam_intensity = Some(if params.steam_intensity > 0.0 { 0.0 } else { 0.6 });
    }
    if keyboard.just_pressed(KeyCode::KeyJ) {
        update.jets_enabled = Some(!params.jets_enabled);
    }
    if keyboard.just_pressed(KeyCode::KeyW) {
        update.wobble_intensity = Some(if params.wobble_intensity > 0.0 { 0.0 } else { 0.5 });
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        update.ripple_intensity = Some(params.ripple_intensity + 0.1);
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        update.ripple_intensity = Some(params.ripple_intensity - 0.1);
    }

    update.apply(&mut params);
}

/// Refreshes the status overlay with the current dials and particle counts.
fn update_status_text(
    params: Res<EffectsParams>,
    engine: Res<EffectsEngine>,
    mut text_query: Query<&mut Text, With<StatusText>>,
) {
    for mut text in text_query.iter_mut() {
        text.0 = format!(
            "Thermae\n\n\
             Controls:\n  \
             N - stars {}\n  \
             S - steam {:.1}\n  \
             J - jets {}\n  \
             W - wobble {:.1}\n  \
             Up/Down - ripples {:.1}\n\n\
             steam: {}  jets: {}  bubbles: {}",
            if params.starry { "on" } else { "off" },
            params.steam_intensity,
            if params.jets_enabled { "on" } else { "off" },
            params.wobble_intensity,
            params.ripple_intensity,
            engine.steam.len(),
            engine.jets.len(),
            engine.bubbles.len(),
        );
    }
}
