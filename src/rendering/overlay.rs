//! Game-over banner
//!
//! One-shot centered result text, driven by [`CheckmateMessage`] rather than
//! polled state so it spawns exactly once per game.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::game::events::CheckmateMessage;
use crate::game::resources::color_name;
use crate::rendering::board::BoardTheme;

/// Marker for the game-over banner text.
#[derive(Component)]
pub struct GameOverBanner;

/// Spawns the centered result text when a mate message arrives.
pub fn show_game_over_banner(
    mut commands: Commands,
    mut messages: MessageReader<CheckmateMessage>,
    theme: Res<BoardTheme>,
) {
    for message in messages.read() {
        commands.spawn((
            Text2d::new(format!("Checkmate! {} wins!", color_name(message.winner))),
            TextFont {
                font_size: 60.0,
                ..default()
            },
            TextColor(theme.banner),
            Transform::from_xyz(0.0, 0.0, 10.0),
            GameOverBanner,
            Name::new("Game Over Banner"),
        ));
    }
}
