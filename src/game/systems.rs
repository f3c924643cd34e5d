//! Input pump - feeds pointer events into the interaction controller

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::ChessEngine;
use crate::game::controller::{handle_pointer_down, ClickOutcome};
use crate::game::events::CheckmateMessage;
use crate::game::resources::{GameOverState, Selection};
use crate::layout::BoardLayout;

/// Drains pending pointer-down events through the controller.
///
/// Events are processed in arrival order and each click runs to completion,
/// board mutation included, before the next one is read.
pub fn handle_board_clicks(
    mut clicks: MessageReader<MouseButtonInput>,
    windows: Query<&Window, With<PrimaryWindow>>,
    layout: Res<BoardLayout>,
    mut engine: ResMut<ChessEngine>,
    mut selection: ResMut<Selection>,
    mut game_over: ResMut<GameOverState>,
    mut checkmate: MessageWriter<CheckmateMessage>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    for click in clicks.read() {
        if click.button != MouseButton::Left || click.state != ButtonState::Pressed {
            continue;
        }
        let Some(cursor) = window.cursor_position() else {
            continue;
        };
        let outcome = handle_pointer_down(
            &mut engine,
            &mut selection,
            &mut game_over,
            &layout,
            cursor.x,
            cursor.y,
        );
        match outcome {
            ClickOutcome::Checkmate { winner } => {
                info!("[GAME] {}", game_over.message());
                checkmate.write(CheckmateMessage { winner });
            }
            outcome => {
                debug!(
                    "[INPUT] click at ({:.0}, {:.0}): {outcome:?}",
                    cursor.x, cursor.y
                );
            }
        }
    }
}
