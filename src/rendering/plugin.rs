use bevy::prelude::*;

use crate::assets::load_piece_sprites;
use crate::game::GameSystems;
use crate::rendering::board::{spawn_board, BoardTheme};
use crate::rendering::hints::update_move_hints;
use crate::rendering::overlay::show_game_over_banner;
use crate::rendering::pieces::sync_piece_sprites;

/// Board, piece, hint and banner rendering.
///
/// Separate from [`crate::game::GamePlugin`] so the interaction layer can
/// run headless in tests. Rendering holds no game state of its own; every
/// system here is a function of the engine, selection and messages.
pub struct BoardRenderPlugin;

impl Plugin for BoardRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardTheme>()
            .add_systems(Startup, (load_piece_sprites, spawn_board))
            .add_systems(
                Update,
                (sync_piece_sprites, update_move_hints, show_game_over_banner)
                    .in_set(GameSystems::Visual),
            );
    }
}
