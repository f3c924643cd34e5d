//! Game plugin - interaction resources and the input system
//!
//! Rendering lives in [`crate::rendering::BoardRenderPlugin`]; this plugin is
//! deliberately free of render dependencies so the interaction layer can run
//! headless under `MinimalPlugins` in tests.

use bevy::prelude::*;

use crate::engine::ChessEngine;
use crate::game::events::CheckmateMessage;
use crate::game::resources::{GameOverState, Selection};
use crate::game::systems::handle_board_clicks;
use crate::layout::BoardLayout;

/// Per-frame pipeline: all input is processed before visuals update, so a
/// click's board mutation and its highlight change land in the same frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSystems {
    Input,
    Visual,
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChessEngine>()
            .init_resource::<Selection>()
            .init_resource::<GameOverState>()
            .init_resource::<BoardLayout>()
            .add_message::<CheckmateMessage>()
            .configure_sets(Update, (GameSystems::Input, GameSystems::Visual).chain())
            .add_systems(Update, handle_board_clicks.in_set(GameSystems::Input));
    }
}
