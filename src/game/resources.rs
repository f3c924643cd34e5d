//! Mutable interaction state - selection and terminal game state

use bevy::prelude::*;
use shakmaty::{Color, Square};

use crate::engine::BoardMove;

/// Resource storing the currently selected piece and its legal moves.
///
/// `possible_moves` is recomputed from the engine on every selection and
/// cleared after every click handled while a piece is selected, so the list
/// never survives a board mutation.
#[derive(Resource, Debug, Default)]
pub struct Selection {
    pub selected: Option<Square>,
    pub possible_moves: Vec<BoardMove>,
}

impl Selection {
    pub fn select(&mut self, square: Square, moves: Vec<BoardMove>) {
        self.selected = Some(square);
        self.possible_moves = moves;
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    /// Destination squares to highlight for the current selection.
    pub fn targets(&self) -> impl Iterator<Item = Square> + '_ {
        self.possible_moves.iter().map(|m| m.to)
    }
}

/// Resource tracking the game's end state.
///
/// Starts as `Playing` and becomes `Checkmate` when a move mates. Once set,
/// pointer input is ignored; the schedule keeps ticking so the window stays
/// responsive to close events.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverState {
    #[default]
    Playing,
    Checkmate {
        winner: Color,
    },
}

impl GameOverState {
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOverState::Checkmate { winner } => Some(*winner),
            GameOverState::Playing => None,
        }
    }

    /// Human-readable result, shown on the game-over banner.
    pub fn message(&self) -> String {
        match self {
            GameOverState::Playing => "Game in progress".to_owned(),
            GameOverState::Checkmate { winner } => {
                format!("Checkmate! {} wins!", color_name(*winner))
            }
        }
    }
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}
