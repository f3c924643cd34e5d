//! Pointer interaction state machine
//!
//! Maps a single pointer-down at a pixel position onto the selection and
//! board state. All invalid input (out-of-bounds clicks, wrong-turn
//! selection, illegal destinations) is silently absorbed; nothing here is a
//! user-visible error.
//!
//! Kept free of ECS types so the whole machine can be driven in tests
//! without building an `App`; the Bevy side lives in
//! [`super::systems::handle_board_clicks`].

use shakmaty::{Color, Rank, Role, Square};
use tracing::debug;

use crate::engine::{BoardMove, ChessEngine};
use crate::game::resources::{GameOverState, Selection};
use crate::layout::BoardLayout;

/// What a pointer-down click did to the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click was absorbed with no state change.
    Ignored,
    /// A piece of the side to move was selected.
    Selected(Square),
    /// A click while selected that did not produce a legal move.
    Deselected,
    /// A legal move was applied.
    Moved(BoardMove),
    /// A legal move was applied and it delivered mate.
    Checkmate { winner: Color },
}

/// Handles one pointer-down at window pixel coordinates `(x, y)`.
pub fn handle_pointer_down(
    engine: &mut ChessEngine,
    selection: &mut Selection,
    game_over: &mut GameOverState,
    layout: &BoardLayout,
    x: f32,
    y: f32,
) -> ClickOutcome {
    // Frozen once terminal; the loop keeps ticking but input is dead.
    if game_over.is_game_over() {
        return ClickOutcome::Ignored;
    }
    let Some(square) = layout.square_at(x, y) else {
        return ClickOutcome::Ignored;
    };

    let Some(from) = selection.selected else {
        return try_select(engine, selection, square);
    };

    let mut candidate = BoardMove {
        from,
        to: square,
        promotion: None,
    };
    // Pawns reaching the far rank always promote to a queen; the player gets
    // no choice of piece.
    let pawn_selected = engine.piece_at(from).map(|p| p.role) == Some(Role::Pawn);
    if pawn_selected && (square.rank() == Rank::First || square.rank() == Rank::Eighth) {
        candidate.promotion = Some(Role::Queen);
    }

    let legal = selection.possible_moves.contains(&candidate);
    // A click while selected always deselects, legal or not. A failed
    // attempt forces the player to start over rather than retry.
    selection.clear();
    if !legal {
        debug!("deselecting, {candidate} is not a legal destination");
        return ClickOutcome::Deselected;
    }

    if let Err(err) = engine.play(candidate) {
        // `possible_moves` is only ever filled from the engine's own legal
        // move list for this position, so a rejection here is a bug in the
        // selection bookkeeping.
        unreachable!("engine rejected a move from its own legal list: {err}");
    }

    if engine.is_checkmate() {
        let winner = engine.turn().other();
        *game_over = GameOverState::Checkmate { winner };
        return ClickOutcome::Checkmate { winner };
    }
    ClickOutcome::Moved(candidate)
}

fn try_select(engine: &ChessEngine, selection: &mut Selection, square: Square) -> ClickOutcome {
    match engine.piece_at(square) {
        Some(piece) if piece.color == engine.turn() => {
            // A piece with no legal moves still selects; it simply yields no
            // highlights.
            selection.select(square, engine.legal_moves_from(square));
            debug!("selected {square}");
            ClickOutcome::Selected(square)
        }
        // Empty square or the opponent's piece: stay empty.
        _ => ClickOutcome::Ignored,
    }
}
