//! Chess rules engine facade - Single source of truth for chess legality
//!
//! Wraps a [`shakmaty::Chess`] position in a Bevy resource. The engine is
//! authoritative for:
//! - Legal move generation
//! - Move application (captures, castling rook movement, promotion)
//! - Side-to-move tracking and checkmate detection
//!
//! The interaction layer and the renderer only read snapshots through this
//! facade; neither ever inspects board geometry to decide legality or check.
//!
//! # Move representation
//!
//! The UI works with [`BoardMove`], a structural `{from, to, promotion}`
//! triple, because that is all a pair of clicks can express. shakmaty encodes
//! castling as king-takes-rook internally, so [`ChessEngine`] normalizes the
//! destination of a castling move to the king's target square (g1/c1 style)
//! before handing it to the UI. A click on g1 therefore matches the kingside
//! castle, which is also how the original move encoding behaved.

use std::fmt;

use bevy::prelude::*;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, File, Move, Piece, Position, Role, Square};

/// A candidate or legal move as the interaction layer sees it.
///
/// Equality is structural: two moves are the same move only if `from`, `to`
/// and `promotion` all match. A non-promoting move to a back rank is distinct
/// from the auto-queen move to the same square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl fmt::Display for BoardMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "={}", role.upper_char())?;
        }
        Ok(())
    }
}

/// Returned when [`ChessEngine::play`] is handed a move that is not in the
/// current legal-move set. The controller checks membership before calling
/// `play`, so seeing this error means a bug in the caller, not user input.
#[derive(Debug, Clone, thiserror::Error)]
#[error("move {0} is not legal in the current position")]
pub struct IllegalMoveError(pub BoardMove);

/// A position string failed to parse or described an illegal setup.
#[derive(Debug, thiserror::Error)]
#[error("invalid FEN {fen:?}: {reason}")]
pub struct FenError {
    pub fen: String,
    pub reason: String,
}

/// Resource owning the authoritative board state.
///
/// Defaults to the standard starting position.
#[derive(Resource, Debug, Clone, Default)]
pub struct ChessEngine {
    pos: Chess,
}

impl ChessEngine {
    /// Builds an engine from an arbitrary FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = fen.parse::<Fen>().map_err(|e| FenError {
            fen: fen.to_owned(),
            reason: e.to_string(),
        })?;
        let pos = parsed
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|e| FenError {
                fen: fen.to_owned(),
                reason: e.to_string(),
            })?;
        Ok(Self { pos })
    }

    /// The color whose turn it is to move.
    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pos.board().piece_at(square)
    }

    /// Every occupied square, for the renderer.
    pub fn pieces(&self) -> Vec<(Square, Piece)> {
        (0..64)
            .map(Square::new)
            .filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
            .collect()
    }

    /// All moves legal for the side to move.
    pub fn legal_moves(&self) -> Vec<BoardMove> {
        self.pos
            .legal_moves()
            .iter()
            .filter_map(ui_move)
            .collect()
    }

    /// Legal moves starting from one square. Recomputed on every call; the
    /// result must not be kept across a board mutation.
    pub fn legal_moves_from(&self, from: Square) -> Vec<BoardMove> {
        self.legal_moves()
            .into_iter()
            .filter(|m| m.from == from)
            .collect()
    }

    /// Applies a move, mutating the position.
    ///
    /// Precondition: `mv` is a member of [`Self::legal_moves`]. Violating it
    /// yields an [`IllegalMoveError`] and leaves the position untouched.
    pub fn play(&mut self, mv: BoardMove) -> Result<(), IllegalMoveError> {
        let matched = self
            .pos
            .legal_moves()
            .iter()
            .find(|&m| ui_move(m) == Some(mv))
            .cloned();
        match matched {
            Some(m) => {
                self.pos.play_unchecked(&m);
                Ok(())
            }
            None => Err(IllegalMoveError(mv)),
        }
    }

    pub fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }
}

/// Normalizes an engine move into the structural form the UI matches
/// against. Castling gets the king's destination square (g1/c1 style), since
/// that is the square the player clicks; drops, which standard chess never
/// generates, are filtered out.
fn ui_move(m: &Move) -> Option<BoardMove> {
    let (from, to) = match *m {
        Move::Normal { from, to, .. } => (from, to),
        Move::EnPassant { from, to } => (from, to),
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() {
                File::G
            } else {
                File::C
            };
            (king, Square::from_coords(file, king.rank()))
        }
        Move::Put { .. } => return None,
    };
    Some(BoardMove {
        from,
        to,
        promotion: m.promotion(),
    })
}
