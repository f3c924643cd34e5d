//! Board geometry - Pixel and world coordinate conversion
//!
//! Two coordinate systems meet here:
//! - **Window pixels**: origin at the top-left, y growing downward. Cursor
//!   positions arrive in this space, so screen row 0 is rank 7.
//! - **World units**: the 2D camera sits at the board center, y growing
//!   upward, which lines up with rank order without any flip.
//!
//! `BoardLayout` is plain configuration constructed once at startup; no part
//! of the game reads ambient globals for sizing.

use bevy::prelude::*;
use shakmaty::{File, Rank, Square};

/// Fixed board geometry: the side length of one square in logical pixels.
#[derive(Resource, Debug, Clone, Copy)]
pub struct BoardLayout {
    pub square_size: f32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        // 600x600 window / 8 columns, the original's dimensions.
        Self { square_size: 75.0 }
    }
}

impl BoardLayout {
    /// Side length of the whole board in logical pixels.
    pub fn board_extent(&self) -> f32 {
        self.square_size * 8.0
    }

    /// Maps a cursor position to a square, or `None` outside the board.
    ///
    /// Applies the vertical flip: window y grows downward while ranks grow
    /// upward.
    pub fn square_at(&self, x: f32, y: f32) -> Option<Square> {
        let extent = self.board_extent();
        if x < 0.0 || y < 0.0 || x >= extent || y >= extent {
            return None;
        }
        let file = (x / self.square_size) as u32;
        let row = (y / self.square_size) as u32;
        Some(Square::from_coords(File::new(file), Rank::new(7 - row)))
    }

    /// World-space center of a square, for sprite transforms.
    pub fn square_center(&self, square: Square) -> Vec2 {
        let half = self.board_extent() / 2.0;
        let file = u32::from(square.file()) as f32;
        let rank = u32::from(square.rank()) as f32;
        Vec2::new(
            (file + 0.5) * self.square_size - half,
            (rank + 0.5) * self.square_size - half,
        )
    }
}
