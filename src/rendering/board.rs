//! Checkerboard spawn and board palette

use bevy::prelude::*;
use shakmaty::Square;

use crate::layout::BoardLayout;

/// Component carrying a board square's identity on its sprite.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSquare(pub Square);

/// Board palette, the original game's colors.
#[derive(Resource, Debug, Clone, Copy)]
pub struct BoardTheme {
    pub light: Color,
    pub dark: Color,
    /// Outline color for legal-move hints.
    pub highlight: Color,
    /// Color of the game-over banner text.
    pub banner: Color,
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self {
            light: Color::srgb_u8(245, 245, 220),
            dark: Color::srgb_u8(139, 69, 19),
            highlight: Color::srgb_u8(186, 202, 68),
            banner: Color::srgb_u8(255, 0, 0),
        }
    }
}

/// True if the square is light in the standard checkerboard pattern (a1 is
/// dark, so parity of file + rank selects the color).
pub fn is_light(square: Square) -> bool {
    (u32::from(square.file()) + u32::from(square.rank())) % 2 == 1
}

/// Startup system spawning the camera and the 64 board squares.
pub fn spawn_board(mut commands: Commands, layout: Res<BoardLayout>, theme: Res<BoardTheme>) {
    commands.spawn(Camera2d);
    for square in (0..64).map(Square::new) {
        let color = if is_light(square) {
            theme.light
        } else {
            theme.dark
        };
        commands.spawn((
            Sprite::from_color(color, Vec2::splat(layout.square_size)),
            Transform::from_translation(layout.square_center(square).extend(0.0)),
            BoardSquare(square),
            Name::new(square.to_string()),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_have_standard_colors() {
        assert!(!is_light(Square::A1));
        assert!(is_light(Square::H1));
        assert!(is_light(Square::A8));
        assert!(!is_light(Square::H8));
    }

    #[test]
    fn adjacent_squares_alternate() {
        assert_ne!(is_light(Square::E4), is_light(Square::E5));
        assert_ne!(is_light(Square::E4), is_light(Square::D4));
    }
}
