//! Move hints visualization
//!
//! Outlines the legal destination squares of the current selection; the
//! hint set is derived from [`Selection`] each time it changes, empty when
//! nothing is selected. Each hint is drawn as an opaque square border built
//! from four edge strips, matching the original's rectangle outline.

use bevy::prelude::*;

use crate::game::resources::Selection;
use crate::layout::BoardLayout;
use crate::rendering::board::BoardTheme;

/// Border thickness of a hint outline in logical pixels.
pub const HINT_BORDER_WIDTH: f32 = 5.0;

/// Marker component for squares showing move hints.
#[derive(Component)]
pub struct MoveHint;

/// The four edge strips of a square outline, as (offset from the square
/// center, strip size). The vertical strips are inset so the strips tile the
/// border frame without overlapping at the corners.
fn border_strips(square_size: f32, width: f32) -> [(Vec2, Vec2); 4] {
    let half = (square_size - width) / 2.0;
    let horizontal = Vec2::new(square_size, width);
    let vertical = Vec2::new(width, square_size - 2.0 * width);
    [
        (Vec2::new(0.0, half), horizontal),
        (Vec2::new(0.0, -half), horizontal),
        (Vec2::new(-half, 0.0), vertical),
        (Vec2::new(half, 0.0), vertical),
    ]
}

/// Respawns hint outlines whenever the selection changes.
pub fn update_move_hints(
    mut commands: Commands,
    selection: Res<Selection>,
    layout: Res<BoardLayout>,
    theme: Res<BoardTheme>,
    hints: Query<Entity, With<MoveHint>>,
) {
    if !selection.is_changed() {
        return;
    }
    for entity in hints.iter() {
        commands.entity(entity).despawn();
    }
    for target in selection.targets() {
        let center = layout.square_center(target);
        for (offset, size) in border_strips(layout.square_size, HINT_BORDER_WIDTH) {
            commands.spawn((
                Sprite::from_color(theme.highlight, size),
                Transform::from_translation((center + offset).extend(1.0)),
                MoveHint,
                Name::new("Move Hint"),
            ));
        }
    }
}
