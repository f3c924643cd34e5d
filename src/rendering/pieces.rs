//! Piece sprite synchronization

use bevy::prelude::*;
use shakmaty::Square;

use crate::assets::PieceSprites;
use crate::engine::ChessEngine;
use crate::layout::BoardLayout;

/// Marker for a spawned piece sprite.
#[derive(Component, Debug, Clone, Copy)]
pub struct PieceSprite {
    pub square: Square,
}

/// Respawns piece sprites whenever the engine position changes.
///
/// Thirty-two sprites at most, so a full despawn/respawn per move is simpler
/// than diffing and keeps the rendered pieces a pure function of engine
/// state.
pub fn sync_piece_sprites(
    mut commands: Commands,
    engine: Res<ChessEngine>,
    sprites: Res<PieceSprites>,
    layout: Res<BoardLayout>,
    existing: Query<Entity, With<PieceSprite>>,
) {
    if !engine.is_changed() {
        return;
    }
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    for (square, piece) in engine.pieces() {
        commands.spawn((
            Sprite {
                custom_size: Some(Vec2::splat(layout.square_size)),
                ..Sprite::from_image(sprites.handle(piece.color, piece.role))
            },
            Transform::from_translation(layout.square_center(square).extend(2.0)),
            PieceSprite { square },
        ));
    }
}
