//! Piece sprite loading and startup verification
//!
//! Twelve images, one per (color, role) pair, named after the original asset
//! scheme (`wp.png` .. `bk.png`) under `assets/pieces/`. A missing file is
//! the only fatal condition in the game; it is detected and reported before
//! any window is created. After startup the handles are immutable shared
//! data for the process lifetime.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use shakmaty::{Color, Role};

/// Directory under the asset root holding the piece images.
pub const SPRITE_DIR: &str = "pieces";

const COLORS: [Color; 2] = [Color::White, Color::Black];
const ROLES: [Role; 6] = [
    Role::Pawn,
    Role::Knight,
    Role::Bishop,
    Role::Rook,
    Role::Queen,
    Role::King,
];

/// Errors raised while preparing sprite assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// A piece image is absent from the asset directory.
    #[error("missing piece sprite: {}", path.display())]
    MissingSprite { path: PathBuf },
}

/// File name for one piece image, e.g. `wq.png` for the white queen.
pub fn sprite_file_name(color: Color, role: Role) -> String {
    format!("{}{}.png", color.char(), role.char())
}

/// Checks that all twelve piece images exist under `asset_root`.
///
/// Called before the app is built so a missing sprite aborts with the
/// offending path instead of opening a window with invisible pieces.
pub fn verify_piece_sprites(asset_root: &Path) -> Result<(), AssetError> {
    for color in COLORS {
        for role in ROLES {
            let path = asset_root.join(SPRITE_DIR).join(sprite_file_name(color, role));
            if !path.exists() {
                return Err(AssetError::MissingSprite { path });
            }
        }
    }
    Ok(())
}

/// Resource holding the twelve piece image handles.
#[derive(Resource)]
pub struct PieceSprites {
    handles: [Handle<Image>; 12],
}

impl PieceSprites {
    fn index(color: Color, role: Role) -> usize {
        let color_offset = match color {
            Color::White => 0,
            Color::Black => 6,
        };
        let role_offset = match role {
            Role::Pawn => 0,
            Role::Knight => 1,
            Role::Bishop => 2,
            Role::Rook => 3,
            Role::Queen => 4,
            Role::King => 5,
        };
        color_offset + role_offset
    }

    pub fn handle(&self, color: Color, role: Role) -> Handle<Image> {
        self.handles[Self::index(color, role)].clone()
    }
}

/// Startup system loading every piece image through the asset server.
pub fn load_piece_sprites(mut commands: Commands, server: Res<AssetServer>) {
    let handles: [Handle<Image>; 12] = std::array::from_fn(|i| {
        let color = COLORS[i / 6];
        let role = ROLES[i % 6];
        server.load(format!("{SPRITE_DIR}/{}", sprite_file_name(color, role)))
    });
    commands.insert_resource(PieceSprites { handles });
}
