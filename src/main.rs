use anyhow::Context;
use bevy::prelude::*;
use clickchess::{assets, BoardRenderPlugin, GamePlugin};

const WINDOW_SIZE: f32 = 600.0;

fn main() -> anyhow::Result<()> {
    // A missing sprite aborts here, before any window is created.
    assets::verify_piece_sprites(std::path::Path::new("assets"))
        .context("piece sprite pre-flight failed")?;

    let window = Window {
        resolution: (WINDOW_SIZE as u32, WINDOW_SIZE as u32).into(),
        title: "Click Chess".into(),
        resizable: false,
        ..default()
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .add_plugins(BoardRenderPlugin)
        .run();

    Ok(())
}
