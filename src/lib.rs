//! clickchess - a two-player, pointer-driven chess board
//!
//! Chess legality lives in the `shakmaty` engine behind
//! [`engine::ChessEngine`]; this crate owns the interaction state machine
//! ([`game::controller`]), the rendering ([`rendering`]) and the frame loop
//! wiring ([`game::GamePlugin`]).

pub mod assets;
pub mod engine;
pub mod game;
pub mod layout;
pub mod rendering;

pub use game::GamePlugin;
pub use rendering::BoardRenderPlugin;
