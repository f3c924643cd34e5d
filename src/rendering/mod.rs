//! Rendering - checkerboard, piece sprites, move hints, game-over banner
//!
//! Purely a function of current state: the engine position drives the piece
//! sprites, the selection drives the hints, and the checkmate message drives
//! the banner. Nothing here mutates game state.

pub mod board;
pub mod hints;
pub mod overlay;
pub mod pieces;
pub mod plugin;

pub use board::BoardTheme;
pub use plugin::BoardRenderPlugin;
