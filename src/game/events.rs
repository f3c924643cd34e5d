use bevy::prelude::*;
use shakmaty::Color;

/// One-shot notification that the last move delivered mate.
///
/// Written by the input system, consumed by the banner renderer; the banner
/// spawn is driven by this message rather than the per-frame state so it
/// happens exactly once.
#[derive(Message, Debug, Clone, Copy)]
pub struct CheckmateMessage {
    pub winner: Color,
}
