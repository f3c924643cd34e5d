//! Interaction layer - selection state, the pointer state machine, and the
//! plugin wiring them into the schedule
//!
//! # Module Organization
//!
//! - `resources` - Global interaction state (Selection, GameOverState)
//! - `controller` - Pure pointer-down state machine
//! - `systems` - ECS input pump feeding the controller
//! - `events` - Checkmate notification message
//! - `plugin` - GamePlugin registering everything

pub mod controller;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use plugin::{GamePlugin, GameSystems};
