//! Core game logic module for Snake
//!
//! All game rules live here, free of any I/O or rendering dependencies:
//! the renderer, input handler and audio player are collaborators that
//! observe the state produced by the engine.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use state::{CollisionType, Food, FoodKind, GamePhase, GameState, Position, Snake};
