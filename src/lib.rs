//! Classic arcade snake for the terminal
//!
//! This library provides:
//! - Core game logic: state machine and tick-update algorithm (game module)
//! - Key event mapping (input module)
//! - TUI rendering (render module)
//! - Optional sound effects (audio module)
//! - Session statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
