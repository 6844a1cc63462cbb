use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Starting tick rate in ticks per second
    pub initial_speed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 20,
            initial_speed: 10,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}
