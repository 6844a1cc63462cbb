use std::time::{Duration, Instant};

/// Running totals for the current terminal session
pub struct SessionStats {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub longest_snake: usize,
    pub games_played: u32,
    pub foods_eaten: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            longest_snake: 1,
            games_played: 0,
            foods_eaten: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_food_eaten(&mut self) {
        self.foods_eaten += 1;
    }

    pub fn on_game_over(&mut self, final_score: u32, final_length: usize) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
        if final_length > self.longest_snake {
            self.longest_snake = final_length;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
