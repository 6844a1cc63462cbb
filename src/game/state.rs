use std::time::Duration;

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current travel direction; None until the first directional input
    pub direction: Option<Direction>,
    /// Tail segments still owed from recently eaten food
    pub pending_growth: u32,
}

impl Snake {
    /// Create a new single-segment snake at rest
    pub fn new(head: Position) -> Self {
        Self {
            body: vec![head],
            direction: None,
            pending_growth: 0,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Check if moving the head to `pos` would land on the body.
    ///
    /// The tail cell is exempt while no growth is pending, since the
    /// tail vacates it on the very move being checked; with growth
    /// pending the tail stays put and still counts.
    pub fn hits_body_after_move(&self, pos: Position) -> bool {
        let body = self.body_segments();
        if self.pending_growth == 0 {
            body[..body.len().saturating_sub(1)].contains(&pos)
        } else {
            body.contains(&pos)
        }
    }

    /// Apply a steering input. A 180-degree reversal is ignored while the
    /// snake is longer than one segment; a lone head may turn anywhere.
    pub fn steer(&mut self, new_direction: Direction) {
        if self.body.len() > 1 {
            if let Some(current) = self.direction {
                if current.is_opposite(new_direction) {
                    return;
                }
            }
        }
        self.direction = Some(new_direction);
    }

    /// Queue extra tail segments to be kept on upcoming moves
    pub fn grow(&mut self, segments: u32) {
        self.pending_growth += segments;
    }

    /// Move one cell in the current direction, keeping the tail while
    /// growth is pending. Does nothing until the snake has a direction.
    pub fn advance(&mut self) {
        let Some(direction) = self.direction else {
            return;
        };

        let new_head = self.head().moved_in_direction(direction);
        self.body.insert(0, new_head);

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// The two food variants and their reward tuples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    Regular,
    Special,
}

impl FoodKind {
    /// Points added to the score when eaten
    pub fn points(&self) -> u32 {
        match self {
            FoodKind::Regular => 10,
            FoodKind::Special => 25,
        }
    }

    /// Tail segments gained when eaten
    pub fn growth(&self) -> u32 {
        match self {
            FoodKind::Regular => 1,
            FoodKind::Special => 2,
        }
    }

    /// Ticks per second added when eaten
    pub fn speed_bonus(&self) -> u32 {
        match self {
            FoodKind::Regular => 1,
            FoodKind::Special => 2,
        }
    }
}

/// A food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub kind: FoodKind,
    pub pos: Position,
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Phase of the game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Paused,
    /// Terminal until a restart reinitializes everything
    Dead,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Both food items, one regular and one special
    pub foods: [Food; 2],
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    /// Current tick rate in ticks per second
    pub speed: u32,
    pub ticks: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Create a new game state
    pub fn new(
        snake: Snake,
        foods: [Food; 2],
        grid_width: usize,
        grid_height: usize,
        speed: u32,
    ) -> Self {
        Self {
            snake,
            foods,
            grid_width,
            grid_height,
            score: 0,
            speed,
            ticks: 0,
            phase: GamePhase::Running,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.body.contains(&pos)
    }

    /// Find the index of the food item at a position, if any
    pub fn food_at(&self, pos: Position) -> Option<usize> {
        self.foods.iter().position(|food| food.pos == pos)
    }

    /// Time between game ticks at the current speed, floored at 15ms
    pub fn tick_duration(&self) -> Duration {
        let millis = 1000 / u64::from(self.speed.max(1));
        Duration::from_millis(millis.max(15))
    }
}
