use super::{
    action::Action,
    config::GameConfig,
    state::{CollisionType, Food, FoodKind, GamePhase, GameState, Position, Snake},
};
use rand::Rng;

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Kind of food eaten this tick, if any
    pub ate: Option<FoodKind>,
    /// Collision that killed the snake this tick, if any
    pub collision: Option<CollisionType>,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Start a fresh game: a lone snake segment at the grid center,
    /// both foods spawned, score and speed at their starting values.
    pub fn reset(&mut self) -> GameState {
        let center = Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        let snake = Snake::new(center);

        let regular = self.spawn_food(FoodKind::Regular, &snake, &[]);
        let special = self.spawn_food(FoodKind::Special, &snake, &[regular.pos]);

        GameState::new(
            snake,
            [regular, special],
            self.config.grid_width,
            self.config.grid_height,
            self.config.initial_speed,
        )
    }

    /// Advance the simulation by one tick: steer, move one cell, resolve
    /// collisions, consume food. A no-op unless the game is running.
    pub fn tick(&mut self, state: &mut GameState, action: Action) -> TickOutcome {
        if state.phase != GamePhase::Running {
            return TickOutcome::default();
        }

        if let Action::Move(direction) = action {
            state.snake.steer(direction);
        }

        // Until the first steering input the snake sits still
        let Some(direction) = state.snake.direction else {
            state.ticks += 1;
            return TickOutcome::default();
        };

        let new_head = state.snake.head().moved_in_direction(direction);

        if let Some(collision) = self.check_collision(state, new_head) {
            state.phase = GamePhase::Dead;
            state.ticks += 1;

            return TickOutcome {
                ate: None,
                collision: Some(collision),
            };
        }

        let eaten = state.food_at(new_head);

        // Queue growth before moving so the tail is kept on this very move
        if let Some(index) = eaten {
            state.snake.grow(state.foods[index].kind.growth());
        }

        state.snake.advance();

        let mut ate = None;
        if let Some(index) = eaten {
            let kind = state.foods[index].kind;
            state.score += kind.points();
            state.speed += kind.speed_bonus();

            let other = state.foods[1 - index].pos;
            state.foods[index] = self.spawn_food(kind, &state.snake, &[other]);

            ate = Some(kind);
        }

        state.ticks += 1;

        TickOutcome {
            ate,
            collision: None,
        }
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if state.snake.hits_body_after_move(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn food at a random cell that is neither on the snake nor on
    /// any of the given positions (the other food item).
    fn spawn_food(&mut self, kind: FoodKind, snake: &Snake, avoid: &[Position]) -> Food {
        loop {
            let x = self.rng.gen_range(0..self.config.grid_width) as i32;
            let y = self.rng.gen_range(0..self.config.grid_height) as i32;
            let pos = Position::new(x, y);

            if !snake.body.contains(&pos) && !avoid.contains(&pos) {
                return Food { kind, pos };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    /// Snake already in motion, built segment by segment for determinism
    fn moving_snake(body: Vec<Position>, direction: Direction) -> Snake {
        Snake {
            body,
            direction: Some(direction),
            pending_growth: 0,
        }
    }

    fn state_with(snake: Snake, foods: [Food; 2]) -> GameState {
        GameState::new(snake, foods, 10, 10, 10)
    }

    fn far_foods() -> [Food; 2] {
        [
            Food {
                kind: FoodKind::Regular,
                pos: Position::new(8, 8),
            },
            Food {
                kind: FoodKind::Special,
                pos: Position::new(9, 9),
            },
        ]
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::small());
        let state = engine.reset();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.speed, 10);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(5, 5));
        assert_eq!(state.snake.direction, None);

        // Foods land in bounds, off the snake, and apart from each other
        for food in &state.foods {
            assert!(state.is_in_bounds(food.pos));
            assert!(!state.is_occupied_by_snake(food.pos));
        }
        assert_ne!(state.foods[0].pos, state.foods[1].pos);
        assert_eq!(state.foods[0].kind, FoodKind::Regular);
        assert_eq!(state.foods[1].kind, FoodKind::Special);
    }

    #[test]
    fn test_snake_waits_for_first_input() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();

        let outcome = engine.tick(&mut state, Action::Continue);

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(state.snake.head(), Position::new(5, 5));
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_length_unchanged_without_food() {
        let mut engine = GameEngine::new(GameConfig::small());
        let snake = moving_snake(
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Right,
        );
        let mut state = state_with(snake, far_foods());

        let outcome = engine.tick(&mut state, Action::Continue);

        assert_eq!(outcome.ate, None);
        assert_eq!(outcome.collision, None);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position::new(6, 5));
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 10);
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = GameEngine::new(GameConfig::small());
        let snake = moving_snake(vec![Position::new(0, 5)], Direction::Left);
        let mut state = state_with(snake, far_foods());

        let outcome = engine.tick(&mut state, Action::Continue);

        assert_eq!(state.phase, GamePhase::Dead);
        assert_eq!(outcome.collision, Some(CollisionType::Wall));
        // The snake stays where it died
        assert_eq!(state.snake.head(), Position::new(0, 5));
    }

    #[test]
    fn test_self_collision() {
        let mut engine = GameEngine::new(GameConfig::small());

        // Snake at (5,5) going right with body trailing left:
        // (5,5), (4,5), (3,5), (2,5), (1,5)
        let snake = moving_snake(
            vec![
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5),
                Position::new(2, 5),
                Position::new(1, 5),
            ],
            Direction::Right,
        );
        let mut state = state_with(snake, far_foods());

        // Right: (6,5), (5,5), (4,5), (3,5), (2,5)
        engine.tick(&mut state, Action::Continue);
        // Down: (6,6), (6,5), (5,5), (4,5), (3,5)
        engine.tick(&mut state, Action::Move(Direction::Down));
        // Left: (5,6), (6,6), (6,5), (5,5), (4,5)
        engine.tick(&mut state, Action::Move(Direction::Left));
        // Up into (5,5), a mid-body segment that does not move away
        let outcome = engine.tick(&mut state, Action::Move(Direction::Up));

        assert_eq!(state.phase, GamePhase::Dead);
        assert_eq!(outcome.collision, Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_tail_chase_survives() {
        let mut engine = GameEngine::new(GameConfig::small());

        // Four segments in a closed loop, head turning into the tail
        // cell. The tail vacates that cell on the same move, so the
        // snake lives.
        let snake = moving_snake(
            vec![
                Position::new(5, 5),
                Position::new(5, 4),
                Position::new(4, 4),
                Position::new(4, 5),
            ],
            Direction::Left,
        );
        let mut state = state_with(snake, far_foods());

        let outcome = engine.tick(&mut state, Action::Continue);

        assert_eq!(outcome.collision, None);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.snake.head(), Position::new(4, 5));
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_tail_chase_dies_while_growing() {
        let mut engine = GameEngine::new(GameConfig::small());

        // Same loop, but growth is pending so the tail stays put
        let mut snake = moving_snake(
            vec![
                Position::new(5, 5),
                Position::new(5, 4),
                Position::new(4, 4),
                Position::new(4, 5),
            ],
            Direction::Left,
        );
        snake.pending_growth = 1;
        let mut state = state_with(snake, far_foods());

        let outcome = engine.tick(&mut state, Action::Continue);

        assert_eq!(outcome.collision, Some(CollisionType::SelfCollision));
        assert_eq!(state.phase, GamePhase::Dead);
    }

    #[test]
    fn test_eating_regular_food() {
        let mut engine = GameEngine::new(GameConfig::small());
        let snake = moving_snake(vec![Position::new(5, 5)], Direction::Right);
        let mut foods = far_foods();
        foods[0].pos = Position::new(6, 5); // directly in front
        let mut state = state_with(snake, foods);

        let outcome = engine.tick(&mut state, Action::Continue);

        assert_eq!(outcome.ate, Some(FoodKind::Regular));
        assert_eq!(state.score, 10);
        assert_eq!(state.speed, 11);
        assert_eq!(state.snake.len(), 2);

        // Food was repositioned somewhere legal
        let respawned = state.foods[0];
        assert_eq!(respawned.kind, FoodKind::Regular);
        assert!(state.is_in_bounds(respawned.pos));
        assert!(!state.is_occupied_by_snake(respawned.pos));
        assert_ne!(respawned.pos, state.foods[1].pos);
    }

    #[test]
    fn test_eating_special_food() {
        let mut engine = GameEngine::new(GameConfig::small());
        let snake = moving_snake(vec![Position::new(5, 5)], Direction::Right);
        let mut foods = far_foods();
        foods[1].pos = Position::new(6, 5);
        let mut state = state_with(snake, foods);

        let outcome = engine.tick(&mut state, Action::Continue);

        assert_eq!(outcome.ate, Some(FoodKind::Special));
        assert_eq!(state.score, 25);
        assert_eq!(state.speed, 12);
        // One segment lands now, the second on the following move
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.pending_growth, 1);

        engine.tick(&mut state, Action::Continue);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.pending_growth, 0);
    }

    #[test]
    fn test_paused_tick_changes_nothing() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.snake.steer(Direction::Right);
        state.phase = GamePhase::Paused;
        let before = state.clone();

        let outcome = engine.tick(&mut state, Action::Move(Direction::Down));

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(state, before);
    }

    #[test]
    fn test_dead_tick_changes_nothing() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.phase = GamePhase::Dead;
        let ticks_before = state.ticks;

        let outcome = engine.tick(&mut state, Action::Continue);

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(state.ticks, ticks_before);
        assert_eq!(state.phase, GamePhase::Dead);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();

        state.score = 85;
        state.speed = 17;
        state.snake.grow(3);
        state.phase = GamePhase::Dead;

        let fresh = engine.reset();
        assert_eq!(fresh.score, 0);
        assert_eq!(fresh.speed, 10);
        assert_eq!(fresh.snake.len(), 1);
        assert_eq!(fresh.phase, GamePhase::Running);
    }
}
