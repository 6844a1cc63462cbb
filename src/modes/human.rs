use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::audio::AudioPlayer;
use crate::game::{Action, Direction, GameConfig, GameEngine, GamePhase, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: AudioPlayer,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl HumanMode {
    pub fn new(config: GameConfig, audio: AudioPlayer) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            audio,
            should_quit: false,
            pending_direction: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        self.audio.start_background();

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Game tick rate follows the snake's speed and is re-armed
        // whenever eating makes the game faster
        let mut tick_duration = self.state.tick_duration();
        let mut tick_timer = interval(tick_duration);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.state.phase == GamePhase::Running {
                        self.update_game();

                        let current = self.state.tick_duration();
                        if current != tick_duration {
                            tick_duration = current;
                            tick_timer = interval(tick_duration);
                        }
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.stats);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            let action = self.input_handler.handle_key_event(key);

            match action {
                KeyAction::GameAction(Action::Move(dir)) => {
                    self.pending_direction = Some(dir);
                }
                KeyAction::GameAction(Action::Continue) => {
                    // No action needed
                }
                KeyAction::Pause => {
                    self.toggle_pause();
                }
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn update_game(&mut self) {
        let action = self
            .pending_direction
            .map(Action::Move)
            .unwrap_or(Action::Continue);

        self.pending_direction = None;

        let outcome = self.engine.tick(&mut self.state, action);

        if outcome.ate.is_some() {
            self.stats.on_food_eaten();
            self.audio.on_food_eaten();
        }

        if outcome.collision.is_some() {
            self.stats
                .on_game_over(self.state.score, self.state.snake.len());
            self.audio.on_game_over();
        }
    }

    fn toggle_pause(&mut self) {
        self.state.phase = match self.state.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            // A dead snake stays dead until restart
            GamePhase::Dead => GamePhase::Dead,
        };
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.stats.on_game_start();
        self.pending_direction = None;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
