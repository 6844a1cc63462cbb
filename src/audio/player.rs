use std::fs;
use std::io::Cursor;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};

/// Fire-and-forget sound effects for game events.
///
/// Every failure mode degrades to silence: a missing output device, a
/// missing wav file, or a clip that fails to decode simply means the
/// cue is skipped. Gameplay never depends on audio.
pub struct AudioPlayer {
    // The stream must stay alive for the handle to keep playing
    output: Option<(OutputStream, OutputStreamHandle)>,
    eat_clip: Option<Vec<u8>>,
    game_over_clip: Option<Vec<u8>>,
    background_clip: Option<Vec<u8>>,
}

impl AudioPlayer {
    /// Open the default output device and preload whatever clips exist
    /// under `assets_dir`. A muted player skips all of it.
    pub fn new(assets_dir: &Path, muted: bool) -> Self {
        if muted {
            return Self::silent();
        }

        Self {
            output: OutputStream::try_default().ok(),
            eat_clip: fs::read(assets_dir.join("eat.wav")).ok(),
            game_over_clip: fs::read(assets_dir.join("game_over.wav")).ok(),
            background_clip: fs::read(assets_dir.join("background.wav")).ok(),
        }
    }

    /// A player that never makes a sound
    pub fn silent() -> Self {
        Self {
            output: None,
            eat_clip: None,
            game_over_clip: None,
            background_clip: None,
        }
    }

    /// Start the looping background track, if present
    pub fn start_background(&self) {
        let Some((_, handle)) = &self.output else {
            return;
        };
        let Some(bytes) = &self.background_clip else {
            return;
        };

        if let Ok(source) = Decoder::new(Cursor::new(bytes.clone())) {
            let _ = handle.play_raw(source.repeat_infinite().convert_samples());
        }
    }

    pub fn on_food_eaten(&self) {
        self.play(&self.eat_clip);
    }

    pub fn on_game_over(&self) {
        self.play(&self.game_over_clip);
    }

    fn play(&self, clip: &Option<Vec<u8>>) {
        let Some((_, handle)) = &self.output else {
            return;
        };
        let Some(bytes) = clip else {
            return;
        };

        if let Ok(source) = Decoder::new(Cursor::new(bytes.clone())) {
            let _ = handle.play_raw(source.convert_samples());
        }
    }
}
