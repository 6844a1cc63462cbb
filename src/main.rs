use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tui_snake::audio::AudioPlayer;
use tui_snake::game::GameConfig;
use tui_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "tui_snake")]
#[command(version, about = "Classic arcade snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "30")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "20")]
    height: usize,

    /// Starting speed in ticks per second
    #[arg(long, default_value = "10")]
    speed: u32,

    /// Directory containing eat.wav, game_over.wav and background.wav
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Disable sound effects
    #[arg(long)]
    mute: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        initial_speed: cli.speed,
    };
    let audio = AudioPlayer::new(&cli.assets, cli.mute);

    let mut human_mode = HumanMode::new(config, audio);
    human_mode.run().await?;

    Ok(())
}
