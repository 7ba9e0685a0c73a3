//! Shared utilities for CLI commands.

use std::fmt::Display;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use structopt::StructOpt;
use vanishing_tictactoe::bot::Difficulty;
use vanishing_tictactoe::config::{ConfigError, EngineConfig, PlayMode, Settings};
use vanishing_tictactoe::game::Engine;
use vanishing_tictactoe::tui::TuiApp;

/// Options shared by every command that sets up a game.
#[derive(StructOpt)]
pub struct GameOptions {
    /// Seconds before a placed mark vanishes (5 to 30)
    #[structopt(long = "vanish-time")]
    pub vanish_time: Option<f64>,
    /// Bot difficulty: easy, medium or hard
    #[structopt(short, long)]
    pub difficulty: Option<Difficulty>,
    /// TOML settings file; flags given on the command line win over it
    #[structopt(long = "config", parse(from_os_str))]
    pub config: Option<PathBuf>,
}

impl GameOptions {
    /// Defaults, then the settings file, then the command line.
    pub fn resolve(&self, play_mode: PlayMode) -> Result<EngineConfig, ConfigError> {
        let mut config = EngineConfig::default();
        if let Some(path) = &self.config {
            config = Settings::load(path)?.apply(config)?;
        }
        if let Some(seconds) = self.vanish_time {
            config = config.with_vanish_secs(seconds)?;
        }
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        Ok(config.with_play_mode(play_mode))
    }
}

pub(crate) fn run_tui(config: EngineConfig, bot_delay: Duration) {
    let engine = Engine::with_config(config);
    let result = TuiApp::new(engine, bot_delay).and_then(|mut app| app.run());
    if let Err(error) = result {
        exit_with_error(format!("terminal error: {}", error));
    }
}

pub(crate) fn exit_with_error(error: impl Display) -> ! {
    eprintln!("error: {}", error);
    process::exit(1);
}
