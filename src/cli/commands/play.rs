//! Play command - play a game against the bot.

use std::time::Duration;

use structopt::StructOpt;
use vanishing_tictactoe::config::PlayMode;

use super::util::{exit_with_error, run_tui, GameOptions};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(flatten)]
    pub options: GameOptions,
    /// Milliseconds the bot waits before answering
    #[structopt(long = "bot-delay", default_value = "300")]
    pub bot_delay: u64,
}

impl Command for PlayArgs {
    fn execute(self) {
        match self.options.resolve(PlayMode::VsBot) {
            Ok(config) => run_tui(config, Duration::from_millis(self.bot_delay)),
            Err(error) => exit_with_error(error),
        }
    }
}
