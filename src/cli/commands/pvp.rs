//! PvP command - play a game against another human.

use structopt::StructOpt;
use vanishing_tictactoe::config::{PlayMode, DEFAULT_BOT_DELAY};

use super::util::{exit_with_error, run_tui, GameOptions};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(flatten)]
    pub options: GameOptions,
}

impl Command for PvpArgs {
    fn execute(self) {
        // The bot delay still matters if the mode is toggled in game.
        match self.options.resolve(PlayMode::TwoPlayer) {
            Ok(config) => run_tui(config, DEFAULT_BOT_DELAY),
            Err(error) => exit_with_error(error),
        }
    }
}
