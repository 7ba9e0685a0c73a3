//! Best move command - print the bot's choice for a given board.

use structopt::StructOpt;
use vanishing_tictactoe::board::Board;
use vanishing_tictactoe::bot::{Bot, Difficulty, BOT_PLAYER};

use super::util::exit_with_error;
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "hard")]
    pub difficulty: Difficulty,
    /// Rows separated by `/`, cells as X, O or `.`
    #[structopt(long = "board")]
    pub board: Board,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        if let Some(winner) = self.board.winner() {
            exit_with_error(format!("{} has already won this board", winner));
        }

        let mut bot = Bot::new();
        match bot.choose_move(&self.board, self.difficulty) {
            Ok(position) => {
                let mut after = self.board.clone();
                after.put(position, BOT_PLAYER);
                println!("{}", position);
                print!("{}", after);
            }
            Err(error) => exit_with_error(format!("failed to choose a move: {}", error)),
        }
    }
}
