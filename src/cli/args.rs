//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, play::PlayArgs, pvp::PvpArgs};

#[derive(StructOpt)]
#[structopt(
    name = "vanishing",
    about = "Tic-tac-toe where every mark disappears after a few seconds"
)]
pub enum Vanishing {
    #[structopt(
        name = "play",
        about = "Play against the bot, which always plays O. Pick how hard it searches with `--difficulty` (default: medium) and how long marks last with `--vanish-time` in seconds (default: 10, allowed 5 to 30)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play against another human on this local machine, taking turns at the same keyboard."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "best-move",
        about = "Print the cell the bot would play on a given board, written as a diagram with `--board` (e.g. \"XX./.O./...\"). The bot plays O."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for Vanishing {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            BestMove(cmd),
        }
    }
}
