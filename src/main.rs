use env_logger::Env;
use structopt::StructOpt;

mod cli;

use cli::commands::Command;
use cli::Vanishing;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    Vanishing::from_args().execute();
}
