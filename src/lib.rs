pub mod alpha_beta_searcher;
pub mod board;
pub mod bot;
pub mod config;
pub mod game;
pub mod ledger;
pub mod tui;
