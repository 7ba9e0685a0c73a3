//! Terminal User Interface (TUI) for playing vanishing tic-tac-toe

pub mod app;
pub mod board_widget;
pub mod theme;

pub use app::TuiApp;
pub use theme::Theme;
