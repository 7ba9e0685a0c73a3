//! Color theme for the TUI

use std::time::Duration;

use ratatui::style::{Color, Modifier, Style};

use crate::board::player::Player;

/// Timers at or above this are shown as safe.
const TIMER_SAFE: Duration = Duration::from_secs(6);
/// Timers below this are shown as urgent.
const TIMER_URGENT: Duration = Duration::from_secs(3);

/// Color theme for the tic-tac-toe TUI
pub struct Theme {
    pub cell: Color,
    pub cursor: Color,
    pub mark_x: Color,
    pub mark_o: Color,
    pub vanishing: Color,
    pub timer_safe: Color,
    pub timer_soon: Color,
    pub timer_urgent: Color,
    pub border: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            cell: Color::Rgb(40, 44, 52),
            cursor: Color::Rgb(90, 96, 110),
            mark_x: Color::Rgb(97, 175, 239),
            mark_o: Color::Rgb(229, 192, 123),
            vanishing: Color::Red,
            timer_safe: Color::Green,
            timer_soon: Color::Yellow,
            timer_urgent: Color::Red,
            border: Color::Gray,
            text: Color::White,
        }
    }
}

impl Theme {
    pub fn mark_color(&self, player: Player) -> Color {
        match player {
            Player::X => self.mark_x,
            Player::O => self.mark_o,
        }
    }

    /// Style for one board cell. Marks about to vanish blink in the warning
    /// color.
    pub fn cell_style(&self, mark: Option<Player>, is_cursor: bool, vanishing: bool) -> Style {
        let background = if is_cursor { self.cursor } else { self.cell };
        let style = Style::default().bg(background);

        match mark {
            Some(_) if vanishing => style
                .fg(self.vanishing)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            Some(player) => style
                .fg(self.mark_color(player))
                .add_modifier(Modifier::BOLD),
            None => style,
        }
    }

    pub fn timer_style(&self, remaining: Duration) -> Style {
        let color = if remaining < TIMER_URGENT {
            self.timer_urgent
        } else if remaining < TIMER_SAFE {
            self.timer_soon
        } else {
            self.timer_safe
        };
        Style::default().fg(color)
    }

    /// Get style for text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn status_style(&self) -> Style {
        self.text_style().add_modifier(Modifier::BOLD)
    }

    /// Get style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
