//! Main TUI application state, event loop and rendering

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{debug, warn};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::board::player::Player;
use crate::board::position::Position;
use crate::bot::BOT_PLAYER;
use crate::config::{EngineConfig, PlayMode, MAX_VANISH_TIME, MIN_VANISH_TIME};
use crate::game::engine::{Engine, GameStatus};
use crate::ledger::Timestamp;
use crate::tui::{board_widget::BoardWidget, Theme};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const VANISH_STEP_SECS: f64 = 1.0;

const HELP: &str =
    "arrows/hjkl move | enter/space place | 1-9 place | +/- vanish time | m mode | d difficulty | r reset | q quit";

/// Text for the status line.
pub fn status_text(status: GameStatus, current_player: Player, play_mode: PlayMode) -> String {
    match status {
        GameStatus::Won(winner) => format!("Player {} Wins!", winner),
        GameStatus::Draw => "It's a Draw!".to_string(),
        GameStatus::InProgress if play_mode == PlayMode::VsBot && current_player == BOT_PLAYER => {
            "Bot's Turn".to_string()
        }
        GameStatus::InProgress => format!("{}'s Turn", current_player),
    }
}

/// Format large numbers with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Main TUI application. Owns the engine and feeds it the elapsed time since
/// the app started.
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    theme: Theme,
    engine: Engine,
    origin: Instant,
    cursor: Position,
    bot_delay: Duration,
    bot_deadline: Option<Timestamp>,
    message: Option<String>,
    should_quit: bool,
}

impl TuiApp {
    pub fn new(engine: Engine, bot_delay: Duration) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            theme: Theme::default(),
            engine,
            origin: Instant::now(),
            cursor: Position::new(1, 1),
            bot_delay,
            bot_deadline: None,
            message: None,
            should_quit: false,
        })
    }

    /// Run until the player quits.
    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.clear()?;

        while !self.should_quit {
            let now = self.now();
            self.engine.tick(now);
            self.drive_bot(now);
            self.draw(now)?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Check if should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn now(&self) -> Timestamp {
        self.origin.elapsed()
    }

    fn input_enabled(&self) -> bool {
        !self.engine.status().is_terminal() && !self.engine.is_bot_turn()
    }

    /// Schedules the bot's reply when it becomes its turn and plays it once the
    /// delay has passed.
    fn drive_bot(&mut self, now: Timestamp) {
        if !self.engine.is_bot_turn() {
            self.bot_deadline = None;
            return;
        }

        match self.bot_deadline {
            None => self.bot_deadline = Some(now + self.bot_delay),
            Some(deadline) if now >= deadline => {
                self.bot_deadline = None;
                match self.engine.bot_reply(now) {
                    Ok(reply) => debug!("Bot replied {:?}", reply),
                    Err(error) => {
                        warn!("Bot could not move: {}", error);
                        self.message = Some(error.to_string());
                    }
                }
            }
            Some(_) => {}
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.shifted(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.cursor = self.cursor.shifted(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.cursor = self.cursor.shifted(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.cursor = self.cursor.shifted(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(digit @ '1'..='9') => {
                let key = digit as u8 - b'0';
                if let Some(position) = Position::from_keypad(key) {
                    self.cursor = position;
                    self.place(position);
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_vanish_time(VANISH_STEP_SECS),
            KeyCode::Char('-') => self.adjust_vanish_time(-VANISH_STEP_SECS),
            KeyCode::Char('m') => {
                let config = self.target_config();
                self.reconfigure(config.with_play_mode(config.play_mode().toggled()));
            }
            KeyCode::Char('d') => {
                let config = self.target_config();
                self.reconfigure(config.with_difficulty(config.difficulty().next()));
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.bot_deadline = None;
                self.message = None;
            }
            _ => {}
        }
    }

    fn place(&mut self, position: Position) {
        if !self.input_enabled() {
            return;
        }

        let now = self.now();
        self.message = match self.engine.play(position, now) {
            Ok(_) => None,
            Err(error) => Some(error.to_string()),
        };
    }

    /// The configuration the next game will use.
    fn target_config(&self) -> EngineConfig {
        self.engine
            .pending_config()
            .copied()
            .unwrap_or(*self.engine.config())
    }

    fn adjust_vanish_time(&mut self, delta: f64) {
        let config = self.target_config();
        let seconds = (config.vanish_time().as_secs_f64() + delta).clamp(
            MIN_VANISH_TIME.as_secs_f64(),
            MAX_VANISH_TIME.as_secs_f64(),
        );
        match config.with_vanish_secs(seconds) {
            Ok(config) => self.reconfigure(config),
            Err(error) => self.message = Some(error.to_string()),
        }
    }

    fn reconfigure(&mut self, config: EngineConfig) {
        self.engine.configure(config);
        self.message = self
            .engine
            .pending_config()
            .map(|_| "mode and difficulty change after reset (r)".to_string());
    }

    fn draw(&mut self, now: Timestamp) -> io::Result<()> {
        let engine = &self.engine;
        let theme = &self.theme;
        let cursor = if self.input_enabled() {
            Some(self.cursor)
        } else {
            None
        };
        let message = self.message.as_deref();

        self.terminal.draw(|frame| {
            Self::render_frame(frame, engine, theme, cursor, message, now);
        })?;
        Ok(())
    }

    fn render_frame(
        frame: &mut ratatui::Frame,
        engine: &Engine,
        theme: &Theme,
        cursor: Option<Position>,
        message: Option<&str>,
        now: Timestamp,
    ) {
        let size = frame.area();

        // Main area plus the help line at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(3)])
            .split(size);

        // Board on the left, info panel on the right
        let board_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(31), Constraint::Min(30)])
            .split(main_chunks[0]);

        let vanishing: Vec<Position> = engine
            .live_moves()
            .map(|placed| placed.position())
            .filter(|&position| engine.is_vanishing_soon(position, now))
            .collect();
        let board_widget = BoardWidget::new(engine.board(), theme)
            .cursor(cursor)
            .vanishing(&vanishing);
        frame.render_widget(board_widget, board_chunks[0]);

        Self::render_info_panel(frame, board_chunks[1], engine, theme, message, now);

        let help = Paragraph::new(HELP)
            .block(Block::default().borders(Borders::ALL).title("Keys"))
            .style(theme.text_style());
        frame.render_widget(help, main_chunks[1]);
    }

    fn render_info_panel(
        frame: &mut ratatui::Frame,
        area: Rect,
        engine: &Engine,
        theme: &Theme,
        message: Option<&str>,
        now: Timestamp,
    ) {
        let config = engine.config();
        let mut lines = vec![
            Line::from(Span::styled(
                status_text(engine.status(), engine.current_player(), config.play_mode()),
                theme.status_style(),
            )),
            Line::from(""),
            Line::from(format!("Mode: {}", config.play_mode())),
            Line::from(format!("Difficulty: {}", config.difficulty())),
            Line::from(format!(
                "Vanish time: {:.0}s",
                config.vanish_time().as_secs_f64()
            )),
        ];

        if let Some(pending) = engine.pending_config() {
            lines.push(Line::from(format!(
                "Next game: {}, {}",
                pending.play_mode(),
                pending.difficulty()
            )));
        }
        lines.push(Line::from(""));

        // Newest first
        lines.push(Line::from("Active timers:"));
        for placed in engine.live_moves().rev() {
            let remaining = engine
                .remaining_time(placed.position(), now)
                .unwrap_or_default();
            lines.push(Line::from(Span::styled(
                format!(
                    "  {} at {}: {:.1}s",
                    placed.player(),
                    placed.position(),
                    remaining.as_secs_f64()
                ),
                theme.timer_style(remaining),
            )));
        }
        lines.push(Line::from(""));

        if config.play_mode() == PlayMode::VsBot {
            let stats = engine.search_stats();
            lines.push(Line::from("Bot Stats:"));
            if let Some(position) = engine.last_bot_move() {
                lines.push(Line::from(format!("  Last move: {}", position)));
            }
            match stats.depth {
                Some(depth) => lines.push(Line::from(format!("  Depth: {}", depth))),
                None => lines.push(Line::from("  Depth: random")),
            }
            if stats.positions_searched > 0 {
                lines.push(Line::from(format!(
                    "  Nodes: {} ({} cutoffs)",
                    format_number(stats.positions_searched as u64),
                    format_number(stats.cutoffs as u64)
                )));
            } else {
                lines.push(Line::from("  Nodes: -"));
            }
            if let Some(score) = stats.last_score {
                lines.push(Line::from(format!("  Score: {}", score)));
            }
            if let Some(duration) = stats.last_search_duration {
                lines.push(Line::from(format!(
                    "  Time: {:.2}ms",
                    duration.as_secs_f64() * 1000.0
                )));
            }
        }

        if let Some(message) = message {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(theme.timer_urgent),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Game Info")
                    .border_style(theme.border_style()),
            )
            .style(theme.text_style());

        frame.render_widget(paragraph, area);
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(
            status_text(GameStatus::InProgress, Player::X, PlayMode::TwoPlayer),
            "X's Turn"
        );
        assert_eq!(
            status_text(GameStatus::InProgress, Player::O, PlayMode::TwoPlayer),
            "O's Turn"
        );
        assert_eq!(
            status_text(GameStatus::InProgress, Player::O, PlayMode::VsBot),
            "Bot's Turn"
        );
        assert_eq!(
            status_text(GameStatus::Won(Player::O), Player::O, PlayMode::VsBot),
            "Player O Wins!"
        );
        assert_eq!(
            status_text(GameStatus::Draw, Player::X, PlayMode::TwoPlayer),
            "It's a Draw!"
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(12_345_678), "12,345,678");
    }
}
