use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

use crate::board::player::Player;
use crate::board::position::Position;
use crate::board::Board;
use crate::bot::{Bot, BotError, SearchStats, BOT_PLAYER};
use crate::config::{EngineConfig, PlayMode};
use crate::ledger::{LedgerError, MoveLedger, PlacedMove, Timestamp};

/// Marks with this much time left or less are about to vanish.
pub const VANISH_WARNING: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,
    #[error("{position} is already occupied")]
    CellOccupied { position: Position },
    #[error("no available moves")]
    NoMovesAvailable,
}

impl From<BotError> for GameError {
    fn from(error: BotError) -> Self {
        match error {
            BotError::NoMovesAvailable => GameError::NoMovesAvailable,
        }
    }
}

impl From<LedgerError> for GameError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::PositionOccupied { position } => GameError::CellOccupied { position },
        }
    }
}

/// Everything a renderer needs, copied out of the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusSnapshot {
    pub board: Board,
    pub status: GameStatus,
    pub current_player: Player,
}

/// Game state for a single game; replaced wholesale on reset.
#[derive(Clone)]
struct GameState {
    board: Board,
    ledger: MoveLedger,
    current_player: Player,
    status: GameStatus,
    moves_played: usize,
    last_bot_move: Option<Position>,
}

impl GameState {
    fn new(vanish_time: Duration) -> Self {
        Self {
            board: Board::new(),
            ledger: MoveLedger::new(vanish_time),
            current_player: Player::X,
            status: GameStatus::InProgress,
            moves_played: 0,
            last_bot_move: None,
        }
    }
}

/// Owns one game of vanishing tic-tac-toe: the board, the ledger of live
/// marks, whose turn it is and the bot opponent.
///
/// Every operation that can observe decay takes the current time from the
/// caller. Expired marks are removed lazily at the start of each call.
pub struct Engine {
    state: GameState,
    config: EngineConfig,
    pending_config: Option<EngineConfig>,
    bot: Bot,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_bot(config, Bot::new())
    }

    pub fn with_bot(config: EngineConfig, bot: Bot) -> Self {
        Self {
            state: GameState::new(config.vanish_time()),
            config,
            pending_config: None,
            bot,
        }
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Configuration that will take over on the next reset, if any.
    pub fn pending_config(&self) -> Option<&EngineConfig> {
        self.pending_config.as_ref()
    }

    pub fn current_status(&self) -> StatusSnapshot {
        StatusSnapshot {
            board: self.state.board.clone(),
            status: self.state.status,
            current_player: self.state.current_player,
        }
    }

    /// Live marks, oldest first.
    pub fn live_moves(&self) -> impl DoubleEndedIterator<Item = &PlacedMove> + '_ {
        self.state.ledger.iter()
    }

    pub fn last_bot_move(&self) -> Option<Position> {
        self.state.last_bot_move
    }

    pub fn search_stats(&self) -> &SearchStats {
        self.bot.search_stats()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.config.play_mode() == PlayMode::VsBot
            && self.state.status == GameStatus::InProgress
            && self.state.current_player == BOT_PLAYER
    }

    pub fn remaining_time(&self, position: Position, now: Timestamp) -> Option<Duration> {
        self.state.ledger.remaining(position, now)
    }

    pub fn is_vanishing_soon(&self, position: Position, now: Timestamp) -> bool {
        self.remaining_time(position, now)
            .map_or(false, |remaining| remaining <= VANISH_WARNING)
    }

    /// Plays `position` for the current player and, in bot mode, lets the bot
    /// answer at the same instant. Returns the status after the last committed
    /// move.
    pub fn apply_move(
        &mut self,
        position: Position,
        now: Timestamp,
    ) -> Result<GameStatus, GameError> {
        let mut next_move = Some(position);
        while let Some(position) = next_move.take() {
            self.play(position, now)?;
            if self.is_bot_turn() {
                next_move = Some(self.choose_bot_move(now)?);
            }
        }
        Ok(self.state.status)
    }

    /// Commits a single move for the current player without any bot reply.
    pub fn play(&mut self, position: Position, now: Timestamp) -> Result<GameStatus, GameError> {
        if self.state.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        self.expire(now);

        if self.state.board.is_occupied(position) {
            return Err(GameError::CellOccupied { position });
        }

        let player = self.state.current_player;
        self.state.ledger.record(player, position, now)?;
        self.state.board.put(position, player);
        self.state.moves_played += 1;
        debug!("{} played {} at {:?}", player, position, now);

        self.expire(now);
        self.conclude_turn();
        self.check_invariants();

        Ok(self.state.status)
    }

    /// Lets the bot move if it is the bot's turn. Returns the cell it played.
    pub fn bot_reply(&mut self, now: Timestamp) -> Result<Option<Position>, GameError> {
        if !self.is_bot_turn() {
            return Ok(None);
        }

        let position = self.choose_bot_move(now)?;
        self.play(position, now)?;
        Ok(Some(position))
    }

    /// Applies decay without placing anything. Returns the cleared cells.
    pub fn tick(&mut self, now: Timestamp) -> Vec<Position> {
        if self.state.status.is_terminal() {
            return Vec::new();
        }
        self.expire(now)
    }

    pub fn reset(&mut self) {
        if let Some(pending) = self.pending_config.take() {
            info!("Applying pending configuration {:?}", pending);
            self.config = pending;
        }
        self.state = GameState::new(self.config.vanish_time());
        debug!("Game reset");
    }

    /// The vanish time changes immediately. Play mode and difficulty change
    /// immediately only while the current game has no moves; otherwise they
    /// wait for the next reset.
    pub fn configure(&mut self, config: EngineConfig) {
        self.state.ledger.set_vanish_time(config.vanish_time());

        if self.state.moves_played == 0 {
            self.config = config;
            self.pending_config = None;
        } else {
            self.config = self.config.with_vanish_time_of(&config);
            self.pending_config = Some(config);
        }
    }

    fn choose_bot_move(&mut self, now: Timestamp) -> Result<Position, GameError> {
        self.expire(now);
        let position = self
            .bot
            .choose_move(&self.state.board, self.config.difficulty())?;
        self.state.last_bot_move = Some(position);
        Ok(position)
    }

    fn expire(&mut self, now: Timestamp) -> Vec<Position> {
        let expired = self.state.ledger.expire(now, &mut self.state.board);
        if !expired.is_empty() {
            debug!("Expired {:?} at {:?}", expired, now);
        }
        expired
    }

    fn conclude_turn(&mut self) {
        let board = &self.state.board;
        if let Some(winner) = board.winner() {
            info!("{} wins", winner);
            self.state.status = GameStatus::Won(winner);
        } else if board.is_full() {
            info!("Draw");
            self.state.status = GameStatus::Draw;
        } else {
            self.state.current_player = self.state.current_player.opposite();
        }
    }

    fn check_invariants(&self) {
        debug_assert_eq!(
            self.state.board.occupied_count(),
            self.state.ledger.len(),
            "every live move must occupy exactly one cell"
        );
    }
}
