//! The bot opponent. It always plays O, the maximizing side of the search.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;
use thiserror::Error;

use crate::alpha_beta_searcher::AlphaBetaSearcher;
use crate::board::player::Player;
use crate::board::position::Position;
use crate::board::Board;

#[cfg(test)]
mod tests;

pub const BOT_PLAYER: Player = Player::O;

#[derive(Error, Debug, PartialEq)]
pub enum BotError {
    #[error("no available moves")]
    NoMovesAvailable,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lookahead applied after the bot's candidate move. `None` means the bot
    /// picks at random.
    pub fn search_depth(&self) -> Option<u8> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(2),
            Difficulty::Hard => Some(4),
        }
    }

    /// Cycles easy -> medium -> hard -> easy.
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Difficulty {
    type Err = ParseError;
    fn from_str(difficulty: &str) -> Result<Self, Self::Err> {
        match difficulty.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err("invalid difficulty; options are: easy, medium, hard"),
        }
    }
}

/// Statistics from the bot's most recent move choice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub depth: Option<u8>,
    pub last_score: Option<i16>,
    pub last_search_duration: Option<Duration>,
}

pub struct Bot {
    rng: StdRng,
    searcher: AlphaBetaSearcher,
    stats: SearchStats,
}

impl Default for Bot {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Bot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bot whose random choices repeat for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            searcher: AlphaBetaSearcher::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn search_stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn choose_move(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
    ) -> Result<Position, BotError> {
        let candidates = board.available_positions();
        if candidates.is_empty() {
            return Err(BotError::NoMovesAvailable);
        }

        let chosen = match difficulty.search_depth() {
            None => self.choose_random(&candidates)?,
            Some(depth) => self.choose_searched(board, &candidates, depth)?,
        };

        info!("Bot ({}) chose {}", difficulty, chosen);
        Ok(chosen)
    }

    fn choose_random(&mut self, candidates: &[Position]) -> Result<Position, BotError> {
        self.stats = SearchStats::default();
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(BotError::NoMovesAvailable)
    }

    /// Scores every candidate with a full window and keeps the first one with
    /// the highest score.
    fn choose_searched(
        &mut self,
        board: &Board,
        candidates: &[Position],
        depth: u8,
    ) -> Result<Position, BotError> {
        let started = Instant::now();
        self.searcher.reset_stats();

        let mut working = board.clone();
        let mut best: Option<(Position, i16)> = None;
        for &position in candidates {
            working.put(position, BOT_PLAYER);
            let score = self
                .searcher
                .search(&mut working, depth, false, i16::MIN, i16::MAX);
            working.clear(position);
            debug!("Candidate {} scored {}", position, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((position, score));
            }
        }

        let (position, score) = best.ok_or(BotError::NoMovesAvailable)?;
        self.stats = SearchStats {
            positions_searched: self.searcher.searched_position_count(),
            cutoffs: self.searcher.termination_count(),
            depth: Some(depth),
            last_score: Some(score),
            last_search_duration: Some(started.elapsed()),
        };
        debug!(
            "Searched {} positions ({} cutoffs) in {:?}",
            self.stats.positions_searched, self.stats.cutoffs, self.stats.last_search_duration
        );

        Ok(position)
    }
}
