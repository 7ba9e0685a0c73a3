//! Minimax search with alpha-beta pruning over a tic-tac-toe board.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Once `beta <= alpha` at a node, its remaining
//! children cannot change the result and are skipped. O is the maximizing side and X the
//! minimizing side.
//!
//! # Scoring
//!
//! A board O has won scores `O_WINS`, a board X has won scores `X_WINS`. Everything else,
//! including a node reached with no depth left or no empty cell, scores `NEUTRAL`.
//!
//! # Decay
//!
//! The search treats its board as static: marks never vanish during lookahead. The bot plays
//! against the live board one move at a time, so the approximation only affects how far ahead
//! its plans hold.

use log::debug;

use crate::board::player::Player;
use crate::board::position::Position;
use crate::board::Board;


pub const O_WINS: i16 = 10;
pub const X_WINS: i16 = -10;
pub const NEUTRAL: i16 = 0;

/// Static score of a board from O's point of view.
pub fn evaluate(board: &Board) -> i16 {
    match board.winner() {
        Some(Player::O) => O_WINS,
        Some(Player::X) => X_WINS,
        None => NEUTRAL,
    }
}

#[derive(Default)]
pub struct AlphaBetaSearcher {
    searched_position_count: usize,
    termination_count: usize,
}

impl AlphaBetaSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    /// Number of nodes whose remaining children were pruned.
    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.termination_count = 0;
    }

    /// Scores `board` with `depth` plies of lookahead. `board` is used as a
    /// working copy: every mark placed during the search is removed again
    /// before this returns.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        alpha: i16,
        beta: i16,
    ) -> i16 {
        self.searched_position_count += 1;

        let score = evaluate(board);
        if score != NEUTRAL {
            return score;
        }

        if depth == 0 {
            return NEUTRAL;
        }

        let candidates = board.available_positions();
        if candidates.is_empty() {
            return NEUTRAL;
        }

        if maximizing {
            self.alpha_beta_max(board, &candidates, depth, alpha, beta)
        } else {
            self.alpha_beta_min(board, &candidates, depth, alpha, beta)
        }
    }

    fn alpha_beta_max(
        &mut self,
        board: &mut Board,
        candidates: &[Position],
        depth: u8,
        mut alpha: i16,
        beta: i16,
    ) -> i16 {
        let mut best = i16::MIN;

        for &position in candidates {
            board.put(position, Player::O);
            let score = self.search(board, depth - 1, false, alpha, beta);
            board.clear(position);

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                self.termination_count += 1;
                debug!("Cutoff (max) at {} depth {}: {}", position, depth, score);
                break;
            }
        }

        best
    }

    fn alpha_beta_min(
        &mut self,
        board: &mut Board,
        candidates: &[Position],
        depth: u8,
        alpha: i16,
        mut beta: i16,
    ) -> i16 {
        let mut best = i16::MAX;

        for &position in candidates {
            board.put(position, Player::X);
            let score = self.search(board, depth - 1, true, alpha, beta);
            board.clear(position);

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                self.termination_count += 1;
                debug!("Cutoff (min) at {} depth {}: {}", position, depth, score);
                break;
            }
        }

        best
    }
}
