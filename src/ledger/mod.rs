//! The move ledger: every live mark on the board, in placement order, with the
//! time it was placed. The ledger owns the decay rule; a move is removed (and
//! its cell cleared) once its age reaches the vanish time.
//!
//! Time is never read from a clock here. Callers pass `now` as a `Duration`
//! measured from any fixed monotonic origin they choose, which keeps decay
//! deterministic under test.

use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::board::player::Player;
use crate::board::position::Position;
use crate::board::Board;


/// A point in game time, measured from the caller's chosen origin.
pub type Timestamp = Duration;

#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("a live move already occupies {position}")]
    PositionOccupied { position: Position },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedMove {
    player: Player,
    position: Position,
    placed_at: Timestamp,
}

impl PlacedMove {
    pub fn player(&self) -> Player {
        self.player
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }

    /// A `now` earlier than the placement time counts as age zero.
    pub fn age(&self, now: Timestamp) -> Duration {
        now.saturating_sub(self.placed_at)
    }

    pub fn remaining(&self, now: Timestamp, vanish_time: Duration) -> Duration {
        vanish_time.saturating_sub(self.age(now))
    }
}

#[derive(Clone, Debug)]
pub struct MoveLedger {
    moves: Vec<PlacedMove>,
    vanish_time: Duration,
}

impl MoveLedger {
    pub fn new(vanish_time: Duration) -> Self {
        Self {
            moves: Vec::with_capacity(9),
            vanish_time,
        }
    }

    pub fn vanish_time(&self) -> Duration {
        self.vanish_time
    }

    /// Expiry always uses the current value, so a change applies to moves that
    /// are already on the board.
    pub fn set_vanish_time(&mut self, vanish_time: Duration) {
        self.vanish_time = vanish_time;
    }

    pub fn record(
        &mut self,
        player: Player,
        position: Position,
        now: Timestamp,
    ) -> Result<(), LedgerError> {
        if self.find(position).is_some() {
            return Err(LedgerError::PositionOccupied { position });
        }

        self.moves.push(PlacedMove {
            player,
            position,
            placed_at: now,
        });
        Ok(())
    }

    /// Removes every move whose age has reached the vanish time, clears its
    /// cell on `board`, and returns the cleared positions oldest first.
    pub fn expire(&mut self, now: Timestamp, board: &mut Board) -> Vec<Position> {
        let vanish_time = self.vanish_time;
        let (expired, live): (Vec<PlacedMove>, Vec<PlacedMove>) = self
            .moves
            .drain(..)
            .partition(|placed| placed.age(now) >= vanish_time);
        self.moves = live;

        expired
            .into_iter()
            .map(|placed| {
                debug!(
                    "{} at {} vanished after {:?}",
                    placed.player,
                    placed.position,
                    placed.age(now)
                );
                board.clear(placed.position);
                placed.position
            })
            .collect()
    }

    /// Time left before the move at `position` vanishes, or `None` if no live
    /// move occupies it.
    pub fn remaining(&self, position: Position, now: Timestamp) -> Option<Duration> {
        self.find(position)
            .map(|placed| placed.remaining(now, self.vanish_time))
    }

    pub fn find(&self, position: Position) -> Option<&PlacedMove> {
        self.moves.iter().find(|placed| placed.position == position)
    }

    /// Live moves, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PlacedMove> + '_ {
        self.moves.iter()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
