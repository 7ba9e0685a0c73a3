use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::BoardError;

static POSITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\s*([0-2])\s*,?\s*([0-2])\s*\)?$").expect("POSITION_RE regex should be valid")
});

pub const SIZE: u8 = 3;

/// A cell coordinate on the 3x3 board. Rows and columns are zero-based and
/// count from the top-left corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

/// Every position in row-major order.
pub const ORDERED: [Position; 9] = [
    Position::new(0, 0),
    Position::new(0, 1),
    Position::new(0, 2),
    Position::new(1, 0),
    Position::new(1, 1),
    Position::new(1, 2),
    Position::new(2, 0),
    Position::new(2, 1),
    Position::new(2, 2),
];

impl Position {
    /// Panics if `row` or `col` is outside `0..3`.
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < SIZE && col < SIZE, "position out of bounds");
        Self { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Row-major index in `0..9`.
    pub fn index(&self) -> usize {
        usize::from(self.row * SIZE + self.col)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        ORDERED.get(index).copied()
    }

    /// Keypad numbering used by the terminal front end: 1 is the top-left
    /// cell, 9 the bottom-right.
    pub fn from_keypad(key: u8) -> Option<Self> {
        match key {
            1..=9 => Self::from_index(usize::from(key - 1)),
            _ => None,
        }
    }

    /// Moves by the given offset, staying put at the board edges.
    pub fn shifted(&self, d_row: i8, d_col: i8) -> Self {
        let clamp = |value: u8, delta: i8| -> u8 {
            let moved = i16::from(value) + i16::from(delta);
            moved.max(0).min(i16::from(SIZE - 1)) as u8
        };
        Self {
            row: clamp(self.row, d_row),
            col: clamp(self.col, d_col),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = BoardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let caps = POSITION_RE
            .captures(input.trim())
            .ok_or_else(|| BoardError::InvalidPosition {
                input: input.to_string(),
            })?;

        // The regex only admits the digits 0-2.
        let row = caps[1].parse::<u8>().map_err(|_| BoardError::InvalidPosition {
            input: input.to_string(),
        })?;
        let col = caps[2].parse::<u8>().map_err(|_| BoardError::InvalidPosition {
            input: input.to_string(),
        })?;

        Ok(Self::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_is_row_major() {
        for (i, position) in ORDERED.iter().enumerate() {
            assert_eq!(position.index(), i);
        }
    }

    #[test]
    fn test_keypad_mapping() {
        assert_eq!(Position::from_keypad(1), Some(Position::new(0, 0)));
        assert_eq!(Position::from_keypad(5), Some(Position::new(1, 1)));
        assert_eq!(Position::from_keypad(9), Some(Position::new(2, 2)));
        assert_eq!(Position::from_keypad(0), None);
        assert_eq!(Position::from_keypad(10), None);
    }

    #[test]
    fn test_shifted_clamps_at_edges() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.shifted(-1, -1), corner);
        assert_eq!(corner.shifted(1, 0), Position::new(1, 0));
        assert_eq!(Position::new(2, 2).shifted(1, 1), Position::new(2, 2));
    }

    #[test]
    fn test_parse() {
        assert_eq!("1,2".parse::<Position>().unwrap(), Position::new(1, 2));
        assert_eq!("(0, 1)".parse::<Position>().unwrap(), Position::new(0, 1));
        assert_eq!("21".parse::<Position>().unwrap(), Position::new(2, 1));
        assert!("3,0".parse::<Position>().is_err());
        assert!("a1".parse::<Position>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(1, 2).to_string(), "(1,2)");
    }
}
