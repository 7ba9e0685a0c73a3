pub mod error;
pub mod player;
pub mod position;

mod display;

use std::str::FromStr;

use error::BoardError;
use player::Player;
use position::{Position, ORDERED};


#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Cell {
    Empty,
    Mark(Player),
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Mark(player) => Some(*player),
            Cell::Empty => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Mark(player) => player.to_char(),
            Cell::Empty => '.',
        }
    }
}

// Rows, then columns, then the main diagonal, then the anti-diagonal.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The 3x3 grid. Cells are stored row-major. The board has no notion of
/// turn or time; the engine owns both.
#[derive(Clone, Default, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    pub fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.index()] = cell;
    }

    pub fn put(&mut self, position: Position, player: Player) {
        self.set(position, Cell::Mark(player));
    }

    pub fn clear(&mut self, position: Position) {
        self.set(position, Cell::Empty);
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        !self.get(position).is_empty()
    }

    /// Returns the player holding three in a row, scanning rows, columns, the
    /// main diagonal and the anti-diagonal in that order.
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let first = self.cells[a].player()?;
            if self.cells[b] == Cell::Mark(first) && self.cells[c] == Cell::Mark(first) {
                Some(first)
            } else {
                None
            }
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Snapshot of the empty cells in row-major order.
    pub fn available_positions(&self) -> Vec<Position> {
        ORDERED
            .iter()
            .copied()
            .filter(|&position| !self.is_occupied(position))
            .collect()
    }
}

/// Parses a nine-cell diagram such as `"XX./.O./..."`. `/` and whitespace are
/// ignored; `.` and `-` mark empty cells.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(diagram: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = diagram
            .chars()
            .filter(|&c| !c.is_whitespace() && c != '/')
            .collect();

        if symbols.len() != ORDERED.len() {
            return Err(BoardError::WrongCellCount {
                count: symbols.len(),
            });
        }

        let mut board = Board::new();
        for (&position, &symbol) in ORDERED.iter().zip(symbols.iter()) {
            let cell = match symbol {
                'X' | 'x' => Cell::Mark(Player::X),
                'O' | 'o' => Cell::Mark(Player::O),
                '.' | '-' => Cell::Empty,
                other => return Err(BoardError::InvalidCellCharacter { ch: other }),
            };
            board.set(position, cell);
        }

        Ok(board)
    }
}
