use super::position::SIZE;
use super::{Board, Position};
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..SIZE {
            let line: String = (0..SIZE)
                .map(|col| self.get(Position::new(row, col)).to_char())
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! tictactoe_position {
    ($($cell:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 9 cells
        assert_eq!(cells.len(), 9, "Invalid number of cells. Expected 9, got {}", cells.len());
        for (i, &c) in cells.iter().enumerate() {
            let position = $crate::board::position::Position::from_index(i).unwrap();
            match c {
                'X' => board.put(position, $crate::board::player::Player::X),
                'O' => board.put(position, $crate::board::player::Player::O),
                '.' => (),
                _ => panic!("Invalid character in tic-tac-toe position"),
            }
        }
        board
    }};
}
