use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("invalid position {input:?}; expected `row,col` with values 0-2")]
    InvalidPosition { input: String },
    #[error("invalid cell character {ch:?}; expected X, O, `.` or `-`")]
    InvalidCellCharacter { ch: char },
    #[error("a board diagram needs exactly 9 cells, got {count}")]
    WrongCellCount { count: usize },
}
