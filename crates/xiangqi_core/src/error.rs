use thiserror::Error;

use crate::moves::Move;
use crate::piece::Color;
use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square {0} already holds a piece")]
    Occupied(Position),
    #[error("more than one {0:?} king in layout")]
    DuplicateKing(Color),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece at {0}")]
    NoPiece(Position),
    #[error("{0} is not a legal move for that piece")]
    IllegalDestination(Move),
    #[error("{0} would leave the king in check")]
    LeavesKingInCheck(Move),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePositionError {
    #[error("expected \"row,col\", got {0:?}")]
    Format(String),
    #[error("position {row},{col} is off the board")]
    OutOfRange { row: u8, col: u8 },
}
