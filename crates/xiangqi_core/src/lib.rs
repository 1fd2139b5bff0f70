// Xiangqi rules: board model, move generation, check and checkmate
pub mod board;
pub mod error;
pub mod moves;
pub mod piece;
pub mod position;
pub mod rules;

// Re-export main types for convenience
pub use board::Board;
pub use error::{BoardError, MoveError, ParsePositionError};
pub use moves::{generate_moves, legal_destinations, Move};
pub use piece::{Color, Piece, PieceType};
pub use position::Position;
pub use rules::{
    analyze, apply_move, attackers, is_checkmate, is_in_check, is_stalemate, legal_moves,
    Analysis, MoveOutcome,
};
