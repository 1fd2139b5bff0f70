//! Xiangqi rules and automated opponent.
//!
//! `rules` holds the board model and the rules (legal destinations, check,
//! checkmate); `engine` picks moves for the computer side. A game-session
//! owner drives both with board snapshots:
//!
//! ```
//! use xiangqi::rules::{is_checkmate, Board, Color};
//! use xiangqi::engine::{SearchConfig, Selection, XiangqiAI};
//!
//! let board = Board::new();
//! let config = SearchConfig::default().with_selection(Selection::Best);
//! let mut ai = XiangqiAI::new(config).unwrap();
//! let reply = ai.choose_move(&board).unwrap();
//! let next = board.with_move(reply);
//! assert!(!is_checkmate(&next, Color::Red));
//! ```
pub use xiangqi_core as rules;
pub use xiangqi_engine as engine;

pub use xiangqi_core::{Board, Color, Move, Piece, PieceType, Position};
pub use xiangqi_engine::XiangqiAI;
