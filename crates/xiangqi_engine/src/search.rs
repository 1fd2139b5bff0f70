// Depth-limited minimax with alpha-beta pruning over board snapshots
use std::cmp::Reverse;

use xiangqi_core::{generate_moves, is_checkmate, Board, Color, Move};

use crate::config::SearchConfig;
use crate::evaluation::{evaluate_board, evaluate_move};

// Score of a mated side. Dwarfs any material count so a found mate is never
// traded for material.
pub const MATE_SCORE: i32 = 100_000;

/// Search score of playing `mv` at the root: the opponent replies next, then
/// the engine, for `config.depth` plies in total.
pub fn search_candidate(board: &Board, mv: Move, config: &SearchConfig) -> i32 {
    let next = board.with_move(mv);
    minimax(&next, config.depth, false, -MATE_SCORE, MATE_SCORE, config)
}

/// Minimax from the engine's point of view. `maximizing` is true when the
/// engine's color is to move.
pub fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    config: &SearchConfig,
) -> i32 {
    let ai = config.ai_color;

    // Leaves use the plain board evaluation
    if depth == 0 {
        return evaluate_board(board, ai);
    }

    // A mate anywhere in the tree ends that line at once
    if is_checkmate(board, ai) {
        return -MATE_SCORE;
    }
    if is_checkmate(board, ai.opponent()) {
        return MATE_SCORE;
    }

    let to_move = if maximizing { ai } else { ai.opponent() };
    let moves = ordered_moves(board, to_move, config.node_width);
    if moves.is_empty() {
        return evaluate_board(board, ai);
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let score = minimax(&board.with_move(mv), depth - 1, !maximizing, alpha, beta, config);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }

        // Alpha-beta cutoff
        if beta <= alpha {
            break;
        }
    }
    best
}

/// The `width` most promising moves for `color`, best first by the static
/// move evaluator. Equal scores keep board-scan order.
pub fn ordered_moves(board: &Board, color: Color, width: usize) -> Vec<Move> {
    let mut moves = generate_moves(board, color);
    moves.sort_by_cached_key(|mv| Reverse(evaluate_move(board, *mv)));
    moves.truncate(width);
    moves
}
