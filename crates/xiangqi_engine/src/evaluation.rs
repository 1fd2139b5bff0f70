use xiangqi_core::{is_checkmate, is_in_check, Board, Color, Move, Piece, PieceType, Position};

// Material values. The king dwarfs everything so that losing it outweighs
// any amount of material.
const KING_VALUE: i32 = 10000;
const ROOK_VALUE: i32 = 90;
const CANNON_VALUE: i32 = 45;
const HORSE_VALUE: i32 = 40;
const ADVISOR_VALUE: i32 = 20;
const ELEPHANT_VALUE: i32 = 20;
const PAWN_VALUE: i32 = 10;

// Move evaluator weights
const CAPTURE_MULTIPLIER: i32 = 15;
const KING_CAPTURE_BONUS: i32 = 1_000_000;
const SELF_CHECK_PENALTY: i32 = 2000;
const CHECK_BONUS: i32 = 1000;
const MATE_BONUS: i32 = 50_000;
const ADVANCE_MULTIPLIER: i32 = 2;
const SUPPORT_BONUS: i32 = 5;
const SUPPORT_DISTANCE: u8 = 3;
const KING_GUARD_BONUS: i32 = 10;
const CENTER_CONTROL_BONUS: i32 = 10;
const RIVER_PAWN_BONUS: i32 = 15;

pub fn piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::King => KING_VALUE,
        PieceType::Advisor => ADVISOR_VALUE,
        PieceType::Elephant => ELEPHANT_VALUE,
        PieceType::Horse => HORSE_VALUE,
        PieceType::Rook => ROOK_VALUE,
        PieceType::Cannon => CANNON_VALUE,
        PieceType::Pawn => PAWN_VALUE,
    }
}

/// Positional worth of a square: two points per row advanced toward the
/// enemy, three more on the central files.
pub fn position_value(pos: Position, color: Color) -> i32 {
    let advanced = match color {
        Color::Red => 9 - pos.row as i32,
        Color::Black => pos.row as i32,
    };
    let center = if pos.col.abs_diff(4) <= 1 { 3 } else { 0 };
    advanced * 2 + center
}

/// Material plus position for `perspective` minus the same for its opponent.
pub fn evaluate_board(board: &Board, perspective: Color) -> i32 {
    board
        .pieces()
        .map(|(pos, piece)| {
            let value = piece_value(piece.piece_type) + position_value(pos, piece.color);
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

/// Heuristic score of `mv` for the side making it. Used both to rank the
/// root candidates and to order children inside the search.
pub fn evaluate_move(board: &Board, mv: Move) -> i32 {
    let Some(&piece) = board.get_piece(mv.from) else {
        return 0;
    };
    let opponent = piece.color.opponent();
    let mut score = 0;

    if let Some(victim) = board.get_piece(mv.to) {
        score += (piece_value(victim.piece_type) - piece_value(piece.piece_type)) * CAPTURE_MULTIPLIER;
        if victim.is_king() {
            score += KING_CAPTURE_BONUS;
        }
    }

    let next = board.with_move(mv);
    if is_in_check(&next, piece.color) {
        score -= SELF_CHECK_PENALTY;
    }
    if is_in_check(&next, opponent) {
        score += CHECK_BONUS;
        if is_checkmate(&next, opponent) {
            score += MATE_BONUS;
        }
    }

    score += (position_value(mv.to, piece.color) - position_value(mv.from, piece.color))
        * ADVANCE_MULTIPLIER;

    score += match piece.piece_type {
        PieceType::Rook | PieceType::Horse | PieceType::Cannon => {
            supporting_allies(&next, mv.to, piece) * SUPPORT_BONUS
        }
        PieceType::King => guarding_neighbours(&next, mv.to, piece.color) * KING_GUARD_BONUS,
        _ => 0,
    };

    if (4..=5).contains(&mv.to.row) && (3..=5).contains(&mv.to.col) {
        score += CENTER_CONTROL_BONUS;
    }

    if piece.piece_type == PieceType::Pawn && mv.to.has_crossed_river(piece.color) {
        score += RIVER_PAWN_BONUS;
    }

    score
}

// Non-king allies within a short Manhattan distance of the landing square.
fn supporting_allies(board: &Board, at: Position, piece: Piece) -> i32 {
    board
        .pieces_of(piece.color)
        .filter(|(pos, ally)| {
            *pos != at
                && !ally.is_king()
                && pos.row.abs_diff(at.row) + pos.col.abs_diff(at.col) <= SUPPORT_DISTANCE
        })
        .count() as i32
}

fn guarding_neighbours(board: &Board, king: Position, color: Color) -> i32 {
    [(-1, 0), (1, 0), (0, -1), (0, 1)]
        .into_iter()
        .filter_map(|(dr, dc)| king.offset(dr, dc))
        .filter(|sq| board.get_piece(*sq).is_some_and(|p| p.color == color))
        .count() as i32
}
