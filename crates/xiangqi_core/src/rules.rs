//! Check detection, checkmate decision and validated move application.
//!
//! Everything here reads a board and simulates candidate moves on copies;
//! the caller's snapshot is never modified.

use log::{debug, trace};

use crate::error::MoveError;
use crate::moves::{generate_moves, legal_destinations, Move};
use crate::piece::{Color, Piece, PieceType};
use crate::{Board, Position};

/// True if any opposing piece can move onto `color`'s king. A board without
/// that king counts as in check: the position is already lost.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_pos) = board.find_king(color) else {
        return true;
    };
    is_square_attacked(board, king_pos, color.opponent())
}

/// True if a piece of `by` has `target` among its destinations.
pub fn is_square_attacked(board: &Board, target: Position, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(pos, piece)| legal_destinations(board, pos, piece).contains(&target))
}

/// Opposing pieces currently attacking `color`'s king.
pub fn attackers(board: &Board, color: Color) -> Vec<(Position, Piece)> {
    match board.find_king(color) {
        Some(king_pos) => attackers_of(board, king_pos, color.opponent()),
        None => Vec::new(),
    }
}

fn attackers_of(board: &Board, target: Position, by: Color) -> Vec<(Position, Piece)> {
    board
        .pieces_of(by)
        .filter(|&(pos, piece)| legal_destinations(board, pos, piece).contains(&target))
        .collect()
}

/// True if `color` is in check and no move gets it out.
///
/// Escapes are tried by category: moving the king, then for a single
/// attacker capturing it or breaking its line, leg or screen. With two or
/// more attackers every friendly move is simulated.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }
    let Some(king_pos) = board.find_king(color) else {
        return true;
    };

    if board
        .get_valid_moves(king_pos)
        .into_iter()
        .any(|mv| clears_check(board, mv, color))
    {
        trace!("{color:?} escapes check by moving the king");
        return false;
    }

    let checkers = attackers_of(board, king_pos, color.opponent());
    let (attacker_pos, attacker) = match checkers.as_slice() {
        [] => return false,
        [single] => *single,
        _ => {
            let escaped = generate_moves(board, color)
                .into_iter()
                .any(|mv| clears_check(board, mv, color));
            trace!(
                "{color:?} under {} attackers, escape found: {escaped}",
                checkers.len()
            );
            return !escaped;
        }
    };

    if any_move_onto(board, color, attacker_pos) {
        trace!("{color:?} escapes check by capturing on {attacker_pos}");
        return false;
    }

    for square in blocking_squares(board, attacker_pos, attacker, king_pos) {
        if any_move_onto(board, color, square) {
            trace!("{color:?} escapes check by interposing on {square}");
            return false;
        }
    }

    // A friendly cannon screen can step off the line.
    if attacker.piece_type == PieceType::Cannon {
        if let Some(screen) = cannon_screen(board, attacker_pos, king_pos) {
            if board.get_piece(screen).is_some_and(|p| p.color == color)
                && board
                    .get_valid_moves(screen)
                    .into_iter()
                    .any(|mv| clears_check(board, mv, color))
            {
                trace!("{color:?} escapes check by moving the screen on {screen}");
                return false;
            }
        }
    }

    true
}

/// Not in check, yet every move would leave the king attacked.
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_in_check(board, color) && legal_moves(board, color).is_empty()
}

/// Moves for `color` that do not leave its own king attacked.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    generate_moves(board, color)
        .into_iter()
        .filter(|&mv| clears_check(board, mv, color))
        .collect()
}

fn clears_check(board: &Board, mv: Move, color: Color) -> bool {
    !is_in_check(&board.with_move(mv), color)
}

// Does some piece of `color` reach `target` in a way that ends the check?
fn any_move_onto(board: &Board, color: Color, target: Position) -> bool {
    board.pieces_of(color).any(|(from, piece)| {
        legal_destinations(board, from, piece).contains(&target)
            && clears_check(board, Move::new(from, target), color)
    })
}

// Empty squares whose occupation would stop `attacker` from reaching the king.
fn blocking_squares(
    board: &Board,
    attacker_pos: Position,
    attacker: Piece,
    king_pos: Position,
) -> Vec<Position> {
    match attacker.piece_type {
        PieceType::Rook | PieceType::Pawn => attacker_pos.squares_between(king_pos),
        PieceType::Cannon => match cannon_screen(board, attacker_pos, king_pos) {
            // Past the screen the line must stay empty; before it a second
            // piece turns the screen into two.
            Some(screen) => {
                let mut squares = screen.squares_between(king_pos);
                squares.extend(attacker_pos.squares_between(screen));
                squares
            }
            None => Vec::new(),
        },
        PieceType::Horse => horse_leg(attacker_pos, king_pos).into_iter().collect(),
        PieceType::Elephant => midpoint(attacker_pos, king_pos).into_iter().collect(),
        PieceType::King | PieceType::Advisor => Vec::new(),
    }
}

/// The single piece between a cannon and its target, if there is exactly one.
pub fn cannon_screen(board: &Board, cannon: Position, target: Position) -> Option<Position> {
    let mut occupied = cannon
        .squares_between(target)
        .into_iter()
        .filter(|sq| board.is_occupied(*sq));
    match (occupied.next(), occupied.next()) {
        (Some(screen), None) => Some(screen),
        _ => None,
    }
}

// The leg is the square next to the horse along the long axis of its jump.
fn horse_leg(from: Position, to: Position) -> Option<Position> {
    let dr = to.row as i8 - from.row as i8;
    let dc = to.col as i8 - from.col as i8;
    match (dr.abs(), dc.abs()) {
        (2, 1) => from.offset(dr.signum(), 0),
        (1, 2) => from.offset(0, dc.signum()),
        _ => None,
    }
}

fn midpoint(from: Position, to: Position) -> Option<Position> {
    let dr = to.row as i8 - from.row as i8;
    let dc = to.col as i8 - from.col as i8;
    if dr % 2 != 0 || dc % 2 != 0 {
        return None;
    }
    from.offset(dr / 2, dc / 2)
}

/// Result of a validated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub captured: Option<Piece>,
    pub gives_check: bool,
    pub is_checkmate: bool,
}

/// Applies `mv` for whoever owns the piece on `mv.from`, refusing moves the
/// piece cannot make and moves that leave its own king attacked.
pub fn apply_move(board: &Board, mv: Move) -> Result<MoveOutcome, MoveError> {
    let piece = *board.get_piece(mv.from).ok_or(MoveError::NoPiece(mv.from))?;

    if !legal_destinations(board, mv.from, piece).contains(&mv.to) {
        return Err(MoveError::IllegalDestination(mv));
    }

    let next = board.with_move(mv);
    if is_in_check(&next, piece.color) {
        return Err(MoveError::LeavesKingInCheck(mv));
    }

    let opponent = piece.color.opponent();
    let gives_check = is_in_check(&next, opponent);
    Ok(MoveOutcome {
        board: next,
        captured: board.get_piece(mv.to).copied(),
        gives_check,
        is_checkmate: gives_check && is_checkmate(&next, opponent),
    })
}

/// Diagnostic summary of a position from `color`'s point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub king: Option<Position>,
    pub opponent_king: Option<Position>,
    pub in_check: bool,
    pub opponent_in_check: bool,
    pub attackers: Vec<(Position, Piece)>,
    pub checkmate: bool,
    pub legal_move_count: usize,
}

pub fn analyze(board: &Board, color: Color) -> Analysis {
    let opponent = color.opponent();
    let analysis = Analysis {
        king: board.find_king(color),
        opponent_king: board.find_king(opponent),
        in_check: is_in_check(board, color),
        opponent_in_check: is_in_check(board, opponent),
        attackers: attackers(board, color),
        checkmate: is_checkmate(board, color),
        legal_move_count: legal_moves(board, color).len(),
    };

    debug!(
        "{color:?}: king {:?}, in check {}, attackers {:?}, checkmate {}, {} legal moves\n{board}",
        analysis.king,
        analysis.in_check,
        analysis.attackers.iter().map(|(p, _)| *p).collect::<Vec<_>>(),
        analysis.checkmate,
        analysis.legal_move_count,
    );
    analysis
}
