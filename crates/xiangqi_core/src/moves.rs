use std::fmt;

use crate::{
    piece::{Color, Piece, PieceType},
    Board, Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// True if the piece on `from` may move to `to` under its movement rules.
    /// Whether the mover's own king is left attacked is not considered.
    pub fn is_valid(&self, board: &Board) -> bool {
        match board.get_piece(self.from) {
            Some(&piece) => legal_destinations(board, self.from, piece).contains(&self.to),
            None => false,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

// (row, col) jump paired with the leg square that blocks it.
const HORSE_JUMPS: [((i8, i8), (i8, i8)); 8] = [
    ((-2, -1), (-1, 0)),
    ((-2, 1), (-1, 0)),
    ((-1, -2), (0, -1)),
    ((-1, 2), (0, 1)),
    ((1, -2), (0, -1)),
    ((1, 2), (0, 1)),
    ((2, -1), (1, 0)),
    ((2, 1), (1, 0)),
];

/// Every square the piece on `pos` may move to, captures included.
///
/// `piece` must be the board's occupant of `pos`. Destinations never hold a
/// piece of the mover's color; the mover's own king safety is not checked.
pub fn legal_destinations(board: &Board, pos: Position, piece: Piece) -> Vec<Position> {
    debug_assert_eq!(
        board.get_piece(pos),
        Some(&piece),
        "piece argument does not match the board at {pos}"
    );

    match piece.piece_type {
        PieceType::King => palace_steps(board, pos, piece.color, &ORTHOGONAL),
        PieceType::Advisor => palace_steps(board, pos, piece.color, &DIAGONAL),
        PieceType::Elephant => elephant_moves(board, pos, piece.color),
        PieceType::Horse => horse_moves(board, pos, piece.color),
        PieceType::Rook => rook_moves(board, pos, piece.color),
        PieceType::Cannon => cannon_moves(board, pos, piece.color),
        PieceType::Pawn => pawn_moves(board, pos, piece.color),
    }
}

/// All (from, to) pairs for `color`, in board-scan order.
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (from, piece) in board.pieces_of(color) {
        moves.extend(
            legal_destinations(board, from, piece)
                .into_iter()
                .map(|to| Move::new(from, to)),
        );
    }
    moves
}

// Empty, or held by the other side.
fn can_land(board: &Board, target: Position, color: Color) -> bool {
    board.get_piece(target).map_or(true, |p| p.color != color)
}

fn palace_steps(board: &Board, pos: Position, color: Color, dirs: &[(i8, i8)]) -> Vec<Position> {
    dirs.iter()
        .filter_map(|&(dr, dc)| pos.offset(dr, dc))
        .filter(|to| to.is_in_palace(color) && can_land(board, *to, color))
        .collect()
}

fn elephant_moves(board: &Board, pos: Position, color: Color) -> Vec<Position> {
    let mut moves = Vec::new();
    for (dr, dc) in DIAGONAL {
        let (Some(eye), Some(to)) = (pos.offset(dr, dc), pos.offset(dr * 2, dc * 2)) else {
            continue;
        };
        if board.is_occupied(eye) || !to.is_on_own_side(color) {
            continue;
        }
        if can_land(board, to, color) {
            moves.push(to);
        }
    }
    moves
}

fn horse_moves(board: &Board, pos: Position, color: Color) -> Vec<Position> {
    let mut moves = Vec::new();
    for ((dr, dc), (leg_r, leg_c)) in HORSE_JUMPS {
        let (Some(leg), Some(to)) = (pos.offset(leg_r, leg_c), pos.offset(dr, dc)) else {
            continue;
        };
        if !board.is_occupied(leg) && can_land(board, to, color) {
            moves.push(to);
        }
    }
    moves
}

fn rook_moves(board: &Board, pos: Position, color: Color) -> Vec<Position> {
    let mut moves = Vec::new();
    for (dr, dc) in ORTHOGONAL {
        let mut current = pos.offset(dr, dc);
        while let Some(to) = current {
            match board.get_piece(to) {
                None => moves.push(to),
                Some(other) => {
                    if other.color != color {
                        moves.push(to);
                    }
                    break;
                }
            }
            current = to.offset(dr, dc);
        }
    }
    moves
}

fn cannon_moves(board: &Board, pos: Position, color: Color) -> Vec<Position> {
    let mut moves = Vec::new();
    for (dr, dc) in ORTHOGONAL {
        let mut screened = false;
        let mut current = pos.offset(dr, dc);
        while let Some(to) = current {
            match (board.get_piece(to), screened) {
                (None, false) => moves.push(to),
                (None, true) => {}
                (Some(_), false) => screened = true,
                (Some(other), true) => {
                    if other.color != color {
                        moves.push(to);
                    }
                    break;
                }
            }
            current = to.offset(dr, dc);
        }
    }
    moves
}

fn pawn_moves(board: &Board, pos: Position, color: Color) -> Vec<Position> {
    let mut steps = vec![(color.forward(), 0)];
    if pos.has_crossed_river(color) {
        steps.extend([(0, -1), (0, 1)]);
    }
    steps
        .into_iter()
        .filter_map(|(dr, dc)| pos.offset(dr, dc))
        .filter(|to| can_land(board, *to, color))
        .collect()
}
