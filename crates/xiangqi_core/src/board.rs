use std::fmt;

use crate::error::BoardError;
use crate::moves::{legal_destinations, Move};
use crate::piece::{Color, Piece, PieceType};
use crate::position::{Position, COLS, ROWS, SQUARES};

// Black's half of the opening layout as (row, col, piece). Red mirrors it
// across the river with row -> 9 - row.
const HALF_LAYOUT: [(u8, u8, PieceType); 16] = [
    (0, 0, PieceType::Rook),
    (0, 1, PieceType::Horse),
    (0, 2, PieceType::Elephant),
    (0, 3, PieceType::Advisor),
    (0, 4, PieceType::King),
    (0, 5, PieceType::Advisor),
    (0, 6, PieceType::Elephant),
    (0, 7, PieceType::Horse),
    (0, 8, PieceType::Rook),
    (2, 1, PieceType::Cannon),
    (2, 7, PieceType::Cannon),
    (3, 0, PieceType::Pawn),
    (3, 2, PieceType::Pawn),
    (3, 4, PieceType::Pawn),
    (3, 6, PieceType::Pawn),
    (3, 8, PieceType::Pawn),
];

/// A snapshot of piece placements. Cheap to copy: every simulated move in the
/// rules and the search works on its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening position. Black pieces get ids 0-15, Red 16-31.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (i, &(row, col, piece_type)) in HALF_LAYOUT.iter().enumerate() {
            let black = Position { row, col };
            let red = Position { row: ROWS - 1 - row, col };
            board.squares[black.index()] = Some(Piece::with_id(piece_type, Color::Black, i as u8));
            board.squares[red.index()] =
                Some(Piece::with_id(piece_type, Color::Red, (i + HALF_LAYOUT.len()) as u8));
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [None; SQUARES],
        }
    }

    /// Builds a board from explicit placements, rejecting two pieces on one
    /// square or a second king for either side.
    pub fn from_layout<I>(layout: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Position, Piece)>,
    {
        let mut board = Self::empty();
        for (pos, piece) in layout {
            if board.get_piece(pos).is_some() {
                return Err(BoardError::Occupied(pos));
            }
            if piece.is_king() && board.find_king(piece.color).is_some() {
                return Err(BoardError::DuplicateKing(piece.color));
            }
            board.squares[pos.index()] = Some(piece);
        }
        Ok(board)
    }

    pub fn get_piece(&self, pos: Position) -> Option<&Piece> {
        self.squares[pos.index()].as_ref()
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.squares[pos.index()].is_some()
    }

    /// Copy of this board with `mv` applied. Whatever stood on `mv.to` is
    /// silently replaced; legality is not checked here.
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = *self;
        let piece = next.squares[mv.from.index()].take();
        next.squares[mv.to.index()] = piece;
        next
    }

    /// Puts `piece` on `pos`, returning the previous occupant.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        self.squares[pos.index()].replace(piece)
    }

    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()].take()
    }

    /// Occupied squares in board-scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, sq)| Some((Position::from_index(i)?, (*sq)?)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.is_king())
            .map(|(pos, _)| pos)
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_some()).count()
    }

    /// Moves available to whichever piece stands on `pos`.
    pub fn get_valid_moves(&self, pos: Position) -> Vec<Move> {
        match self.get_piece(pos) {
            Some(&piece) => legal_destinations(self, pos, piece)
                .into_iter()
                .map(|to| Move::new(pos, to))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let c = self
                    .get_piece(Position { row, col })
                    .map_or('.', Piece::symbol);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn initial_layout_is_mirrored() {
        let board = Board::new();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.pieces_of(Color::Red).count(), 16);
        assert_eq!(board.find_king(Color::Black), Some(pos(0, 4)));
        assert_eq!(board.find_king(Color::Red), Some(pos(9, 4)));
        for (p, piece) in board.pieces_of(Color::Black) {
            let mirror = board.get_piece(pos(9 - p.row, p.col)).unwrap();
            assert_eq!(mirror.piece_type, piece.piece_type);
            assert_eq!(mirror.color, Color::Red);
        }
    }

    #[test]
    fn initial_ids_are_unique() {
        let mut ids: Vec<u8> = Board::new().pieces().map(|(_, p)| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }

    #[test]
    fn from_layout_rejects_double_occupancy() {
        let rook = Piece::new(PieceType::Rook, Color::Red);
        let err = Board::from_layout([(pos(5, 5), rook), (pos(5, 5), rook)]).unwrap_err();
        assert_eq!(err, BoardError::Occupied(pos(5, 5)));
    }

    #[test]
    fn from_layout_rejects_second_king() {
        let king = Piece::new(PieceType::King, Color::Black);
        let err = Board::from_layout([(pos(0, 4), king), (pos(1, 4), king)]).unwrap_err();
        assert_eq!(err, BoardError::DuplicateKing(Color::Black));

        let red_king = Piece::new(PieceType::King, Color::Red);
        assert!(Board::from_layout([(pos(0, 4), king), (pos(9, 4), red_king)]).is_ok());
    }

    #[test]
    fn with_move_leaves_original_untouched() {
        let board = Board::new();
        let mv = Move::new(pos(7, 1), pos(0, 1));
        let next = board.with_move(mv);

        assert_eq!(board, Board::new());
        assert!(next.get_piece(pos(7, 1)).is_none());
        let moved = next.get_piece(pos(0, 1)).unwrap();
        assert_eq!(moved.piece_type, PieceType::Cannon);
        assert_eq!(moved.color, Color::Red);
        assert_eq!(next.piece_count(), 31);
    }

    #[test]
    fn move_can_be_reversed() {
        let board = Board::new();
        let mv = Move::new(pos(7, 1), pos(0, 1));
        let captured = board.get_piece(mv.to).copied();

        let mut undone = board.with_move(mv);
        let mover = undone.remove(mv.to).unwrap();
        undone.place(mv.from, mover);
        if let Some(piece) = captured {
            undone.place(mv.to, piece);
        }
        assert_eq!(undone, board);
    }

    #[test]
    fn display_draws_ten_rows() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "rheakaehr");
        assert_eq!(lines[9], "RHEAKAEHR");
        assert_eq!(lines[4], ".........");
    }
}
