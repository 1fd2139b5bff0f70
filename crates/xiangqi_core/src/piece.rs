#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,   // moves first, starts on rows 5-9
    Black, // starts on rows 0-4
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row step of a pawn moving forward.
    pub fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Advisor,
    Elephant,
    Horse,
    Rook,
    Cannon,
    Pawn,
}

impl PieceType {
    fn symbol(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Advisor => 'a',
            PieceType::Elephant => 'e',
            PieceType::Horse => 'h',
            PieceType::Rook => 'r',
            PieceType::Cannon => 'c',
            PieceType::Pawn => 'p',
        }
    }
}

/// A piece on the board. `id` only lets a presentation layer follow a piece
/// from move to move; the rules never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
    pub id: u8,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Self {
            piece_type,
            color,
            id: 0,
        }
    }

    pub fn with_id(piece_type: PieceType, color: Color, id: u8) -> Self {
        Self {
            piece_type,
            color,
            id,
        }
    }

    pub fn is_king(&self) -> bool {
        self.piece_type == PieceType::King
    }

    /// Diagram letter: uppercase for Red, lowercase for Black.
    pub fn symbol(&self) -> char {
        let c = self.piece_type.symbol();
        match self.color {
            Color::Red => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}
