use std::fmt;
use std::str::FromStr;

use crate::error::ParsePositionError;
use crate::piece::Color;

pub const ROWS: u8 = 10;
pub const COLS: u8 = 9;
pub const SQUARES: usize = ROWS as usize * COLS as usize;

/// An intersection on the 9x10 grid. Row 0 is Black's back rank, row 9 is Red's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8, // 0-9
    pub col: u8, // 0-8
}

impl Position {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < ROWS && col < COLS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Index into the flat board array.
    pub fn index(self) -> usize {
        self.row as usize * COLS as usize + self.col as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SQUARES {
            return None;
        }
        Some(Self {
            row: (index / COLS as usize) as u8,
            col: (index % COLS as usize) as u8,
        })
    }

    /// Every square in board-scan order (row-major, top to bottom).
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SQUARES).filter_map(Position::from_index)
    }

    /// The square `d_row`/`d_col` away, if it is still on the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// The 3x3 zone a king and its advisors may never leave.
    pub fn is_in_palace(self, color: Color) -> bool {
        let rows = match color {
            Color::Red => 7..=9,
            Color::Black => 0..=2,
        };
        rows.contains(&self.row) && (3..=5).contains(&self.col)
    }

    /// True on the half of the board `color` starts on.
    pub fn is_on_own_side(self, color: Color) -> bool {
        match color {
            Color::Red => self.row >= 5,
            Color::Black => self.row <= 4,
        }
    }

    pub fn has_crossed_river(self, color: Color) -> bool {
        !self.is_on_own_side(color)
    }

    /// Squares strictly between two positions on one row or column.
    /// Empty when the positions are adjacent or not aligned.
    pub fn squares_between(self, other: Position) -> Vec<Position> {
        if self.row == other.row {
            let (lo, hi) = (self.col.min(other.col), self.col.max(other.col));
            (lo + 1..hi).map(|col| Position { row: self.row, col }).collect()
        } else if self.col == other.col {
            let (lo, hi) = (self.row.min(other.row), self.row.max(other.row));
            (lo + 1..hi).map(|row| Position { row, col: self.col }).collect()
        } else {
            Vec::new()
        }
    }
}

// Same "row,col" key the game records use.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| ParsePositionError::Format(s.to_string()))?;
        let row: u8 = row
            .trim()
            .parse()
            .map_err(|_| ParsePositionError::Format(s.to_string()))?;
        let col: u8 = col
            .trim()
            .parse()
            .map_err(|_| ParsePositionError::Format(s.to_string()))?;
        Position::new(row, col).ok_or(ParsePositionError::OutOfRange { row, col })
    }
}
