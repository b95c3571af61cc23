//! Square Go board with `Option<Color>` cells.
//!
//! The board is plain data: it knows its size and what sits on each point,
//! nothing about groups or legality. Rules live in [`crate::connectivity`],
//! [`crate::capture`] and [`crate::rules`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{SYMBOL_BLACK, SYMBOL_EMPTY, SYMBOL_WHITE};

/// Stone color. Black moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Character used by the text renderer.
    pub fn symbol(self) -> char {
        match self {
            Color::Black => SYMBOL_BLACK,
            Color::White => SYMBOL_WHITE,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// An unrecognized player/color label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}', expected black or white")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Color::Black),
            "white" | "w" | "o" => Ok(Color::White),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// A (row, column) point, 0-indexed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An NxN grid. `None` is an empty point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    /// If `size` is zero. Callers validate the size first (see
    /// [`crate::config::MatchConfig::validate`]).
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "board size must be at least 1");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, at: Coord) -> usize {
        at.row * self.size + at.col
    }

    /// Whether `at` lies on the board.
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.size && at.col < self.size
    }

    /// Cell at `at`, or `None` when `at` is off the board.
    pub fn get(&self, at: Coord) -> Option<Color> {
        if !self.contains(at) {
            return None;
        }
        self.cells[self.idx(at)]
    }

    /// Overwrite a cell. Bounds are the caller's responsibility.
    ///
    /// # Panics
    /// If `at` is off the board.
    pub fn set(&mut self, at: Coord, cell: Option<Color>) {
        assert!(self.contains(at), "{at} is off the {0}x{0} board", self.size);
        let i = self.idx(at);
        self.cells[i] = cell;
    }

    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.contains(at) && self.cells[self.idx(at)].is_none()
    }

    /// Every point, row-major.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Number of stones of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// Row-major cell values, for renderers.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Color>]> {
        self.cells.chunks(self.size)
    }
}

/// A malformed board diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("empty diagram")]
    Empty,
    #[error("row {row} has {found} points, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unexpected character '{0}' in diagram")]
    BadSymbol(char),
}

/// Parse a diagram such as `"X.O\n...\n.X."`. Whitespace inside a row is
/// ignored so that the `Display` output parses back.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(ParseBoardError::Empty);
        }

        let size = rows.len();
        let mut board = Board::new(size);
        for (row, symbols) in rows.iter().enumerate() {
            if symbols.len() != size {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    found: symbols.len(),
                    expected: size,
                });
            }
            for (col, &ch) in symbols.iter().enumerate() {
                let cell = match ch.to_ascii_uppercase() {
                    SYMBOL_BLACK => Some(Color::Black),
                    SYMBOL_WHITE => Some(Color::White),
                    SYMBOL_EMPTY => None,
                    other => return Err(ParseBoardError::BadSymbol(other)),
                };
                board.set(Coord::new(row, col), cell);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let ch = match cell {
                    Some(color) => color.symbol(),
                    None => SYMBOL_EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
