use std::collections::HashSet;

use log::{trace, warn};

use crate::coords::{Coordinate, BOARD_SIZE, FILES};
use crate::error::{BoardError, Result};

/// Caller-facing position description: piece identifier to algebraic squares.
///
/// Keeps insertion order, so when two pieces name the same square the later
/// entry is the one left on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionSpec {
    entries: Vec<(String, Vec<String>)>,
}

impl PositionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<K, I, S>(mut self, piece: K, squares: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(piece, squares);
        self
    }

    /// Sets the squares of `piece`, replacing any list already given for it.
    pub fn insert<K, I, S>(&mut self, piece: K, squares: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let piece = piece.into();
        let squares = squares.into_iter().map(Into::into).collect();
        match self.entries.iter_mut().find(|(id, _)| *id == piece) {
            Some(entry) => entry.1 = squares,
            None => self.entries.push((piece, squares)),
        }
    }

    /// Adds `squares` to those already listed for `piece`.
    pub fn append<K, I, S>(&mut self, piece: K, squares: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let piece = piece.into();
        let squares = squares.into_iter().map(Into::into);
        match self.entries.iter_mut().find(|(id, _)| *id == piece) {
            Some(entry) => entry.1.extend(squares),
            None => self.entries.push((piece, squares.collect())),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(piece, squares)| (piece.as_str(), squares.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The standard opening array.
    pub fn starting() -> Self {
        Self::new()
            .with("wR", ["a1", "h1"])
            .with("wN", ["b1", "g1"])
            .with("wB", ["c1", "f1"])
            .with("wQ", ["d1"])
            .with("wK", ["e1"])
            .with("wP", FILES.iter().map(|file| format!("{file}2")))
            .with("bR", ["a8", "h8"])
            .with("bN", ["b8", "g8"])
            .with("bB", ["c8", "f8"])
            .with("bQ", ["d8"])
            .with("bK", ["e8"])
            .with("bP", FILES.iter().map(|file| format!("{file}7")))
    }

    /// Reads the piece-placement field of a FEN record, e.g.
    /// `rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR`.
    pub fn from_fen_placement(placement: &str) -> Result<Self> {
        let invalid = |reason: String| BoardError::InvalidFen {
            placement: placement.to_string(),
            reason,
        };

        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(invalid(format!("expected 8 ranks, found {}", ranks.len())));
        }

        let mut spec = Self::new();
        for (index, rank_text) in ranks.iter().enumerate() {
            let rank = BOARD_SIZE - index;
            let mut column = 0;
            for c in rank_text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 || skip as usize > BOARD_SIZE {
                        return Err(invalid(format!("bad empty-square count '{c}'")));
                    }
                    column += skip as usize;
                    continue;
                }

                let color = if c.is_ascii_uppercase() { 'w' } else { 'b' };
                let kind = c.to_ascii_uppercase();
                if !"KQRBNP".contains(kind) {
                    return Err(invalid(format!("unexpected character '{c}'")));
                }
                let file = FILES
                    .get(column)
                    .ok_or_else(|| invalid(format!("rank {rank} has more than 8 squares")))?;
                spec.append(format!("{color}{kind}"), [format!("{file}{rank}")]);
                column += 1;
            }
            if column != BOARD_SIZE {
                return Err(invalid(format!("rank {rank} covers {column} squares, not 8")));
            }
        }

        Ok(spec)
    }
}

impl<K, I, S> FromIterator<(K, I)> for PositionSpec
where
    K: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut spec = Self::new();
        for (piece, squares) in iter {
            spec.insert(piece, squares);
        }
        spec
    }
}

/// A parsed position: piece identifier to screen `(row, column)` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    entries: Vec<(String, Vec<(usize, usize)>)>,
}

impl Position {
    /// Resolves every square of `spec`. Piece identifiers are taken literally.
    pub fn parse(spec: &PositionSpec) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(spec.entries.len());

        for (piece, squares) in spec.entries() {
            let mut cells = Vec::with_capacity(squares.len());
            for square in squares {
                let coord: Coordinate = square.parse()?;
                let cell = coord.to_grid();
                if !seen.insert(cell) {
                    warn!("square {coord} is named more than once, {piece} replaces the earlier piece");
                }
                trace!("{piece} -> {coord} (row {}, column {})", cell.0, cell.1);
                cells.push(cell);
            }
            entries.push((piece.to_string(), cells));
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &[(usize, usize)])> {
        self.entries
            .iter()
            .map(|(piece, cells)| (piece.as_str(), cells.as_slice()))
    }

    /// Flattened `(piece, row, column)` placements in application order.
    pub fn placements(&self) -> impl Iterator<Item = (&str, usize, usize)> {
        self.entries().flat_map(|(piece, cells)| {
            cells.iter().map(move |&(row, column)| (piece, row, column))
        })
    }

    pub fn piece_count(&self) -> usize {
        self.entries.iter().map(|(_, cells)| cells.len()).sum()
    }
}
