use crate::coords::{file_for_column, rank_for_row, Coordinate};
use crate::piece::{Piece, PieceVisual, Render};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareColor {
    Light,
    Dark,
}

/// Colour of the square at `(row, column)`: light when the indices sum to an even number.
pub fn square_color(row: usize, column: usize) -> SquareColor {
    if (row + column) % 2 == 0 {
        SquareColor::Light
    } else {
        SquareColor::Dark
    }
}

/// Snapshot of a square handed to a rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareView {
    pub row: usize,
    pub column: usize,
    pub color: SquareColor,
    pub size: f32,
    pub piece: Option<PieceVisual>,
    /// Rank digit, shown on the first column.
    pub row_label: Option<String>,
    /// File letter, shown on the bottom row.
    pub column_label: Option<String>,
}

/// One of the 64 cells of a board.
#[derive(Debug, Clone)]
pub struct Square {
    row: usize,
    column: usize,
    color: SquareColor,
    size: f32,
    piece: Option<Piece>,
    show_row_notation: bool,
    show_column_notation: bool,
}

impl Square {
    pub fn new(row: usize, column: usize, color: SquareColor, size: f32) -> Self {
        Self {
            row,
            column,
            color,
            size,
            piece: None,
            show_row_notation: false,
            show_column_notation: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn color(&self) -> SquareColor {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_grid(self.row, self.column)
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    /// Replaces whatever stood here.
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = Some(piece);
    }

    pub fn clear(&mut self) {
        self.piece = None;
    }

    pub fn show_row_notation(&mut self) {
        self.show_row_notation = true;
    }

    pub fn hide_row_notation(&mut self) {
        self.show_row_notation = false;
    }

    pub fn show_column_notation(&mut self) {
        self.show_column_notation = true;
    }

    pub fn hide_column_notation(&mut self) {
        self.show_column_notation = false;
    }

    pub fn row_label(&self) -> Option<String> {
        if !self.show_row_notation {
            return None;
        }
        rank_for_row(self.row).map(|rank| rank.to_string())
    }

    pub fn column_label(&self) -> Option<String> {
        if !self.show_column_notation {
            return None;
        }
        file_for_column(self.column).map(String::from)
    }

    pub fn view(&self) -> SquareView {
        SquareView {
            row: self.row,
            column: self.column,
            color: self.color,
            size: self.size,
            piece: self.piece.as_ref().map(|piece| piece.render()),
            row_label: self.row_label(),
            column_label: self.column_label(),
        }
    }
}
