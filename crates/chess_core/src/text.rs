use std::collections::HashMap;

use log::debug;

use crate::error::{BoardError, Result};
use crate::square::{SquareColor, SquareView};
use crate::surface::{BoardStyle, ElementId, RenderSurface};

#[derive(Debug, Clone)]
struct TextBoard {
    style: BoardStyle,
    squares: Vec<SquareView>,
    rotation: f32,
}

/// A surface that keeps boards in memory and prints them as text.
#[derive(Debug, Clone, Default)]
pub struct TextSurface {
    containers: HashMap<String, f32>,
    attached: HashMap<String, Vec<ElementId>>,
    boards: Vec<TextBoard>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hosting container `width` pixels wide.
    pub fn with_container(mut self, selector: impl Into<String>, width: f32) -> Self {
        self.containers.insert(selector.into(), width);
        self
    }

    /// Children appended to `board`, in order.
    pub fn squares(&self, board: ElementId) -> &[SquareView] {
        self.boards
            .get(board)
            .map(|b| b.squares.as_slice())
            .unwrap_or_default()
    }

    pub fn rotation(&self, board: ElementId) -> Option<f32> {
        self.boards.get(board).map(|b| b.rotation)
    }

    /// Prints every board attached to `selector`, one after another.
    pub fn render(&self, selector: &str) -> Option<String> {
        let ids = self.attached.get(selector)?;
        let rendered: Vec<String> = ids
            .iter()
            .filter_map(|&id| self.boards.get(id))
            .map(render_board)
            .collect();
        Some(rendered.join("\n"))
    }
}

impl RenderSurface for TextSurface {
    fn container_width(&self, selector: &str) -> Result<f32> {
        self.containers
            .get(selector)
            .copied()
            .ok_or_else(|| BoardError::ContainerNotFound(selector.to_string()))
    }

    fn create_board(&mut self, style: BoardStyle) -> ElementId {
        self.boards.push(TextBoard {
            style,
            squares: Vec::new(),
            rotation: 0.0,
        });
        self.boards.len() - 1
    }

    fn append_square(&mut self, board: ElementId, square: &SquareView) {
        if let Some(board) = self.boards.get_mut(board) {
            board.squares.push(square.clone());
        }
    }

    fn update_square(&mut self, board: ElementId, square: &SquareView) {
        let Some(board) = self.boards.get_mut(board) else {
            return;
        };
        if let Some(existing) = board
            .squares
            .iter_mut()
            .find(|s| s.row == square.row && s.column == square.column)
        {
            *existing = square.clone();
        }
    }

    fn attach(&mut self, selector: &str, board: ElementId) -> Result<()> {
        if !self.containers.contains_key(selector) {
            return Err(BoardError::ContainerNotFound(selector.to_string()));
        }
        debug!("attaching text board {board} to {selector}");
        self.attached.entry(selector.to_string()).or_default().push(board);
        Ok(())
    }

    fn set_rotation(&mut self, board: ElementId, degrees: f32) {
        if let Some(board) = self.boards.get_mut(board) {
            board.rotation = degrees;
        }
    }
}

fn render_board(board: &TextBoard) -> String {
    let size = board.style.columns;
    let mut grid: Vec<Vec<Option<&SquareView>>> = vec![vec![None; size]; size];
    for square in &board.squares {
        if square.row < size && square.column < size {
            grid[square.row][square.column] = Some(square);
        }
    }

    // Half a turn in either direction turns the board upside down.
    let upside_down = (board.rotation.rem_euclid(360.0) - 180.0).abs() < f32::EPSILON;
    if upside_down {
        grid.reverse();
        for row in &mut grid {
            row.reverse();
        }
    }

    let row_label = |row: &[Option<&SquareView>]| {
        row.iter()
            .flatten()
            .find_map(|s| s.row_label.clone())
            .unwrap_or_else(|| " ".to_string())
    };
    let has_row_labels = board.squares.iter().any(|s| s.row_label.is_some());

    let mut lines = Vec::with_capacity(size + 1);
    for row in &grid {
        let cells: String = row
            .iter()
            .map(|cell| match cell {
                Some(square) => match &square.piece {
                    Some(piece) => piece.glyph,
                    None if square.color == SquareColor::Light => '.',
                    None => ':',
                },
                None => ' ',
            })
            .flat_map(|c| [c, ' '])
            .collect();
        let cells = cells.trim_end();

        let line = match (has_row_labels, upside_down) {
            (false, _) => cells.to_string(),
            (true, false) => format!("{} {}", row_label(row.as_slice()), cells),
            (true, true) => format!("  {} {}", cells, row_label(row.as_slice())),
        };
        lines.push(line);
    }

    let files: Vec<String> = board
        .squares
        .iter()
        .filter_map(|s| s.column_label.clone().map(|label| (s.column, label)))
        .fold(vec![" ".to_string(); size], |mut files, (column, label)| {
            if column < size {
                files[column] = label;
            }
            files
        });
    if files.iter().any(|f| f != " ") {
        let mut files = files;
        if upside_down {
            files.reverse();
        }
        let indent = if has_row_labels { "  " } else { "" };
        let footer = format!("{indent}{}", files.join(" "));
        if upside_down {
            lines.insert(0, footer.trim_end().to_string());
        } else {
            lines.push(footer.trim_end().to_string());
        }
    }

    lines.join("\n")
}
