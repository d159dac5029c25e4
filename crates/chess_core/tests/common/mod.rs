//! Shared test utilities for the board tests
#![allow(dead_code)]

use chess_core::{
    Board, BoardConfig, BoardError, BoardOptions, BoardStyle, ElementId, PositionSpec,
    RenderSurface, Result, SquareView,
};

/// Every call a board made on its surface, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateBoard(BoardStyle),
    AppendSquare(ElementId, SquareView),
    UpdateSquare(ElementId, SquareView),
    Attach(String, ElementId),
    SetRotation(ElementId, f32),
}

/// Surface that records calls and reports a fixed width for `#board`.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
    next_id: ElementId,
}

impl RecordingSurface {
    pub fn appended(&self) -> Vec<&SquareView> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::AppendSquare(_, view) => Some(view),
                _ => None,
            })
            .collect()
    }

    pub fn updated(&self) -> Vec<&SquareView> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::UpdateSquare(_, view) => Some(view),
                _ => None,
            })
            .collect()
    }
}

pub const BOARD_WIDTH: f32 = 480.0;

impl RenderSurface for RecordingSurface {
    fn container_width(&self, selector: &str) -> Result<f32> {
        match selector {
            "#board" => Ok(BOARD_WIDTH),
            other => Err(BoardError::ContainerNotFound(other.to_string())),
        }
    }

    fn create_board(&mut self, style: BoardStyle) -> ElementId {
        self.calls.push(Call::CreateBoard(style));
        self.next_id += 1;
        self.next_id
    }

    fn append_square(&mut self, board: ElementId, square: &SquareView) {
        self.calls.push(Call::AppendSquare(board, square.clone()));
    }

    fn update_square(&mut self, board: ElementId, square: &SquareView) {
        self.calls.push(Call::UpdateSquare(board, square.clone()));
    }

    fn attach(&mut self, selector: &str, board: ElementId) -> Result<()> {
        self.calls.push(Call::Attach(selector.to_string(), board));
        Ok(())
    }

    fn set_rotation(&mut self, board: ElementId, degrees: f32) {
        self.calls.push(Call::SetRotation(board, degrees));
    }
}

/// Board on a recording surface with `position` applied.
pub fn recorded_board(position: PositionSpec, show_notation: bool) -> Board<RecordingSurface> {
    let config: BoardConfig = BoardOptions::default()
        .position(position)
        .show_notation(show_notation)
        .into();
    Board::new(config, RecordingSurface::default()).unwrap()
}

/// `(row, column, id)` of every occupied square, row-major.
pub fn occupied<S: RenderSurface>(board: &Board<S>) -> Vec<(usize, usize, String)> {
    board
        .squares()
        .filter_map(|s| s.piece().map(|p| (s.row(), s.column(), p.id())))
        .collect()
}
