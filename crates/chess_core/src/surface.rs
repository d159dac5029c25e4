use crate::error::Result;
use crate::square::SquareView;

/// Handle to an element created by a surface.
pub type ElementId = usize;

/// Layout of the board element: a square grid `px_size` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardStyle {
    pub px_size: f32,
    pub columns: usize,
}

/// The visual tree a [`Board`](crate::Board) draws into.
///
/// Selectors name hosting containers; how they are resolved is up to the
/// surface.
pub trait RenderSurface {
    /// Width in pixels of the container matching `selector`.
    fn container_width(&self, selector: &str) -> Result<f32>;

    fn create_board(&mut self, style: BoardStyle) -> ElementId;

    /// Appends a square as the next child of `board`.
    fn append_square(&mut self, board: ElementId, square: &SquareView);

    /// Refreshes an already appended square in place.
    fn update_square(&mut self, board: ElementId, square: &SquareView);

    /// Appends `board` into the container matching `selector`.
    fn attach(&mut self, selector: &str, board: ElementId) -> Result<()>;

    /// Sets the absolute rotation of `board`.
    fn set_rotation(&mut self, board: ElementId, degrees: f32);
}
