use log::{debug, trace};

use crate::config::BoardConfig;
use crate::coords::BOARD_SIZE;
use crate::error::{BoardError, Result};
use crate::piece::{Piece, PieceFactory};
use crate::position::{Position, PositionSpec};
use crate::square::{square_color, Square, SquareColor};
use crate::surface::{BoardStyle, ElementId, RenderSurface};

/// Rotation applied by [`Board::flip`].
pub const FLIPPED_ROTATION: f32 = -180.0;

/// An 8×8 board drawn through a [`RenderSurface`].
#[derive(Debug)]
pub struct Board<S: RenderSurface> {
    config: BoardConfig,
    px_size: f32,
    squares: Vec<Vec<Square>>,
    position: Position,
    factory: PieceFactory,
    surface: S,
    element: ElementId,
    flipped: bool,
    drawn: bool,
}

impl<S: RenderSurface> Board<S> {
    /// Sizes the board to its container and applies the configured position.
    pub fn new(config: BoardConfig, mut surface: S) -> Result<Self> {
        let px_size = surface.container_width(&config.container)?;
        let square_size = px_size / BOARD_SIZE as f32;

        let squares: Vec<Vec<Square>> = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|column| Square::new(row, column, square_color(row, column), square_size))
                    .collect::<Vec<_>>()
            })
            .collect();

        let element = surface.create_board(BoardStyle {
            px_size,
            columns: BOARD_SIZE,
        });
        debug!("created {px_size}px board for {}", config.container);

        let initial = config.position.clone();
        let mut board = Self {
            config,
            px_size,
            squares,
            position: Position::default(),
            factory: PieceFactory::new(),
            surface,
            element,
            flipped: false,
            drawn: false,
        };
        board.apply_position(&initial)?;

        Ok(board)
    }

    /// Appends all squares to the board element, row by row, then the board
    /// element to its container. A board can only be drawn once.
    pub fn draw(&mut self) -> Result<()> {
        if self.drawn {
            return Err(BoardError::AlreadyDrawn(self.config.container.clone()));
        }

        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let square = &mut self.squares[row][column];
                if self.config.show_notation {
                    if row == BOARD_SIZE - 1 {
                        square.show_column_notation();
                    }
                    if column == 0 {
                        square.show_row_notation();
                    }
                }
                self.surface.append_square(self.element, &square.view());
            }
        }

        self.surface.attach(&self.config.container, self.element)?;
        self.drawn = true;
        debug!("drew board into {}", self.config.container);

        Ok(())
    }

    /// Removes every piece. Squares stay.
    pub fn clear(&mut self) {
        self.clear_squares();
        self.sync();
    }

    /// Replaces the pieces on the board with `spec`.
    ///
    /// The whole position is resolved before anything is touched, so a bad
    /// square or piece identifier leaves the board as it was.
    pub fn apply_position(&mut self, spec: &PositionSpec) -> Result<()> {
        let position = Position::parse(spec)?;
        let placements = position
            .placements()
            .map(|(id, row, column)| {
                self.factory
                    .create_piece(id)
                    .map(|piece| (row, column, piece))
            })
            .collect::<Result<Vec<_>>>()?;

        self.clear_squares();
        for (row, column, piece) in placements {
            trace!("placing {piece} at row {row}, column {column}");
            self.squares[row][column].set_piece(piece);
        }
        debug!("applied position with {} pieces", position.piece_count());
        self.position = position;
        self.sync();

        Ok(())
    }

    /// Turns the board upside down. The rotation is absolute, so calling it
    /// again changes nothing.
    pub fn flip(&mut self) {
        self.surface.set_rotation(self.element, FLIPPED_ROTATION);
        self.flipped = true;
        debug!("flipped board in {}", self.config.container);
    }

    pub fn get_color(&self, row: usize, column: usize) -> SquareColor {
        square_color(row, column)
    }

    pub fn square(&self, row: usize, column: usize) -> Option<&Square> {
        self.squares.get(row)?.get(column)
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().flatten()
    }

    pub fn piece_at(&self, row: usize, column: usize) -> Option<&Piece> {
        self.square(row, column)?.piece()
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn px_size(&self) -> f32 {
        self.px_size
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_drawn(&self) -> bool {
        self.drawn
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn clear_squares(&mut self) {
        for square in self.squares.iter_mut().flatten() {
            square.clear();
        }
    }

    /// Pushes square state to the surface once the board is on screen.
    fn sync(&mut self) {
        if !self.drawn {
            return;
        }
        for square in self.squares.iter().flatten() {
            self.surface.update_square(self.element, &square.view());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardOptions;
    use crate::text::TextSurface;

    fn board(position: PositionSpec) -> Board<TextSurface> {
        let surface = TextSurface::new().with_container("#board", 640.0);
        let config: BoardConfig = BoardOptions::default().position(position).into();
        Board::new(config, surface).unwrap()
    }

    #[test]
    fn squares_are_sized_from_the_container() {
        let board = board(PositionSpec::new());
        assert_eq!(board.px_size(), 640.0);
        assert!(board.squares().all(|s| s.size() == 80.0));
        assert_eq!(board.squares().count(), 64);
    }

    #[test]
    fn default_config_places_starting_position() {
        let surface = TextSurface::new().with_container("#board", 400.0);
        let board = Board::new(BoardConfig::default(), surface).unwrap();
        assert_eq!(board.squares().filter(|s| s.piece().is_some()).count(), 32);
        assert_eq!(board.piece_at(7, 4).map(Piece::id).as_deref(), Some("wK"));
        assert_eq!(board.piece_at(0, 3).map(Piece::id).as_deref(), Some("bQ"));
    }

    #[test]
    fn missing_container_fails_construction() {
        let surface = TextSurface::new();
        let err = Board::new(BoardConfig::default(), surface).unwrap_err();
        assert_eq!(err, BoardError::ContainerNotFound("#board".to_string()));
    }

    #[test]
    fn bad_position_leaves_board_untouched() {
        let mut board = board(PositionSpec::new().with("wK", ["e1"]));

        let err = board
            .apply_position(&PositionSpec::new().with("wQ", ["d1", "z1"]))
            .unwrap_err();
        assert_eq!(err, BoardError::InvalidCoordinate('z'));

        let err = board
            .apply_position(&PositionSpec::new().with("wX", ["d1"]))
            .unwrap_err();
        assert_eq!(err, BoardError::UnknownPiece("wX".to_string()));

        assert_eq!(board.piece_at(7, 4).map(Piece::id).as_deref(), Some("wK"));
        assert!(board.piece_at(7, 3).is_none());
    }

    #[test]
    fn later_entries_win_a_shared_square() {
        let board = board(PositionSpec::new().with("wQ", ["d4"]).with("bN", ["d4"]));
        assert_eq!(board.piece_at(4, 3).map(Piece::id).as_deref(), Some("bN"));
    }

    #[test]
    fn flip_is_absolute() {
        let mut board = board(PositionSpec::new());
        board.flip();
        board.flip();
        assert!(board.is_flipped());
        assert_eq!(board.surface().rotation(board.element()), Some(FLIPPED_ROTATION));
    }

    #[test]
    fn second_draw_is_rejected() {
        let mut board = board(PositionSpec::new());
        board.draw().unwrap();
        assert_eq!(
            board.draw(),
            Err(BoardError::AlreadyDrawn("#board".to_string()))
        );
        assert_eq!(board.surface().squares(board.element()).len(), 64);
    }
}
