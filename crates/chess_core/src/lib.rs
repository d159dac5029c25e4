// Board model and layout, independent of any UI toolkit
pub mod board;
pub mod config;
pub mod coords;
pub mod error;
pub mod piece;
pub mod position;
pub mod square;
pub mod surface;
pub mod text;

// Re-export main types for convenience
pub use board::Board;
pub use config::{BoardConfig, BoardOptions};
pub use coords::{column_index_for_file, row_index_for_rank, Coordinate};
pub use error::{BoardError, Result};
pub use piece::{Color, Piece, PieceFactory, PieceType, PieceVisual, Render};
pub use position::{Position, PositionSpec};
pub use square::{Square, SquareColor, SquareView};
pub use surface::{BoardStyle, ElementId, RenderSurface};
pub use text::TextSurface;
