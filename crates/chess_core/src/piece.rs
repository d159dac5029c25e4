use std::fmt;

use crate::error::{BoardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Pawn,
    ];

    fn code(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
        }
    }

    fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    fn name(self) -> &'static str {
        match self {
            PieceType::King => "king",
            PieceType::Queen => "queen",
            PieceType::Rook => "rook",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Pawn => "pawn",
        }
    }
}

/// Everything a surface needs to put a piece on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceVisual {
    pub id: String,
    pub glyph: char,
    /// Image file name, e.g. `white_king.png`.
    pub asset: String,
    pub color: Color,
}

/// Something that can be turned into a [`PieceVisual`].
pub trait Render {
    fn render(&self) -> PieceVisual;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Self { piece_type, color }
    }

    /// Two-character identifier: colour prefix (`w`/`b`) and kind letter (`KQRBNP`).
    pub fn id(&self) -> String {
        format!("{}{}", self.color.code(), self.piece_type.code())
    }

    pub fn glyph(&self) -> char {
        match (self.color, self.piece_type) {
            (Color::White, PieceType::King) => '♔',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Pawn) => '♙',
            (Color::Black, PieceType::King) => '♚',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Pawn) => '♟',
        }
    }
}

impl Render for Piece {
    fn render(&self) -> PieceVisual {
        PieceVisual {
            id: self.id(),
            glyph: self.glyph(),
            asset: format!("{}_{}.png", self.color.name(), self.piece_type.name()),
            color: self.color,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Builds pieces from their identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct PieceFactory;

impl PieceFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create_piece(&self, identifier: &str) -> Result<Piece> {
        let unknown = || BoardError::UnknownPiece(identifier.to_string());

        let mut chars = identifier.chars();
        let (Some(color), Some(kind), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(unknown());
        };
        let color = match color {
            'w' => Color::White,
            'b' => Color::Black,
            _ => return Err(unknown()),
        };
        let piece_type = PieceType::from_code(kind).ok_or_else(unknown)?;

        Ok(Piece::new(piece_type, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_every_known_identifier() {
        let factory = PieceFactory::new();
        for color in ['w', 'b'] {
            for kind in "KQRBNP".chars() {
                let id = format!("{color}{kind}");
                let piece = factory.create_piece(&id).unwrap();
                assert_eq!(piece.id(), id);
            }
        }
    }

    #[test]
    fn unknown_identifiers_fail() {
        let factory = PieceFactory::new();
        for id in ["", "w", "wX", "xK", "WK", "wKK", "king"] {
            assert_eq!(
                factory.create_piece(id),
                Err(BoardError::UnknownPiece(id.to_string()))
            );
        }
    }

    #[test]
    fn render_names_the_asset() {
        let visual = PieceFactory::new().create_piece("bN").unwrap().render();
        assert_eq!(visual.asset, "black_knight.png");
        assert_eq!(visual.glyph, '♞');
        assert_eq!(visual.color, Color::Black);
        assert_eq!(visual.id, "bN");
    }
}
