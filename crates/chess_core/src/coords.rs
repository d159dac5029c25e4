use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, Result};

/// Number of files and ranks on the board.
pub const BOARD_SIZE: usize = 8;

/// File letters in column order.
pub const FILES: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Column index (0-7) of a file letter.
pub fn column_index_for_file(letter: char) -> Result<usize> {
    FILES
        .iter()
        .position(|&file| file == letter)
        .ok_or(BoardError::InvalidCoordinate(letter))
}

/// Screen row of a rank. Rank 8 is drawn at the top (row 0), rank 1 at the bottom (row 7).
pub fn row_index_for_rank(rank: u32) -> Result<usize> {
    if !(1..=BOARD_SIZE as u32).contains(&rank) {
        return Err(BoardError::InvalidRank(rank));
    }
    Ok((BOARD_SIZE - 1) - (rank as usize - 1))
}

pub fn file_for_column(column: usize) -> Option<char> {
    FILES.get(column).copied()
}

pub fn rank_for_row(row: usize) -> Option<u32> {
    if row < BOARD_SIZE {
        Some((BOARD_SIZE - row) as u32)
    } else {
        None
    }
}

/// An algebraic square such as `e4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    file: char,
    rank: u32,
}

impl Coordinate {
    pub fn new(file: char, rank: u32) -> Result<Self> {
        column_index_for_file(file)?;
        row_index_for_rank(rank)?;
        Ok(Self { file, rank })
    }

    pub fn file(self) -> char {
        self.file
    }

    pub fn rank(self) -> u32 {
        self.rank
    }

    pub fn from_grid(row: usize, column: usize) -> Option<Self> {
        Some(Self {
            file: file_for_column(column)?,
            rank: rank_for_row(row)?,
        })
    }

    /// `(row, column)` on screen.
    pub fn to_grid(self) -> (usize, usize) {
        // `new` and `from_grid` are the only constructors, both keep the board bounds.
        let row = BOARD_SIZE - self.rank as usize;
        let column = self.file as usize - 'a' as usize;
        (row, column)
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    fn from_str(notation: &str) -> Result<Self> {
        let mut chars = notation.chars();
        let file = chars
            .next()
            .ok_or_else(|| BoardError::MalformedCoordinate(notation.to_string()))?;
        let rank_text = chars.as_str();
        let padded = rank_text.len() > 1 && rank_text.starts_with('0');
        if rank_text.is_empty() || padded || !rank_text.chars().all(|c| c.is_ascii_digit()) {
            return Err(BoardError::MalformedCoordinate(notation.to_string()));
        }
        let rank = rank_text.parse::<u32>().unwrap_or(u32::MAX);

        Self::new(file, rank)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_map_to_columns_in_order() {
        for (index, letter) in FILES.iter().enumerate() {
            assert_eq!(column_index_for_file(*letter), Ok(index));
            assert_eq!(file_for_column(index), Some(*letter));
        }
    }

    #[test]
    fn rejects_letters_outside_a_to_h() {
        for letter in ['i', 'z', 'A', 'E', '1', ' '] {
            assert_eq!(
                column_index_for_file(letter),
                Err(BoardError::InvalidCoordinate(letter))
            );
        }
    }

    #[test]
    fn ranks_flip_to_screen_rows() {
        assert_eq!(row_index_for_rank(8), Ok(0));
        assert_eq!(row_index_for_rank(1), Ok(7));
        assert_eq!(row_index_for_rank(4), Ok(4));
        assert_eq!(row_index_for_rank(0), Err(BoardError::InvalidRank(0)));
        assert_eq!(row_index_for_rank(9), Err(BoardError::InvalidRank(9)));
        assert_eq!(rank_for_row(0), Some(8));
        assert_eq!(rank_for_row(8), None);
    }

    #[test]
    fn parses_algebraic_squares() {
        let e4: Coordinate = "e4".parse().unwrap();
        assert_eq!(e4, Coordinate::new('e', 4).unwrap());
        assert_eq!((e4.file(), e4.rank()), ('e', 4));
        assert_eq!(e4.to_grid(), (4, 4));
        assert_eq!(e4.to_string(), "e4");

        assert_eq!("a8".parse::<Coordinate>().unwrap().to_grid(), (0, 0));
        assert_eq!("h1".parse::<Coordinate>().unwrap().to_grid(), (7, 7));
    }

    #[test]
    fn parse_errors_name_the_bad_part() {
        assert_eq!(
            "j4".parse::<Coordinate>(),
            Err(BoardError::InvalidCoordinate('j'))
        );
        assert_eq!("e9".parse::<Coordinate>(), Err(BoardError::InvalidRank(9)));
        assert_eq!("e10".parse::<Coordinate>(), Err(BoardError::InvalidRank(10)));
        assert!(matches!(
            "e".parse::<Coordinate>(),
            Err(BoardError::MalformedCoordinate(_))
        ));
        assert!(matches!(
            "".parse::<Coordinate>(),
            Err(BoardError::MalformedCoordinate(_))
        ));
        assert!(matches!(
            "ex".parse::<Coordinate>(),
            Err(BoardError::MalformedCoordinate(_))
        ));
    }

    #[test]
    fn zero_padded_ranks_are_malformed() {
        for padded in ["e04", "a01", "h008"] {
            assert_eq!(
                padded.parse::<Coordinate>(),
                Err(BoardError::MalformedCoordinate(padded.to_string()))
            );
        }
        assert_eq!("e0".parse::<Coordinate>(), Err(BoardError::InvalidRank(0)));
    }

    #[test]
    fn constructor_keeps_squares_on_the_board() {
        assert_eq!(Coordinate::new('e', 9), Err(BoardError::InvalidRank(9)));
        assert_eq!(Coordinate::new('A', 1), Err(BoardError::InvalidCoordinate('A')));
        assert_eq!(Coordinate::new('e', 0), Err(BoardError::InvalidRank(0)));

        let h8 = Coordinate::new('h', 8).unwrap();
        assert_eq!(h8.to_grid(), (0, 7));
        assert_eq!(h8.to_string(), "h8");
    }

    #[test]
    fn grid_round_trip_covers_the_board() {
        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let coord = Coordinate::from_grid(row, column).unwrap();
                assert_eq!(coord.to_grid(), (row, column));
            }
        }
        assert_eq!(Coordinate::from_grid(8, 0), None);
    }
}
