//! The draughts board: an 8×8 grid of piece codes.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Raw 8×8 grid of cell codes, indexed `[row][col]`.
pub type Grid = [[u8; 8]; 8];

/// Board snapshot: the piece (if any) on each of the 64 squares.
///
/// `Board` is a small `Copy` value. Applying a move produces a new board
/// (see [`Board::make_move`]), so hypothetical positions explored by the
/// search never alias the authoritative game state.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    ///
    /// Black men fill the dark squares of rows 0-2, White men those of rows 5-7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            match sq.row() {
                0..=2 => board.set(sq, Some(Piece::BLACK_MAN)),
                5..=7 => board.set(sq, Some(Piece::WHITE_MAN)),
                _ => {}
            }
        }
        board
    }

    /// Build a board from a raw code grid, rejecting codes outside `0..=4`.
    pub fn from_codes(grid: &Grid) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for sq in Square::all() {
            let code = grid[sq.row() as usize][sq.col() as usize];
            if code == 0 {
                continue;
            }
            let piece = Piece::from_code(code).ok_or(BoardError::InvalidCode { square: sq, code })?;
            board.set(sq, Some(piece));
        }
        Ok(board)
    }

    /// Return the raw code grid (0 = empty).
    pub fn to_codes(&self) -> Grid {
        let mut grid = [[0u8; 8]; 8];
        for sq in Square::all() {
            grid[sq.row() as usize][sq.col() as usize] = self.code_at(sq);
        }
        grid
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return the cell code on the given square (0 when empty).
    #[inline]
    pub fn code_at(&self, sq: Square) -> u8 {
        self.cells[sq.index()].map_or(0, Piece::code)
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.cells[sq.index()].map(Piece::color)
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Place or remove a piece.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    /// Iterate over occupied squares of `color` in row-major order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_on(sq) {
            Some(piece) if piece.color() == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Count the pieces of the given color and kind.
    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        let target = Piece::new(kind, color);
        self.cells.iter().filter(|&&cell| cell == Some(target)).count() as u32
    }

    /// Count all pieces of the given color.
    pub fn count_side(&self, color: Color) -> u32 {
        PieceKind::ALL.into_iter().map(|kind| self.count(color, kind)).sum()
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 diagram.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = board.piece_on(Square::new(row, col)).map_or('.', Piece::layout_char);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
