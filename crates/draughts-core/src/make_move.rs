//! Move execution via copy-make.

use crate::board::Board;
use crate::draughts_move::Move;
use crate::error::MoveError;

impl Board {
    /// Apply a move and return the resulting board. Copy-make: `self` is not modified.
    ///
    /// The captured piece (if any) is removed, and a man reaching its
    /// promotion row is crowned as part of the same application.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the source is empty, the destination is
    /// occupied, or the captured square does not hold an opposing piece.
    pub fn try_make_move(&self, mv: Move) -> Result<Board, MoveError> {
        let mut b = *self;
        let piece = b
            .piece_on(mv.from())
            .ok_or(MoveError::EmptySource { square: mv.from() })?;

        if b.is_occupied(mv.to()) {
            return Err(MoveError::OccupiedDestination { square: mv.to() });
        }

        if let Some(captured) = mv.captured() {
            match b.color_on(captured) {
                Some(color) if color != piece.color() => b.set(captured, None),
                _ => return Err(MoveError::InvalidCapture { square: captured }),
            }
        }

        let landed = if mv.to().row() == piece.color().promotion_row() {
            piece.crowned()
        } else {
            piece
        };

        b.set(mv.from(), None);
        b.set(mv.to(), Some(landed));
        Ok(b)
    }

    /// Apply a move produced by the move generator.
    ///
    /// # Panics
    ///
    /// Panics if the move violates a precondition of [`try_make_move`](Self::try_make_move).
    /// Generated moves never do, so a panic here is a bug in the caller.
    pub fn make_move(&self, mv: Move) -> Board {
        match self.try_make_move(mv) {
            Ok(board) => board,
            Err(err) => panic!("cannot apply {mv}: {err}"),
        }
    }
}
