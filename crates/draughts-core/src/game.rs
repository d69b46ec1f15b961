//! Authoritative game record: current board, side to move, capture chains and history.

use tracing::debug;

use crate::board::{Board, Grid};
use crate::color::Color;
use crate::draughts_move::Move;
use crate::error::MoveError;
use crate::movegen::{MoveList, generate_moves, legal_moves_from};
use crate::square::Square;

/// What happened after a single move was applied to a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was a capture and the same piece must capture again from this square.
    ChainContinues(Square),
    /// The turn is over and the other side is to move.
    TurnComplete,
}

/// Result of a game as seen from the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    Ongoing,
    /// The given side won: its opponent is to move and has no legal move.
    Won(Color),
    /// The turn limit was reached.
    Draw,
}

/// Position at the start of a turn, kept for undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TurnStart {
    board: Board,
    side: Color,
}

/// A game in progress.
///
/// `Game` owns the one mutable board of the program. Human moves arrive one
/// at a time through [`apply_move`](Game::apply_move), which keeps track of
/// capture chains; bot turns arrive whole through [`apply_turn`](Game::apply_turn).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    chain: Option<Square>,
    turn: u32,
    history: Vec<TurnStart>,
}

impl Game {
    /// Start a game from the standard starting position, White to move.
    pub fn new() -> Game {
        Game::from_position(Board::starting_position(), Color::White)
    }

    /// Start a game from an arbitrary position.
    pub fn from_position(board: Board, side_to_move: Color) -> Game {
        Game {
            board,
            side_to_move,
            chain: None,
            turn: 0,
            history: Vec::new(),
        }
    }

    /// Return the current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return a read-only copy of the current cell codes.
    pub fn snapshot(&self) -> Grid {
        self.board.to_codes()
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the square of the piece that must continue capturing, if a chain is in progress.
    #[inline]
    pub fn chain_square(&self) -> Option<Square> {
        self.chain
    }

    /// Return the number of completed turns.
    #[inline]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    /// Return the moves legal right now, in scan order.
    ///
    /// While a capture chain is in progress only the chaining piece's
    /// captures are legal.
    pub fn legal_moves(&self) -> MoveList {
        match self.chain {
            Some(sq) => legal_moves_from(&self.board, sq),
            None => generate_moves(&self.board, self.side_to_move),
        }
    }

    /// Apply one move after checking it against [`legal_moves`](Game::legal_moves).
    ///
    /// A capture after which the same piece can capture again leaves the
    /// side to move unchanged and reports [`MoveOutcome::ChainContinues`].
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let legal = self.legal_moves();
        if !legal.as_slice().contains(&mv) {
            return Err(MoveError::NotLegal {
                notation: mv.to_notation(),
            });
        }

        let next = self.board.try_make_move(mv)?;
        if self.chain.is_none() {
            self.history.push(TurnStart {
                board: self.board,
                side: self.side_to_move,
            });
        }
        self.board = next;

        if mv.is_capture() && legal_moves_from(&self.board, mv.to()).has_capture() {
            self.chain = Some(mv.to());
            debug!(%mv, square = %mv.to(), "capture chain continues");
            return Ok(MoveOutcome::ChainContinues(mv.to()));
        }

        self.chain = None;
        self.turn += 1;
        debug!(%mv, side = self.side_to_move.name(), turn = self.turn, "turn complete");
        self.side_to_move = !self.side_to_move;
        Ok(MoveOutcome::TurnComplete)
    }

    /// Apply a whole turn (a move or a capture chain) atomically.
    ///
    /// On error the game is left unchanged.
    pub fn apply_turn(&mut self, turn: &[Move]) -> Result<MoveOutcome, MoveError> {
        let mut scratch = self.clone();
        let mut outcome = MoveOutcome::TurnComplete;
        for &mv in turn {
            outcome = scratch.apply_move(mv)?;
        }
        *self = scratch;
        Ok(outcome)
    }

    /// Roll back to the start of the current turn if a chain is in progress,
    /// otherwise to the start of the previous turn.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo_turn(&mut self) -> bool {
        let Some(start) = self.history.pop() else {
            return false;
        };
        if self.chain.take().is_none() {
            self.turn -= 1;
        }
        self.board = start.board;
        self.side_to_move = start.side;
        debug!(side = start.side.name(), turn = self.turn, "turn undone");
        true
    }

    /// Return the status of the game.
    ///
    /// The game is drawn once `max_turns` turns have been played, and lost
    /// by the side to move when it has no legal move.
    pub fn status(&self, max_turns: Option<u32>) -> GameStatus {
        if self.chain.is_some() {
            return GameStatus::Ongoing;
        }
        if max_turns.is_some_and(|limit| self.turn >= limit) {
            return GameStatus::Draw;
        }
        if generate_moves(&self.board, self.side_to_move).is_empty() {
            return GameStatus::Won(!self.side_to_move);
        }
        GameStatus::Ongoing
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
