//! Session state: the live board, turn counter, history, and captures.

use hotseat_core::{Color, Move, Piece, Square};

use crate::rules::{self, MoveKind};
use crate::{Board, EnPassantWindow, MoveError};

/// A two-player session with full turn and history bookkeeping.
///
/// The [`Board`] is mutated only here, and only after validation has
/// accepted the move, so a rejected request never leaves the position
/// in an intermediate state. History entries are independent snapshots
/// taken at commit time, never references to the live board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Turn counter starting at 1; odd turns are White's.
    turn: u32,
    /// Snapshot per turn: entry 0 is the starting arrangement, entry N
    /// the position after the move played on turn N.
    history: Vec<Board>,
    /// Captured pieces in chronological order.
    captured: Vec<(Piece, Color)>,
    en_passant: Option<EnPassantWindow>,
    /// Set only by an external collaborator (resignation); the legality
    /// and apply paths never populate it.
    winner: Option<Color>,
}

impl Game {
    /// Creates a new session with the standard starting arrangement.
    pub fn new() -> Self {
        Self::from_board(Board::starting())
    }

    /// Creates a session from a custom starting arrangement, with White
    /// to move on turn 1.
    pub fn from_board(board: Board) -> Self {
        Game {
            history: vec![board.clone()],
            board,
            turn: 1,
            captured: Vec::new(),
            en_passant: None,
            winner: None,
        }
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current turn number.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the side whose move it is.
    pub fn side_to_move(&self) -> Color {
        rules::side_to_move(self.turn)
    }

    /// Returns the captured pieces in chronological order.
    pub fn captured(&self) -> &[(Piece, Color)] {
        &self.captured
    }

    /// Returns the position snapshot taken after the move played on
    /// `turn`; entry 0 is the starting arrangement.
    pub fn snapshot_at(&self, turn: u32) -> Option<&Board> {
        self.history.get(turn as usize)
    }

    /// Returns the winner, if one has been declared.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Resigns on behalf of the side to move, declaring the opponent
    /// the winner.
    pub fn resign(&mut self) {
        self.winner = Some(self.side_to_move().opposite());
    }

    /// Checks a move without applying it.
    pub fn is_legal(&self, mv: Move) -> Result<(), MoveError> {
        rules::validate(&self.board, self.en_passant.as_ref(), self.turn, mv).map(|_| ())
    }

    /// Validates and applies a move, advancing the turn on success.
    ///
    /// On rejection nothing changes: no board mutation, no history
    /// entry, no turn advance.
    pub fn try_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let kind = rules::validate(&self.board, self.en_passant.as_ref(), self.turn, mv)?;

        if let Some(captured) = self.board.move_piece(mv.from(), mv.to()) {
            self.captured.push(captured);
        }

        match kind {
            MoveKind::Standard => {}
            MoveKind::EnPassant { capture } => {
                if let Some(pawn) = self.board.remove(capture) {
                    self.captured.push(pawn);
                }
            }
            MoveKind::DoublePush => {
                self.en_passant = Some(EnPassantWindow::after_double_push(self.turn, mv.to()));
            }
        }

        tracing::debug!(%mv, turn = self.turn, "move applied");
        self.history.push(self.board.clone());
        self.turn += 1;
        Ok(())
    }

    /// Validates and applies a move given as a pair of square names.
    pub fn try_move_named(&mut self, from: &str, to: &str) -> Result<(), MoveError> {
        let mv = Move::from_notation(from, to)?;
        self.try_move(mv)
    }

    /// Validates and applies a move given as raw 0-based (file, rank)
    /// pairs; index pairs that do not form a square are rejected as out
    /// of bounds.
    pub fn try_move_indices(&mut self, from: (u8, u8), to: (u8, u8)) -> Result<(), MoveError> {
        let from = Square::from_indices(from.0, from.1).ok_or(MoveError::OutOfBounds)?;
        let to = Square::from_indices(to.0, to.1).ok_or(MoveError::OutOfBounds)?;
        self.try_move(Move::new(from, to))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
