//! Pure move-legality validation.
//!
//! [`validate`] decides a move against the board, the en-passant window,
//! and the turn counter without mutating any of them. Sliding pieces
//! share one scan parametrized by a per-piece axis set.

use hotseat_core::{Color, Move, NotationError, Piece, Square};
use thiserror::Error;

use crate::{Board, EnPassantWindow};

/// Why a proposed move was refused.
///
/// Every variant is recoverable: the caller reports the reason and
/// prompts for another move.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    InvalidNotation(#[from] NotationError),

    #[error("coordinate is off the board")]
    OutOfBounds,

    #[error("no piece at {0}")]
    EmptySource(Square),

    #[error("it is {0}'s turn to move")]
    WrongTurn(Color),

    #[error("cannot capture your own piece at {0}")]
    FriendlyCapture(Square),

    #[error("{piece} cannot move from {from} to {to}")]
    IllegalPattern {
        piece: Piece,
        from: Square,
        to: Square,
    },
}

/// How an accepted move is to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Plain relocation, capturing whatever occupies the destination.
    Standard,
    /// Pawn double push; opens an en-passant window.
    DoublePush,
    /// En-passant capture; the enemy pawn to remove sits on `capture`,
    /// not on the destination square.
    EnPassant { capture: Square },
}

/// The side whose move it is on the given turn (odd turns are White's).
#[inline]
pub const fn side_to_move(turn: u32) -> Color {
    if turn % 2 == 1 {
        Color::White
    } else {
        Color::Black
    }
}

/// Decides whether `mv` is legal for the side to move on `turn`.
///
/// Checks run in a fixed order and the first failure wins: source
/// occupancy, turn parity, friendly capture, then the piece-specific
/// movement pattern.
pub fn validate(
    board: &Board,
    window: Option<&EnPassantWindow>,
    turn: u32,
    mv: Move,
) -> Result<MoveKind, MoveError> {
    let (piece, color) = board
        .piece_at(mv.from())
        .ok_or(MoveError::EmptySource(mv.from()))?;

    let to_move = side_to_move(turn);
    if color != to_move {
        return Err(MoveError::WrongTurn(to_move));
    }

    let target = board.piece_at(mv.to());
    if let Some((_, target_color)) = target {
        if target_color == color {
            return Err(MoveError::FriendlyCapture(mv.to()));
        }
    }

    let kind = match piece {
        Piece::Pawn => pawn_pattern(board, window, turn, color, mv, target.is_some()),
        Piece::Knight => knight_pattern(mv),
        Piece::King => king_pattern(mv),
        Piece::Bishop | Piece::Rook | Piece::Queen => {
            sliding_pattern(board, mv, sliding_axes(piece))
        }
    };

    kind.ok_or(MoveError::IllegalPattern {
        piece,
        from: mv.from(),
        to: mv.to(),
    })
}

const ORTHOGONAL_AXES: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL_AXES: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const QUEEN_AXES: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The movement axes of a sliding piece; the axis set is per-piece data,
/// the scan is shared.
fn sliding_axes(piece: Piece) -> &'static [(i8, i8)] {
    match piece {
        Piece::Rook => &ORTHOGONAL_AXES,
        Piece::Bishop => &DIAGONAL_AXES,
        Piece::Queen => &QUEEN_AXES,
        _ => &[],
    }
}

fn pawn_pattern(
    board: &Board,
    window: Option<&EnPassantWindow>,
    turn: u32,
    color: Color,
    mv: Move,
    capturing: bool,
) -> Option<MoveKind> {
    let direction = color.pawn_direction();
    let file_delta = mv.file_delta();
    let rank_delta = mv.rank_delta();

    // En passant is decided against the window as it stood before this
    // move, starting from one of the two squares flanking the pushed
    // pawn and landing one rank forward on the pushed pawn's file.
    if let Some(pawn_square) = window.and_then(|w| w.eligible_capture(turn, mv.from())) {
        if rank_delta == direction && mv.to().file() == pawn_square.file() {
            return Some(MoveKind::EnPassant {
                capture: pawn_square,
            });
        }
    }

    // Single push onto an empty square.
    if rank_delta == direction && file_delta == 0 && !capturing {
        return Some(MoveKind::Standard);
    }

    // Diagonal single-step capture.
    if rank_delta == direction && file_delta.abs() == 1 && capturing {
        return Some(MoveKind::Standard);
    }

    // Double push from the home rank, both squares on the path empty.
    if rank_delta == 2 * direction && file_delta == 0 && mv.from().rank() == color.pawn_home_rank()
    {
        let intermediate = mv.from().offset(0, direction)?;
        if board.piece_at(intermediate).is_none() && !capturing {
            return Some(MoveKind::DoublePush);
        }
    }

    None
}

fn knight_pattern(mv: Move) -> Option<MoveKind> {
    let file_delta = mv.file_delta().abs();
    let rank_delta = mv.rank_delta().abs();
    if (file_delta, rank_delta) == (1, 2) || (file_delta, rank_delta) == (2, 1) {
        Some(MoveKind::Standard)
    } else {
        None
    }
}

fn king_pattern(mv: Move) -> Option<MoveKind> {
    let file_delta = mv.file_delta().abs();
    let rank_delta = mv.rank_delta().abs();
    if file_delta <= 1 && rank_delta <= 1 && (file_delta, rank_delta) != (0, 0) {
        Some(MoveKind::Standard)
    } else {
        None
    }
}

fn sliding_pattern(board: &Board, mv: Move, axes: &[(i8, i8)]) -> Option<MoveKind> {
    let file_delta = mv.file_delta();
    let rank_delta = mv.rank_delta();
    let distance = file_delta.abs().max(rank_delta.abs());
    if distance == 0 {
        return None;
    }

    let axis = (file_delta.signum(), rank_delta.signum());
    if !axes.contains(&axis) {
        return None;
    }
    // The whole delta must lie on the axis, not just its direction.
    if file_delta != axis.0 * distance || rank_delta != axis.1 * distance {
        return None;
    }

    // Every square strictly between source and destination must be
    // empty; the destination itself may hold an enemy piece.
    let mut square = mv.from();
    for _ in 1..distance {
        square = square.offset(axis.0, axis.1)?;
        if board.piece_at(square).is_some() {
            return None;
        }
    }
    Some(MoveKind::Standard)
}
