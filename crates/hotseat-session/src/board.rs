//! The position store: an 8x8 grid of optionally-occupied squares.

use hotseat_core::{Color, File, Piece, Rank, Square};

/// The authoritative arrangement of pieces.
///
/// Every square holds at most one piece; relocation always clears the
/// source square before writing the destination, so a piece occupies
/// exactly one square at a time.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<(Piece, Color)>; 64],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn starting() -> Self {
        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        let mut board = Board::empty();
        for file in File::ALL {
            let piece = BACK_RANK[file.index() as usize];
            board.place(Square::new(file, Rank::R1), piece, Color::White);
            board.place(Square::new(file, Rank::R2), Piece::Pawn, Color::White);
            board.place(Square::new(file, Rank::R7), Piece::Pawn, Color::Black);
            board.place(Square::new(file, Rank::R8), piece, Color::Black);
        }
        board
    }

    /// Returns the piece and color at the given square, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<(Piece, Color)> {
        self.squares[square.index()]
    }

    /// Puts a piece on a square, replacing any prior occupant.
    pub fn place(&mut self, square: Square, piece: Piece, color: Color) {
        self.squares[square.index()] = Some((piece, color));
    }

    /// Clears a square, returning the removed piece.
    ///
    /// Removing from an empty square is an internal consistency
    /// diagnostic, not a rejection: it is logged and `None` is returned.
    pub fn remove(&mut self, square: Square) -> Option<(Piece, Color)> {
        let removed = self.squares[square.index()].take();
        if removed.is_none() {
            tracing::warn!(%square, "cannot remove: no piece at that square");
        }
        removed
    }

    /// Relocates whatever occupies `from` to `to`, returning the captured
    /// prior occupant of `to`, then empties `from`.
    ///
    /// Performs no validation; legality must already be established.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<(Piece, Color)> {
        let piece = self.squares[from.index()].take();
        std::mem::replace(&mut self.squares[to.index()], piece)
    }

    /// Returns the number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board {{")?;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "    {} ", rank)?;
            for file in File::ALL {
                match self.piece_at(Square::new(file, rank)) {
                    Some((piece, color)) => write!(f, " {}", piece.to_char(color))?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn starting_arrangement() {
        let board = Board::starting();
        assert_eq!(board.occupied_count(), 32);
        assert_eq!(board.piece_at(sq("e1")), Some((Piece::King, Color::White)));
        assert_eq!(board.piece_at(sq("d8")), Some((Piece::Queen, Color::Black)));
        assert_eq!(board.piece_at(sq("a1")), Some((Piece::Rook, Color::White)));
        assert_eq!(board.piece_at(sq("g8")), Some((Piece::Knight, Color::Black)));
        for file in File::ALL {
            let white_pawn = Square::new(file, Rank::R2);
            let black_pawn = Square::new(file, Rank::R7);
            assert_eq!(board.piece_at(white_pawn), Some((Piece::Pawn, Color::White)));
            assert_eq!(board.piece_at(black_pawn), Some((Piece::Pawn, Color::Black)));
        }
        assert_eq!(board.piece_at(sq("e4")), None);
    }

    #[test]
    fn move_piece_relocates() {
        let mut board = Board::starting();
        let captured = board.move_piece(sq("e2"), sq("e4"));
        assert_eq!(captured, None);
        assert_eq!(board.piece_at(sq("e2")), None);
        assert_eq!(board.piece_at(sq("e4")), Some((Piece::Pawn, Color::White)));
    }

    #[test]
    fn move_piece_returns_capture() {
        let mut board = Board::empty();
        board.place(sq("d4"), Piece::Queen, Color::White);
        board.place(sq("d7"), Piece::Pawn, Color::Black);
        let captured = board.move_piece(sq("d4"), sq("d7"));
        assert_eq!(captured, Some((Piece::Pawn, Color::Black)));
        assert_eq!(board.piece_at(sq("d7")), Some((Piece::Queen, Color::White)));
        assert_eq!(board.piece_at(sq("d4")), None);
    }

    #[test]
    fn remove_clears_square() {
        let mut board = Board::starting();
        assert_eq!(board.remove(sq("a2")), Some((Piece::Pawn, Color::White)));
        assert_eq!(board.piece_at(sq("a2")), None);
    }

    #[test]
    fn remove_from_empty_square_is_none() {
        let mut board = Board::empty();
        assert_eq!(board.remove(sq("e4")), None);
    }

    #[test]
    fn default_is_starting() {
        assert_eq!(Board::default(), Board::starting());
    }
}
