//! Move representation.

use std::fmt;

use crate::{NotationError, Square};

/// A move request: a source and a destination square.
///
/// Carries no legality information of its own; whether the move is
/// playable is decided against a position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Parses a move from a pair of square names (e.g. "e2", "e4").
    pub fn from_notation(from: &str, to: &str) -> Result<Self, NotationError> {
        Ok(Move {
            from: from.parse()?,
            to: to.parse()?,
        })
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the signed file delta from source to destination.
    #[inline]
    pub const fn file_delta(self) -> i8 {
        self.to.file().index() as i8 - self.from.file().index() as i8
    }

    /// Returns the signed rank delta from source to destination.
    #[inline]
    pub const fn rank_delta(self) -> i8 {
        self.to.rank().index() as i8 - self.from.rank().index() as i8
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{File, Rank};

    #[test]
    fn move_endpoints() {
        let e2 = Square::new(File::E, Rank::R2);
        let e4 = Square::new(File::E, Rank::R4);
        let m = Move::new(e2, e4);
        assert_eq!(m.from(), e2);
        assert_eq!(m.to(), e4);
    }

    #[test]
    fn move_from_notation() {
        let m = Move::from_notation("e2", "e4").unwrap();
        assert_eq!(m.from().to_string(), "e2");
        assert_eq!(m.to().to_string(), "e4");

        assert!(Move::from_notation("e9", "e4").is_err());
        assert!(Move::from_notation("e2", "x4").is_err());
    }

    #[test]
    fn move_deltas() {
        let m = Move::from_notation("e2", "e4").unwrap();
        assert_eq!(m.file_delta(), 0);
        assert_eq!(m.rank_delta(), 2);

        let m = Move::from_notation("g8", "f6").unwrap();
        assert_eq!(m.file_delta(), -1);
        assert_eq!(m.rank_delta(), -2);
    }

    #[test]
    fn move_debug_display() {
        let m = Move::from_notation("e2", "e4").unwrap();
        assert_eq!(format!("{:?}", m), "Move(e2e4)");
        assert_eq!(format!("{}", m), "e2e4");
    }
}
