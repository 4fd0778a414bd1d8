//! Core types for hotseat chess.
//!
//! This crate provides the fundamental value types shared across the
//! workspace:
//! - [`Color`] and [`Piece`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates, including
//!   the algebraic notation codec ("a1" through "h8")
//! - [`Move`] for move requests

mod color;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use mov::Move;
pub use piece::Piece;
pub use square::{File, NotationError, Rank, Square};
