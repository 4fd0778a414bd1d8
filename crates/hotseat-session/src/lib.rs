//! Two-player chess session management.
//!
//! This crate holds the stateful core of the workspace:
//! - [`Board`] - the position store, an 8x8 grid of optionally-occupied
//!   squares
//! - [`EnPassantWindow`] - the one-turn capture window opened by a double
//!   pawn push
//! - [`rules`] - pure move-legality validation
//! - [`Game`] - turn and history bookkeeping tying the pieces together
//!
//! # Example
//!
//! ```
//! use hotseat_core::Color;
//! use hotseat_session::Game;
//!
//! let mut game = Game::new();
//! game.try_move_named("e2", "e4").unwrap();
//! assert_eq!(game.turn(), 2);
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```

mod board;
mod en_passant;
mod game;
pub mod rules;

pub use board::Board;
pub use en_passant::EnPassantWindow;
pub use game::Game;
pub use rules::{MoveError, MoveKind};
