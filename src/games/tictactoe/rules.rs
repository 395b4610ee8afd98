//! Game rules for tic-tac-toe.
//!
//! Pure predicates over a [`Board`](super::Board). They never mutate and
//! never fail, so the engine and tests can call them freely.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_win, winning_line};
