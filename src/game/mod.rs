//! A single dealt round of The Game.
//!
//! `TheGameBuilder` shuffles a deck, deals opening hands and opens a
//! `RoundState`. `TheGame` then drives it one validated action at a time:
//! - 1-5 players (any count up to 255 is accepted)
//! - 98-card deck by default, ranks 2-99
//! - Opening hands of 8 solo, 7 for two, 6 otherwise
//!
//! Multi-round matches are left to the caller.

mod table;

pub use table::{TheGame, TheGameBuilder};
