//! The round engine: piles, action tokens, the state machine, observations.
//!
//! ## Key Types
//!
//! - `PileId` / `PileTargets`: The four piles and what each currently shows
//! - `RoundAction`: `draw` or `<pile>-<rank>`
//! - `RoundState`: Turn progression, legality, terminal detection
//! - `PlayerObservation`: The per-player snapshot handed to agents

pub mod action;
pub mod observation;
pub mod pile;
pub mod state;

pub use action::RoundAction;
pub use observation::PlayerObservation;
pub use pile::{PileId, PileTargets};
pub use state::{RoundState, MIN_MOVES_EMPTY_DECK, MIN_MOVES_WITH_DECK};
