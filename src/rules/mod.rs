//! Placement rules and round outcomes.
//!
//! The single placement predicate lives here so that legal-move derivation
//! and the deck census can never disagree about what fits on a pile.

pub mod placement;

pub use placement::{PileKind, RoundOutcome};
