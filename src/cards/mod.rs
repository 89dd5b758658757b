//! Cards and the dealer.
//!
//! ## Key Types
//!
//! - `Card`: A rank, ordered numerically, with the adjacency-by-ten test
//! - `Dealer`: Exclusive owner of the draw pile; deals into hands

pub mod card;
pub mod dealer;

pub use card::Card;
pub use dealer::Dealer;
