//! Neural network input encoding.
//!
//! ## Overview
//!
//! - **Tensor**: `EncodedState`, a flat `f32` buffer with a shape
//! - **Encoding**: `StateEncoder` trait and the `ObservationEncoder` rank-plane encoder
//! - **Action space**: dense ids for `RoundAction`, plus a legal-action mask
//!
//! ## Usage
//!
//! ```
//! use the_game::game::TheGame;
//! use the_game::nn::{ObservationEncoder, StateEncoder};
//!
//! let mut game = TheGame::new(42).unwrap();
//! let obs = game.state(game.current_player()).unwrap();
//!
//! let encoder = ObservationEncoder::new(98);
//! let encoded = encoder.encode(&obs);
//! assert_eq!(encoded.shape, vec![4, 100]);
//!
//! let mask = encoder.legal_mask(&obs);
//! assert_eq!(mask.len(), encoder.action_space_size());
//! ```

pub mod encoder;
pub mod tensor;

pub use encoder::{ObservationEncoder, StateEncoder};
pub use tensor::EncodedState;
