//! Core types: configuration, image resources, errors, RNG.
//!
//! ## Modules
//!
//! - `config`: Board sizing and game configuration
//! - `images`: The image resource set tiles draw their faces from
//! - `error`: Error taxonomy for fallible operations
//! - `rng`: Deterministic, seedable RNG with the unbiased shuffle

mod config;
mod error;
mod images;
mod rng;

pub use config::{BoardSize, GameConfig};
pub use error::GameError;
pub use images::{ImageId, ImageSet, DEFAULT_IMAGE_COUNT};
pub use rng::{GameRng, GameRngState};
