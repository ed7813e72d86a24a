//! Puzzle share detection, validation, and scoring.
//!
//! Every function here is pure and total over arbitrary text. Sequencing
//! detector, validator, scorer, and notification is left to
//! [`crate::processor`].

pub mod detector;
pub mod normalizer;
pub mod scorer;
pub mod validator;

pub use detector::{extract_puzzle_number, is_puzzle_message};
pub use normalizer::{normalize, render};
pub use scorer::calculate_score;
pub use validator::{is_valid_score_message, tile_count};

/// Tiles per attempt.
pub const TILES_PER_ATTEMPT: usize = 4;

/// Fewest attempts a completed puzzle can have.
pub const MIN_ATTEMPTS: usize = 4;
