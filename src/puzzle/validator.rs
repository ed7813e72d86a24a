//! Tile-count well-formedness check for puzzle shares.

use super::normalizer::normalize;
use super::{MIN_ATTEMPTS, TILES_PER_ATTEMPT};

/// Number of recognised tiles in `text`.
#[must_use]
pub fn tile_count(text: &str) -> usize {
    normalize(text).len()
}

/// Whether `text` holds a whole number of attempts, at least
/// [`MIN_ATTEMPTS`] of them.
#[must_use]
pub fn is_valid_score_message(text: &str) -> bool {
    let count = tile_count(text);
    count >= MIN_ATTEMPTS * TILES_PER_ATTEMPT && count % TILES_PER_ATTEMPT == 0
}
