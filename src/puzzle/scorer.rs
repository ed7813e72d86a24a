//! Round-weighted scoring of a puzzle share.
//!
//! Tiles are grouped into attempts of four in message order. An attempt
//! whose tiles all share one colour earns that colour's base points, scaled
//! by how early it was solved:
//!
//! | Colour | Base |
//! |--------|------|
//! | Purple | 10   |
//! | Blue   | 8    |
//! | Yellow | 6    |
//! | Green  | 4    |
//!
//! Rounds 0 through 4 are weighted `4 - round`, so the fifth round always
//! earns zero. Later rounds are counted at base value.

use crate::models::tile::TileSymbol;

use super::normalizer::normalize;
use super::TILES_PER_ATTEMPT;

/// Last round index that receives the `4 - round` weighting.
const LAST_WEIGHTED_ROUND: usize = 4;

/// Points for an attempt made entirely of `tile`.
#[must_use]
pub const fn base_points(tile: TileSymbol) -> u32 {
    match tile {
        TileSymbol::Purple => 10,
        TileSymbol::Blue => 8,
        TileSymbol::Yellow => 6,
        TileSymbol::Green => 4,
    }
}

/// Split tiles into consecutive attempts; the last may be short.
#[must_use]
pub fn attempts(tiles: &[TileSymbol]) -> Vec<&[TileSymbol]> {
    tiles.chunks(TILES_PER_ATTEMPT).collect()
}

/// Colour shared by every tile of `attempt`, if there is one.
///
/// A short trailing attempt still counts as uniform when its tiles agree.
#[must_use]
pub fn uniform_color(attempt: &[TileSymbol]) -> Option<TileSymbol> {
    let (first, rest) = attempt.split_first()?;
    rest.iter().all(|tile| tile == first).then_some(*first)
}

/// Multiplier applied to the base points of round `round` (zero-based).
#[must_use]
pub fn round_weight(round: usize) -> u32 {
    if round <= LAST_WEIGHTED_ROUND {
        // 0..=4 always fits.
        u32::try_from(LAST_WEIGHTED_ROUND - round).unwrap_or(0)
    } else {
        1
    }
}

/// Weighted contribution of one attempt.
#[must_use]
pub fn round_points(round: usize, attempt: &[TileSymbol]) -> u32 {
    uniform_color(attempt).map_or(0, |tile| base_points(tile) * round_weight(round))
}

/// Score a share. Callers should gate on
/// [`is_valid_score_message`](super::is_valid_score_message) first; any
/// text still yields a number.
#[must_use]
pub fn calculate_score(text: &str) -> u32 {
    score_tiles(&normalize(text))
}

/// Score an already-normalised tile sequence.
#[must_use]
pub fn score_tiles(tiles: &[TileSymbol]) -> u32 {
    attempts(tiles)
        .into_iter()
        .enumerate()
        .fold(0u32, |total, (round, attempt)| {
            total.saturating_add(round_points(round, attempt))
        })
}
