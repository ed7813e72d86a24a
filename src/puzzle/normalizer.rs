//! Converts message text into the ordered sequence of tiles it contains.
//!
//! Slack clients send tiles either as markup tokens (`:large_purple_square:`)
//! or as literal emoji. Tokens are first rewritten to emoji, then every
//! character that is not a tile is dropped.

use crate::models::tile::TileSymbol;

/// Ordered tiles found in `text`, reading left to right, top to bottom.
#[must_use]
pub fn normalize(text: &str) -> Vec<TileSymbol> {
    let substituted = TileSymbol::ALL
        .into_iter()
        .fold(text.to_owned(), |acc, tile| {
            acc.replace(tile.token(), &tile.pictograph().to_string())
        });

    substituted
        .chars()
        .filter_map(TileSymbol::from_pictograph)
        .collect()
}

/// Emoji string for a tile sequence; `normalize(&render(t)) == t`.
#[must_use]
pub fn render(tiles: &[TileSymbol]) -> String {
    tiles.iter().map(|tile| tile.pictograph()).collect()
}
