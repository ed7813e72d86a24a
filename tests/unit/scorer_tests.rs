//! Unit tests for round-weighted scoring.

use connections_scorer::models::tile::TileSymbol;
use connections_scorer::puzzle::scorer::{attempts, base_points, score_tiles};
use connections_scorer::puzzle::{calculate_score, is_valid_score_message, render};

fn share(rows: &[&str]) -> String {
    format!("Connections\nPuzzle #250\n{}", rows.join("\n"))
}

#[test]
fn base_points_follow_difficulty() {
    assert_eq!(base_points(TileSymbol::Purple), 10);
    assert_eq!(base_points(TileSymbol::Blue), 8);
    assert_eq!(base_points(TileSymbol::Yellow), 6);
    assert_eq!(base_points(TileSymbol::Green), 4);
}

#[test]
fn four_purple_rounds_score_one_hundred() {
    let text = share(&["🟪🟪🟪🟪", "🟪🟪🟪🟪", "🟪🟪🟪🟪", "🟪🟪🟪🟪"]);
    assert_eq!(calculate_score(&text), 100);
}

#[test]
fn hardest_first_perfect_game() {
    let text = share(&["🟪🟪🟪🟪", "🟦🟦🟦🟦", "🟨🟨🟨🟨", "🟩🟩🟩🟩"]);
    assert_eq!(calculate_score(&text), 40 + 24 + 12 + 4);
}

#[test]
fn easiest_first_perfect_game() {
    let text = share(&["🟩🟩🟩🟩", "🟨🟨🟨🟨", "🟦🟦🟦🟦", "🟪🟪🟪🟪"]);
    assert_eq!(calculate_score(&text), 16 + 18 + 16 + 10);
}

#[test]
fn fifth_round_is_weighted_zero() {
    let text = share(&["🟦🟦🟦🟦"; 5]);
    assert_eq!(calculate_score(&text), 80);
}

#[test]
fn rounds_after_the_fifth_count_at_base() {
    let text = share(&[
        "🟪🟦🟪🟪", "🟪🟦🟪🟪", "🟪🟦🟪🟪", "🟪🟦🟪🟪", "🟪🟦🟪🟪", "🟨🟨🟨🟨", "🟪🟪🟪🟪",
    ]);
    assert_eq!(calculate_score(&text), 6 + 10);
}

#[test]
fn all_mixed_rounds_score_zero_but_are_valid() {
    let text = share(&["🟪🟦🟨🟩", "🟩🟨🟦🟪", "🟪🟪🟦🟦", "🟨🟩🟨🟩"]);
    assert!(is_valid_score_message(&text));
    assert_eq!(calculate_score(&text), 0);
}

#[test]
fn failed_game_scores_only_solved_rounds() {
    let text = share(&["🟨🟨🟨🟨", "🟦🟪🟦🟦", "🟩🟩🟩🟩", "🟦🟪🟦🟦", "🟦🟦🟪🟦", "🟦🟪🟦🟦"]);
    // yellow round 0 (x4), green round 2 (x2)
    assert_eq!(calculate_score(&text), 24 + 8);
}

#[test]
fn token_and_emoji_shares_score_the_same() {
    let emoji = share(&["🟪🟪🟪🟪", "🟩🟦🟩🟩", "🟦🟦🟦🟦", "🟩🟩🟩🟩", "🟨🟨🟨🟨"]);
    let tokens = emoji
        .replace('🟪', ":large_purple_square:")
        .replace('🟦', ":large_blue_square:")
        .replace('🟨', ":large_yellow_square:")
        .replace('🟩', ":large_green_square:");
    assert_eq!(calculate_score(&emoji), calculate_score(&tokens));
    assert_eq!(calculate_score(&emoji), 40 + 16 + 4);
}

#[test]
fn trailing_short_mixed_group_contributes_nothing() {
    let tiles = {
        let mut t = vec![TileSymbol::Purple; 16];
        t.extend([TileSymbol::Blue, TileSymbol::Green]);
        t
    };
    assert_eq!(attempts(&tiles).len(), 5);
    assert_eq!(score_tiles(&tiles), 100);
}

#[test]
fn trailing_short_uniform_group_counts_after_fifth_round() {
    let mut tiles = vec![TileSymbol::Green; 20];
    tiles.extend([TileSymbol::Purple, TileSymbol::Purple]);
    // green x(4+3+2+1+0) then a two-tile purple group at base value
    assert_eq!(score_tiles(&tiles), 40 + 10);
}

#[test]
fn scoring_is_total_over_arbitrary_text() {
    assert_eq!(calculate_score(""), 0);
    assert_eq!(calculate_score("no tiles here"), 0);
    assert_eq!(calculate_score("🟪"), 40);
}

#[test]
fn score_from_rendered_tiles_matches_text_score() {
    let text = share(&["🟦🟦🟦🟦", "🟪🟨🟪🟪", "🟪🟪🟪🟪", "🟨🟨🟨🟨", "🟩🟩🟩🟩"]);
    let tiles = connections_scorer::puzzle::normalize(&text);
    assert_eq!(calculate_score(&render(&tiles)), calculate_score(&text));
}
