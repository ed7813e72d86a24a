//! Unit tests for tile-count validation.

use connections_scorer::puzzle::{is_valid_score_message, tile_count};

fn grid(tiles: usize) -> String {
    let mut text = String::from("Connections\nPuzzle #100\n");
    for i in 0..tiles {
        text.push('🟩');
        if i % 4 == 3 {
            text.push('\n');
        }
    }
    text
}

#[test]
fn sixteen_tiles_is_valid() {
    assert!(is_valid_score_message(&grid(16)));
}

#[test]
fn longer_whole_grids_are_valid() {
    assert!(is_valid_score_message(&grid(20)));
    assert!(is_valid_score_message(&grid(28)));
}

#[test]
fn fifteen_tiles_is_invalid() {
    assert_eq!(tile_count(&grid(15)), 15);
    assert!(!is_valid_score_message(&grid(15)));
}

#[test]
fn twelve_tiles_is_too_few() {
    assert!(!is_valid_score_message(&grid(12)));
}

#[test]
fn partial_attempt_is_invalid() {
    assert!(!is_valid_score_message(&grid(18)));
}

#[test]
fn validity_matches_count_rule() {
    for count in 0..40 {
        let expected = count >= 16 && count % 4 == 0;
        assert_eq!(is_valid_score_message(&grid(count)), expected, "count {count}");
    }
}

#[test]
fn non_tile_squares_do_not_count() {
    let text = format!("{}🟥🟥🟥🟥", grid(16));
    assert_eq!(tile_count(&text), 16);
    assert!(is_valid_score_message(&text));
}
