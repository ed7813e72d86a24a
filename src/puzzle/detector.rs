//! Recognises messages that look like a shared puzzle result.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::event::{EventKind, InboundEvent};

/// Title line followed by the puzzle number line of a share.
pub const PUZZLE_MARKER: &str = "Connections\nPuzzle #";

static PUZZLE_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"Puzzle #(\d+)").ok());

/// Whether `event` is a message carrying a puzzle share header.
#[must_use]
pub fn is_puzzle_message(event: &InboundEvent) -> bool {
    event.kind == EventKind::Message
        && event
            .text
            .as_deref()
            .is_some_and(|text| !text.is_empty() && text.contains(PUZZLE_MARKER))
}

/// Puzzle number from the first `Puzzle #<digits>` in `text`.
///
/// Returns `None` when the pattern is absent or the number does not fit.
#[must_use]
pub fn extract_puzzle_number(text: &str) -> Option<u32> {
    PUZZLE_NUMBER
        .as_ref()?
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}
