//! Heuristic detection of team exports inside arbitrary text

use crate::line::{LineKind, classify};

/// Decide whether a text blob plausibly contains a team export.
///
/// True iff at least one line reads as a header and at least one as a move,
/// using the same classification the parser applies. Attribute-only
/// fragments and empty input are rejected. This is a screen for picking a
/// candidate fragment out of a scraped document, not a validation.
pub fn looks_like_team(text: &str) -> bool {
    let mut header_count = 0;
    let mut has_moves = false;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        match classify(line) {
            Some(LineKind::Header(_)) => header_count += 1,
            Some(LineKind::Move(_)) => has_moves = true,
            _ => {}
        }
    }

    header_count >= 1 && has_moves
}
