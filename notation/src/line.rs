//! Line classification for the team export format

/// Classified line of a team export, carrying the attribute payload.
///
/// Payloads are the raw remainder after the matched prefix; trimming is the
/// caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Starts a new entry: species/nickname plus optional held item
    Header(&'a str),
    Ability(&'a str),
    Level(&'a str),
    TeraType(&'a str),
    Nature(&'a str),
    Evs(&'a str),
    Ivs(&'a str),
    Move(&'a str),
}

/// Prefixes that disqualify a line from being a header.
const ATTRIBUTE_PREFIXES: [&str; 8] = [
    " ",
    "-",
    "EVs:",
    "IVs:",
    "Ability:",
    "Nature",
    "Level:",
    "Tera Type:",
];

/// Classify one line of a team export by prefix precedence.
///
/// Header detection is exclusion-based: any line that does not open with an
/// attribute prefix introduces a new entry. Returns `None` for indented
/// lines that match no attribute either; the format skips those.
///
/// The nature branch strips only the literal token `Nature`, not `Nature:`,
/// so a `Nature: Adamant` line yields the payload `: Adamant`. Team export
/// tools in the wild rely on this leniency; do not normalize it.
pub fn classify(line: &str) -> Option<LineKind<'_>> {
    if !ATTRIBUTE_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return Some(LineKind::Header(line));
    }
    if let Some(rest) = line.strip_prefix("Ability:") {
        return Some(LineKind::Ability(rest));
    }
    if let Some(rest) = line.strip_prefix("Level:") {
        return Some(LineKind::Level(rest));
    }
    if let Some(rest) = line.strip_prefix("Tera Type:") {
        return Some(LineKind::TeraType(rest));
    }
    if let Some(rest) = line.strip_prefix("Nature") {
        return Some(LineKind::Nature(rest));
    }
    if let Some(rest) = line.strip_prefix("EVs:") {
        return Some(LineKind::Evs(rest));
    }
    if let Some(rest) = line.strip_prefix("IVs:") {
        return Some(LineKind::Ivs(rest));
    }
    if let Some(rest) = line.strip_prefix('-') {
        return Some(LineKind::Move(rest));
    }
    None
}
