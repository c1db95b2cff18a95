//! Canonical team export emission

use crate::team::TeamMember;

/// Render a structured team back into export notation.
///
/// Pure and total: assumes a well-formed team and performs no validation.
/// Each member becomes one block of lines, blocks are separated by a single
/// blank line, and spread entries appear in map order.
pub fn format_team(team: &[TeamMember]) -> String {
    team.iter()
        .map(format_member)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_member(member: &TeamMember) -> String {
    let mut out = String::new();

    out.push_str(&member.name);
    if let Some(item) = &member.item {
        out.push_str(" @ ");
        out.push_str(item);
    }
    out.push('\n');

    if let Some(ability) = &member.ability {
        out.push_str(&format!("Ability: {}\n", ability));
    }
    if let Some(level) = member.level {
        out.push_str(&format!("Level: {}\n", level));
    }
    if let Some(tera_type) = &member.tera_type {
        out.push_str(&format!("Tera Type: {}\n", tera_type));
    }
    if let Some(nature) = &member.nature {
        out.push_str(&format!("Nature: {}\n", nature));
    }

    if !member.evs.is_empty() {
        out.push_str(&format!("EVs: {}\n", format_spread(&member.evs)));
    }
    if !member.ivs.is_empty() {
        out.push_str(&format!("IVs: {}\n", format_spread(&member.ivs)));
    }

    for name in &member.moves {
        out.push_str(&format!("- {}\n", name));
    }

    out
}

fn format_spread(spread: &indexmap::IndexMap<String, u8>) -> String {
    spread
        .iter()
        .map(|(stat, value)| format!("{} {}", value, stat))
        .collect::<Vec<_>>()
        .join(" / ")
}
