//! Team export validation

use indexmap::IndexMap;

use crate::line::{LineKind, classify};
use crate::team::{TeamMember, ValidationResult};

const MAX_TEAM_SIZE: usize = 6;
const MAX_MOVES: usize = 4;

/// Fold state for the line pass: entries committed so far plus the entry
/// currently being built.
#[derive(Default)]
struct Accumulator {
    finished: Vec<TeamMember>,
    current: Option<TeamMember>,
}

impl Accumulator {
    /// Commit the in-progress entry if it earned a slot.
    ///
    /// An entry materializes only once it has a name and at least one move;
    /// anything less is discarded rather than zero-filled.
    fn commit_current(&mut self) {
        if let Some(member) = self.current.take() {
            if !member.name.is_empty() && !member.moves.is_empty() {
                self.finished.push(member);
            }
        }
    }
}

/// Validate a raw team export, accumulating human-readable diagnostics.
///
/// Parsing continues past each malformed construct; the caller gates
/// downstream use on `is_valid`. The structured team is attached only when
/// no diagnostics were produced.
pub fn validate(text: &str) -> ValidationResult {
    if text.trim().is_empty() {
        return ValidationResult::invalid(vec!["Team data is empty".to_string()]);
    }

    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut errors = Vec::new();
    let mut acc = Accumulator::default();

    for (index, raw_line) in normalized.trim().split('\n').enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(kind) = classify(line) else {
            continue;
        };

        match kind {
            LineKind::Header(header) => {
                let (name, item) = split_header(header);
                if name.chars().count() < 2 {
                    errors.push(format!("Line {}: Invalid Pokemon name", line_no));
                } else {
                    acc.commit_current();
                    acc.current = Some(TeamMember::new(name, item.map(str::to_string)));
                }
            }
            LineKind::Ability(rest) => match acc.current.as_mut() {
                Some(member) => member.ability = Some(rest.trim().to_string()),
                None => errors.push(format!("Line {}: Ability specified without Pokemon", line_no)),
            },
            LineKind::Level(rest) => match acc.current.as_mut() {
                Some(member) => match rest.trim().parse::<i64>() {
                    Ok(level @ 1..=100) => member.level = Some(level as u8),
                    _ => errors.push(format!("Line {}: Invalid level (must be 1-100)", line_no)),
                },
                None => errors.push(format!("Line {}: Level specified without Pokemon", line_no)),
            },
            LineKind::TeraType(rest) => match acc.current.as_mut() {
                Some(member) => member.tera_type = Some(rest.trim().to_string()),
                None => {
                    errors.push(format!("Line {}: Tera Type specified without Pokemon", line_no))
                }
            },
            LineKind::Nature(rest) => match acc.current.as_mut() {
                Some(member) => member.nature = Some(rest.trim().to_string()),
                None => errors.push(format!("Line {}: Nature specified without Pokemon", line_no)),
            },
            LineKind::Evs(rest) => match acc.current.as_mut() {
                // A second spread line replaces the first, not merges into it
                Some(member) => member.evs = parse_spread(rest, 252),
                None => errors.push(format!("Line {}: EVs specified without Pokemon", line_no)),
            },
            LineKind::Ivs(rest) => match acc.current.as_mut() {
                Some(member) => member.ivs = parse_spread(rest, 31),
                None => errors.push(format!("Line {}: IVs specified without Pokemon", line_no)),
            },
            LineKind::Move(rest) => match acc.current.as_mut() {
                Some(member) => {
                    let name = rest.trim();
                    if !name.is_empty() {
                        member.moves.push(name.to_string());
                    }
                }
                None => errors.push(format!("Line {}: Move specified without Pokemon", line_no)),
            },
        }
    }

    acc.commit_current();
    let team = acc.finished;

    if team.is_empty() {
        errors.push("No valid Pokemon found in team data".to_string());
    } else if team.len() > MAX_TEAM_SIZE {
        errors.push("Team cannot have more than 6 Pokemon".to_string());
    }

    for (index, member) in team.iter().enumerate() {
        if member.moves.is_empty() {
            errors.push(format!("Pokemon {} ({}) has no moves", index + 1, member.name));
        } else if member.moves.len() > MAX_MOVES {
            errors.push(format!(
                "Pokemon {} ({}) has more than 4 moves",
                index + 1,
                member.name
            ));
        }
    }

    if errors.is_empty() {
        ValidationResult::valid(team)
    } else {
        ValidationResult::invalid(errors)
    }
}

/// Split a header line into name and optional held item on the ` @ `
/// separator. Split happens once; anything after the first separator is
/// the item verbatim.
fn split_header(line: &str) -> (&str, Option<&str>) {
    match line.split_once(" @ ") {
        Some((name, item)) => (name.trim(), Some(item.trim())),
        None => (line.trim(), None),
    }
}

/// Parse a `/`-separated spread, keeping only in-range `<value> <stat>`
/// pairs. The stat key is everything after the first space, so multi-word
/// names survive. Out-of-range and unparseable segments drop silently.
fn parse_spread(text: &str, max: u8) -> IndexMap<String, u8> {
    let mut spread = IndexMap::new();
    for segment in text.split('/') {
        let segment = segment.trim();
        let Some((value, stat)) = segment.split_once(' ') else {
            continue;
        };
        if let Ok(value) = value.parse::<u8>() {
            if value <= max {
                spread.insert(stat.to_string(), value);
            }
        }
    }
    spread
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(name: &str, moves: &[&str]) -> String {
        let mut text = format!("{}\n", name);
        for m in moves {
            text.push_str(&format!("- {}\n", m));
        }
        text
    }

    #[test]
    fn test_empty_input() {
        let result = validate("");
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Team data is empty".to_string()]);
        assert!(result.team.is_none());
    }

    #[test]
    fn test_whitespace_only_input() {
        let result = validate("   \n  ");
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Team data is empty".to_string()]);
        assert!(result.team.is_none());
    }

    #[test]
    fn test_single_member_full_block() {
        let text = "Raging Bolt @ Booster Energy\n\
                    Ability: Protosynthesis\n\
                    Level: 50\n\
                    Tera Type: Fairy\n\
                    EVs: 244 HP / 252 SpA / 12 SpD\n\
                    IVs: 20 Atk\n\
                    - Thunderbolt\n\
                    - Draco Meteor\n\
                    - Thunderclap\n\
                    - Protect";

        let result = validate(text);
        assert!(result.is_valid, "unexpected errors: {:?}", result.errors);

        let team = result.team.unwrap();
        assert_eq!(team.len(), 1);

        let member = &team[0];
        assert_eq!(member.name, "Raging Bolt");
        assert_eq!(member.item.as_deref(), Some("Booster Energy"));
        assert_eq!(member.ability.as_deref(), Some("Protosynthesis"));
        assert_eq!(member.level, Some(50));
        assert_eq!(member.tera_type.as_deref(), Some("Fairy"));
        assert_eq!(member.evs.get("HP"), Some(&244));
        assert_eq!(member.evs.get("SpA"), Some(&252));
        assert_eq!(member.evs.get("SpD"), Some(&12));
        assert_eq!(member.ivs.get("Atk"), Some(&20));
        assert_eq!(
            member.moves,
            vec!["Thunderbolt", "Draco Meteor", "Thunderclap", "Protect"]
        );
    }

    #[test]
    fn test_nature_payload_keeps_colon() {
        let result = validate("Dragonite\nNature: Adamant\n- Extreme Speed");
        let team = result.team.unwrap();
        assert_eq!(team[0].nature.as_deref(), Some(": Adamant"));
    }

    #[test]
    fn test_short_name_header_is_skipped() {
        // The bad header neither starts an entry nor disturbs the current
        // one; the following move still lands on Pikachu
        let text = "Pikachu\n- Thunderbolt\nX\n- Surf";
        let result = validate(text);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Line 3: Invalid Pokemon name".to_string()]);
        assert!(result.team.is_none());
    }

    #[test]
    fn test_short_name_alone_leaves_no_team() {
        let result = validate("X\n- Tackle");
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                "Line 1: Invalid Pokemon name".to_string(),
                "Line 2: Move specified without Pokemon".to_string(),
                "No valid Pokemon found in team data".to_string(),
            ]
        );
    }

    #[test]
    fn test_six_members_valid() {
        let names = ["Koraidon", "Miraidon", "Calyrex", "Zamazenta", "Lunala", "Terapagos"];
        let text: Vec<String> = names.iter().map(|n| block(n, &["Protect"])).collect();
        let result = validate(&text.join("\n"));
        assert!(result.is_valid);
        assert_eq!(result.team.unwrap().len(), 6);
    }

    #[test]
    fn test_seven_members_rejected() {
        let names = [
            "Koraidon", "Miraidon", "Calyrex", "Zamazenta", "Lunala", "Terapagos", "Necrozma",
        ];
        let text: Vec<String> = names.iter().map(|n| block(n, &["Protect"])).collect();
        let result = validate(&text.join("\n"));
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["Team cannot have more than 6 Pokemon".to_string()]
        );
    }

    #[test]
    fn test_five_moves_rejected() {
        let text = block(
            "Annihilape",
            &["Rage Fist", "Drain Punch", "Bulk Up", "Protect", "Taunt"],
        );
        let result = validate(&text);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["Pokemon 1 (Annihilape) has more than 4 moves".to_string()]
        );
    }

    #[test]
    fn test_header_without_moves_yields_no_team() {
        // A moveless entry never materializes, so the team comes up empty
        let result = validate("Garchomp @ Leftovers\nAbility: Rough Skin");
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["No valid Pokemon found in team data".to_string()]
        );
    }

    #[test]
    fn test_out_of_range_ev_segment_dropped_silently() {
        let result = validate("Garchomp\nEVs: 252 Atk / 252 Spe / 999 Def\n- Earthquake");
        assert!(result.is_valid, "unexpected errors: {:?}", result.errors);

        let team = result.team.unwrap();
        assert_eq!(team[0].evs.get("Atk"), Some(&252));
        assert_eq!(team[0].evs.get("Spe"), Some(&252));
        assert!(team[0].evs.get("Def").is_none());
        assert_eq!(team[0].evs.len(), 2);
    }

    #[test]
    fn test_unparseable_spread_segments_dropped() {
        let result = validate("Garchomp\nEVs: lots Atk / 252 / 4 HP\n- Earthquake");
        let team = result.team.unwrap();
        // "lots Atk" fails to parse, "252" has no stat name
        assert_eq!(team[0].evs.len(), 1);
        assert_eq!(team[0].evs.get("HP"), Some(&4));
    }

    #[test]
    fn test_multi_word_stat_key() {
        let result = validate("Garchomp\nEVs: 252 Sp Atk\n- Earthquake");
        let team = result.team.unwrap();
        assert_eq!(team[0].evs.get("Sp Atk"), Some(&252));
    }

    #[test]
    fn test_second_spread_line_replaces_first() {
        let result = validate("Garchomp\nEVs: 4 HP\nEVs: 252 Atk\n- Earthquake");
        let team = result.team.unwrap();
        assert_eq!(team[0].evs.len(), 1);
        assert_eq!(team[0].evs.get("Atk"), Some(&252));
        assert!(team[0].evs.get("HP").is_none());
    }

    #[test]
    fn test_iv_range_tighter_than_ev() {
        let result = validate("Garchomp\nIVs: 31 Spe / 252 Atk\n- Earthquake");
        let team = result.team.unwrap();
        assert_eq!(team[0].ivs.get("Spe"), Some(&31));
        assert!(team[0].ivs.get("Atk").is_none());
    }

    #[test]
    fn test_invalid_level_keeps_field_unset() {
        let result = validate("Garchomp\nLevel: 150\n- Earthquake");
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["Line 2: Invalid level (must be 1-100)".to_string()]
        );
    }

    #[test]
    fn test_non_numeric_level_rejected() {
        let result = validate("Garchomp\nLevel: fifty\n- Earthquake");
        assert_eq!(
            result.errors,
            vec!["Line 2: Invalid level (must be 1-100)".to_string()]
        );
    }

    #[test]
    fn test_level_bounds_accepted() {
        let result = validate("Garchomp\nLevel: 1\n- Earthquake");
        assert_eq!(result.team.unwrap()[0].level, Some(1));

        let result = validate("Garchomp\nLevel: 100\n- Earthquake");
        assert_eq!(result.team.unwrap()[0].level, Some(100));
    }

    #[test]
    fn test_attribute_before_any_header() {
        let result = validate("Ability: Intimidate");
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                "Line 1: Ability specified without Pokemon".to_string(),
                "No valid Pokemon found in team data".to_string(),
            ]
        );
    }

    #[test]
    fn test_move_before_any_header() {
        let result = validate("- Fake Out\nIncineroar\n- Knock Off");
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["Line 1: Move specified without Pokemon".to_string()]
        );
    }

    #[test]
    fn test_crlf_input_normalized() {
        let result = validate("Pikachu\r\n- Thunderbolt\r\n\r\nEevee\r\n- Bite\r\n");
        assert!(result.is_valid);
        let team = result.team.unwrap();
        assert_eq!(team.len(), 2);
        assert_eq!(team[1].name, "Eevee");
    }

    #[test]
    fn test_empty_move_line_ignored() {
        let result = validate("Pikachu\n- Thunderbolt\n-");
        assert!(result.is_valid);
        assert_eq!(result.team.unwrap()[0].moves, vec!["Thunderbolt"]);
    }

    #[test]
    fn test_item_keeps_later_separators() {
        // The header splits once; the remainder is the item verbatim
        let result = validate("Sylveon @ Choice @ Specs\n- Hyper Voice");
        let team = result.team.unwrap();
        assert_eq!(team[0].name, "Sylveon");
        assert_eq!(team[0].item.as_deref(), Some("Choice @ Specs"));
    }

    #[test]
    fn test_split_header_without_item() {
        assert_eq!(split_header("Gholdengo"), ("Gholdengo", None));
    }

    #[test]
    fn test_split_header_with_item() {
        assert_eq!(
            split_header("Gholdengo @ Life Orb"),
            ("Gholdengo", Some("Life Orb"))
        );
    }

    #[test]
    fn test_parse_spread_trims_segments() {
        let spread = parse_spread("  252 HP /   4 Def  ", 252);
        assert_eq!(spread.get("HP"), Some(&252));
        assert_eq!(spread.get("Def"), Some(&4));
    }
}
