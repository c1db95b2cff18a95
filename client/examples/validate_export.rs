use std::io::Read;
use std::process;

use anyhow::Result;
use terascope_notation::{format_team, validate};

fn main() -> Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let result = validate(&input);
    if !result.is_valid {
        eprintln!("Team failed validation:");
        for error in &result.errors {
            eprintln!("  • {}", error);
        }
        process::exit(1);
    }

    let team = result.team.unwrap_or_default();
    eprintln!("Valid team with {} Pokemon. Canonical form:\n", team.len());
    print!("{}", format_team(&team));

    Ok(())
}
