use std::env;
use std::process;

use anyhow::Result;
use terascope_client::{AnalyzerClient, DEFAULT_BASE_URL, fetch_team};
use terascope_notation::validate;

#[tokio::main]
async fn main() -> Result<()> {
    let url = env::args()
        .nth(1)
        .unwrap_or_else(|| "https://pokepast.es/0123456789abcdef".to_string());

    println!("Fetching team from {}...", url);
    let team_text = fetch_team(&url).await?;

    let result = validate(&team_text);
    if !result.is_valid {
        println!("\nTeam failed validation:");
        for error in &result.errors {
            println!("  • {}", error);
        }
        process::exit(1);
    }

    let team = result.team.unwrap_or_default();
    println!("Validated {} Pokemon. Analyzing...\n", team.len());

    let backend = env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let analysis = AnalyzerClient::new(backend).analyze(&team_text).await;

    println!("=== Grade: {} ===\n", analysis.grade);
    for strength in &analysis.strengths {
        println!("+ {} ({})", strength.point, strength.reasoning);
    }
    for weakness in &analysis.weaknesses {
        println!("- {} ({})", weakness.point, weakness.reasoning);
    }
    for threat in &analysis.threats {
        println!("! {} ({})", threat.point, threat.reasoning);
    }
    for suggestion in &analysis.suggestions {
        println!(
            "> [{}] {} ({})",
            suggestion.priority, suggestion.description, suggestion.kind
        );
    }

    Ok(())
}
