//! Team retrieval from paste-hosting sites

use lazy_static::lazy_static;
use regex::Regex;
use terascope_notation::looks_like_team;

use crate::ClientError;

/// Hostnames the paste fetcher will talk to.
const ALLOWED_HOSTS: [&str; 6] = [
    "pokepast.es",
    "www.pokepast.es",
    "pokepaste.es",
    "www.pokepaste.es",
    "pokepaste.net",
    "www.pokepaste.net",
];

lazy_static! {
    static ref PRE_BLOCK: Regex =
        Regex::new(r"(?is)<pre[^>]*>(.*?)</pre>").expect("Failed to compile pre-block regex");
    static ref CODE_BLOCK: Regex =
        Regex::new(r"(?is)<code[^>]*>(.*?)</code>").expect("Failed to compile code-block regex");
    static ref TEXTAREA_BLOCK: Regex = Regex::new(r"(?is)<textarea[^>]*>(.*?)</textarea>")
        .expect("Failed to compile textarea regex");
    static ref TAG: Regex = Regex::new(r"<[^>]*>").expect("Failed to compile tag regex");
}

/// Check a URL against the paste-host allow-list.
pub fn is_allowed_url(url: &str) -> bool {
    match reqwest::Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map(|host| ALLOWED_HOSTS.contains(&host))
            .unwrap_or(false),
        Err(_) => false,
    }
}

/// Fetch team text from an allow-listed paste URL.
///
/// URLs outside the allow-list are rejected outright rather than treated
/// as empty team text, and a page with no recognizable export is an error
/// of its own.
pub async fn fetch_team(url: &str) -> Result<String, ClientError> {
    if !is_allowed_url(url) {
        return Err(ClientError::UnsupportedUrl(url.to_string()));
    }

    let client = reqwest::Client::new();
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!(url = url, status = status.as_u16(), "Paste fetch failed");
        return Err(ClientError::UpstreamStatus(status.as_u16()));
    }

    let html = response.text().await?;
    extract_team_text(&html).ok_or(ClientError::TeamNotFound)
}

/// Pull the first plausible team export out of a paste page.
///
/// Paste sites keep the export in a `<pre>` block; code blocks and
/// textareas are fallbacks. Candidates are screened with
/// [`looks_like_team`] before one is accepted.
pub fn extract_team_text(html: &str) -> Option<String> {
    for block in [&*PRE_BLOCK, &*CODE_BLOCK, &*TEXTAREA_BLOCK] {
        for captures in block.captures_iter(html) {
            let text = decode_entities(&TAG.replace_all(&captures[1], ""));
            if looks_like_team(&text) {
                return Some(clean_team_text(&text));
            }
        }
    }
    None
}

/// Normalize pasted team text: one newline style, trimmed lines, no blanks.
pub fn clean_team_text(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
