use tracing::{debug, instrument};

use crate::error::{Result, StatsError};
use crate::model::{CodeChefStats, Platform};
use crate::scraper::{self, digit_runs, parse_selector, select_text};

const PLATFORM: Platform = Platform::CodeChef;
const BASE_URL: &str = "https://www.codechef.com/users/";

const RATING_SELECTOR: &str = "div.rating-number";
const RANK_SELECTOR: &str = "div.rating-ranks strong";
const SOLVED_SELECTOR: &str = "section.rating-data-section.problems-solved";

#[instrument(skip(client))]
pub(crate) async fn get_codechef_stats(
    client: &reqwest::Client,
    username: &str,
) -> Result<CodeChefStats> {
    let username = validate_username(username)?;
    let url = format!("{BASE_URL}{username}");
    let document = scraper::fetch_document(PLATFORM, &username, client.get(&url)).await?;
    let stats = parse_stats(&document, &username, url)?;
    debug!(
        rating = stats.rating,
        rank = stats.rank,
        total_solved = stats.total_solved,
        "parsed CodeChef stats"
    );
    Ok(stats)
}

/// Case-normalize to lowercase and require `^[a-zA-Z0-9_]+$` before any
/// network call.
fn validate_username(username: &str) -> Result<String> {
    let username = username.trim().to_lowercase();
    if username.is_empty()
        || !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(StatsError::InvalidInput {
            platform: PLATFORM,
            username,
        });
    }
    Ok(username)
}

/// Extract rating, rank and solved count from a profile page. Each field
/// degrades to 0 when its node is absent or not in the expected shape; only
/// an unparseable document fails the whole extraction.
fn parse_stats(
    document: &scraper::Html,
    username: &str,
    profile_url: String,
) -> Result<CodeChefStats> {
    let rating_selector = parse_selector(PLATFORM, username, RATING_SELECTOR)?;
    let rating = select_text(&document.root_element(), &rating_selector)
        .parse()
        .unwrap_or(0);

    // Global rank is the first emphasized entry, rendered as "#<digits>".
    let rank_selector = parse_selector(PLATFORM, username, RANK_SELECTOR)?;
    let rank = document
        .select(&rank_selector)
        .next()
        .and_then(|e| e.text().map(|t| t.trim()).find(|t| !t.is_empty()))
        .and_then(|text| text.strip_prefix('#'))
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0);

    let solved_selector = parse_selector(PLATFORM, username, SOLVED_SELECTOR)?;
    let total_solved = document
        .select(&solved_selector)
        .next()
        .map(|section| section.text().collect::<String>())
        .and_then(|text| digit_runs(&text).into_iter().next())
        .unwrap_or(0);

    Ok(CodeChefStats {
        rating,
        rank,
        total_solved,
        profile_url,
    })
}
