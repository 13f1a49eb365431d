use tracing::{debug, instrument};

use crate::error::{Result, StatsError};
use crate::model::{GfgStats, Platform};
use crate::scraper::{self, digit_runs, parse_selector};

const PLATFORM: Platform = Platform::GeeksforGeeks;

/// Class marker of the container holding the per-difficulty solved counts.
/// The page is a CSS-modules build, so the hash suffix is part of the
/// contract; a markup change only requires updating this constant.
const STATS_CONTAINER_SELECTOR: &str = "div.problemNavbar_head__cKSRi";

/// Difficulty buckets in the order the page renders their counts.
const DIFFICULTY_COUNT: usize = 5;

#[instrument(skip(client))]
pub(crate) async fn get_gfg_stats(client: &reqwest::Client, username: &str) -> Result<GfgStats> {
    let username = scraper::trimmed_username(PLATFORM, username)?;
    let url = format!("https://www.geeksforgeeks.org/user/{username}");
    let document = scraper::fetch_document(PLATFORM, username, client.get(&url)).await?;
    let stats = parse_stats(&document, username, url)?;
    debug!(total_solved = stats.total_solved, "parsed GeeksforGeeks stats");
    Ok(stats)
}

/// Scan the stats container's visible text left to right and assign the
/// first five digit runs positionally to School, Basic, Easy, Medium, Hard.
/// Extra runs are ignored; a shortfall leaves the remaining buckets at 0.
fn parse_stats(document: &scraper::Html, username: &str, profile_url: String) -> Result<GfgStats> {
    let container_selector = parse_selector(PLATFORM, username, STATS_CONTAINER_SELECTOR)?;
    let container = document
        .select(&container_selector)
        .next()
        .ok_or_else(|| StatsError::Parse {
            platform: PLATFORM,
            username: username.to_owned(),
            context: "no problem statistics found".to_string(),
        })?;

    let text: String = container.text().collect();
    let mut counts = [0u32; DIFFICULTY_COUNT];
    for (bucket, value) in counts.iter_mut().zip(digit_runs(&text)) {
        *bucket = value;
    }

    Ok(GfgStats {
        total_solved: counts.iter().sum(),
        school_solved: counts[0],
        basic_solved: counts[1],
        easy_solved: counts[2],
        medium_solved: counts[3],
        hard_solved: counts[4],
        profile_url,
    })
}
