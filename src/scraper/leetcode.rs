use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{Result, StatsError};
use crate::model::{LeetCodeStats, Platform};
use crate::scraper;

const PLATFORM: Platform = Platform::LeetCode;
const GRAPHQL_URL: &str = "https://leetcode.com/graphql";

/// Explicit per-request budget; exceeding it surfaces as [`StatsError::Timeout`].
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Fixed pre-call delay, local to the request, to throttle outbound volume.
const PRE_CALL_DELAY: Duration = Duration::from_millis(500);

const USER_PROFILE_QUERY: &str = r"
query getUserProfile($username: String!) {
    matchedUser(username: $username) {
        username
        profile {
            ranking
        }
        submitStatsGlobal {
            acSubmissionNum {
                difficulty
                count
            }
        }
    }
}
";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    errors: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    data: Option<ResponseData>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseData {
    #[serde(rename = "matchedUser")]
    matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
struct MatchedUser {
    #[serde(default)]
    profile: Profile,
    #[serde(rename = "submitStatsGlobal", default)]
    submit_stats: SubmitStats,
}

#[derive(Debug, Default, Deserialize)]
struct Profile {
    #[serde(default)]
    ranking: u32,
}

#[derive(Debug, Default, Deserialize)]
struct SubmitStats {
    #[serde(rename = "acSubmissionNum", default)]
    accepted: Vec<DifficultyCount>,
}

#[derive(Debug, Deserialize)]
struct DifficultyCount {
    difficulty: String,
    count: u32,
}

#[instrument(skip(client))]
pub(crate) async fn get_leetcode_stats(
    client: &reqwest::Client,
    username: &str,
) -> Result<LeetCodeStats> {
    let username = scraper::trimmed_username(PLATFORM, username)?;

    // Self-throttle before every call; no shared state, so concurrent
    // requests are not held up by each other.
    tokio::time::sleep(PRE_CALL_DELAY).await;

    let payload = serde_json::json!({
        "query": USER_PROFILE_QUERY,
        "variables": { "username": username },
    });

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(REFERER, HeaderValue::from_static("https://leetcode.com/"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://leetcode.com"));

    let request = client
        .post(GRAPHQL_URL)
        .headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .json(&payload);

    let body = scraper::fetch_text(PLATFORM, username, request)
        .await
        .map_err(mark_timeout)?;

    let response: GraphQlResponse =
        serde_json::from_str(&body).map_err(|e| StatsError::Parse {
            platform: PLATFORM,
            username: username.to_owned(),
            context: format!("malformed GraphQL response: {e}"),
        })?;

    let stats = normalize_response(response, username)?;
    debug!(
        total_solved = stats.total_solved,
        ranking = stats.ranking,
        "parsed LeetCode stats"
    );
    Ok(stats)
}

/// The 5 second budget is the only timeout that maps to `Timeout`; other
/// transport failures stay `Http`.
fn mark_timeout(err: StatsError) -> StatsError {
    match err {
        StatsError::Http {
            platform,
            username,
            source,
        } if source.is_timeout() => StatsError::Timeout { platform, username },
        other => other,
    }
}

fn normalize_response(response: GraphQlResponse, username: &str) -> Result<LeetCodeStats> {
    // Any errors key fails the request, even an empty list.
    if let Some(errors) = response.errors {
        return Err(StatsError::Parse {
            platform: PLATFORM,
            username: username.to_owned(),
            context: format!("GraphQL errors: {errors:?}"),
        });
    }

    let user = response
        .data
        .unwrap_or_default()
        .matched_user
        .ok_or_else(|| StatsError::NotFound {
            platform: PLATFORM,
            username: username.to_owned(),
        })?;

    // Accepted-submission buckets are keyed by upper-cased difficulty.
    let bucket = |name: &str| {
        user.submit_stats
            .accepted
            .iter()
            .find(|b| b.difficulty.to_uppercase() == name)
            .map(|b| b.count)
            .unwrap_or(0)
    };

    Ok(LeetCodeStats {
        total_solved: bucket("ALL"),
        easy_solved: bucket("EASY"),
        medium_solved: bucket("MEDIUM"),
        hard_solved: bucket("HARD"),
        ranking: user.profile.ranking,
        profile_url: format!("https://leetcode.com/{username}/"),
    })
}
