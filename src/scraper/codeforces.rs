use itertools::Itertools;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{Result, StatsError};
use crate::model::{CodeforcesStats, Platform};
use crate::scraper;

const PLATFORM: Platform = Platform::Codeforces;
const API_BASE: &str = "https://codeforces.com/api";

/// Page size for the submissions enumeration; one call covers the whole
/// history for all but the most prolific accounts.
const SUBMISSION_COUNT: u32 = 10_000;

/// The sentinel for rating/rank values the API omits (unrated accounts).
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    status: String,
    #[serde(default)]
    result: Vec<UserInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct UserInfo {
    #[serde(default)]
    handle: String,
    rating: Option<i64>,
    #[serde(rename = "maxRating")]
    max_rating: Option<i64>,
    rank: Option<String>,
    #[serde(rename = "maxRank")]
    max_rank: Option<String>,
    #[serde(default)]
    contribution: i64,
    #[serde(rename = "friendOfCount", default)]
    friend_count: u32,
    #[serde(default)]
    avatar: String,
}

#[derive(Debug, Deserialize)]
struct SubmissionsResponse {
    status: String,
    #[serde(default)]
    result: Vec<Submission>,
}

#[derive(Debug, Deserialize)]
struct Submission {
    verdict: Option<String>,
    problem: Problem,
}

#[derive(Debug, Deserialize)]
struct Problem {
    #[serde(rename = "contestId")]
    contest_id: Option<i64>,
    #[serde(default)]
    index: String,
    #[serde(default)]
    name: String,
}

#[instrument(skip(client))]
pub(crate) async fn get_codeforces_stats(
    client: &reqwest::Client,
    username: &str,
) -> Result<CodeforcesStats> {
    let username = scraper::trimmed_username(PLATFORM, username)?;

    let info_url = format!("{API_BASE}/user.info?handles={username}");
    let body = scraper::fetch_text(PLATFORM, username, client.get(&info_url)).await?;
    let info: UserInfoResponse = serde_json::from_str(&body).map_err(|e| StatsError::Parse {
        platform: PLATFORM,
        username: username.to_owned(),
        context: format!("malformed user.info response: {e}"),
    })?;

    // The submissions call only runs once the handle is known to exist.
    let stats = normalize_info(info, username)?;
    let total_solved = fetch_solved_count(client, username).await;

    debug!(
        rating = %stats.rating,
        total_solved,
        "parsed Codeforces stats"
    );
    Ok(CodeforcesStats {
        total_solved,
        ..stats
    })
}

/// The API signals an unknown handle with a non-"OK" status rather than an
/// HTTP error.
fn normalize_info(response: UserInfoResponse, username: &str) -> Result<CodeforcesStats> {
    if response.status != "OK" {
        return Err(StatsError::NotFound {
            platform: PLATFORM,
            username: username.to_owned(),
        });
    }
    let user = response
        .result
        .into_iter()
        .next()
        .ok_or_else(|| StatsError::NotFound {
            platform: PLATFORM,
            username: username.to_owned(),
        })?;

    Ok(CodeforcesStats {
        username: user.handle,
        rating: user
            .rating
            .map_or_else(|| NOT_AVAILABLE.to_string(), |r| r.to_string()),
        max_rating: user
            .max_rating
            .map_or_else(|| NOT_AVAILABLE.to_string(), |r| r.to_string()),
        rank: user.rank.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        max_rank: user.max_rank.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        contribution: user.contribution,
        friend_count: user.friend_count,
        avatar: user.avatar,
        profile_url: format!("https://codeforces.com/profile/{username}"),
        total_solved: 0,
    })
}

/// Enumerate submissions and count distinct accepted problems. Any failure
/// here degrades the count to 0 instead of failing the request; the
/// user-info success is sufficient to return a result.
async fn fetch_solved_count(client: &reqwest::Client, username: &str) -> u32 {
    let url = format!("{API_BASE}/user.status?handle={username}&from=1&count={SUBMISSION_COUNT}");
    let body = match scraper::fetch_text(PLATFORM, username, client.get(&url)).await {
        Ok(body) => body,
        Err(e) => {
            debug!(error = %e, "submissions call failed, defaulting solved count to 0");
            return 0;
        }
    };
    match serde_json::from_str::<SubmissionsResponse>(&body) {
        Ok(submissions) => count_solved(&submissions),
        Err(e) => {
            debug!(error = %e, "malformed user.status response, defaulting solved count to 0");
            0
        }
    }
}

/// A problem counts once no matter how many accepted submissions it has;
/// identity is the (contest id, problem index) pair. The name is part of
/// the key as well, so gym and course problems without a contest id do not
/// collapse when they share an index letter.
fn count_solved(submissions: &SubmissionsResponse) -> u32 {
    if submissions.status != "OK" {
        return 0;
    }
    submissions
        .result
        .iter()
        .filter(|s| s.verdict.as_deref() == Some("OK"))
        .map(|s| {
            (
                s.problem.contest_id,
                s.problem.index.as_str(),
                s.problem.name.as_str(),
            )
        })
        .unique()
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_submissions_are_deduplicated_by_problem() {
        let submissions: SubmissionsResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "result": [
                    {"verdict": "OK", "problem": {"contestId": 1, "index": "A"}},
                    {"verdict": "OK", "problem": {"contestId": 1, "index": "A"}},
                    {"verdict": "WRONG_ANSWER", "problem": {"contestId": 1, "index": "B"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(count_solved(&submissions), 1);
    }

    #[test]
    fn distinct_problems_each_count_once() {
        let submissions: SubmissionsResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "result": [
                    {"verdict": "OK", "problem": {"contestId": 1, "index": "A"}},
                    {"verdict": "OK", "problem": {"contestId": 1, "index": "B"}},
                    {"verdict": "OK", "problem": {"contestId": 2, "index": "A"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(count_solved(&submissions), 3);
    }

    #[test]
    fn problems_without_contest_id_are_told_apart_by_name() {
        let submissions: SubmissionsResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "result": [
                    {"verdict": "OK", "problem": {"index": "A", "name": "Watermelon"}},
                    {"verdict": "OK", "problem": {"index": "A", "name": "Theatre Square"}},
                    {"verdict": "OK", "problem": {"index": "A", "name": "Watermelon"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(count_solved(&submissions), 2);
    }

    #[test]
    fn non_ok_submissions_status_counts_zero() {
        let submissions: SubmissionsResponse = serde_json::from_str(
            r#"{"status": "FAILED", "result": []}"#,
        )
        .unwrap();
        assert_eq!(count_solved(&submissions), 0);
    }

    #[test]
    fn non_ok_info_status_is_not_found() {
        let response: UserInfoResponse =
            serde_json::from_str(r#"{"status": "FAILED", "result": []}"#).unwrap();
        let err = normalize_info(response, "ghost").unwrap_err();
        assert!(matches!(err, StatsError::NotFound { .. }));
    }

    #[test]
    fn absent_scalars_fall_back_to_sentinels() {
        let response: UserInfoResponse = serde_json::from_str(
            r#"{"status": "OK", "result": [{"handle": "newbie_7"}]}"#,
        )
        .unwrap();
        let stats = normalize_info(response, "newbie_7").unwrap();
        assert_eq!(stats.username, "newbie_7");
        assert_eq!(stats.rating, "N/A");
        assert_eq!(stats.max_rating, "N/A");
        assert_eq!(stats.rank, "N/A");
        assert_eq!(stats.max_rank, "N/A");
        assert_eq!(stats.contribution, 0);
        assert_eq!(stats.friend_count, 0);
        assert_eq!(stats.avatar, "");
        assert_eq!(stats.profile_url, "https://codeforces.com/profile/newbie_7");
    }

    #[test]
    fn populated_scalars_are_stringified() {
        let response: UserInfoResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "result": [{
                    "handle": "tourist",
                    "rating": 3822,
                    "maxRating": 4009,
                    "rank": "legendary grandmaster",
                    "maxRank": "tourist",
                    "contribution": 128,
                    "friendOfCount": 61000,
                    "avatar": "https://userpic.codeforces.org/x.jpg"
                }]
            }"#,
        )
        .unwrap();
        let stats = normalize_info(response, "tourist").unwrap();
        assert_eq!(stats.rating, "3822");
        assert_eq!(stats.max_rating, "4009");
        assert_eq!(stats.rank, "legendary grandmaster");
        assert_eq!(stats.contribution, 128);
        assert_eq!(stats.friend_count, 61000);
    }

    #[tokio::test]
    #[ignore = "hits the live Codeforces API"]
    async fn fetches_a_live_profile() {
        let client = reqwest::Client::new();
        let stats = get_codeforces_stats(&client, "tourist").await.unwrap();
        assert_eq!(stats.username, "tourist");
        assert!(stats.total_solved > 0);
    }
}
