use serde::Serialize;

/// Profile data for a Codeforces user.
///
/// Rating and rank fields keep the API's string form; `"N/A"` stands in for
/// values the API omits (e.g. unrated accounts). `total_solved` counts
/// distinct problems with at least one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeforcesStats {
    pub username: String,
    pub rating: String,
    pub max_rating: String,
    pub rank: String,
    pub max_rank: String,
    pub contribution: i64,
    pub friend_count: u32,
    pub avatar: String,
    pub profile_url: String,
    pub total_solved: u32,
}
