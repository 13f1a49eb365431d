use serde::Serialize;

/// Solved-problem counts and ranking for a LeetCode user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeetCodeStats {
    pub total_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
    pub ranking: u32,
    pub profile_url: String,
}
