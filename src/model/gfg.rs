use serde::Serialize;

/// Per-difficulty solved counts for a GeeksforGeeks user.
///
/// `total_solved` is always the sum of the five difficulty fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GfgStats {
    pub total_solved: u32,
    pub school_solved: u32,
    pub basic_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
    pub profile_url: String,
}
