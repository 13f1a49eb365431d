use serde::Serialize;

/// Rating, global rank and solved count for a CodeChef user.
///
/// Fields the profile page does not expose for a user default to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeChefStats {
    pub rating: u32,
    pub rank: u32,
    pub total_solved: u32,
    pub profile_url: String,
}
