use serde::Serialize;

/// Badges and certificates from a HackerRank profile.
///
/// Both sequences preserve page order and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HackerRankStats {
    pub badges: Vec<Badge>,
    pub certificates: Vec<Certificate>,
    pub profile_url: String,
}

/// A single skill badge with its star count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub title: String,
    pub stars: u32,
}

/// A certificate earned on HackerRank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub name: String,
    pub url: String,
    pub verified: bool,
}
