use serde::Serialize;

/// The external platform a request is directed at.
///
/// Used in error messages and log fields; the `Display` impl renders the
/// platform's human-readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
pub enum Platform {
    LeetCode,
    GeeksforGeeks,
    HackerRank,
    CodeChef,
    Codeforces,
}
