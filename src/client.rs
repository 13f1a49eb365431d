use std::time::Duration;

use tracing::instrument;

use crate::error::Result;
use crate::model::*;
use crate::scraper;

/// Client-wide timeout for platforms without an explicit per-request budget.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The main entry point for fetching profile statistics.
///
/// `StatsClient` wraps a [`reqwest::Client`] and exposes one method per
/// supported platform. Requests are stateless and independent; nothing is
/// cached or retried.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> cp_stats_scraper::Result<()> {
/// use cp_stats_scraper::StatsClient;
///
/// let client = StatsClient::new();
/// let stats = client.get_leetcode_stats("lee215").await?;
/// println!("solved {} problems", stats.total_solved);
/// # Ok(())
/// # }
/// ```
pub struct StatsClient {
    http: reqwest::Client,
}

impl StatsClient {
    /// Create a new client with default settings and a 10 second timeout
    /// on every request.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, like
    /// [`reqwest::Client::new`].
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self { http }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { http: client }
    }

    /// Fetch solved counts and ranking for a LeetCode user.
    ///
    /// Issues a fixed 500 ms pre-call delay local to this request and
    /// enforces a 5 second budget that surfaces as
    /// [`StatsError::Timeout`](crate::StatsError::Timeout).
    #[instrument(skip(self))]
    pub async fn get_leetcode_stats(&self, username: &str) -> Result<LeetCodeStats> {
        scraper::leetcode::get_leetcode_stats(&self.http, username).await
    }

    /// Fetch per-difficulty solved counts for a GeeksforGeeks user.
    #[instrument(skip(self))]
    pub async fn get_gfg_stats(&self, username: &str) -> Result<GfgStats> {
        scraper::gfg::get_gfg_stats(&self.http, username).await
    }

    /// Fetch badges and certificates for a HackerRank user.
    #[instrument(skip(self))]
    pub async fn get_hackerrank_stats(&self, username: &str) -> Result<HackerRankStats> {
        scraper::hackerrank::get_hackerrank_stats(&self.http, username).await
    }

    /// Fetch rating, rank and solved count for a CodeChef user.
    ///
    /// The username is lowercased and must match `^[a-zA-Z0-9_]+$`.
    #[instrument(skip(self))]
    pub async fn get_codechef_stats(&self, username: &str) -> Result<CodeChefStats> {
        scraper::codechef::get_codechef_stats(&self.http, username).await
    }

    /// Fetch profile data and the distinct accepted-problem count for a
    /// Codeforces user.
    #[instrument(skip(self))]
    pub async fn get_codeforces_stats(&self, username: &str) -> Result<CodeforcesStats> {
        scraper::codeforces::get_codeforces_stats(&self.http, username).await
    }
}

impl Default for StatsClient {
    fn default() -> Self {
        Self::new()
    }
}
