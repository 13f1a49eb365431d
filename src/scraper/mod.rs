pub(crate) mod codechef;
pub(crate) mod codeforces;
pub(crate) mod gfg;
pub(crate) mod hackerrank;
pub(crate) mod leetcode;

pub(crate) use ::scraper::Html;
use ::scraper::{ElementRef, Selector};
use reqwest::StatusCode;
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::model::Platform;

/// Send a prepared request and return the response body as text.
///
/// Maps 404 to [`StatsError::NotFound`], any other non-success status to
/// [`StatsError::Upstream`] with the body attached, and transport failures
/// to [`StatsError::Http`].
pub(crate) async fn fetch_text(
    platform: Platform,
    username: &str,
    request: reqwest::RequestBuilder,
) -> Result<String> {
    let response = request.send().await.map_err(|e| StatsError::Http {
        platform,
        username: username.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(StatsError::NotFound {
            platform,
            username: username.to_owned(),
        });
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(StatsError::Upstream {
            platform,
            username: username.to_owned(),
            status,
            body,
        });
    }

    response.text().await.map_err(|e| StatsError::Http {
        platform,
        username: username.to_owned(),
        source: e,
    })
}

/// Send a prepared request and parse the response body as an HTML document.
pub(crate) async fn fetch_document(
    platform: Platform,
    username: &str,
    request: reqwest::RequestBuilder,
) -> Result<Html> {
    debug!(%platform, username, "fetching profile page");
    let body = fetch_text(platform, username, request).await?;
    Ok(Html::parse_document(&body))
}

/// Parse a CSS selector literal, mapping failure to [`StatsError::Parse`].
pub(crate) fn parse_selector(platform: Platform, username: &str, selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| StatsError::Parse {
        platform,
        username: username.to_owned(),
        context: format!("invalid selector {selector:?}: {e}"),
    })
}

/// Extract trimmed text content from the first element matching `selector`
/// inside `element`. Returns an empty string if nothing matches.
pub(crate) fn select_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .and_then(|d| d.text().map(|t| t.trim()).find(|t| !t.is_empty()))
        .unwrap_or_default()
        .trim()
        .replace(['\n', '\t'], "")
        .to_string()
}

/// Tokenize consecutive digit runs in `text` into integers, in encounter
/// order. Runs that overflow `u32` are dropped.
pub(crate) fn digit_runs(text: &str) -> Vec<u32> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse().ok())
        .collect()
}

/// Trim surrounding whitespace and reject an empty username before any
/// network call is made.
pub(crate) fn trimmed_username<'a>(platform: Platform, username: &'a str) -> Result<&'a str> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(StatsError::InvalidInput {
            platform,
            username: username.to_owned(),
        });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    use super::*;

    /// Serve exactly one connection with a canned HTTP response.
    fn one_shot_server(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}")
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    #[tokio::test]
    async fn http_404_maps_to_not_found_regardless_of_body() {
        let url = one_shot_server(http_response("404 Not Found", "<html>gone</html>"));
        let client = reqwest::Client::new();
        let err = fetch_text(Platform::CodeChef, "ghost", client.get(&url))
            .await
            .unwrap_err();
        assert!(matches!(err, StatsError::NotFound { .. }));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn other_non_success_statuses_preserve_status_and_body() {
        let url = one_shot_server(http_response("503 Service Unavailable", "maintenance"));
        let client = reqwest::Client::new();
        let err = fetch_text(Platform::GeeksforGeeks, "alice", client.get(&url))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 503);
        match err {
            StatsError::Upstream { status, body, .. } => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected Upstream, got {other}"),
        }
    }

    #[tokio::test]
    async fn success_returns_the_body_text() {
        let url = one_shot_server(http_response("200 OK", "hello"));
        let client = reqwest::Client::new();
        let body = fetch_text(Platform::Codeforces, "alice", client.get(&url))
            .await
            .unwrap();
        assert_eq!(body, "hello");
    }

    #[tokio::test]
    async fn transport_failure_maps_to_http() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = reqwest::Client::new();
        let err = fetch_text(Platform::HackerRank, "alice", client.get(&url))
            .await
            .unwrap_err();
        assert!(matches!(err, StatsError::Http { .. }));
        assert_eq!(err.status_code(), 502);
    }

    #[test]
    fn digit_runs_tokenizes_in_encounter_order() {
        assert_eq!(digit_runs("School12Basic5Easy30"), vec![12, 5, 30]);
        assert_eq!(digit_runs("no digits here"), Vec::<u32>::new());
        assert_eq!(digit_runs("42"), vec![42]);
    }

    #[test]
    fn trimmed_username_rejects_blank_input() {
        assert_eq!(
            trimmed_username(Platform::LeetCode, "  alice  ").unwrap(),
            "alice"
        );
        assert!(matches!(
            trimmed_username(Platform::LeetCode, "   "),
            Err(StatsError::InvalidInput { .. })
        ));
    }
}
