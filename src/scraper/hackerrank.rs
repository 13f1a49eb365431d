use reqwest::header::{HeaderMap, HeaderValue, CONNECTION, USER_AGENT};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{Badge, Certificate, HackerRankStats, Platform};
use crate::scraper::{self, parse_selector};

const PLATFORM: Platform = Platform::HackerRank;
const BASE_URL: &str = "https://www.hackerrank.com";

// The platform serves an error page to default HTTP clients, so every
// request goes out with a desktop browser identity.
const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const BADGE_SELECTOR: &str = "svg.hexagon";
const BADGE_TITLE_SELECTOR: &str = "text.badge-title";
const BADGE_STAR_SELECTOR: &str = "path.star";
const CERTIFICATES_CONTAINER_SELECTOR: &str = "div.hacker-certificates";
const CERTIFICATE_LINK_SELECTOR: &str = "a.certificate-link";
const CERTIFICATE_HEADING_SELECTOR: &str = "h2.certificate_v3-heading";
const CERTIFICATE_VERIFIED_SELECTOR: &str = "span.certificate_v3-heading-verified";

#[instrument(skip(client))]
pub(crate) async fn get_hackerrank_stats(
    client: &reqwest::Client,
    username: &str,
) -> Result<HackerRankStats> {
    let username = scraper::trimmed_username(PLATFORM, username)?;
    let url = format!("{BASE_URL}/profile/{username}");

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DESKTOP_USER_AGENT));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

    let request = client.get(&url).headers(headers);
    let document = scraper::fetch_document(PLATFORM, username, request).await?;

    let badges = parse_badges(&document, username)?;
    let certificates = parse_certificates(&document, username)?;
    debug!(
        badge_count = badges.len(),
        certificate_count = certificates.len(),
        "parsed HackerRank profile"
    );

    Ok(HackerRankStats {
        badges,
        certificates,
        profile_url: url,
    })
}

/// Collect every hexagon badge graphic in page order. A badge without a
/// title label is skipped; the star count is the number of star paths
/// inside the badge.
fn parse_badges(document: &scraper::Html, username: &str) -> Result<Vec<Badge>> {
    let badge_selector = parse_selector(PLATFORM, username, BADGE_SELECTOR)?;
    let title_selector = parse_selector(PLATFORM, username, BADGE_TITLE_SELECTOR)?;
    let star_selector = parse_selector(PLATFORM, username, BADGE_STAR_SELECTOR)?;

    let badges = document
        .select(&badge_selector)
        .filter_map(|badge| {
            let title = badge
                .select(&title_selector)
                .next()
                .map(|t| t.text().collect::<String>().trim().to_string())?;
            let stars = badge.select(&star_selector).count() as u32;
            Some(Badge { title, stars })
        })
        .collect();
    Ok(badges)
}

/// Collect certificate links inside the certificates container. An absent
/// container means the user simply has none; an anchor without a heading is
/// skipped.
fn parse_certificates(document: &scraper::Html, username: &str) -> Result<Vec<Certificate>> {
    let container_selector = parse_selector(PLATFORM, username, CERTIFICATES_CONTAINER_SELECTOR)?;
    let Some(container) = document.select(&container_selector).next() else {
        return Ok(Vec::new());
    };

    let link_selector = parse_selector(PLATFORM, username, CERTIFICATE_LINK_SELECTOR)?;
    let heading_selector = parse_selector(PLATFORM, username, CERTIFICATE_HEADING_SELECTOR)?;
    let verified_selector = parse_selector(PLATFORM, username, CERTIFICATE_VERIFIED_SELECTOR)?;

    let certificates = container
        .select(&link_selector)
        .filter_map(|anchor| {
            let heading = anchor.select(&heading_selector).next()?;
            let name = heading
                .text()
                .collect::<String>()
                .replace("Certificate:", "")
                .trim()
                .to_string();
            let href = anchor.value().attr("href").unwrap_or_default();
            let verified = anchor.select(&verified_selector).next().is_some();
            Some(Certificate {
                name,
                url: format!("{BASE_URL}{href}"),
                verified,
            })
        })
        .collect();
    Ok(certificates)
}
