use std::collections::HashSet;

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use super::visibility;

/// Hosts that count as social platforms. Matched against link hosts only;
/// icon classes and background images are never consulted.
pub const SOCIAL_DOMAINS: &[&str] = &[
    "linkedin.com",
    "facebook.com",
    "instagram.com",
    "twitter.com",
    "x.com",
    "youtube.com",
    "github.com",
    "behance.net",
    "t.me",
    "wa.me",
];

/// Collects social profile URLs from visible anchors, resolved against
/// the page URL and deduplicated by exact resolved string.
pub fn extract_socials(document: &Html, base_url: &str) -> Vec<String> {
    let link_selector = Selector::parse("a[href]").unwrap();
    let base = Url::parse(base_url).ok();

    let mut seen = HashSet::new();
    let mut socials = Vec::new();

    for element in document.select(&link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let scheme_check = href.trim().to_lowercase();
        if scheme_check.starts_with("javascript:")
            || scheme_check.starts_with("mailto:")
            || scheme_check.starts_with("tel:")
        {
            continue;
        }
        if !visibility::is_visible(&element) {
            continue;
        }

        let Some(resolved) = resolve(href, base.as_ref()) else {
            continue;
        };
        let Some(host) = resolved.host_str() else {
            continue;
        };
        let host = host.to_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host);

        if SOCIAL_DOMAINS.iter().any(|domain| host.contains(domain)) {
            let resolved = resolved.to_string();
            if seen.insert(resolved.clone()) {
                socials.push(resolved);
            }
        }
    }

    debug!("Found {} social links", socials.len());
    socials
}

fn resolve(href: &str, base: Option<&Url>) -> Option<Url> {
    match Url::parse(href) {
        Ok(url) => Some(url),
        Err(_) => base.and_then(|b| b.join(href).ok()),
    }
}
