//! Fixed browser request profile.
//!
//! The search endpoint rejects requests that do not look like they came from
//! the site's own inventory page, so every request carries the same headers a
//! desktop Chrome session sends from the used-car search page.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

pub(super) const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept", "*/*"),
    ("accept-language", "en-US,en;q=0.9,tr-TR;q=0.8,tr;q=0.7"),
    (
        "referer",
        "https://cars.usnews.com/cars-trucks/used-cars/for-sale",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "Windows"),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-origin"),
];

/// Default headers installed on the underlying `reqwest::Client`.
pub(super) fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(BROWSER_HEADERS.len());
    for (name, value) in BROWSER_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    headers
}
