//! Text fetch of catalog search pages through the mirror.

use std::time::Duration;
use thiserror::Error;

use super::{http_get, HeaderProfile};

/// Failure of a single page fetch. Callers skip the query; nothing is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u32 },
}

/// Fetches a URL and decodes the body as text (invalid UTF-8 is dropped).
pub fn fetch_text(url: &str, headers: &HeaderProfile, timeout: Duration) -> Result<String, FetchError> {
    let resp = http_get(url, headers, timeout)?;
    if !resp.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: resp.status,
        });
    }
    Ok(decode_text(&resp.body))
}

/// UTF-8 decode that skips invalid sequences instead of substituting U+FFFD,
/// so a stray byte inside a URL does not end up in the extracted candidate.
fn decode_text(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                // valid_up_to marks a prefix that is always well-formed.
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match e.error_len() {
                    Some(len) => bytes = &rest[len..],
                    None => return out,
                }
            }
        }
    }
}

/// Builds `<mirror_base>/<search_path>/<query>`, tolerating stray slashes on the parts.
pub fn mirror_url(mirror_base: &str, search_path: &str, query: &str) -> String {
    format!(
        "{}/{}/{}",
        mirror_base.trim_end_matches('/'),
        search_path.trim_matches('/'),
        query.trim().trim_start_matches('/')
    )
}

/// Source of search-result text for a query.
pub trait PageSource {
    fn fetch_page(&self, query: &str) -> Result<String, FetchError>;
}

/// [`PageSource`] backed by the text-mirroring proxy.
#[derive(Debug, Clone)]
pub struct MirrorFetcher {
    pub mirror_base: String,
    pub search_path: String,
    pub headers: HeaderProfile,
    pub timeout: Duration,
}

impl PageSource for MirrorFetcher {
    fn fetch_page(&self, query: &str) -> Result<String, FetchError> {
        let url = mirror_url(&self.mirror_base, &self.search_path, query);
        tracing::debug!(%url, "fetching mirror page");
        fetch_text(&url, &self.headers, self.timeout)
    }
}
