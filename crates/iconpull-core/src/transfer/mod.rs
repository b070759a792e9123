//! Blocking HTTP transfers over libcurl.
//!
//! One request per call, no retries. Page fetches through the mirror live in
//! [`fetch`]; binary asset downloads from the CDN live in [`download`].

pub mod download;
pub mod fetch;

pub use download::{AssetDownloader, CdnDownloader, DownloadError};
pub use fetch::{mirror_url, FetchError, MirrorFetcher, PageSource};

use std::collections::BTreeMap;
use std::time::Duration;

/// Header profile sent with a request (`name -> value`).
pub type HeaderProfile = BTreeMap<String, String>;

/// Status and full body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one GET and buffers the body. Follows redirects; TLS peer and host
/// verification stay on. Non-2xx statuses are returned, not treated as errors.
pub fn http_get(
    url: &str,
    headers: &HeaderProfile,
    timeout: Duration,
) -> Result<HttpResponse, curl::Error> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.ssl_verify_peer(true)?;
    easy.ssl_verify_host(true)?;
    easy.connect_timeout(timeout)?;
    easy.timeout(timeout)?;

    // Build curl list for the profile (e.g. "Name: value").
    let mut list = curl::easy::List::new();
    for (k, v) in headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    if !headers.is_empty() {
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url, status, bytes = body.len(), "GET finished");
    Ok(HttpResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        let r = |status| HttpResponse { status, body: vec![] };
        assert!(r(200).is_success());
        assert!(r(204).is_success());
        assert!(!r(199).is_success());
        assert!(!r(301).is_success());
        assert!(!r(404).is_success());
    }

    #[test]
    fn refused_connection_is_transport_error() {
        let port = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            l.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{}/", port);
        let res = http_get(&url, &HeaderProfile::new(), Duration::from_secs(2));
        assert!(res.is_err());
    }
}
