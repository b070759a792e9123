//! Binary asset download from the catalog CDN.
//!
//! The body is buffered in memory and only written once the response is 2xx,
//! so an HTTP error never clobbers a previous file. The write itself is not
//! atomic: an interrupted write leaves a partial file and needs a rerun.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use super::{http_get, HeaderProfile};

#[derive(Debug, Error)]
pub enum DownloadError {
    /// Remote answered with a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u32 },
    /// Connection, TLS, timeout or decode failure inside libcurl.
    #[error("transfer failed: {0}")]
    Transfer(#[from] curl::Error),
    /// Writing the destination file failed.
    #[error("write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    /// HTTP status for `Http` errors; `None` for every other failure.
    pub fn http_status(&self) -> Option<u32> {
        match self {
            DownloadError::Http { status } => Some(*status),
            DownloadError::Transfer(_) | DownloadError::Io { .. } => None,
        }
    }
}

/// Fetches a selected asset to a local path.
pub trait AssetDownloader {
    fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadError>;
}

/// [`AssetDownloader`] sending the CDN header profile (`Origin`/`Referer` of the catalog site).
#[derive(Debug, Clone)]
pub struct CdnDownloader {
    pub headers: HeaderProfile,
    pub timeout: Duration,
}

impl AssetDownloader for CdnDownloader {
    fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadError> {
        let resp = http_get(url, &self.headers, self.timeout)?;
        if !resp.is_success() {
            return Err(DownloadError::Http {
                status: resp.status,
            });
        }
        fs::write(destination, &resp.body).map_err(|source| DownloadError::Io {
            path: destination.to_path_buf(),
            source,
        })?;
        tracing::info!(
            url,
            path = %destination.display(),
            bytes = resp.body.len(),
            "asset downloaded"
        );
        Ok(())
    }
}
