//! Download infrastructure for the jstestdriver archives.
//!
//! - reqwest (blocking) for HTTP
//! - no retries, no checksums, no progress counter

use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Per-request timeout for archive downloads
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Fetches remote files verbatim onto disk.
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    /// Download `url` into `dest`, replacing whatever is there.
    ///
    /// The parent of `dest` must already exist. Nothing is written when the
    /// server answers with a non-success status. Returns bytes written.
    pub fn fetch(&self, url: &str, dest: &Path) -> Result<u64> {
        println!("📥 Downloading {}", url);

        let mut response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to GET {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP {}: {}", response.status(), url);
        }

        let mut file =
            File::create(dest).with_context(|| format!("Failed to create {}", dest.display()))?;
        let written = io::copy(&mut response, &mut file)
            .with_context(|| format!("Failed to write {} to {}", url, dest.display()))?;

        Ok(written)
    }
}
