use super::manager::EopConfig;
use super::parse::parse_finals;
use super::record::EopRecord;
use crate::errors::{GravityError, GravityResult};

/// Async downloader for the IERS finals2000A product.
///
/// Acquisition helper only: it produces a `Vec<EopRecord>` that the caller
/// materializes into a table explicitly. Nothing in the query path invokes
/// this type.
pub struct EopDownloader {
    config: EopConfig,

    user_agent: String,
}

impl EopDownloader {
    pub fn new(config: EopConfig) -> Self {
        Self {
            config,
            user_agent: format!("pole-tide/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Downloads and parses the configured finals2000A endpoint.
    pub async fn download_latest(&self) -> GravityResult<Vec<EopRecord>> {
        self.download_from_url(&self.config.source_url).await
    }

    pub async fn download_from_url(&self, url: &str) -> GravityResult<Vec<EopRecord>> {
        let client = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| {
                GravityError::external_library(
                    "IERS EOP download setup",
                    &format!("Failed to create HTTP client: {}", e),
                )
            })?;

        let response = client.get(url).send().await.map_err(|e| {
            GravityError::external_library(
                "IERS EOP download",
                &format!("Network request failed: {}", e),
            )
        })?;

        if !response.status().is_success() {
            return Err(GravityError::external_library(
                "IERS EOP download",
                &format!("HTTP request failed with status: {}", response.status()),
            ));
        }

        let content = response.text().await.map_err(|e| {
            GravityError::external_library(
                "IERS EOP download",
                &format!("Failed to read response: {}", e),
            )
        })?;

        parse_finals(&content)
    }
}

impl Default for EopDownloader {
    fn default() -> Self {
        Self::new(EopConfig::default())
    }
}
