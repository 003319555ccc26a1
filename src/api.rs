//! Retrieval collaborator for scholarship listings.
//!
//! The filtering core never does I/O itself; it consumes record sets handed
//! over by a `ScholarshipSource`. The HTTP implementation talks to the hosted
//! ScholarPath API; tests inject in-memory sources instead.

use crate::types::ScholarshipRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

/// Record retrieval as seen by the search pipeline.
///
/// Implementations return already-validated record sets. An empty result is a
/// normal outcome: "no data yet" and "zero matches" are distinguished by the
/// caller, never inferred from emptiness here.
#[async_trait]
pub trait ScholarshipSource {
    /// Fetch the full listing set.
    async fn fetch_all(&self) -> Result<Vec<ScholarshipRecord>>;

    /// Run the query on the remote delegate and return its ranked results.
    /// The caller projects these unfiltered.
    async fn search_delegated(&self, query: &str) -> Result<Vec<ScholarshipRecord>>;
}

/// HTTP client for the hosted scholarship API.
pub struct HttpScholarshipSource {
    client: Client,
    base_url: String,
}

impl HttpScholarshipSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ScholarshipSource for HttpScholarshipSource {
    async fn fetch_all(&self) -> Result<Vec<ScholarshipRecord>> {
        let url = format!("{}/scholarships/", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch scholarships from {}", url))?;

        if !response.status().is_success() {
            warn!(status = %response.status(), %url, "listing fetch failed");
            anyhow::bail!("Scholarship fetch failed with status: {}", response.status());
        }

        let records: Vec<ScholarshipRecord> = response
            .json()
            .await
            .context("Failed to parse scholarship listing response")?;

        info!(count = records.len(), "fetched scholarship listings");
        Ok(records)
    }

    async fn search_delegated(&self, query: &str) -> Result<Vec<ScholarshipRecord>> {
        let url = format!("{}/scholarships/search", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "search_term": query }))
            .send()
            .await
            .with_context(|| format!("Failed to run delegated search at {}", url))?;

        if !response.status().is_success() {
            warn!(status = %response.status(), %url, "delegated search failed");
            anyhow::bail!(
                "Delegated search failed with status: {}",
                response.status()
            );
        }

        let records: Vec<ScholarshipRecord> = response
            .json()
            .await
            .context("Failed to parse delegated search response")?;

        info!(count = records.len(), "delegated search returned");
        Ok(records)
    }
}
