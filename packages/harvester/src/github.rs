//! Document source backed by the bundestag/gesetze GitHub mirror.

use reqwest::blocking::Client;

use gesetze_engine::{DocumentSource, EngineError};

use crate::config;
use crate::error::Result;
use crate::http;

/// Fetches law Markdown from the GitHub mirror, one document per law code.
///
/// The origins enumerated by this source are the (lowercased) law codes it
/// was created with; fetching resolves a code to its raw-file URL.
pub struct GithubSource {
    client: Client,
    codes: Vec<String>,
    base_url: String,
}

impl GithubSource {
    /// Create a source for the given law codes.
    ///
    /// Codes are validated and lowercased up front, so a typo fails fast
    /// instead of producing a 404 mid-load.
    pub fn new(codes: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut normalized = Vec::new();
        for code in codes {
            config::validate_law_code(&code)?;
            normalized.push(code.to_lowercase());
        }
        Ok(Self {
            client: http::create_client()?,
            codes: normalized,
            base_url: config::GITHUB_RAW_BASE.to_string(),
        })
    }

    /// Override the mirror base URL. Test seam for mock servers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl DocumentSource for GithubSource {
    fn name(&self) -> &str {
        "github"
    }

    fn list(&self) -> gesetze_engine::Result<Vec<String>> {
        Ok(self.codes.clone())
    }

    fn fetch(&self, origin: &str) -> gesetze_engine::Result<String> {
        let url = config::index_url(&self.base_url, origin);
        tracing::debug!(code = %origin, url = %url, "Fetching law from mirror");
        http::fetch_text(&self.client, &url).map_err(|e| EngineError::SourceFetch {
            origin: origin.to_string(),
            reason: e.to_string(),
        })
    }
}
