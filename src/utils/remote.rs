//! Remote plugin source
//!
//! Plugins live in GitHub repositories and are read through the raw-content
//! host: `<base>/<owner>/<repo>/<branch>/plugin.bifrost` for the manifest and
//! `.../files/<name>` for everything the manifest references.

mod security;
mod url_builders;


use crate::config::settings::Settings;
use crate::core::types::PluginManifest;
use crate::error::{BifrostError, Result};
use crate::project_identity::{self, MANIFEST_FILE};
use crate::traits::PluginSource;
use crate::ui as output;
use crate::utils::sanitize;
use reqwest::blocking::Client;

pub use url_builders::{file_url, manifest_url};

/// Fetches one plugin repository over HTTPS
pub struct GithubSource {
    github: String,
    settings: Settings,
    client: Client,
}

impl GithubSource {
    pub fn new(github: &str, settings: Settings) -> Result<Self> {
        sanitize::validate_github_slug(github)?;
        security::validate_base_url(&settings.raw_base_url, settings.allow_insecure_http)?;

        let client = Client::builder()
            .timeout(settings.http_timeout)
            .user_agent(format!(
                "{}/{}",
                project_identity::BINARY_NAME,
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| BifrostError::Network {
                url: settings.raw_base_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            github: github.to_string(),
            settings,
            client,
        })
    }

    fn fetch_text(&self, resource: &str, url: &str) -> Result<String> {
        output::verbose(&format!("GET {}", url));

        let resp = self.client.get(url).send().map_err(|e| BifrostError::Network {
            url: url.to_string(),
            reason: if e.is_timeout() {
                format!("timed out after {}s", self.settings.http_timeout.as_secs())
            } else {
                e.to_string()
            },
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BifrostError::FetchFailed {
                resource: resource.to_string(),
                url: url.to_string(),
                status: status.to_string(),
            });
        }

        resp.text().map_err(|e| BifrostError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

impl PluginSource for GithubSource {
    fn manifest(&self) -> Result<PluginManifest> {
        let url = manifest_url(&self.settings, &self.github);
        let body = self.fetch_text("plugin configuration", &url)?;
        parse_manifest(&body)
    }

    fn file(&self, name: &str) -> Result<String> {
        sanitize::validate_source_name(name)?;
        let url = file_url(&self.settings, &self.github, name);
        self.fetch_text(&format!("file {}", name), &url)
    }

    fn describe(&self) -> String {
        format!("github:{}@{}", self.github, self.settings.branch)
    }
}

pub fn parse_manifest(body: &str) -> Result<PluginManifest> {
    serde_json::from_str(body).map_err(|e| BifrostError::ParseError {
        file: MANIFEST_FILE.to_string(),
        message: e.to_string(),
    })
}
