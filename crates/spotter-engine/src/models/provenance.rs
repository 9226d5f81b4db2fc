use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProvenanceError {
    #[error("Source URL is empty")]
    EmptyUrl,

    #[error("Source URL is malformed: {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("Source URL must use http or https: {0}")]
    UnsupportedScheme(String),

    #[error("Source URL has no host: {0}")]
    MissingHost(String),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),
}

/// Where a caption was published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
    Youtube,
    Facebook,
    Unknown,
}

impl Platform {
    pub fn from_host(host: &str) -> Self {
        let host = host.to_ascii_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host);
        let host = host.strip_prefix("m.").unwrap_or(host);
        match host {
            "instagram.com" | "instagr.am" => Platform::Instagram,
            "tiktok.com" | "vm.tiktok.com" => Platform::Tiktok,
            "youtube.com" | "youtu.be" => Platform::Youtube,
            "facebook.com" | "fb.watch" => Platform::Facebook,
            _ => Platform::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Facebook => "facebook",
            Platform::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ProvenanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instagram" | "ig" => Ok(Platform::Instagram),
            "tiktok" => Ok(Platform::Tiktok),
            "youtube" | "yt" => Ok(Platform::Youtube),
            "facebook" | "fb" => Ok(Platform::Facebook),
            "unknown" | "manual" => Ok(Platform::Unknown),
            other => Err(ProvenanceError::UnknownPlatform(other.to_string())),
        }
    }
}

/// Where the parsed text came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    pub platform: Option<Platform>,
    pub source_url: Option<String>,
}

impl Provenance {
    /// Validates `url` and infers the platform from its host.
    pub fn from_url(url: &str) -> Result<Self, ProvenanceError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ProvenanceError::EmptyUrl);
        }

        let parsed = Url::parse(url).map_err(|source| ProvenanceError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ProvenanceError::UnsupportedScheme(url.to_string()));
        }
        let host = parsed
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| ProvenanceError::MissingHost(url.to_string()))?;

        Ok(Self {
            platform: Some(Platform::from_host(host)),
            source_url: Some(url.to_string()),
        })
    }

    pub fn with_platform(platform: Platform) -> Self {
        Self {
            platform: Some(platform),
            source_url: None,
        }
    }
}
