use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use scroll_core::LoadPolicy;
use scroll_engine::{FetchSettings, MarkupProfile};
use scroll_logging::scroll_info;
use serde::{Deserialize, Serialize};

/// Per-storefront settings, read from a RON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollProfile {
    pub markup: MarkupProfile,
    pub fetch: FetchProfile,
    pub near_bottom_px: u32,
    pub debounce_ms: u64,
}

impl Default for ScrollProfile {
    fn default() -> Self {
        let policy = LoadPolicy::default();
        Self {
            markup: MarkupProfile::default(),
            fetch: FetchProfile::default(),
            near_bottom_px: policy.near_bottom_px,
            debounce_ms: policy.debounce.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchProfile {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchProfile {
    fn default() -> Self {
        let settings = FetchSettings::default();
        Self {
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: settings.request_timeout.as_secs(),
            redirect_limit: settings.redirect_limit,
            max_bytes: settings.max_bytes,
        }
    }
}

impl FetchProfile {
    pub fn to_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            redirect_limit: self.redirect_limit,
            max_bytes: self.max_bytes,
            ..FetchSettings::default()
        }
    }
}

impl ScrollProfile {
    /// Reads the profile at `path`, or the built-in defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read profile {:?}", path))?;
        let profile = Self::parse(&content)
            .with_context(|| format!("failed to parse profile {:?}", path))?;
        scroll_info!("Loaded profile from {:?}", path);
        Ok(profile)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(ron::from_str(content)?)
    }

    pub fn policy(&self) -> LoadPolicy {
        LoadPolicy {
            near_bottom_px: self.near_bottom_px,
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}
