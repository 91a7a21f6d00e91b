use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub endpoints: EndpointSettings,
    #[serde(default)]
    pub http: HttpSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoints: EndpointSettings::default(),
            http: HttpSettings::default(),
            matching: MatchingSettings::default(),
        }
    }
}

/// Where the three network boundaries live.
///
/// `lead_intake_url` is a complete URL (the third-party intake is a single
/// fixed endpoint); `backend_base_url` is joined with the /api/... paths.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointSettings {
    #[serde(default = "default_lead_intake_url")]
    pub lead_intake_url: String,
    #[serde(default = "default_backend_base_url")]
    pub backend_base_url: String,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            lead_intake_url: default_lead_intake_url(),
            backend_base_url: default_backend_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

fn default_lead_intake_url() -> String {
    "https://formsubmit.co/ajax/hello@vcmatch.io".to_string()
}

fn default_backend_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_per_page() -> u32 {
    crate::core::pagination::PER_PAGE
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with VCMATCH__)
    ///    e.g. VCMATCH__ENDPOINTS__BACKEND_BASE_URL -> endpoints.backend_base_url
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("VCMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("VCMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
