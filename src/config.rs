//! Client configuration
//!
//! The transport that talks to the API needs a base URL, an administration
//! id and an API token. [`Config`] models those as one explicit value the
//! caller constructs and passes along, instead of process-wide state.

use url::Url;

use crate::error::{Error, Result};

/// Default endpoint of the Moneybird API
pub const DEFAULT_BASE_URL: &str = "https://moneybird.com/api/v2";

/// Configuration for a Moneybird API transport
#[derive(Clone)]
pub struct Config {
    base_url: Url,
    administration_id: String,
    token: String,
    user_agent: String,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Base URL of the API
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Administration all requests are scoped to
    pub fn administration_id(&self) -> &str {
        &self.administration_id
    }

    /// API token used as the bearer credential
    pub fn token(&self) -> &str {
        &self.token
    }

    /// User agent string for outgoing requests
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url.as_str())
            .field("administration_id", &self.administration_id)
            .field("token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for [`Config`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    base_url: Option<String>,
    administration_id: Option<String>,
    token: Option<String>,
    user_agent: Option<String>,
}

impl ConfigBuilder {
    /// Override the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the administration id (required)
    pub fn administration_id(mut self, id: impl Into<String>) -> Self {
        self.administration_id = Some(id.into());
        self
    }

    /// Set the API token (required)
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Validate the settings and build the config
    pub fn build(self) -> Result<Config> {
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        let administration_id = self
            .administration_id
            .ok_or_else(|| Error::missing_field("administration_id"))?;
        let token = self.token.ok_or_else(|| Error::missing_field("token"))?;
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("moneybird-rs/{}", env!("CARGO_PKG_VERSION")));

        Ok(Config {
            base_url,
            administration_id,
            token,
            user_agent,
        })
    }
}
