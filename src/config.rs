//! Client configuration with baked-in defaults.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosting page may embed a JSON override in
//! `<script id="client-config" type="application/json">`. Every field is
//! optional there; anything omitted keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const CONFIG_ELEMENT_ID: &str = "client-config";

pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;
pub const DEFAULT_ROLE: &str = "user";
pub const DEFAULT_PLACEHOLDER_NAME: &str = "Guest";
pub const DEFAULT_PLACEHOLDER_EMAIL: &str = "guest@example.com";
pub const DEFAULT_LOGO_SRC: &str = "/assets/images/logo.png";
pub const DEFAULT_AVATAR_SERVICE_URL: &str = "https://ui-avatars.com/api/";

/// Errors produced while reading client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The embedded override was not valid JSON for `ClientConfig`.
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for `/api/auth/*` requests. Empty means same origin.
    pub api_base: String,
    /// Where the forms navigate after a successful sign-in or sign-up.
    pub dashboard_path: String,
    /// Where sign-out lands.
    pub login_path: String,
    pub min_password_len: usize,
    /// Role sent with every registration.
    pub default_role: String,
    pub placeholder_name: String,
    pub placeholder_email: String,
    /// The application logo; a sidebar showing it never gets a generated avatar.
    pub default_logo_src: String,
    pub avatar_service_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
            default_role: DEFAULT_ROLE.to_owned(),
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_owned(),
            placeholder_email: DEFAULT_PLACEHOLDER_EMAIL.to_owned(),
            default_logo_src: DEFAULT_LOGO_SRC.to_owned(),
            avatar_service_url: DEFAULT_AVATAR_SERVICE_URL.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Parse a (possibly partial) JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `raw` is not a JSON object matching
    /// the config fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.api_base = config.api_base.trim_end_matches('/').to_owned();
        Ok(config)
    }

    /// Load the config for this page.
    ///
    /// Hydrate builds read the embedded override element; a missing element
    /// means defaults, a malformed one is logged and also means defaults.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw {
                Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                    log::warn!("ignoring embedded client config: {e}");
                    Self::default()
                }),
                _ => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
