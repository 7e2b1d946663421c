//! Vault secret store configuration
//!
//! When enabled, the weather API credential is loaded from HashiCorp Vault
//! at startup and injected into the configuration. A credential already set
//! in config.toml or the environment is not overridden.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::adapters::VaultConfig;

/// Vault secret store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultAppConfig {
    /// Enable Vault secret store integration
    #[serde(default)]
    pub enabled: bool,

    /// Vault server address
    #[serde(default = "default_vault_address")]
    pub address: String,

    /// Authentication token (prefer env var FORECASTCAL_VAULT_TOKEN)
    #[serde(default, skip_serializing)]
    pub token: Option<SecretString>,

    /// AppRole role ID (alternative to token auth)
    #[serde(default)]
    pub role_id: Option<String>,

    /// AppRole secret ID (alternative to token auth)
    #[serde(default, skip_serializing)]
    pub secret_id: Option<SecretString>,

    /// KV v2 mount path
    #[serde(default = "default_mount_path")]
    pub mount_path: String,

    /// Secret path prefix for forecastcal secrets
    #[serde(default = "default_secret_prefix")]
    pub secret_prefix: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_vault_address() -> String {
    "http://127.0.0.1:8200".to_string()
}

fn default_mount_path() -> String {
    "secret".to_string()
}

fn default_secret_prefix() -> String {
    "forecastcal".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for VaultAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            address: default_vault_address(),
            token: None,
            role_id: None,
            secret_id: None,
            mount_path: default_mount_path(),
            secret_prefix: default_secret_prefix(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl VaultAppConfig {
    /// Convert to the adapter-level `VaultConfig`
    #[must_use]
    pub fn to_vault_config(&self) -> VaultConfig {
        let mut config = VaultConfig::new(&self.address);
        config.mount_path.clone_from(&self.mount_path);
        config.timeout_secs = self.timeout_secs;

        if let Some(ref token) = self.token {
            config.token = Some(token.expose_secret().to_string());
        }

        if let (Some(role_id), Some(secret_id)) = (&self.role_id, &self.secret_id) {
            config.role_id = Some(role_id.clone());
            config.secret_id = Some(secret_id.expose_secret().to_string());
        }

        config
    }

    /// Build the full secret path for a given service
    #[must_use]
    pub fn secret_path(&self, service: &str) -> String {
        format!("{}/{}", self.secret_prefix, service)
    }
}
