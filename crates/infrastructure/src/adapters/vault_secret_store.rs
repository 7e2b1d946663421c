//! HashiCorp Vault secret store adapter
//!
//! Retrieves secrets from HashiCorp Vault using the KV v2 secrets engine.
//! Supports AppRole and token-based authentication.

use std::sync::Arc;

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};
use vaultrs::{
    client::{VaultClient, VaultClientSettingsBuilder},
    kv2,
};

/// Configuration for Vault connection
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Vault server address (e.g., "https://vault.example.com:8200")
    pub address: String,
    /// Authentication token (for token-based auth)
    pub token: Option<String>,
    /// AppRole role ID (for AppRole auth)
    pub role_id: Option<String>,
    /// AppRole secret ID (typically from environment)
    pub secret_id: Option<String>,
    /// KV v2 mount path (default: "secret")
    pub mount_path: String,
    /// Connection timeout in seconds
    pub timeout_secs: u64,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            address: "http://127.0.0.1:8200".to_string(),
            token: None,
            role_id: None,
            secret_id: None,
            mount_path: "secret".to_string(),
            timeout_secs: 30,
        }
    }
}

impl VaultConfig {
    /// Create a new Vault configuration with the given address
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    /// Set the authentication token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set AppRole credentials
    #[must_use]
    pub fn with_approle(mut self, role_id: impl Into<String>, secret_id: impl Into<String>) -> Self {
        self.role_id = Some(role_id.into());
        self.secret_id = Some(secret_id.into());
        self
    }

    /// Set the KV mount path
    #[must_use]
    pub fn with_mount_path(mut self, path: impl Into<String>) -> Self {
        self.mount_path = path.into();
        self
    }
}

/// Secret store that reads from HashiCorp Vault
pub struct VaultSecretStore {
    client: Arc<RwLock<VaultClient>>,
    mount_path: String,
    config: VaultConfig,
}

impl std::fmt::Debug for VaultSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSecretStore")
            .field("mount_path", &self.mount_path)
            .field("config", &self.config)
            .field("client", &"VaultClient { ... }")
            .finish()
    }
}

impl VaultSecretStore {
    /// Create a new Vault secret store with the given configuration
    ///
    /// # Errors
    /// Returns an error if the Vault client cannot be created
    pub async fn new(config: VaultConfig) -> Result<Self, ApplicationError> {
        let client = Self::create_client(&config)?;

        // If using AppRole, authenticate
        if config.role_id.is_some() && config.secret_id.is_some() {
            Self::authenticate_approle(&client, &config).await?;
        }

        info!(address = %config.address, "Connected to Vault");

        Ok(Self {
            client: Arc::new(RwLock::new(client)),
            mount_path: config.mount_path.clone(),
            config,
        })
    }

    /// Create the Vault client
    fn create_client(config: &VaultConfig) -> Result<VaultClient, ApplicationError> {
        let mut settings_builder = VaultClientSettingsBuilder::default();
        settings_builder.address(&config.address);

        if let Some(token) = &config.token {
            settings_builder.token(token);
        }

        let settings = settings_builder
            .build()
            .map_err(|e| ApplicationError::Configuration(format!("Invalid Vault config: {e}")))?;

        VaultClient::new(settings).map_err(|e| {
            ApplicationError::Internal(format!("Failed to create Vault client: {e}"))
        })
    }

    /// Authenticate using AppRole
    async fn authenticate_approle(
        client: &VaultClient,
        config: &VaultConfig,
    ) -> Result<(), ApplicationError> {
        let role_id = config.role_id.as_ref().ok_or_else(|| {
            ApplicationError::Configuration("AppRole role_id not configured".to_string())
        })?;
        let secret_id = config.secret_id.as_ref().ok_or_else(|| {
            ApplicationError::Configuration("AppRole secret_id not configured".to_string())
        })?;

        vaultrs::auth::approle::login(client, "approle", role_id, secret_id)
            .await
            .map_err(|e| {
                error!(error = %e, "AppRole authentication failed");
                ApplicationError::Configuration(format!("Vault AppRole login failed: {e}"))
            })?;

        info!("Successfully authenticated with Vault using AppRole");
        Ok(())
    }

    /// Parse a path to extract mount and secret path
    ///
    /// Supports formats:
    /// - "forecastcal/openweather" -> uses default mount, path as-is
    /// - "secret/data/forecastcal/openweather" -> mount = "secret", data prefix stripped
    fn parse_path(&self, path: &str) -> (String, String) {
        let data_prefix = format!("{}/data/", self.mount_path);
        if let Some(stripped) = path.strip_prefix(&data_prefix) {
            return (self.mount_path.clone(), stripped.to_string());
        }

        (self.mount_path.clone(), path.to_string())
    }
}

#[async_trait]
impl SecretStorePort for VaultSecretStore {
    #[instrument(skip(self))]
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
        let (mount, path) = self.parse_path(key);
        let client = self.client.read().await;

        debug!(mount = %mount, path = %path, "Fetching secret from Vault");

        let secret: std::collections::HashMap<String, String> =
            kv2::read(&*client, &mount, &path).await.map_err(|e| {
                if e.to_string().contains("404") || e.to_string().contains("not found") {
                    ApplicationError::NotFound(format!("Secret not found: {key}"))
                } else {
                    error!(error = %e, "Failed to read secret from Vault");
                    ApplicationError::Internal(format!("Vault read failed: {e}"))
                }
            })?;

        // Try common key names before falling back to the first value
        secret
            .get("value")
            .or_else(|| secret.get("api_key"))
            .or_else(|| secret.get("secret"))
            .or_else(|| secret.values().next())
            .cloned()
            .ok_or_else(|| ApplicationError::NotFound(format!("Secret has no value field: {key}")))
    }

    #[instrument(skip(self))]
    async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApplicationError> {
        let (mount, secret_path) = self.parse_path(path);
        let client = self.client.read().await;

        debug!(mount = %mount, path = %secret_path, "Fetching JSON secret from Vault");

        kv2::read(&*client, &mount, &secret_path).await.map_err(|e| {
            if e.to_string().contains("404") || e.to_string().contains("not found") {
                ApplicationError::NotFound(format!("Secret not found: {path}"))
            } else {
                error!(error = %e, "Failed to read secret from Vault");
                ApplicationError::Internal(format!("Vault read failed: {e}"))
            }
        })
    }

    async fn is_healthy(&self) -> bool {
        let client = self.client.read().await;
        match vaultrs::sys::health(&*client).await {
            Ok(health) => {
                if health.sealed {
                    warn!("Vault is sealed");
                    false
                } else {
                    true
                }
            }
            Err(e) => {
                error!(error = %e, "Vault health check failed");
                false
            }
        }
    }
}
