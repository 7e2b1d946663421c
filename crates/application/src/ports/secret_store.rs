//! Port for secret storage and retrieval
//!
//! The upstream weather service requires an API credential which is never
//! written into config files. Implementations retrieve it from environment
//! variables (development) or HashiCorp Vault (production).

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for secret storage operations
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    /// Retrieve a secret by its key or path
    ///
    /// # Arguments
    /// * `key` - The key or path to the secret (e.g., "openweather/api-key")
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError>;

    /// Retrieve a structured secret as a JSON value
    ///
    /// # Arguments
    /// * `path` - The path to the secret (e.g., "forecastcal/openweather")
    async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApplicationError>;

    /// Check if the secret store is healthy and accessible
    async fn is_healthy(&self) -> bool;
}
