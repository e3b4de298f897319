//! Secret management service trait.

use crate::config::SecretConfig;

/// Loads API keys and service endpoints.
///
/// Implementations must never put secret values into error messages or logs.
#[async_trait::async_trait]
pub trait SecretService: Send + Sync {
    /// Loads the secret configuration.
    async fn load_secrets(&self) -> Result<SecretConfig, String>;

    /// Checks whether the secret file exists.
    async fn secret_file_exists(&self) -> bool;
}
