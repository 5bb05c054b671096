//! Transport seams used by the controller and the committee store.

use async_trait::async_trait;
use huxley_core::committee::Committee;
use huxley_core::welcome::WelcomeRecord;

use crate::client::HuxleyClient;
use crate::error::Result;

/// Persists the welcome form.
#[async_trait]
pub trait WelcomeApi: Send + Sync {
    /// Saves the record. `Ok` means the server accepted it.
    async fn save_welcome(&self, record: &WelcomeRecord) -> Result<()>;
}

/// Fetches the committee list.
#[async_trait]
pub trait CommitteeSource: Send + Sync {
    async fn fetch_committees(&self) -> Result<Vec<Committee>>;
}

#[async_trait]
impl WelcomeApi for HuxleyClient {
    async fn save_welcome(&self, record: &WelcomeRecord) -> Result<()> {
        self.update_welcome(record).await
    }
}

#[async_trait]
impl CommitteeSource for HuxleyClient {
    async fn fetch_committees(&self) -> Result<Vec<Committee>> {
        self.list_committees().await
    }
}
