//! Welcome page save operation.

use super::HuxleyClient;
use crate::error::Result;
use huxley_core::welcome::WelcomeRecord;

/// Path of the welcome save endpoint, relative to the advisor page.
pub const UPDATE_WELCOME_PATH: &str = "/updatewelcome/";

impl HuxleyClient {
    /// Persist the welcome form as url-encoded fields.
    ///
    /// Any 2xx response counts as success; the body is ignored.
    pub async fn update_welcome(&self, record: &WelcomeRecord) -> Result<()> {
        let response = self
            .client
            .post(self.url(UPDATE_WELCOME_PATH))
            .form(record)
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
