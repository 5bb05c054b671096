//! Committee API operations.

use super::HuxleyClient;
use crate::error::Result;
use huxley_core::committee::Committee;

impl HuxleyClient {
    /// List all committees.
    pub async fn list_committees(&self) -> Result<Vec<Committee>> {
        let response = self.client.get(self.url("/api/committees")).send().await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use axum::{routing::get, Json, Router};

    use super::*;
    use crate::client::spawn_test_server;

    #[tokio::test]
    async fn test_list_committees() {
        let app = Router::new().route(
            "/api/committees",
            get(|| async {
                Json(vec![
                    Committee::new(1, "DISEC"),
                    Committee::new(2, "JCC").special(),
                ])
            }),
        );
        let client = HuxleyClient::new(spawn_test_server(app).await);

        let committees = client.list_committees().await.unwrap();
        assert_eq!(committees.len(), 2);
        assert!(committees[1].special);
    }
}
