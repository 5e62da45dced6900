//! HTTP client for the employee intake API

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::EmployeeDraft;
use shared::response::{EmployeeCreated, ErrorBody, ValidationErrorBody};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to roster-server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// A 400 with an `errors` array becomes [`ClientError::Validation`];
    /// every other failure becomes [`ClientError::Server`].
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;

            if status == StatusCode::BAD_REQUEST
                && let Ok(body) = serde_json::from_str::<ValidationErrorBody>(&text)
            {
                return Err(ClientError::Validation(body.errors));
            }

            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or(text);
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Employee API ==========

    /// Submit one employee record
    pub async fn create_employee(&self, draft: &EmployeeDraft) -> ClientResult<EmployeeCreated> {
        self.post("/api/employees", draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:5000/")).unwrap();
        assert_eq!(
            client.url("/api/employees"),
            "http://localhost:5000/api/employees"
        );
        assert_eq!(client.url("health"), "http://localhost:5000/health");
    }
}
