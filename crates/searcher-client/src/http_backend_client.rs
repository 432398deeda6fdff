//! HTTP/JSON membership backend client.

use crate::{MembershipBackendClient, MEMBERS_PATH, USERS_PATH};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use searcher_config::BackendConfig;
use searcher_core::{MembershipList, SearcherError, SearcherResult, UserList};
use serde::de::DeserializeOwned;
use shaku::Component;
use tracing::debug;

/// Membership backend client speaking HTTP/1.1 with JSON bodies.
#[derive(Component)]
#[shaku(interface = MembershipBackendClient)]
pub struct HttpMembershipBackendClient {
    #[shaku(default)]
    client: Client,
    #[shaku(default)]
    base_url: String,
}

impl HttpMembershipBackendClient {
    /// Creates a new client from the backend configuration.
    pub fn new(config: &BackendConfig) -> SearcherResult<Self> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    /// Returns the configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SearcherResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| map_transport_error(path, &e))?;

        handle_response(path, response).await
    }
}

#[async_trait]
impl MembershipBackendClient for HttpMembershipBackendClient {
    async fn fetch_users(&self) -> SearcherResult<UserList> {
        debug!("HTTP FetchUsers: {}", self.url(USERS_PATH));

        let users: UserList = self.get_json(USERS_PATH).await?;

        debug!("Fetched {} users", users.users.len());
        Ok(users)
    }

    async fn fetch_memberships(&self) -> SearcherResult<MembershipList> {
        debug!("HTTP FetchMemberships: {}", self.url(MEMBERS_PATH));

        let memberships: MembershipList = self.get_json(MEMBERS_PATH).await?;

        debug!("Fetched {} memberships", memberships.memberships.len());
        Ok(memberships)
    }
}

impl std::fmt::Debug for HttpMembershipBackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpMembershipBackendClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Builds the `reqwest::Client` used to talk to the backend.
pub fn build_http_client(config: &BackendConfig) -> SearcherResult<Client> {
    Client::builder()
        .timeout(config.request_timeout())
        .connect_timeout(config.connect_timeout())
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .pool_idle_timeout(config.pool_idle_timeout())
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| SearcherError::Internal(format!("Failed to create HTTP client: {}", e)))
}

/// Strips trailing slashes so paths can be appended directly.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

async fn handle_response<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> SearcherResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!("Failed to read error body from {}: {}", path, e);
                String::new()
            }
        };
        return Err(map_http_error(path, status, &body));
    }

    response.json().await.map_err(|e| {
        SearcherError::ClientRequest(format!("Invalid JSON from {}: {}", path, e))
    })
}

fn map_transport_error(path: &str, err: &reqwest::Error) -> SearcherError {
    if err.is_timeout() {
        SearcherError::Timeout(format!("GET {} timed out", path))
    } else {
        SearcherError::ClientRequest(format!("GET {} failed: {}", path, err))
    }
}

fn map_http_error(path: &str, status: StatusCode, body: &str) -> SearcherError {
    if body.is_empty() {
        SearcherError::ClientRequest(format!("GET {} returned {}", path, status))
    } else {
        SearcherError::ClientRequest(format!("GET {} returned {}: {}", path, status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_construction() {
        let client = HttpMembershipBackendClient::with_client(Client::new(), "http://localhost:8000");
        assert_eq!(client.url(USERS_PATH), "http://localhost:8000/api.php/users");

        let client_trailing =
            HttpMembershipBackendClient::with_client(Client::new(), "http://localhost:8000/");
        assert_eq!(client_trailing.url(MEMBERS_PATH), "http://localhost:8000/api.php/members");
    }

    #[test]
    fn test_new_from_config() {
        let config = BackendConfig {
            base_url: "http://backend:9000//".to_string(),
            ..BackendConfig::default()
        };
        let client = HttpMembershipBackendClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://backend:9000");
    }

    #[test]
    fn test_map_http_error_includes_status_and_body() {
        let err = map_http_error(USERS_PATH, StatusCode::SERVICE_UNAVAILABLE, "maintenance");
        let message = err.to_string();
        assert!(matches!(err, SearcherError::ClientRequest(_)));
        assert!(message.contains("/api.php/users"));
        assert!(message.contains("503"));
        assert!(message.contains("maintenance"));
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://backend:9000///"), "http://backend:9000");
        assert_eq!(normalize_base_url("http://backend:9000"), "http://backend:9000");
    }

    #[test]
    fn test_map_http_error_without_body() {
        let err = map_http_error(MEMBERS_PATH, StatusCode::NOT_FOUND, "");
        assert_eq!(err.to_string(), "GET /api.php/members returned 404 Not Found");
    }
}
