//! HTTP gateway for the booking backend
//!
//! Public (unauthenticated) calls and admin (Basic-authenticated) calls,
//! normalized to parsed JSON. The backend signals application-level
//! failures with an `{ "error": "..." }` body, sometimes on a 2xx status;
//! those are surfaced as [`ClientError::Application`] so callers never see
//! a half-parsed payload.

use crate::{AdminCredentials, ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use shared::client::UploadResponse;

/// A logo image picked by the administrator, ready for upload
#[derive(Debug, Clone)]
pub struct LogoFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl LogoFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// HTTP client for making network requests to the booking backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ========== Public API (no auth) ==========

    /// Make an unauthenticated GET request
    pub async fn public_get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make an unauthenticated POST request with a JSON body
    pub async fn public_post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    // ========== Admin API (Basic auth) ==========

    /// Make a Basic-authenticated GET request
    pub async fn admin_get<T: DeserializeOwned>(
        &self,
        path: &str,
        creds: &AdminCredentials,
    ) -> ClientResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, creds.basic_header())
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a Basic-authenticated POST request with a JSON body
    pub async fn admin_post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        creds: &AdminCredentials,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .header(header::AUTHORIZATION, creds.basic_header())
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a Basic-authenticated PATCH request with a JSON body
    pub async fn admin_patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        creds: &AdminCredentials,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .patch(self.url(path))
            .json(body)
            .header(header::AUTHORIZATION, creds.basic_header())
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a Basic-authenticated DELETE request (no body, no content type)
    pub async fn admin_delete<T: DeserializeOwned>(
        &self,
        path: &str,
        creds: &AdminCredentials,
    ) -> ClientResult<T> {
        let response = self
            .client
            .delete(self.url(path))
            .header(header::AUTHORIZATION, creds.basic_header())
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Upload a logo image as a multipart form with a single `logo` field.
    ///
    /// Content-Type is left to the transport so the multipart boundary is
    /// filled in correctly.
    pub async fn upload_logo(
        &self,
        creds: &AdminCredentials,
        file: LogoFile,
    ) -> ClientResult<UploadResponse> {
        let mime = mime_guess::from_path(&file.file_name).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(mime.as_ref())
            .map_err(|e| ClientError::Application(format!("Invalid upload part: {e}")))?;
        let form = reqwest::multipart::Form::new().part("logo", part);

        let response = self
            .client
            .post(self.url("/admin/upload-logo"))
            .header(header::AUTHORIZATION, creds.basic_header())
            .multipart(form)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Normalize an HTTP response to parsed JSON.
    ///
    /// An `{error}` body wins over the HTTP status; a 401 becomes
    /// `Unauthorized` so callers can apply the session-guard contract.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        let body: serde_json::Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) => {
                // Non-JSON body: classify by status alone
                return match status {
                    StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                    s if !s.is_success() => Err(ClientError::Application(format!(
                        "Request failed with status {s}"
                    ))),
                    _ => Err(e.into()),
                };
            }
        };

        if let Some(message) = body.get("error").and_then(|e| e.as_str()) {
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                _ => Err(ClientError::Application(message.to_string())),
            };
        }

        if !status.is_success() {
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                _ => Err(ClientError::Application(format!(
                    "Request failed with status {status}"
                ))),
            };
        }

        serde_json::from_value(body).map_err(Into::into)
    }
}
