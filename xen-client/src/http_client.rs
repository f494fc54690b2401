use crate::error::XenClientError;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default backend host; every endpoint path is relative to this.
pub const DEFAULT_BASE_URL: &str = "http://13.215.98.185/api/v1";

/// Environment variable that overrides the backend base URL.
pub const BASE_URL_ENV: &str = "XEN_API_URL";

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build a client from `XEN_API_URL`, falling back to the default host.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, XenClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let mut request = self.client.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;
        Self::decode(response).await
    }

    /// POST a JSON body and decode the JSON response.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, XenClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    /// POST a JSON body where the response payload is not interesting.
    pub(crate) async fn post_json_unit<B>(&self, path: &str, body: &B) -> Result<(), XenClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// POST without a body, ignoring the response payload (like, status bumps).
    pub(crate) async fn post_unit(&self, path: &str) -> Result<(), XenClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, XenClientError> {
        let response = Self::check_status(response).await?;
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(error = %e, "malformed response body");
            XenClientError::Decode(e)
        })
    }

    /// Non-2xx is a failure; the body is never parsed as a success payload.
    async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, XenClientError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(XenClientError::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "request failed");
            return Err(XenClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}
