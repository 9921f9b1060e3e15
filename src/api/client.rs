//! Authenticated request gateway. Every backend call goes through
//! [`ApiClient::send_authorized`], which attaches the bearer credential and
//! applies the one piece of cross-cutting control flow in the client: a 401
//! tears the session down and surfaces as [`ApiError::SessionExpired`]
//! instead of a response.

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, Response, StatusCode,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::{api::types::ApiError, config, utils::session};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Builds auth headers from the persisted store, not from any in-memory
    /// copy, so a logout elsewhere (another call's 401, another tab) is
    /// honored on the very next request.
    fn bearer_headers() -> Result<HeaderMap, ApiError> {
        let token = session::stored_token()
            .ok_or_else(|| ApiError::Storage("No credential in session store".into()))?;
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::Storage("Invalid token format".into()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// One best-effort attempt: no retry, no timeout, no queuing. Callers
    /// never see a raw 401; by the time this returns the expiry error, the
    /// persisted record is already gone.
    pub(crate) async fn send_authorized(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Response, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = Self::bearer_headers()?;
        let mut request = self
            .client
            .request(method, format!("{}{}", base_url, path))
            .headers(headers);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.status() == StatusCode::UNAUTHORIZED {
            Self::expire_session();
            return Err(ApiError::SessionExpired);
        }
        Ok(response)
    }

    fn expire_session() {
        log::warn!("backend rejected credential; clearing session");
        session::clear();
        Self::redirect_to_login();
    }

    #[cfg(target_arch = "wasm32")]
    fn redirect_to_login() {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == "/login" {
                    return;
                }
            }
            let _ = location.set_href("/login");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn redirect_to_login() {}

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Extracts the backend's human-readable message when the error body
    /// carries one (FastAPI-style `detail`), else falls back to the status.
    pub(crate) async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
        ApiError::Backend {
            status: status.as_u16(),
            message,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}
