use super::{
    client::ApiClient,
    types::{ApiError, SessionUser, TokenResponse},
};
use crate::utils::session;

impl ApiClient {
    /// Exchanges credentials at the token endpoint. The backend follows the
    /// OAuth2 password grant: form-encoded body whose `username` field
    /// carries the email address. On success the session is persisted
    /// before the caller sees the result, so a reload straight after login
    /// restores the same session.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/token", base_url))
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let user = SessionUser::from_token(&token);
        session::persist(&token.access_token, &user).map_err(ApiError::Storage)?;
        log::info!("login succeeded for {}", user.employee_code);
        Ok(user)
    }
}
