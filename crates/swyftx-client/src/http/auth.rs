/*
[INPUT]:  API key and bearer token held by the client
[OUTPUT]: Access tokens, key listings and scopes
[POS]:    HTTP layer - authentication endpoints
[UPDATE]: When auth endpoints or token flow change
*/

use crate::http::{Result, SwyftxClient};
use crate::types::{
    ApiKey, AppScope, RefreshTokenRequest, StatusResponse, SuccessResponse, TokenResponse,
};

/// Token lifecycle and API key management
#[derive(Debug, Clone, Copy)]
pub struct AuthService<'a> {
    client: &'a SwyftxClient,
}

impl SwyftxClient {
    pub fn auth(&self) -> AuthService<'_> {
        AuthService { client: self }
    }
}

impl AuthService<'_> {
    /// Exchange an API key for a new access token.
    ///
    /// The client is not modified; see [`SwyftxClient::refresh_token`].
    ///
    /// POST auth/refresh/
    pub async fn refresh(&self, api_key: &str) -> Result<String> {
        let body = RefreshTokenRequest {
            api_key: api_key.to_string(),
        };
        let token: TokenResponse = self.client.post("auth/refresh/", Some(&body)).await?;
        Ok(token.access_token)
    }

    /// Invalidate the current access token
    ///
    /// POST auth/logout/
    pub async fn logout(&self) -> Result<bool> {
        let success: SuccessResponse = self.client.post::<(), _>("auth/logout/", None).await?;
        Ok(success.success)
    }

    /// Permissions granted to the active API key
    ///
    /// GET user/apiKeys/scope/
    pub async fn scope(&self) -> Result<AppScope> {
        self.client.get("user/apiKeys/scope/").await
    }

    /// GET user/apiKeys/
    pub async fn keys(&self) -> Result<Vec<ApiKey>> {
        self.client.get("user/apiKeys/").await
    }

    /// Revoke one API key, returning the reported status
    ///
    /// POST user/apiKeys/revoke/
    pub async fn revoke_key(&self, api_key: &str) -> Result<String> {
        let status: StatusResponse = self.client.post("user/apiKeys/revoke/", Some(api_key)).await?;
        Ok(status.status)
    }

    /// POST user/apiKeys/revokeAll/
    pub async fn revoke_all_keys(&self) -> Result<String> {
        let status: StatusResponse = self
            .client
            .post::<(), _>("user/apiKeys/revokeAll/", None)
            .await?;
        Ok(status.status)
    }
}
