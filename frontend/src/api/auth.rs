use common::endpoints::auth;
use common::error::ApiError;
use common::gateway::AuthGateway;
use common::model::user::{LoginInput, RegisterInput, TokenPair, User};
use gloo_net::http::Method;

use super::ApiClient;

pub async fn login(api: &ApiClient, input: &LoginInput) -> Result<TokenPair, ApiError> {
    api.post(&auth::login(), input).await
}

pub async fn refresh(api: &ApiClient, refresh_token: &str) -> Result<TokenPair, ApiError> {
    let token = js_sys::encode_uri_component(refresh_token);
    api.get(&format!("{}?refresh_token={}", auth::refresh(), token)).await
}

pub async fn me(api: &ApiClient) -> Result<User, ApiError> {
    api.get(&auth::me()).await
}

pub async fn register(api: &ApiClient, input: &RegisterInput) -> Result<(), ApiError> {
    api.send(Method::POST, &auth::register(), Some(input)).await
}

impl AuthGateway for ApiClient {
    async fn login(&self, input: &LoginInput) -> Result<TokenPair, ApiError> {
        login(self, input).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        refresh(self, refresh_token).await
    }

    async fn me(&self) -> Result<User, ApiError> {
        me(self).await
    }

    async fn register(&self, input: &RegisterInput) -> Result<(), ApiError> {
        register(self, input).await
    }
}
