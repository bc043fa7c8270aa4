//! Thin wrapper over `gloo-net` shared by every API module.
//!
//! Each request carries the bearer token the session holds at send time.
//! Non-2xx statuses become [`ApiError`]s; a 401 on an authorized request
//! clears the session and tells the app shell, which returns to the login
//! screen. There is no retry and no timeout.

use gloo_net::http::{Method, Request, RequestBuilder, Response};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;
use yew::Callback;

use common::error::ApiError;

use crate::session::SessionHandle;

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    session: SessionHandle,
    on_unauthorized: Callback<()>,
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

impl ApiClient {
    pub fn new(session: SessionHandle, on_unauthorized: Callback<()>) -> Self {
        Self {
            session,
            on_unauthorized,
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn builder(&self, method: Method, url: &str) -> (RequestBuilder, bool) {
        let builder = RequestBuilder::new(url).method(method);
        match self.session.bearer() {
            Some(token) => (builder.header("Authorization", &format!("Bearer {}", token)), true),
            None => (builder, false),
        }
    }

    async fn execute(&self, request: Request, authorized: bool) -> Result<Response, ApiError> {
        debug!("{} {}", request.method(), request.url());
        let response = request.send().await.map_err(network)?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body);
        warn!("{} answered {}", response.url(), status);
        if err.is_unauthorized() && authorized {
            self.session.logout();
            self.on_unauthorized.emit(());
        }
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let (builder, authorized) = self.builder(Method::GET, url);
        let response = self.execute(builder.build().map_err(network)?, authorized).await?;
        Self::decode(response).await
    }

    pub async fn post<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (builder, authorized) = self.builder(Method::POST, url);
        let response = self.execute(builder.json(body).map_err(network)?, authorized).await?;
        Self::decode(response).await
    }

    /// POST without a body whose answer is ignored.
    pub async fn post_empty(&self, url: &str) -> Result<(), ApiError> {
        let (builder, authorized) = self.builder(Method::POST, url);
        self.execute(builder.build().map_err(network)?, authorized).await?;
        Ok(())
    }

    /// Writes whose answer is ignored: PUT, PATCH, DELETE and fire-and-forget POSTs.
    pub async fn send<B: Serialize + ?Sized>(&self, method: Method, url: &str, body: Option<&B>) -> Result<(), ApiError> {
        let (builder, authorized) = self.builder(method, url);
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(network)?;
        self.execute(request, authorized).await?;
        Ok(())
    }

    pub async fn delete(&self, url: &str) -> Result<(), ApiError> {
        self.send::<()>(Method::DELETE, url, None).await
    }

    /// Multipart POST; the browser sets the boundary header.
    pub async fn post_form<T: DeserializeOwned>(&self, url: &str, form: FormData) -> Result<T, ApiError> {
        let (builder, authorized) = self.builder(Method::POST, url);
        let response = self.execute(builder.body(form).map_err(network)?, authorized).await?;
        Self::decode(response).await
    }

    /// Raw bytes plus the content type the server reported.
    pub async fn download(&self, url: &str) -> Result<(Vec<u8>, Option<String>), ApiError> {
        let (builder, authorized) = self.builder(Method::GET, url);
        let response = self.execute(builder.build().map_err(network)?, authorized).await?;
        let mime = response.headers().get("content-type");
        let bytes = response.binary().await.map_err(network)?;
        Ok((bytes, mime))
    }
}
