use common::endpoints::news;
use common::error::ApiError;
use common::model::news::{News, NewsInput};
use common::model::Created;
use gloo_net::http::Method;

use super::ApiClient;

pub async fn list(api: &ApiClient) -> Result<Vec<News>, ApiError> {
    api.get(&news::list()).await
}

pub async fn create(api: &ApiClient, input: &NewsInput) -> Result<Created, ApiError> {
    api.post(&news::list(), input).await
}

pub async fn update(api: &ApiClient, id: i64, input: &NewsInput) -> Result<(), ApiError> {
    api.send(Method::PUT, &news::item(id), Some(input)).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&news::item(id)).await
}
