use common::endpoints::topics;
use common::error::ApiError;
use common::model::topic::{Topic, TopicInput};
use common::model::Created;
use gloo_net::http::Method;

use super::ApiClient;

pub async fn list(api: &ApiClient) -> Result<Vec<Topic>, ApiError> {
    api.get(&topics::list()).await
}

pub async fn create(api: &ApiClient, input: &TopicInput) -> Result<Created, ApiError> {
    api.post(&topics::list(), input).await
}

pub async fn update(api: &ApiClient, id: i64, input: &TopicInput) -> Result<(), ApiError> {
    api.send(Method::PUT, &topics::item(id), Some(input)).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&topics::item(id)).await
}
