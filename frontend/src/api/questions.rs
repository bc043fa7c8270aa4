use common::endpoints::{questions, topics};
use common::error::ApiError;
use common::model::question::{Question, QuestionInput};
use common::model::Created;
use gloo_net::http::Method;

use super::ApiClient;

pub async fn for_topic(api: &ApiClient, topic_id: i64) -> Result<Vec<Question>, ApiError> {
    api.get(&topics::questions(topic_id)).await
}

pub async fn create(api: &ApiClient, input: &QuestionInput) -> Result<Created, ApiError> {
    api.post(&questions::create(), input).await
}

pub async fn update(api: &ApiClient, id: i64, input: &QuestionInput) -> Result<(), ApiError> {
    api.send(Method::PUT, &questions::item(id), Some(input)).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&questions::item(id)).await
}
