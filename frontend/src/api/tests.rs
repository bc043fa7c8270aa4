use common::endpoints::{disciplines, tests};
use common::error::ApiError;
use common::gateway::TestGateway;
use common::model::test::{Test, TestInput, TestTopic, TestTopicsReplace};
use common::model::Created;
use gloo_net::http::Method;

use super::ApiClient;

pub async fn list(api: &ApiClient) -> Result<Vec<Test>, ApiError> {
    api.get(&tests::list()).await
}

pub async fn create(api: &ApiClient, input: &TestInput) -> Result<Created, ApiError> {
    api.post(&tests::create(), input).await
}

pub async fn update(api: &ApiClient, id: i64, input: &TestInput) -> Result<(), ApiError> {
    api.send(Method::PUT, &tests::admin_item(id), Some(input)).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&tests::admin_item(id)).await
}

pub async fn topics(api: &ApiClient, id: i64) -> Result<Vec<TestTopic>, ApiError> {
    api.get(&tests::topics(id)).await
}

pub async fn replace_topics(api: &ApiClient, id: i64, topics: &TestTopicsReplace) -> Result<(), ApiError> {
    api.send(Method::PUT, &tests::replace_topics(id), Some(topics)).await
}

/// The test attached to a discipline.
pub async fn for_discipline(api: &ApiClient, discipline_id: i64) -> Result<Test, ApiError> {
    api.get(&disciplines::test(discipline_id)).await
}

impl TestGateway for ApiClient {
    async fn create_test(&self, input: &TestInput) -> Result<Created, ApiError> {
        create(self, input).await
    }

    async fn update_test(&self, id: i64, input: &TestInput) -> Result<(), ApiError> {
        update(self, id, input).await
    }

    async fn replace_topics(&self, id: i64, topics: &TestTopicsReplace) -> Result<(), ApiError> {
        replace_topics(self, id, topics).await
    }
}
