use common::endpoints::{attempts, tests};
use common::error::ApiError;
use common::gateway::AttemptGateway;
use common::model::answer::AnswerSubmit;
use common::model::attempt::{Attempt, AttemptDetailView, AttemptQuestionView};
use gloo_net::http::Method;

use super::ApiClient;

pub async fn start(api: &ApiClient, test_id: i64) -> Result<Attempt, ApiError> {
    api.post(&tests::attempts(test_id), &serde_json::json!({})).await
}

pub async fn get(api: &ApiClient, id: i64) -> Result<Attempt, ApiError> {
    api.get(&attempts::item(id)).await
}

pub async fn questions(api: &ApiClient, id: i64) -> Result<Vec<AttemptQuestionView>, ApiError> {
    api.get(&attempts::questions(id)).await
}

/// Attempt and its questions, fetched one after the other.
pub async fn detail(api: &ApiClient, id: i64) -> Result<AttemptDetailView, ApiError> {
    let attempt = get(api, id).await?;
    let questions = questions(api, id).await?;
    Ok(AttemptDetailView { attempt, questions })
}

pub async fn submit_answer(api: &ApiClient, id: i64, answer: &AnswerSubmit) -> Result<(), ApiError> {
    api.send(Method::POST, &attempts::answers(id), Some(answer)).await
}

pub async fn finish(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.post_empty(&attempts::finish(id)).await
}

impl AttemptGateway for ApiClient {
    async fn submit_answer(&self, attempt_id: i64, answer: &AnswerSubmit) -> Result<(), ApiError> {
        submit_answer(self, attempt_id, answer).await
    }

    async fn finish(&self, attempt_id: i64) -> Result<(), ApiError> {
        finish(self, attempt_id).await
    }

    async fn attempt(&self, attempt_id: i64) -> Result<Attempt, ApiError> {
        get(self, attempt_id).await
    }
}
