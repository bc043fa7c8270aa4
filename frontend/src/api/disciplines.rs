use common::endpoints::{disciplines, labs};
use common::error::ApiError;
use common::gateway::DisciplineGateway;
use common::model::discipline::{Discipline, DisciplineInput, LabInput};
use common::model::Created;
use gloo_net::http::Method;

use super::ApiClient;

pub async fn list(api: &ApiClient) -> Result<Vec<Discipline>, ApiError> {
    api.get(&disciplines::list()).await
}

pub async fn get(api: &ApiClient, id: i64) -> Result<Discipline, ApiError> {
    api.get(&disciplines::item(id)).await
}

/// Ids of the disciplines the signed-in student's group takes.
pub async fn my_ids(api: &ApiClient) -> Result<Vec<i64>, ApiError> {
    api.get(&disciplines::my_ids()).await
}

pub async fn create(api: &ApiClient, input: &DisciplineInput) -> Result<Created, ApiError> {
    api.post(&disciplines::create(), input).await
}

pub async fn update(api: &ApiClient, id: i64, input: &DisciplineInput) -> Result<(), ApiError> {
    api.send(Method::PUT, &disciplines::admin_item(id), Some(input)).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&disciplines::admin_item(id)).await
}

pub async fn create_lab(api: &ApiClient, input: &LabInput) -> Result<Created, ApiError> {
    api.post(&labs::create(), input).await
}

impl DisciplineGateway for ApiClient {
    async fn create_lab(&self, input: &LabInput) -> Result<Created, ApiError> {
        create_lab(self, input).await
    }

    async fn create_discipline(&self, input: &DisciplineInput) -> Result<Created, ApiError> {
        create(self, input).await
    }

    async fn update_discipline(&self, id: i64, input: &DisciplineInput) -> Result<(), ApiError> {
        update(self, id, input).await
    }
}
