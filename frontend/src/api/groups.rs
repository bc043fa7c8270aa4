use common::endpoints::groups;
use common::error::ApiError;
use common::model::group::{Group, GroupInput};
use common::model::user::User;
use common::model::Created;
use gloo_net::http::Method;

use super::ApiClient;

pub async fn list(api: &ApiClient) -> Result<Vec<Group>, ApiError> {
    api.get(&groups::list()).await
}

pub async fn create(api: &ApiClient, input: &GroupInput) -> Result<Created, ApiError> {
    api.post(&groups::create(), input).await
}

pub async fn rename(api: &ApiClient, id: i64, input: &GroupInput) -> Result<(), ApiError> {
    api.send(Method::PUT, &groups::item(id), Some(input)).await
}

pub async fn archive(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.post_empty(&groups::archive(id)).await
}

pub async fn unarchive(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.post_empty(&groups::unarchive(id)).await
}

pub async fn students(api: &ApiClient, id: i64) -> Result<Vec<User>, ApiError> {
    api.get(&groups::students(id)).await
}
