use common::endpoints::users;
use common::error::ApiError;
use common::model::user::User;
use gloo_net::http::Method;

use super::ApiClient;

pub async fn pending(api: &ApiClient) -> Result<Vec<User>, ApiError> {
    api.get(&users::pending()).await
}

pub async fn approve(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.send::<()>(Method::PATCH, &users::approve(id), None).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&users::item(id)).await
}
