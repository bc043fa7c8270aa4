use common::endpoints::{disciplines, materials};
use common::error::ApiError;
use common::model::material::{LectureMaterial, MaterialUpdate, MaterialUpload, MaterialsPage};
use common::model::user::Role;
use common::model::Created;
use gloo_net::http::Method;
use log::debug;
use web_sys::{File, FormData};

use super::ApiClient;

pub async fn admin_list(api: &ApiClient) -> Result<MaterialsPage, ApiError> {
    api.get(&materials::admin_list()).await
}

pub async fn seminarist_list(api: &ApiClient) -> Result<MaterialsPage, ApiError> {
    api.get(&materials::seminarist_list()).await
}

pub async fn for_discipline(api: &ApiClient, discipline_id: i64) -> Result<Vec<LectureMaterial>, ApiError> {
    api.get(&disciplines::materials(discipline_id)).await
}

/// Materials visible to `role`. Students see the union over their
/// disciplines; a discipline that fails to load is skipped.
pub async fn visible_to(api: &ApiClient, role: Role) -> Result<Vec<LectureMaterial>, ApiError> {
    match role {
        Role::Admin => Ok(admin_list(api).await?.items),
        Role::Seminarist => Ok(seminarist_list(api).await?.items),
        Role::Student => {
            let mut found = Vec::new();
            for id in super::disciplines::my_ids(api).await? {
                match for_discipline(api, id).await {
                    Ok(items) => found.extend(items),
                    Err(err) => debug!("materials of discipline {} skipped: {}", id, err),
                }
            }
            Ok(found)
        }
        Role::Unrecognized => Ok(Vec::new()),
    }
}

pub async fn upload(api: &ApiClient, upload: &MaterialUpload, file: &File) -> Result<Created, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Network("FormData unavailable".into()))?;
    for (name, value) in upload.fields() {
        form.append_with_str(name, &value)
            .map_err(|_| ApiError::Network(format!("cannot append {}", name)))?;
    }
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("cannot attach file".into()))?;
    api.post_form(&materials::admin_list(), form).await
}

pub async fn update(api: &ApiClient, id: i64, input: &MaterialUpdate) -> Result<(), ApiError> {
    api.send(Method::PUT, &materials::admin_item(id), Some(input)).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&materials::admin_item(id)).await
}

pub async fn download(api: &ApiClient, id: i64) -> Result<(Vec<u8>, Option<String>), ApiError> {
    api.download(&materials::download(id)).await
}
