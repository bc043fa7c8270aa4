use common::endpoints::progress;
use common::error::ApiError;
use common::model::progress::{Attendance, StudentProgress};

use super::ApiClient;

pub async fn own(api: &ApiClient, discipline_id: i64) -> Result<StudentProgress, ApiError> {
    api.get(&progress::own(discipline_id)).await
}

pub async fn attendance(api: &ApiClient, discipline_id: i64) -> Result<Attendance, ApiError> {
    api.get(&progress::attendance(discipline_id)).await
}
