use common::endpoints::schedules;
use common::error::ApiError;
use common::gateway::{ScheduleGateway, StudentTestsGateway};
use common::model::discipline::Discipline;
use common::model::schedule::{TestSchedule, TestScheduleBulkInput, TestScheduleUpdate};
use common::model::test::Test;
use gloo_net::http::Method;

use super::{disciplines, tests, ApiClient};

/// The signed-in student's window for a discipline's test.
pub async fn own(api: &ApiClient, discipline_id: i64) -> Result<TestSchedule, ApiError> {
    api.get(&schedules::own(discipline_id)).await
}

pub async fn for_discipline(api: &ApiClient, discipline_id: i64) -> Result<Vec<TestSchedule>, ApiError> {
    api.get(&schedules::for_discipline(discipline_id)).await
}

pub async fn create_bulk(api: &ApiClient, discipline_id: i64, input: &TestScheduleBulkInput) -> Result<(), ApiError> {
    api.send(Method::POST, &schedules::for_discipline(discipline_id), Some(input)).await
}

pub async fn update(api: &ApiClient, id: i64, input: &TestScheduleUpdate) -> Result<(), ApiError> {
    api.send(Method::PUT, &schedules::item(id), Some(input)).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&schedules::item(id)).await
}

impl ScheduleGateway for ApiClient {
    async fn create_schedules(&self, discipline_id: i64, input: &TestScheduleBulkInput) -> Result<(), ApiError> {
        create_bulk(self, discipline_id, input).await
    }
}

impl StudentTestsGateway for ApiClient {
    async fn my_discipline_ids(&self) -> Result<Vec<i64>, ApiError> {
        disciplines::my_ids(self).await
    }

    async fn own_schedule(&self, discipline_id: i64) -> Result<TestSchedule, ApiError> {
        own(self, discipline_id).await
    }

    async fn discipline(&self, id: i64) -> Result<Discipline, ApiError> {
        disciplines::get(self, id).await
    }

    async fn discipline_test(&self, discipline_id: i64) -> Result<Test, ApiError> {
        tests::for_discipline(self, discipline_id).await
    }
}
