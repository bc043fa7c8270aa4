//! Operations that issue several API calls in a fixed order.
//!
//! Each trait is the slice of the REST API one orchestration needs. The WASM
//! client implements all of them over HTTP; tests implement them with
//! recording fakes. Calls run strictly one after another. A failure stops the
//! sequence and is returned as is; resources created before it stay on the
//! server.

#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::error::{ApiError, ValidationError};
use crate::model::Created;
use crate::model::answer::AnswerSubmit;
use crate::model::attempt::Attempt;
use crate::model::discipline::{Discipline, DisciplineDraft, DisciplineInput, LabInput};
use crate::model::schedule::{ScheduleDraft, TestSchedule, TestScheduleBulkInput};
use crate::model::test::{Test, TestInput, TestTopicsReplace};
use crate::model::user::{LoginInput, RegisterInput, TokenPair, User};

pub trait AuthGateway {
    async fn login(&self, input: &LoginInput) -> Result<TokenPair, ApiError>;
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError>;
    async fn me(&self) -> Result<User, ApiError>;
    async fn register(&self, input: &RegisterInput) -> Result<(), ApiError>;
}

pub trait DisciplineGateway {
    async fn create_lab(&self, input: &LabInput) -> Result<Created, ApiError>;
    async fn create_discipline(&self, input: &DisciplineInput) -> Result<Created, ApiError>;
    async fn update_discipline(&self, id: i64, input: &DisciplineInput) -> Result<(), ApiError>;
}

pub trait TestGateway {
    async fn create_test(&self, input: &TestInput) -> Result<Created, ApiError>;
    async fn update_test(&self, id: i64, input: &TestInput) -> Result<(), ApiError>;
    async fn replace_topics(&self, id: i64, topics: &TestTopicsReplace) -> Result<(), ApiError>;
}

pub trait ScheduleGateway {
    async fn create_schedules(&self, discipline_id: i64, input: &TestScheduleBulkInput) -> Result<(), ApiError>;
}

pub trait StudentTestsGateway {
    async fn my_discipline_ids(&self) -> Result<Vec<i64>, ApiError>;
    async fn own_schedule(&self, discipline_id: i64) -> Result<TestSchedule, ApiError>;
    async fn discipline(&self, id: i64) -> Result<Discipline, ApiError>;
    async fn discipline_test(&self, discipline_id: i64) -> Result<Test, ApiError>;
}

pub trait AttemptGateway {
    async fn submit_answer(&self, attempt_id: i64, answer: &AnswerSubmit) -> Result<(), ApiError>;
    async fn finish(&self, attempt_id: i64) -> Result<(), ApiError>;
    async fn attempt(&self, attempt_id: i64) -> Result<Attempt, ApiError>;
}

async fn create_pending_labs<G: DisciplineGateway>(gateway: &G, draft: &DisciplineDraft) -> Result<Vec<i64>, ApiError> {
    let mut ids = Vec::with_capacity(draft.pending_labs.len());
    for lab in &draft.pending_labs {
        let created = gateway
            .create_lab(&LabInput {
                title: lab.title.clone(),
                description: None,
            })
            .await?;
        debug!("created lab {} as #{}", lab.number, created.id);
        ids.push(created.id);
    }
    Ok(ids)
}

/// Validates, creates every pending lab, then posts the discipline.
pub async fn create_discipline<G: DisciplineGateway>(gateway: &G, draft: DisciplineDraft) -> Result<Created, ApiError> {
    draft.validate()?;
    let lab_ids = create_pending_labs(gateway, &draft).await?;
    let input = draft.into_input(&lab_ids);
    let created = gateway.create_discipline(&input).await?;
    info!("discipline #{} created with {} labs", created.id, input.lab_count);
    Ok(created)
}

/// Same sequence as [`create_discipline`], ending in a full PUT.
pub async fn update_discipline<G: DisciplineGateway>(gateway: &G, id: i64, draft: DisciplineDraft) -> Result<(), ApiError> {
    draft.validate()?;
    let lab_ids = create_pending_labs(gateway, &draft).await?;
    let input = draft.into_input(&lab_ids);
    gateway.update_discipline(id, &input).await
}

fn check_test(input: &TestInput, topics: &TestTopicsReplace) -> Result<(), ValidationError> {
    if input.title.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    topics.validate()
}

/// Creates the test, then attaches topics when any were chosen.
pub async fn create_test_with_topics<G: TestGateway>(
    gateway: &G,
    input: &TestInput,
    topics: &TestTopicsReplace,
) -> Result<Created, ApiError> {
    check_test(input, topics)?;
    let created = gateway.create_test(input).await?;
    if !topics.topics.is_empty() {
        gateway.replace_topics(created.id, topics).await?;
    }
    Ok(created)
}

/// Updates the test and always replaces its topics; an empty list clears them.
pub async fn update_test_with_topics<G: TestGateway>(
    gateway: &G,
    id: i64,
    input: &TestInput,
    topics: &TestTopicsReplace,
) -> Result<(), ApiError> {
    check_test(input, topics)?;
    gateway.update_test(id, input).await?;
    gateway.replace_topics(id, topics).await
}

/// One bulk call for all selected students, sent only if the draft is valid.
pub async fn schedule_test<G: ScheduleGateway>(gateway: &G, discipline_id: i64, draft: &ScheduleDraft) -> Result<usize, ApiError> {
    let input = draft.validate()?;
    gateway.create_schedules(discipline_id, &input).await?;
    Ok(input.user_ids.len())
}

/// An open schedule with whatever details could be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenTest {
    pub schedule: TestSchedule,
    pub discipline: Option<Discipline>,
    pub test: Option<Test>,
}

impl OpenTest {
    pub fn discipline_name(&self) -> String {
        self.discipline
            .as_ref()
            .map(|d| d.name.clone())
            .unwrap_or_else(|| format!("Дисциплина #{}", self.schedule.discipline_id))
    }

    pub fn test_title(&self) -> String {
        self.test
            .as_ref()
            .map(|t| t.title.clone())
            .unwrap_or_else(|| "Тест".to_string())
    }
}

/// Schedules of the student's disciplines that are open at `now`.
///
/// Only the discipline id list is required; a missing schedule or detail is
/// skipped.
pub async fn open_tests<G: StudentTestsGateway>(gateway: &G, now: DateTime<Utc>) -> Result<Vec<OpenTest>, ApiError> {
    let ids = gateway.my_discipline_ids().await?;
    let mut open = Vec::new();
    for id in ids {
        let mut schedule = match gateway.own_schedule(id).await {
            Ok(schedule) => schedule,
            Err(err) => {
                debug!("no schedule for discipline {}: {}", id, err);
                continue;
            }
        };
        if !schedule.is_open_at(now) {
            continue;
        }
        schedule.discipline_id = id;
        let discipline = gateway.discipline(id).await.ok();
        let test = gateway.discipline_test(id).await.ok();
        open.push(OpenTest {
            schedule,
            discipline,
            test,
        });
    }
    Ok(open)
}

/// Flushes the pending answer, finishes the attempt and re-reads it for the score.
pub async fn finish_attempt<G: AttemptGateway>(
    gateway: &G,
    attempt_id: i64,
    pending: Option<AnswerSubmit>,
) -> Result<Attempt, ApiError> {
    if let Some(answer) = pending {
        gateway.submit_answer(attempt_id, &answer).await?;
    }
    gateway.finish(attempt_id).await?;
    gateway.attempt(attempt_id).await
}
