//! Per-student test windows.
//!
//! The server sends RFC 3339 timestamps. Forms use the browser's
//! `datetime-local` format (`2025-03-01T09:30`) in the user's wall-clock time;
//! the draft carries the UTC offset that converts between the two.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Format of `<input type="datetime-local">` values.
pub const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Shortest accepted attempt time limit, in seconds.
pub const MIN_TIME_LIMIT_SEC: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSchedule {
    pub id: i64,
    pub user_id: i64,
    pub discipline_id: i64,
    pub opens_at: String,
    pub closes_at: String,
    pub attempt_time_limit_sec: u32,
    #[serde(default)]
    pub max_attempts: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatus {
    Upcoming,
    Open,
    Closed,
}

impl ScheduleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleStatus::Upcoming => "Ожидается",
            ScheduleStatus::Open => "Открыт",
            ScheduleStatus::Closed => "Закрыт",
        }
    }
}

impl TestSchedule {
    pub fn window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((parse_instant(&self.opens_at)?, parse_instant(&self.closes_at)?))
    }

    /// Status at `now`; both bounds count as open. `None` on unparsable bounds.
    pub fn status_at(&self, now: DateTime<Utc>) -> Option<ScheduleStatus> {
        let (opens, closes) = self.window()?;
        Some(if now < opens {
            ScheduleStatus::Upcoming
        } else if now > closes {
            ScheduleStatus::Closed
        } else {
            ScheduleStatus::Open
        })
    }

    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        self.status_at(now) == Some(ScheduleStatus::Open)
    }
}

/// Bulk creation body: one schedule per listed student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestScheduleBulkInput {
    pub user_ids: Vec<i64>,
    pub opens_at: String,
    pub closes_at: String,
    pub attempt_time_limit_sec: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestScheduleUpdate {
    pub opens_at: String,
    pub closes_at: String,
    pub attempt_time_limit_sec: u32,
}

/// Schedule form state, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDraft {
    /// Wall-clock `datetime-local` values in `offset`.
    pub opens_at: String,
    pub closes_at: String,
    pub time_limit_sec: u32,
    pub max_attempts: Option<u32>,
    pub user_ids: Vec<i64>,
    pub offset: FixedOffset,
}

impl Default for ScheduleDraft {
    fn default() -> Self {
        Self {
            opens_at: String::new(),
            closes_at: String::new(),
            time_limit_sec: 30 * 60,
            max_attempts: Some(1),
            user_ids: Vec::new(),
            offset: Utc.fix(),
        }
    }
}

impl ScheduleDraft {
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    pub fn from_schedule(schedule: &TestSchedule, offset: FixedOffset) -> Self {
        Self {
            opens_at: to_local_input(&schedule.opens_at, offset),
            closes_at: to_local_input(&schedule.closes_at, offset),
            time_limit_sec: schedule.attempt_time_limit_sec,
            max_attempts: schedule.max_attempts,
            user_ids: vec![schedule.user_id],
            offset,
        }
    }

    /// Limit as shown in the form, rounded up to whole minutes.
    pub fn time_limit_min(&self) -> u32 {
        self.time_limit_sec.div_ceil(60)
    }

    pub fn set_time_limit_min(&mut self, minutes: u32) {
        self.time_limit_sec = minutes.saturating_mul(60);
    }

    pub fn toggle_student(&mut self, user_id: i64) {
        if let Some(pos) = self.user_ids.iter().position(|id| *id == user_id) {
            self.user_ids.remove(pos);
        } else {
            self.user_ids.push(user_id);
        }
    }

    /// Window and time limit checks shared by create and edit.
    pub fn validate_window(&self) -> Result<TestScheduleUpdate, ValidationError> {
        if self.opens_at.trim().is_empty() || self.closes_at.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let opens = parse_local_input(&self.opens_at, self.offset)
            .ok_or_else(|| ValidationError::InvalidDate(self.opens_at.clone()))?;
        let closes = parse_local_input(&self.closes_at, self.offset)
            .ok_or_else(|| ValidationError::InvalidDate(self.closes_at.clone()))?;
        if opens >= closes {
            return Err(ValidationError::WindowOrder);
        }
        let limit = self.time_limit_sec;
        if limit < MIN_TIME_LIMIT_SEC {
            return Err(ValidationError::TimeLimitTooShort);
        }
        Ok(TestScheduleUpdate {
            opens_at: opens.to_rfc3339(),
            closes_at: closes.to_rfc3339(),
            attempt_time_limit_sec: limit,
        })
    }

    /// Full check for the bulk create call; nothing is sent unless this passes.
    pub fn validate(&self) -> Result<TestScheduleBulkInput, ValidationError> {
        let window = self.validate_window()?;
        if self.user_ids.is_empty() {
            return Err(ValidationError::NoStudents);
        }
        Ok(TestScheduleBulkInput {
            user_ids: self.user_ids.clone(),
            opens_at: window.opens_at,
            closes_at: window.closes_at,
            attempt_time_limit_sec: window.attempt_time_limit_sec,
            max_attempts: self.max_attempts,
        })
    }
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, LOCAL_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Server timestamp: RFC 3339, or a bare date-time taken as UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    parse_naive(raw).map(|naive| naive.and_utc())
}

/// Form value: a bare date-time is wall-clock time in `offset`.
pub fn parse_local_input(raw: &str, offset: FixedOffset) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    offset
        .from_local_datetime(&parse_naive(raw)?)
        .single()
        .map(|at| at.with_timezone(&Utc))
}

/// Server timestamp to a `datetime-local` input value; empty when unparsable.
pub fn to_local_input(raw: &str, offset: FixedOffset) -> String {
    parse_instant(raw)
        .map(|at| at.with_timezone(&offset).format(LOCAL_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// `01.03.2025 09:30` in `offset`, or the raw text when unparsable.
pub fn format_date_time(raw: &str, offset: FixedOffset) -> String {
    parse_instant(raw)
        .map(|at| at.with_timezone(&offset).format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `1ч 5мин`, `45мин`, `30сек`.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    match (hours, minutes) {
        (0, 0) => format!("{}сек", seconds),
        (0, m) => format!("{}мин", m),
        (h, 0) => format!("{}ч", h),
        (h, m) => format!("{}ч {}мин", h, m),
    }
}
