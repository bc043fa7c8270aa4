//! Wire model mirrored from the REST API.
//!
//! Records are plain serde structs with no client-enforced invariants beyond
//! "matches the last server response". Payload types (`*Input`) are the bodies
//! sent on POST/PUT; updates always send the full object.

pub mod answer;
pub mod attempt;
pub mod discipline;
pub mod group;
pub mod material;
pub mod news;
pub mod progress;
pub mod question;
pub mod schedule;
pub mod test;
pub mod topic;
pub mod user;

use serde::{Deserialize, Serialize};

/// Body returned by create endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    pub id: i64,
}
