use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::answer::Answer;
use super::question::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    InProgress,
    #[serde(alias = "completed")]
    Finished,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub test_id: i64,
    #[serde(default)]
    pub discipline_id: i64,
    pub status: AttemptStatus,
    #[serde(default)]
    pub score: Option<f64>,
}

impl Attempt {
    pub fn is_finished(&self) -> bool {
        self.status == AttemptStatus::Finished
    }
}

/// A question of an attempt together with the answer saved so far.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttemptQuestionView {
    /// Raw saved answer; `null` when unanswered.
    #[serde(default)]
    pub answer: Value,
    pub question: Question,
}

impl AttemptQuestionView {
    /// Saved answer re-read for this question's type; wrong shapes are dropped.
    pub fn saved_answer(&self) -> Option<Answer> {
        Answer::from_value(&self.answer)?.for_type(self.question.question_type)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttemptDetailView {
    pub attempt: Attempt,
    #[serde(default)]
    pub questions: Vec<AttemptQuestionView>,
}

/// Score summary shown once an attempt is finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResults {
    pub score: f64,
    pub max_score: f64,
    /// Rounded to a whole percent; 0 when `max_score` is 0.
    pub percentage: u32,
}

impl TestResults {
    pub fn new(score: f64, max_score: f64) -> Self {
        let percentage = if max_score > 0.0 {
            (score / max_score * 100.0).round().max(0.0) as u32
        } else {
            0
        };
        Self {
            score,
            max_score,
            percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::QuestionType;
    use serde_json::json;

    #[test]
    fn status_tags() {
        let parse = |tag: &str| serde_json::from_value::<AttemptStatus>(json!(tag)).unwrap();
        assert_eq!(parse("in_progress"), AttemptStatus::InProgress);
        assert_eq!(parse("completed"), AttemptStatus::Finished);
        assert_eq!(parse("expired"), AttemptStatus::Unknown);
    }

    #[test]
    fn saved_answer_shape_mismatch_is_unanswered() {
        let view: AttemptQuestionView = serde_json::from_value(json!({
            "answer": "abc",
            "question": {"id": 1, "question_text": "2+2?", "question_type": "numeric", "points": 1, "data": {}}
        }))
        .unwrap();
        assert_eq!(view.question.question_type, QuestionType::Numeric);
        assert_eq!(view.saved_answer(), None);

        let view: AttemptQuestionView = serde_json::from_value(json!({
            "answer": null,
            "question": {"id": 2, "question_text": "?", "question_type": "matching", "data": {}}
        }))
        .unwrap();
        assert_eq!(view.saved_answer(), None);
    }

    #[test]
    fn percentage() {
        assert_eq!(TestResults::new(7.0, 9.0).percentage, 78);
        assert_eq!(TestResults::new(0.0, 0.0).percentage, 0);
        assert_eq!(TestResults::new(5.0, 5.0).percentage, 100);
    }
}
