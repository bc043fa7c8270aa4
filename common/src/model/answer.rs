use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::question::QuestionType;

/// A student's answer. The server expects the bare shape, so it is untagged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Choice(usize),
    Number(f64),
    Text(String),
    /// Multiple choice indices, or sorting item keys in the chosen order.
    Indices(Vec<usize>),
    /// Left item key to right item key.
    Matching(BTreeMap<usize, usize>),
}

impl Answer {
    pub fn as_choice(&self) -> Option<usize> {
        match self {
            Answer::Choice(index) => Some(*index),
            _ => None,
        }
    }

    pub fn as_indices(&self) -> Option<&[usize]> {
        match self {
            Answer::Indices(indices) => Some(indices),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Answer::Number(n) => Some(*n),
            Answer::Choice(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_matching(&self) -> Option<&BTreeMap<usize, usize>> {
        match self {
            Answer::Matching(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Whether this answer has the shape `kind` expects.
    pub fn fits(&self, kind: QuestionType) -> bool {
        match kind {
            QuestionType::SingleChoice => self.as_choice().is_some(),
            QuestionType::MultipleChoice | QuestionType::Sorting => self.as_indices().is_some(),
            QuestionType::Text => self.as_text().is_some(),
            QuestionType::Numeric => self.as_number().is_some(),
            QuestionType::Matching => self.as_matching().is_some(),
            QuestionType::Unknown => false,
        }
    }

    /// Stored answers are decoded without knowing the question; `1` could be
    /// a choice or a number, so this re-reads the value for `kind`.
    pub fn for_type(self, kind: QuestionType) -> Option<Answer> {
        match (kind, self) {
            (QuestionType::Numeric, Answer::Choice(n)) => Some(Answer::Number(n as f64)),
            (QuestionType::Numeric, Answer::Text(text)) => text.trim().parse().ok().map(Answer::Number),
            (QuestionType::SingleChoice, Answer::Number(n)) if n >= 0.0 && n.fract() == 0.0 => {
                Some(Answer::Choice(n as usize))
            }
            (QuestionType::Matching, Answer::Indices(indices)) if indices.is_empty() => {
                Some(Answer::Matching(BTreeMap::new()))
            }
            (kind, answer) if answer.fits(kind) => Some(answer),
            _ => None,
        }
    }
}

impl Answer {
    /// Reads a bare JSON answer. Objects must map index strings to indices.
    pub fn from_value(value: &Value) -> Option<Answer> {
        match value {
            Value::Number(n) => match n.as_u64() {
                Some(index) => Some(Answer::Choice(index as usize)),
                None => n.as_f64().map(Answer::Number),
            },
            Value::String(text) => Some(Answer::Text(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_u64().map(|i| i as usize))
                .collect::<Option<Vec<_>>>()
                .map(Answer::Indices),
            Value::Object(fields) => fields
                .iter()
                .map(|(left, right)| Some((left.parse().ok()?, right.as_u64()? as usize)))
                .collect::<Option<BTreeMap<_, _>>>()
                .map(Answer::Matching),
            Value::Null | Value::Bool(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Answer::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unsupported answer shape: {}", value)))
    }
}

/// Body of the save-answer call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerSubmit {
    pub question_id: i64,
    pub answer: Answer,
}
