//! Questions, their per-type authoring data and the projection the attempt
//! screen renders from.
//!
//! `data` travels as opaque JSON. Authors edit it through [`QuestionData`];
//! students see only [`QuestionBody`], which never carries the correct answer
//! and is `None` whenever the payload lacks the fields its type needs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    SingleChoice,
    MultipleChoice,
    Text,
    Numeric,
    #[serde(alias = "ordering", alias = "sortable")]
    Sorting,
    Matching,
    #[serde(other)]
    Unknown,
}

impl QuestionType {
    /// Types offered by the question editor.
    pub const ALL: [QuestionType; 6] = [
        QuestionType::SingleChoice,
        QuestionType::MultipleChoice,
        QuestionType::Text,
        QuestionType::Numeric,
        QuestionType::Sorting,
        QuestionType::Matching,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "single_choice",
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::Text => "text",
            QuestionType::Numeric => "numeric",
            QuestionType::Sorting => "sorting",
            QuestionType::Matching => "matching",
            QuestionType::Unknown => "unknown",
        }
    }

    pub fn from_tag(tag: &str) -> QuestionType {
        match tag {
            "single_choice" => QuestionType::SingleChoice,
            "multiple_choice" => QuestionType::MultipleChoice,
            "text" => QuestionType::Text,
            "numeric" => QuestionType::Numeric,
            "sorting" | "ordering" | "sortable" => QuestionType::Sorting,
            "matching" => QuestionType::Matching,
            _ => QuestionType::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "Один ответ",
            QuestionType::MultipleChoice => "Несколько вариантов",
            QuestionType::Text => "Краткий ответ",
            QuestionType::Numeric => "Числовой",
            QuestionType::Sorting => "Сортировка",
            QuestionType::Matching => "Соответствие",
            QuestionType::Unknown => "Неизвестный тип",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub topic_id: i64,
}

impl Question {
    pub fn body(&self) -> Option<QuestionBody> {
        QuestionBody::project(self.question_type, &self.data)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionInput {
    pub question_text: String,
    pub question_type: QuestionType,
    pub points: u32,
    pub data: Value,
    pub topic_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingleChoiceData {
    pub options: Vec<String>,
    pub correct: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultipleChoiceData {
    pub options: Vec<String>,
    pub correct: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextData {
    pub correct: Vec<String>,
    #[serde(rename = "caseInsensitive", default)]
    pub case_insensitive: bool,
    #[serde(default)]
    pub trim: bool,
}

impl Default for TextData {
    fn default() -> Self {
        Self {
            correct: vec![String::new()],
            case_insensitive: true,
            trim: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericData {
    pub answer: f64,
    /// Percent of `answer`.
    #[serde(default)]
    pub tolerance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortingData {
    pub items: Vec<String>,
    #[serde(rename = "correctOrder", default)]
    pub correct_order: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingData {
    #[serde(rename = "leftItems")]
    pub left_items: Vec<String>,
    #[serde(rename = "rightItems")]
    pub right_items: Vec<String>,
    /// Left index to right index.
    #[serde(default)]
    pub pairs: BTreeMap<usize, usize>,
}

/// Typed authoring payload, one variant per known question type.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionData {
    SingleChoice(SingleChoiceData),
    MultipleChoice(MultipleChoiceData),
    Text(TextData),
    Numeric(NumericData),
    Sorting(SortingData),
    Matching(MatchingData),
}

impl QuestionData {
    /// Empty editor state for a freshly selected type.
    pub fn default_for(kind: QuestionType) -> Option<QuestionData> {
        let two = || vec![String::new(), String::new()];
        Some(match kind {
            QuestionType::SingleChoice => QuestionData::SingleChoice(SingleChoiceData {
                options: two(),
                correct: 0,
            }),
            QuestionType::MultipleChoice => QuestionData::MultipleChoice(MultipleChoiceData {
                options: two(),
                correct: Vec::new(),
            }),
            QuestionType::Text => QuestionData::Text(TextData::default()),
            QuestionType::Numeric => QuestionData::Numeric(NumericData::default()),
            QuestionType::Sorting => QuestionData::Sorting(SortingData {
                items: two(),
                correct_order: vec![0, 1],
            }),
            QuestionType::Matching => QuestionData::Matching(MatchingData {
                left_items: two(),
                right_items: two(),
                pairs: BTreeMap::new(),
            }),
            QuestionType::Unknown => return None,
        })
    }

    /// Parses stored `data` for editing. `None` when it does not fit the type.
    pub fn parse(kind: QuestionType, data: &Value) -> Option<QuestionData> {
        let data = data.clone();
        match kind {
            QuestionType::SingleChoice => serde_json::from_value(data).ok().map(QuestionData::SingleChoice),
            QuestionType::MultipleChoice => serde_json::from_value(data).ok().map(QuestionData::MultipleChoice),
            QuestionType::Text => serde_json::from_value(data).ok().map(QuestionData::Text),
            QuestionType::Numeric => serde_json::from_value(data).ok().map(QuestionData::Numeric),
            QuestionType::Sorting => serde_json::from_value(data).ok().map(QuestionData::Sorting),
            QuestionType::Matching => serde_json::from_value(data).ok().map(QuestionData::Matching),
            QuestionType::Unknown => None,
        }
    }

    pub fn kind(&self) -> QuestionType {
        match self {
            QuestionData::SingleChoice(_) => QuestionType::SingleChoice,
            QuestionData::MultipleChoice(_) => QuestionType::MultipleChoice,
            QuestionData::Text(_) => QuestionType::Text,
            QuestionData::Numeric(_) => QuestionType::Numeric,
            QuestionData::Sorting(_) => QuestionType::Sorting,
            QuestionData::Matching(_) => QuestionType::Matching,
        }
    }

    pub fn to_value(&self) -> Value {
        let value = match self {
            QuestionData::SingleChoice(data) => serde_json::to_value(data),
            QuestionData::MultipleChoice(data) => serde_json::to_value(data),
            QuestionData::Text(data) => serde_json::to_value(data),
            QuestionData::Numeric(data) => serde_json::to_value(data),
            QuestionData::Sorting(data) => serde_json::to_value(data),
            QuestionData::Matching(data) => serde_json::to_value(data),
        };
        value.unwrap_or(Value::Null)
    }

    /// Checks that option lists are filled and correct answers point inside them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let filled = |items: &[String]| !items.is_empty() && items.iter().all(|s| !s.trim().is_empty());
        let ok = match self {
            QuestionData::SingleChoice(data) => filled(&data.options) && data.correct < data.options.len(),
            QuestionData::MultipleChoice(data) => {
                filled(&data.options)
                    && !data.correct.is_empty()
                    && data.correct.iter().all(|i| *i < data.options.len())
            }
            QuestionData::Text(data) => data.correct.iter().any(|s| !s.trim().is_empty()),
            QuestionData::Numeric(data) => data.answer.is_finite() && data.tolerance >= 0.0,
            QuestionData::Sorting(data) => {
                let mut order = data.correct_order.clone();
                order.sort_unstable();
                filled(&data.items) && order == (0..data.items.len()).collect::<Vec<_>>()
            }
            QuestionData::Matching(data) => {
                filled(&data.left_items)
                    && filled(&data.right_items)
                    && data
                        .pairs
                        .iter()
                        .all(|(l, r)| *l < data.left_items.len() && *r < data.right_items.len())
            }
        };
        if ok { Ok(()) } else { Err(ValidationError::MissingFields) }
    }
}

/// A sorting or matching item. `key` is what answers refer to: the item's
/// `id` when every item in the list carries one, otherwise its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: usize,
    pub text: String,
}

/// What a student sees of a question's `data`.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionBody {
    SingleChoice { options: Vec<String> },
    MultipleChoice { options: Vec<String> },
    Text,
    Numeric,
    Sorting { items: Vec<Item> },
    Matching { left: Vec<Item>, right: Vec<Item> },
}

impl QuestionBody {
    pub fn project(kind: QuestionType, data: &Value) -> Option<QuestionBody> {
        match kind {
            QuestionType::SingleChoice => Some(QuestionBody::SingleChoice {
                options: item_texts(data.get("options")?)?,
            }),
            QuestionType::MultipleChoice => Some(QuestionBody::MultipleChoice {
                options: item_texts(data.get("options")?)?,
            }),
            QuestionType::Text => Some(QuestionBody::Text),
            QuestionType::Numeric => Some(QuestionBody::Numeric),
            QuestionType::Sorting => Some(QuestionBody::Sorting {
                items: keyed_items(data.get("items")?)?,
            }),
            QuestionType::Matching => {
                let left = data.get("leftItems").or_else(|| data.get("left"))?;
                let right = data.get("rightItems").or_else(|| data.get("right"))?;
                Some(QuestionBody::Matching {
                    left: keyed_items(left)?,
                    right: keyed_items(right)?,
                })
            }
            QuestionType::Unknown => None,
        }
    }
}

fn item_text(item: &Value) -> Option<String> {
    match item {
        Value::String(text) => Some(text.clone()),
        Value::Object(fields) => fields.get("text")?.as_str().map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Items arrive either as plain strings or as `{ "id": .., "text": .. }`.
fn item_texts(value: &Value) -> Option<Vec<String>> {
    value.as_array()?.iter().map(item_text).collect()
}

fn keyed_items(value: &Value) -> Option<Vec<Item>> {
    let list = value.as_array()?;
    let ids = list
        .iter()
        .map(|item| item.get("id")?.as_u64().map(|id| id as usize))
        .collect::<Option<Vec<_>>>();
    list.iter()
        .enumerate()
        .map(|(position, item)| {
            Some(Item {
                key: ids.as_ref().map_or(position, |ids| ids[position]),
                text: item_text(item)?,
            })
        })
        .collect()
}
