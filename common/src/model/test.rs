use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::question::QuestionType;
use super::topic::Topic;
use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A topic's share of a test: how many questions it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestTopic {
    pub topic_id: i64,
    pub questions_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<i64>,
    /// Per-type quota; empty means "any type".
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub type_quota: BTreeMap<QuestionType, u32>,
}

impl TestTopic {
    pub fn new(topic_id: i64, questions_count: u32) -> Self {
        Self {
            topic_id,
            questions_count,
            test_id: None,
            type_quota: BTreeMap::new(),
        }
    }

    /// A zero count drops the type from the quota.
    pub fn set_quota(&mut self, kind: QuestionType, count: u32) {
        if count == 0 {
            self.type_quota.remove(&kind);
        } else {
            self.type_quota.insert(kind, count);
        }
    }

    pub fn quota_sum(&self) -> u32 {
        self.type_quota.values().sum()
    }

    /// Label for lists: the topic title when known, otherwise its id.
    pub fn label(&self, topics: &[Topic]) -> String {
        topics
            .iter()
            .find(|topic| topic.id == self.topic_id)
            .map(|topic| topic.title.clone())
            .unwrap_or_else(|| format!("Тема #{}", self.topic_id))
    }
}

/// Body of the topic-list replacement call. An empty list clears the test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestTopicsReplace {
    pub topics: Vec<TestTopic>,
}

impl TestTopicsReplace {
    /// Rejects duplicate topics and quotas that exceed the topic's count.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for topic in &self.topics {
            if !seen.insert(topic.topic_id) {
                return Err(ValidationError::DuplicateTopic(topic.topic_id));
            }
            let quota = topic.quota_sum();
            if quota > topic.questions_count {
                return Err(ValidationError::QuotaExceedsCount {
                    topic_id: topic.topic_id,
                    quota,
                    count: topic.questions_count,
                });
            }
        }
        Ok(())
    }

    pub fn total_questions(&self) -> u32 {
        self.topics.iter().map(|topic| topic.questions_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_is_bounded_by_count() {
        let mut topic = TestTopic::new(4, 3);
        topic.type_quota.insert(QuestionType::SingleChoice, 2);
        topic.type_quota.insert(QuestionType::Text, 2);
        let replace = TestTopicsReplace {
            topics: vec![topic],
        };
        assert_eq!(
            replace.validate(),
            Err(ValidationError::QuotaExceedsCount {
                topic_id: 4,
                quota: 4,
                count: 3
            })
        );
    }

    #[test]
    fn zero_quota_is_removed() {
        let mut topic = TestTopic::new(1, 4);
        topic.set_quota(QuestionType::Numeric, 2);
        topic.set_quota(QuestionType::Text, 1);
        topic.set_quota(QuestionType::Numeric, 0);
        assert_eq!(topic.quota_sum(), 1);
        assert!(!topic.type_quota.contains_key(&QuestionType::Numeric));
    }

    #[test]
    fn duplicate_topics_are_rejected() {
        let replace = TestTopicsReplace {
            topics: vec![TestTopic::new(1, 2), TestTopic::new(1, 5)],
        };
        assert_eq!(replace.validate(), Err(ValidationError::DuplicateTopic(1)));
    }

    #[test]
    fn quota_serialises_with_type_tags() {
        let mut topic = TestTopic::new(2, 5);
        topic.type_quota.insert(QuestionType::Matching, 1);
        let json = serde_json::to_value(&topic).unwrap();
        assert_eq!(json["type_quota"]["matching"], 1);
        assert!(json.get("test_id").is_none());
    }
}
