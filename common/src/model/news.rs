use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub id: i64,
    pub title: String,
    /// Markdown.
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(default, alias = "testId")]
    pub test_id: Option<i64>,
    #[serde(default, alias = "groupIds")]
    pub group_ids: Vec<i64>,
}

impl News {
    /// Case-insensitive match on title and description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewsInput {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<i64>,
    pub group_ids: Vec<i64>,
}

impl NewsInput {
    pub fn from_news(news: &News) -> Self {
        Self {
            title: news.title.clone(),
            description: news.description.clone(),
            file_url: news.file_url.clone(),
            test_id: news.test_id,
            group_ids: news.group_ids.clone(),
        }
    }
}

/// Newest first, filtered by `query`.
pub fn filter_news<'a>(items: &'a [News], query: &str) -> Vec<&'a News> {
    let mut found: Vec<&News> = items.iter().filter(|n| n.matches(query)).collect();
    found.sort_by(|a, b| b.id.cmp(&a.id));
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn news(id: i64, title: &str, description: &str) -> News {
        News {
            id,
            title: title.into(),
            description: description.into(),
            file_url: None,
            test_id: None,
            group_ids: vec![],
        }
    }

    #[test]
    fn query_filters_title_and_body() {
        let items = vec![
            news(1, "Расписание", "Экзамен в среду"),
            news(2, "Собрание", "**Важно**"),
            news(3, "Экзамен", ""),
        ];
        let ids: Vec<i64> = filter_news(&items, "экзамен").iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(filter_news(&items, "  ").len(), 3);
    }
}
