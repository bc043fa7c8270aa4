use common::model::discipline::{Discipline, DisciplineDraft};
use common::model::group::Group;
use common::model::test::Test;
use common::validation::RequestGeneration;
use yew::NodeRef;

pub struct DisciplinesPage {
    pub items: Vec<Discipline>,
    /// Reference data for the form and the list columns.
    pub groups: Vec<Group>,
    pub tests: Vec<Test>,
    pub loading: bool,
    pub generation: RequestGeneration,
    /// `None` while creating.
    pub editing: Option<i64>,
    pub draft: DisciplineDraft,
    pub saving: bool,
    pub sheet_ref: NodeRef,
}

impl DisciplinesPage {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            groups: Vec::new(),
            tests: Vec::new(),
            loading: true,
            generation: RequestGeneration::default(),
            editing: None,
            draft: DisciplineDraft::new(),
            saving: false,
            sheet_ref: NodeRef::default(),
        }
    }

    pub fn group_names(&self, ids: &[i64]) -> String {
        let names: Vec<&str> = self
            .groups
            .iter()
            .filter(|group| ids.contains(&group.id))
            .map(|group| group.name.as_str())
            .collect();
        if names.is_empty() {
            "—".to_string()
        } else {
            names.join(", ")
        }
    }

    pub fn test_title(&self, id: Option<i64>) -> Option<String> {
        let id = id?;
        Some(
            self.tests
                .iter()
                .find(|test| test.id == id)
                .map(|test| test.title.clone())
                .unwrap_or_else(|| format!("Тест #{}", id)),
        )
    }
}
