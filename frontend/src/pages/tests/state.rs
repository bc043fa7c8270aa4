use common::model::test::{Test, TestInput, TestTopic, TestTopicsReplace};
use common::model::topic::Topic;
use common::validation::RequestGeneration;
use yew::NodeRef;

pub struct TestsPage {
    pub items: Vec<Test>,
    pub topics: Vec<Topic>,
    pub loading: bool,
    pub generation: RequestGeneration,
    pub editing: Option<i64>,
    pub form: TestInput,
    pub form_topics: Vec<TestTopic>,
    /// Set while the topics of the edited test are loading.
    pub topics_pending: bool,
    pub saving: bool,
    pub sheet_ref: NodeRef,
}

impl TestsPage {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            topics: Vec::new(),
            loading: true,
            generation: RequestGeneration::default(),
            editing: None,
            form: TestInput::default(),
            form_topics: Vec::new(),
            topics_pending: false,
            saving: false,
            sheet_ref: NodeRef::default(),
        }
    }

    /// First topic not yet in the form.
    pub fn unused_topic(&self) -> Option<i64> {
        self.topics
            .iter()
            .map(|topic| topic.id)
            .find(|id| self.form_topics.iter().all(|t| t.topic_id != *id))
    }

    pub fn topics_replace(&self) -> TestTopicsReplace {
        TestTopicsReplace {
            topics: self.form_topics.clone(),
        }
    }
}
