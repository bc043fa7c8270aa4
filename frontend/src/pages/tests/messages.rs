use common::model::question::QuestionType;
use common::model::test::{Test, TestTopic};
use common::model::topic::Topic;

pub enum Msg {
    Load,
    Loaded(u64, Vec<Test>),
    LoadTopics,
    TopicsLoaded(Vec<Topic>),
    OpenCreate,
    OpenEdit(Test),
    /// Topics of the test being edited.
    TestTopicsLoaded(i64, Vec<TestTopic>),
    SetTitle(String),
    SetDescription(String),
    AddTopic,
    RemoveTopic(usize),
    SetTopic(usize, Option<i64>),
    SetCount(usize, u32),
    SetQuota(usize, QuestionType, u32),
    Save,
    Saved,
    Delete(i64),
    Failed,
}
