use common::model::discipline::Discipline;
use common::model::group::Group;
use common::model::test::Test;

pub enum Msg {
    Load,
    Loaded(u64, Vec<Discipline>),
    LoadRefs,
    GroupsLoaded(Vec<Group>),
    TestsLoaded(Vec<Test>),
    OpenCreate,
    OpenEdit(Discipline),
    SetName(String),
    SetDescription(String),
    SetLectureCount(u32),
    SetLecturePoints(u32),
    SetTestPoints(u32),
    SetTest(Option<i64>),
    ToggleGroup(i64),
    AddLab,
    RemoveLab(u32),
    SetLabTitle(u32, String),
    SetLabPoints(u32, u32),
    Save,
    Saved,
    Delete(i64),
    Failed,
}
