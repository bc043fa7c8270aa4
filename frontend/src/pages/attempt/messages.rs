use common::attempt::DebounceTicket;
use common::model::answer::{Answer, AnswerSubmit};
use common::model::attempt::{Attempt, AttemptDetailView};

pub enum Msg {
    Load,
    Loaded(AttemptDetailView),
    LoadFailed,
    Edit(Answer),
    DebounceElapsed(DebounceTicket),
    Saved(AnswerSubmit),
    SaveFailed,
    GoTo(usize),
    Next,
    Prev,
    Finish,
    Finished(Attempt),
    FinishFailed,
    Back,
}
