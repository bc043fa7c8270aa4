//! Answer renderers for the attempt screen, one per question type.
//!
//! A renderer gets the student-facing projection of the question data and the
//! current answer. Malformed data renders nothing. An answer of another shape
//! reads as unanswered.

mod matching;
mod multiple_choice;
mod numeric;
mod single_choice;
mod sorting;
mod text;

use common::model::answer::Answer;
use common::model::question::{Question, QuestionBody};
use log::warn;
use yew::prelude::*;

pub fn answer_view(question: &Question, answer: Option<&Answer>, disabled: bool, on_change: Callback<Answer>) -> Html {
    let Some(body) = question.body() else {
        warn!(
            "question {} ({}) has malformed data",
            question.id,
            question.question_type.as_str()
        );
        return html! {};
    };
    let name = format!("question-{}", question.id);
    match body {
        QuestionBody::SingleChoice { options } => {
            single_choice::view(&name, &options, answer.and_then(Answer::as_choice), disabled, on_change)
        }
        QuestionBody::MultipleChoice { options } => {
            multiple_choice::view(&options, answer.and_then(Answer::as_indices), disabled, on_change)
        }
        QuestionBody::Text => text::view(answer.and_then(Answer::as_text), disabled, on_change),
        QuestionBody::Numeric => numeric::view(answer.and_then(Answer::as_number), disabled, on_change),
        QuestionBody::Sorting { items } => sorting::view(&items, answer.and_then(Answer::as_indices), disabled, on_change),
        QuestionBody::Matching { left, right } => {
            matching::view(&left, &right, answer.and_then(Answer::as_matching), disabled, on_change)
        }
    }
}
