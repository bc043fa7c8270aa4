use std::collections::BTreeMap;

use common::attempt::AttemptFlow;
use common::model::answer::{Answer, AnswerSubmit};
use common::model::attempt::{Attempt, AttemptDetailView, AttemptQuestionView, AttemptStatus};
use common::model::question::{Question, QuestionBody, QuestionType};
use serde_json::{Value, json};

fn detail(kinds: &[QuestionType]) -> AttemptDetailView {
    AttemptDetailView {
        attempt: Attempt {
            id: 1,
            user_id: 1,
            test_id: 1,
            discipline_id: 1,
            status: AttemptStatus::InProgress,
            score: None,
        },
        questions: kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| AttemptQuestionView {
                answer: Value::Null,
                question: Question {
                    id: i as i64 + 1,
                    question_text: format!("Вопрос {}", i + 1),
                    question_type: *kind,
                    points: 1,
                    data: json!({}),
                    topic_id: 1,
                },
            })
            .collect(),
    }
}

fn sample_answers() -> Vec<Answer> {
    let mut pairs = BTreeMap::new();
    pairs.insert(0, 1);
    vec![
        Answer::Choice(0),
        Answer::Number(2.5),
        Answer::Text("ответ".into()),
        Answer::Indices(vec![2, 0, 1]),
        Answer::Matching(pairs),
    ]
}

#[test]
fn navigation_flushes_exactly_one_submit() {
    let mut flow = AttemptFlow::new(detail(&[QuestionType::Text, QuestionType::Text, QuestionType::Text]));
    let ticket = flow.edit(Answer::Text("первый".into())).unwrap();

    let flushed: Vec<AnswerSubmit> = flow.next().into_iter().collect();
    assert_eq!(
        flushed,
        vec![AnswerSubmit {
            question_id: 1,
            answer: Answer::Text("первый".into())
        }]
    );
    assert_eq!(flow.current_index(), 1);
    assert_eq!(flow.debounce_elapsed(ticket), None);

    // Nothing typed on question 2: leaving it sends nothing.
    assert_eq!(flow.next(), None);
    assert_eq!(flow.current_index(), 2);
}

#[test]
fn navigation_bounds_are_no_ops() {
    let mut flow = AttemptFlow::new(detail(&[QuestionType::Numeric]));
    flow.edit(Answer::Number(4.0));
    assert_eq!(flow.prev(), None);
    assert_eq!(flow.next(), None);
    assert_eq!(flow.go_to(10), None);
    assert_eq!(flow.current_index(), 0);
}

#[test]
fn every_type_accepts_only_its_shape() {
    for kind in QuestionType::ALL {
        for answer in sample_answers() {
            let mut flow = AttemptFlow::new(detail(&[kind]));
            let fits = answer.fits(kind);
            let ticket = flow.edit(answer.clone());
            if fits {
                assert!(ticket.is_some(), "{:?} should accept {:?}", kind, answer);
            } else if ticket.is_none() {
                assert_eq!(flow.current_answer(), None);
            }
        }
    }
    let mut flow = AttemptFlow::new(detail(&[QuestionType::Unknown]));
    for answer in sample_answers() {
        assert_eq!(flow.edit(answer), None);
    }
}

#[test]
fn bodies_are_none_without_fields() {
    let malformed = [json!(null), json!({}), json!({"options": "a"}), json!({"items": [null]})];
    for kind in [
        QuestionType::SingleChoice,
        QuestionType::MultipleChoice,
        QuestionType::Sorting,
        QuestionType::Matching,
        QuestionType::Unknown,
    ] {
        for data in &malformed {
            assert_eq!(QuestionBody::project(kind, data), None, "{:?} with {}", kind, data);
        }
    }
}

#[test]
fn answer_saved_marks_confirmed() {
    let mut flow = AttemptFlow::new(detail(&[QuestionType::SingleChoice, QuestionType::Text]));
    let ticket = flow.edit(Answer::Choice(2)).unwrap();
    let submit = flow.debounce_elapsed(ticket).unwrap();
    assert!(!flow.is_saved(1));
    flow.answer_saved(&submit);
    assert!(flow.is_saved(1));
    flow.next();
    flow.prev();
    assert_eq!(flow.current_answer(), Some(&Answer::Choice(2)));
}
