//! State of one test attempt on the student's screen.
//!
//! The flow holds no timers and makes no calls. It hands out debounce tickets
//! and answer submits; the page owns the timer and the network. An edit
//! invalidates every earlier ticket, and so does navigation, which flushes the
//! current answer on the spot.

use std::collections::HashMap;

use log::debug;

use crate::model::answer::{Answer, AnswerSubmit};
use crate::model::attempt::{Attempt, AttemptDetailView, AttemptStatus, TestResults};
use crate::model::question::Question;

/// Delay between the last edit and the autosave.
pub const AUTOSAVE_DELAY_MS: u32 = 1000;

/// Captured edit generation. Only the newest ticket yields a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct AttemptFlow {
    attempt: Attempt,
    questions: Vec<Question>,
    current: usize,
    /// Answers the server confirmed.
    saved: HashMap<i64, Answer>,
    /// Edits not confirmed yet.
    drafts: HashMap<i64, Answer>,
    current_answer: Option<Answer>,
    generation: u64,
    results: Option<TestResults>,
}

impl AttemptFlow {
    pub fn new(detail: AttemptDetailView) -> Self {
        let mut saved = HashMap::new();
        let mut questions = Vec::with_capacity(detail.questions.len());
        for view in detail.questions {
            if let Some(answer) = view.saved_answer() {
                saved.insert(view.question.id, answer);
            }
            questions.push(view.question);
        }
        let mut flow = Self {
            attempt: detail.attempt,
            questions,
            current: 0,
            saved,
            drafts: HashMap::new(),
            current_answer: None,
            generation: 0,
            results: None,
        };
        flow.current_answer = flow
            .current_question()
            .and_then(|q| flow.answer_for(q.id))
            .cloned();
        if flow.attempt.is_finished() {
            flow.results = Some(flow.results_from(&flow.attempt));
        }
        flow
    }

    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn current_answer(&self) -> Option<&Answer> {
        self.current_answer.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.attempt.status == AttemptStatus::Finished
    }

    pub fn results(&self) -> Option<TestResults> {
        self.results
    }

    pub fn answer_for(&self, question_id: i64) -> Option<&Answer> {
        self.drafts.get(&question_id).or_else(|| self.saved.get(&question_id))
    }

    pub fn is_answered(&self, question_id: i64) -> bool {
        self.answer_for(question_id).is_some()
    }

    pub fn is_saved(&self, question_id: i64) -> bool {
        self.saved.contains_key(&question_id) && !self.drafts.contains_key(&question_id)
    }

    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| self.is_answered(q.id)).count()
    }

    pub fn max_score(&self) -> f64 {
        self.questions.iter().map(|q| q.points as f64).sum()
    }

    /// Records an edit of the current question. `None` when the attempt is
    /// finished or the answer does not fit the question type.
    pub fn edit(&mut self, answer: Answer) -> Option<DebounceTicket> {
        if self.is_finished() {
            return None;
        }
        let question = self.current_question()?;
        let question_id = question.id;
        let answer = answer.for_type(question.question_type)?;
        self.drafts.insert(question_id, answer.clone());
        self.current_answer = Some(answer);
        self.generation += 1;
        Some(DebounceTicket {
            generation: self.generation,
        })
    }

    /// The autosave for `ticket`, unless a later edit or navigation superseded it.
    pub fn debounce_elapsed(&self, ticket: DebounceTicket) -> Option<AnswerSubmit> {
        if self.is_finished() || ticket.generation != self.generation {
            return None;
        }
        self.pending_submit()
    }

    fn pending_submit(&self) -> Option<AnswerSubmit> {
        let question = self.current_question()?;
        Some(AnswerSubmit {
            question_id: question.id,
            answer: self.current_answer.clone()?,
        })
    }

    /// Switches to question `index`, returning the flush of the question left.
    pub fn go_to(&mut self, index: usize) -> Option<AnswerSubmit> {
        if index >= self.questions.len() || index == self.current {
            return None;
        }
        let flush = if self.is_finished() {
            None
        } else {
            self.pending_submit()
        };
        self.generation += 1;
        self.current = index;
        let question_id = self.questions[index].id;
        self.current_answer = self.answer_for(question_id).cloned();
        debug!("moved to question {} (#{})", index + 1, question_id);
        flush
    }

    pub fn next(&mut self) -> Option<AnswerSubmit> {
        self.go_to(self.current + 1)
    }

    pub fn prev(&mut self) -> Option<AnswerSubmit> {
        match self.current.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => None,
        }
    }

    pub fn answer_saved(&mut self, submit: &AnswerSubmit) {
        if self.drafts.get(&submit.question_id) == Some(&submit.answer) {
            self.drafts.remove(&submit.question_id);
        }
        self.saved.insert(submit.question_id, submit.answer.clone());
    }

    /// Invalidates pending tickets and returns the answer to flush before finishing.
    pub fn begin_finish(&mut self) -> Option<AnswerSubmit> {
        if self.is_finished() {
            return None;
        }
        self.generation += 1;
        self.pending_submit()
    }

    /// Flush for leaving the screen: the current answer, unless already saved.
    pub fn leave(&mut self) -> Option<AnswerSubmit> {
        if self.is_finished() {
            return None;
        }
        self.generation += 1;
        let question_id = self.current_question()?.id;
        if self.is_saved(question_id) {
            return None;
        }
        self.pending_submit()
    }

    /// Applies the re-read attempt. Later edits are ignored.
    pub fn finished(&mut self, mut attempt: Attempt) -> TestResults {
        attempt.status = AttemptStatus::Finished;
        let results = self.results_from(&attempt);
        self.attempt = attempt;
        self.generation += 1;
        self.results = Some(results);
        results
    }

    fn results_from(&self, attempt: &Attempt) -> TestResults {
        TestResults::new(attempt.score.unwrap_or(0.0), self.max_score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attempt::AttemptQuestionView;
    use crate::model::question::QuestionType;
    use serde_json::{Value, json};

    fn question(id: i64, kind: QuestionType, points: u32) -> Question {
        Question {
            id,
            question_text: format!("Вопрос {}", id),
            question_type: kind,
            points,
            data: json!({"options": ["a", "b"]}),
            topic_id: 1,
        }
    }

    fn flow(questions: Vec<(Question, Value)>) -> AttemptFlow {
        AttemptFlow::new(AttemptDetailView {
            attempt: Attempt {
                id: 9,
                user_id: 1,
                test_id: 2,
                discipline_id: 3,
                status: AttemptStatus::InProgress,
                score: None,
            },
            questions: questions
                .into_iter()
                .map(|(question, answer)| AttemptQuestionView { answer, question })
                .collect(),
        })
    }

    #[test]
    fn newest_ticket_wins() {
        let mut flow = flow(vec![(question(1, QuestionType::SingleChoice, 1), Value::Null)]);
        let first = flow.edit(Answer::Choice(0)).unwrap();
        let second = flow.edit(Answer::Choice(1)).unwrap();
        assert_eq!(flow.debounce_elapsed(first), None);
        assert_eq!(
            flow.debounce_elapsed(second),
            Some(AnswerSubmit {
                question_id: 1,
                answer: Answer::Choice(1)
            })
        );
    }

    #[test]
    fn wrong_shape_edit_is_rejected() {
        let mut flow = flow(vec![(question(1, QuestionType::MultipleChoice, 1), Value::Null)]);
        assert_eq!(flow.edit(Answer::Text("x".into())), None);
        assert_eq!(flow.current_answer(), None);
    }

    #[test]
    fn saved_answers_are_restored() {
        let mut flow = flow(vec![
            (question(1, QuestionType::SingleChoice, 1), json!(1)),
            (question(2, QuestionType::Text, 2), Value::Null),
        ]);
        assert_eq!(flow.current_answer(), Some(&Answer::Choice(1)));
        assert!(flow.is_saved(1));
        assert_eq!(flow.next(), Some(AnswerSubmit { question_id: 1, answer: Answer::Choice(1) }));
        assert_eq!(flow.current_answer(), None);
        flow.edit(Answer::Text("ответ".into()));
        assert!(!flow.is_saved(2));
        flow.prev();
        assert_eq!(flow.current_answer(), Some(&Answer::Choice(1)));
        assert_eq!(flow.answered_count(), 2);
    }

    #[test]
    fn leaving_flushes_only_unsaved() {
        let mut flow = flow(vec![(question(1, QuestionType::Numeric, 1), json!(2.5))]);
        assert_eq!(flow.leave(), None);
        let ticket = flow.edit(Answer::Number(3.0)).unwrap();
        assert_eq!(
            flow.leave(),
            Some(AnswerSubmit {
                question_id: 1,
                answer: Answer::Number(3.0)
            })
        );
        assert_eq!(flow.debounce_elapsed(ticket), None);
    }

    #[test]
    fn finished_flow_ignores_edits() {
        let mut flow = flow(vec![(question(1, QuestionType::SingleChoice, 4), Value::Null)]);
        let ticket = flow.edit(Answer::Choice(0)).unwrap();
        let pending = flow.begin_finish();
        assert!(pending.is_some());
        assert_eq!(flow.debounce_elapsed(ticket), None);
        let results = flow.finished(Attempt {
            score: Some(3.0),
            ..flow.attempt().clone()
        });
        assert_eq!(results.percentage, 75);
        assert_eq!(flow.edit(Answer::Choice(1)), None);
        assert_eq!(flow.begin_finish(), None);
    }
}
