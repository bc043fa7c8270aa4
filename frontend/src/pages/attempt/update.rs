use common::attempt::{AttemptFlow, AUTOSAVE_DELAY_MS};
use common::gateway;
use common::menu::Page;
use common::model::answer::AnswerSubmit;
use gloo_timers::callback::Timeout;
use log::{debug, info};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::AttemptPage;
use crate::api::attempts;
use crate::components::inputs::confirm;

pub fn update(page: &mut AttemptPage, ctx: &Context<AttemptPage>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::Load => {
            let (id, page_props) = (props.attempt_id, props.page());
            let link = ctx.link().clone();
            spawn_local(async move {
                match attempts::detail(&page_props.api, id).await {
                    Ok(detail) => link.send_message(Msg::Loaded(detail)),
                    Err(err) => {
                        page_props.failed("Не удалось загрузить попытку", &err);
                        link.send_message(Msg::LoadFailed);
                    }
                }
            });
            false
        }
        Msg::Loaded(detail) => {
            let flow = AttemptFlow::new(detail);
            info!(
                "attempt #{} loaded with {} questions",
                flow.attempt().id,
                flow.questions().len()
            );
            page.flow = Some(flow);
            page.loading = false;
            true
        }
        Msg::LoadFailed => {
            page.loading = false;
            true
        }
        Msg::Edit(answer) => {
            let Some(ticket) = page.flow.as_mut().and_then(|flow| flow.edit(answer)) else {
                return false;
            };
            let link = ctx.link().clone();
            page.debounce = Some(Timeout::new(AUTOSAVE_DELAY_MS, move || {
                link.send_message(Msg::DebounceElapsed(ticket))
            }));
            true
        }
        Msg::DebounceElapsed(ticket) => {
            page.debounce = None;
            match page.flow.as_ref().and_then(|flow| flow.debounce_elapsed(ticket)) {
                Some(submit) => {
                    save(page, ctx, submit);
                    true
                }
                None => false,
            }
        }
        Msg::Saved(submit) => {
            page.in_flight = page.in_flight.saturating_sub(1);
            if let Some(flow) = page.flow.as_mut() {
                flow.answer_saved(&submit);
            }
            true
        }
        Msg::SaveFailed => {
            page.in_flight = page.in_flight.saturating_sub(1);
            true
        }
        Msg::GoTo(index) => navigate(page, ctx, |flow| flow.go_to(index)),
        Msg::Next => navigate(page, ctx, AttemptFlow::next),
        Msg::Prev => navigate(page, ctx, AttemptFlow::prev),
        Msg::Finish => {
            let Some(flow) = page.flow.as_mut() else {
                return false;
            };
            let unanswered = flow.questions().len() - flow.answered_count();
            let question = if unanswered > 0 {
                format!("Без ответа осталось вопросов: {}. Завершить тест?", unanswered)
            } else {
                "Завершить тест?".to_string()
            };
            if !confirm(&question) {
                return false;
            }
            page.debounce = None;
            let pending = flow.begin_finish();
            page.finishing = true;
            let (id, page_props) = (props.attempt_id, props.page());
            let link = ctx.link().clone();
            spawn_local(async move {
                match gateway::finish_attempt(&page_props.api, id, pending).await {
                    Ok(attempt) => link.send_message(Msg::Finished(attempt)),
                    Err(err) => {
                        page_props.failed("Ошибка при завершении теста", &err);
                        link.send_message(Msg::FinishFailed);
                    }
                }
            });
            true
        }
        Msg::Finished(attempt) => {
            page.finishing = false;
            if let Some(flow) = page.flow.as_mut() {
                let results = flow.finished(attempt);
                info!("attempt finished with {}%", results.percentage);
                props.page().succeeded("Тест завершён");
            }
            true
        }
        Msg::FinishFailed => {
            page.finishing = false;
            true
        }
        Msg::Back => {
            page.debounce = None;
            let flush = page.flow.as_mut().and_then(AttemptFlow::leave);
            if let Some(submit) = flush {
                save(page, ctx, submit);
            }
            props.on_navigate.emit(Page::MyTests);
            false
        }
    }
}

/// Moves within the attempt; the answer of the question left is saved first.
fn navigate(
    page: &mut AttemptPage,
    ctx: &Context<AttemptPage>,
    step: impl FnOnce(&mut AttemptFlow) -> Option<AnswerSubmit>,
) -> bool {
    let Some(flow) = page.flow.as_mut() else {
        return false;
    };
    page.debounce = None;
    if let Some(submit) = step(flow) {
        save(page, ctx, submit);
    }
    true
}

fn save(page: &mut AttemptPage, ctx: &Context<AttemptPage>, submit: AnswerSubmit) {
    page.in_flight += 1;
    let (id, page_props) = (ctx.props().attempt_id, ctx.props().page());
    let link = ctx.link().clone();
    debug!("saving answer to question #{}", submit.question_id);
    spawn_local(async move {
        match attempts::submit_answer(&page_props.api, id, &submit).await {
            Ok(()) => link.send_message(Msg::Saved(submit)),
            Err(err) => {
                page_props.failed("Не удалось сохранить ответ", &err);
                link.send_message(Msg::SaveFailed);
            }
        }
    });
}
