//! Tests a student can take now, plus resuming an attempt by its number.

use chrono::Utc;
use common::gateway::{open_tests, OpenTest};
use common::menu::Page;
use common::model::schedule::{format_date_time, format_duration};
use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use super::PageProps;
use crate::api::attempts;
use crate::components::inputs::{loading, local_offset, parse_id, text_field};

pub enum Msg {
    Load,
    Loaded(Vec<OpenTest>),
    Start(i64),
    Started(i64),
    SetResumeId(String),
    Resume,
    Failed,
}

pub struct StudentTestsPage {
    tests: Option<Vec<OpenTest>>,
    starting: bool,
    resume_id: String,
}

impl Component for StudentTestsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            tests: None,
            starting: false,
            resume_id: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let props = ctx.props().clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match open_tests(&props.api, Utc::now()).await {
                        Ok(tests) => link.send_message(Msg::Loaded(tests)),
                        Err(err) => {
                            props.failed("Не удалось загрузить тесты", &err);
                            link.send_message(Msg::Loaded(Vec::new()));
                        }
                    }
                });
                false
            }
            Msg::Loaded(tests) => {
                self.tests = Some(tests);
                true
            }
            Msg::Start(test_id) => {
                if self.starting {
                    return false;
                }
                self.starting = true;
                let props = ctx.props().clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match attempts::start(&props.api, test_id).await {
                        Ok(attempt) => link.send_message(Msg::Started(attempt.id)),
                        Err(err) => {
                            props.failed("Не удалось начать попытку", &err);
                            link.send_message(Msg::Failed);
                        }
                    }
                });
                true
            }
            Msg::Started(attempt_id) => {
                self.starting = false;
                ctx.props().on_navigate.emit(Page::Attempt(attempt_id));
                false
            }
            Msg::SetResumeId(raw) => {
                self.resume_id = raw;
                true
            }
            Msg::Resume => {
                if let Some(id) = parse_id(&self.resume_id) {
                    ctx.props().on_navigate.emit(Page::Attempt(id));
                }
                false
            }
            Msg::Failed => {
                self.starting = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="student-tests-page">
                <section class="card">
                    <h3>{ "Доступные тесты" }</h3>
                    { match &self.tests {
                        None => loading(),
                        Some(tests) if tests.is_empty() => html! {
                            <p class="hint">{ "Сейчас нет открытых тестов" }</p>
                        },
                        Some(tests) => html! {
                            <div class="cards">
                                { for tests.iter().map(|open| self.test_card(open, link)) }
                            </div>
                        },
                    } }
                </section>
                <section class="card">
                    <h3>{ "Продолжить попытку" }</h3>
                    <div class="toolbar">
                        { text_field("Номер попытки", &self.resume_id, link.callback(Msg::SetResumeId)) }
                        <button
                            class="btn-secondary"
                            disabled={parse_id(&self.resume_id).is_none()}
                            onclick={link.callback(|_| Msg::Resume)}
                        >
                            { "Открыть" }
                        </button>
                    </div>
                </section>
            </div>
        }
    }
}

impl StudentTestsPage {
    fn test_card(&self, open: &OpenTest, link: &Scope<Self>) -> Html {
        let schedule = &open.schedule;
        let offset = local_offset();
        let test_id = open.test.as_ref().map(|test| test.id);
        let attempts = schedule
            .max_attempts
            .map(|n| n.to_string())
            .unwrap_or_else(|| "без ограничений".to_string());
        html! {
            <article class="card test-card">
                <h4>{ open.discipline_name() }</h4>
                <p class="test-title">{ open.test_title() }</p>
                <dl>
                    <dt>{ "Открыт с" }</dt><dd>{ format_date_time(&schedule.opens_at, offset) }</dd>
                    <dt>{ "Закроется" }</dt><dd>{ format_date_time(&schedule.closes_at, offset) }</dd>
                    <dt>{ "Время на попытку" }</dt><dd>{ format_duration(schedule.attempt_time_limit_sec) }</dd>
                    <dt>{ "Попыток" }</dt><dd>{ attempts }</dd>
                </dl>
                <button
                    class="btn-primary"
                    disabled={self.starting || test_id.is_none()}
                    onclick={link.batch_callback(move |_| test_id.map(Msg::Start))}
                >
                    { "Начать тест" }
                </button>
            </article>
        }
    }
}
