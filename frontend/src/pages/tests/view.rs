use common::model::question::QuestionType;
use common::model::test::{Test, TestTopic};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::schedules::SchedulePanel;
use super::state::TestsPage;
use crate::components::inputs::{input_value, loading, parse_id, select_value, text_area, text_field};
use crate::tops_sheet::top_sheet::TopSheet;

pub fn view(page: &TestsPage, ctx: &Context<TestsPage>) -> Html {
    let link = ctx.link();
    let props = ctx.props().clone();
    html! {
        <div class="tests-page">
            <section>
                <div class="toolbar">
                    <h3>{ "Тесты" }</h3>
                    <button class="btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                        { "Создать тест" }
                    </button>
                </div>
                if page.loading {
                    { loading() }
                } else if page.items.is_empty() {
                    <p class="hint">{ "Тестов пока нет" }</p>
                } else {
                    <ul class="list">
                        { for page.items.iter().map(|test| item(test, link)) }
                    </ul>
                }
            </section>
            <section>
                <h3>{ "Расписание тестов" }</h3>
                <SchedulePanel api={props.api} on_notice={props.on_notice} on_navigate={props.on_navigate} />
            </section>
            { editor(page, link) }
        </div>
    }
}

fn item(test: &Test, link: &Scope<TestsPage>) -> Html {
    let id = test.id;
    let edit = test.clone();
    html! {
        <li class="list-item">
            <div>
                <strong>{ test.title.clone() }</strong>
                if let Some(description) = &test.description {
                    <small class="hint">{ format!(" {}", description) }</small>
                }
            </div>
            <div class="row-actions">
                <button class="btn-secondary" onclick={link.callback(move |_| Msg::OpenEdit(edit.clone()))}>
                    { "Изменить" }
                </button>
                <button class="btn-danger" onclick={link.callback(move |_| Msg::Delete(id))}>
                    { "Удалить" }
                </button>
            </div>
        </li>
    }
}

fn editor(page: &TestsPage, link: &Scope<TestsPage>) -> Html {
    let title = if page.editing.is_some() { "Редактирование теста" } else { "Новый тест" };
    let total: u32 = page.form_topics.iter().map(|t| t.questions_count).sum();
    html! {
        <TopSheet node_ref={page.sheet_ref.clone()} title={title} on_close={Callback::noop()}>
            <div class="form">
                { text_field("Название", &page.form.title, link.callback(Msg::SetTitle)) }
                { text_area(
                    "Описание",
                    page.form.description.as_deref().unwrap_or_default(),
                    link.callback(Msg::SetDescription),
                ) }
                <fieldset>
                    <legend>{ "Темы" }</legend>
                    if page.topics_pending {
                        { loading() }
                    } else {
                        { for page.form_topics.iter().enumerate().map(|(i, t)| topic_row(page, i, t, link)) }
                        <button class="btn-secondary" onclick={link.callback(|_| Msg::AddTopic)}>
                            { "Добавить тему" }
                        </button>
                        <p class="total">{ format!("Всего вопросов: {}", total) }</p>
                    }
                </fieldset>
                <button
                    class="btn-primary"
                    disabled={page.saving || page.topics_pending}
                    onclick={link.callback(|_| Msg::Save)}
                >
                    { if page.saving { "Сохранение..." } else { "Сохранить" } }
                </button>
            </div>
        </TopSheet>
    }
}

fn topic_row(page: &TestsPage, index: usize, topic: &TestTopic, link: &Scope<TestsPage>) -> Html {
    let over = topic.quota_sum() > topic.questions_count;
    html! {
        <div class={classes!("topic-quota", over.then_some("invalid"))}>
            <div class="row">
                <select onchange={link.callback(move |e: Event| Msg::SetTopic(index, parse_id(&select_value(&e))))}>
                    { for page.topics.iter().map(|t| {
                        let selected = t.id == topic.topic_id;
                        html! { <option value={t.id.to_string()} {selected}>{ t.title.clone() }</option> }
                    }) }
                    if page.topics.iter().all(|t| t.id != topic.topic_id) {
                        <option selected=true value={topic.topic_id.to_string()}>{ topic.label(&page.topics) }</option>
                    }
                </select>
                <label class="inline">
                    { "Вопросов" }
                    <input
                        type="number"
                        min="0"
                        value={topic.questions_count.to_string()}
                        oninput={link.callback(move |e: InputEvent| {
                            Msg::SetCount(index, input_value(&e).trim().parse().unwrap_or(0))
                        })}
                    />
                </label>
                <button class="btn-danger" onclick={link.callback(move |_| Msg::RemoveTopic(index))}>
                    { "✕" }
                </button>
            </div>
            <div class="quota">
                { for QuestionType::ALL.iter().map(|kind| {
                    let kind = *kind;
                    let value = topic.type_quota.get(&kind).copied().unwrap_or(0);
                    html! {
                        <label class="inline">
                            { kind.label() }
                            <input
                                type="number"
                                min="0"
                                value={value.to_string()}
                                oninput={link.callback(move |e: InputEvent| {
                                    Msg::SetQuota(index, kind, input_value(&e).trim().parse().unwrap_or(0))
                                })}
                            />
                        </label>
                    }
                }) }
            </div>
            if over {
                <small class="error">
                    { format!("Сумма квот ({}) больше числа вопросов", topic.quota_sum()) }
                </small>
            }
        </div>
    }
}
