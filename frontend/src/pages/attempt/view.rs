use common::attempt::AttemptFlow;
use common::model::attempt::TestResults;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::AttemptPage;
use crate::components::inputs::loading;
use crate::components::question_answer::answer_view;

pub fn view(page: &AttemptPage, ctx: &Context<AttemptPage>) -> Html {
    let link = ctx.link();
    if page.loading {
        return loading();
    }
    let Some(flow) = &page.flow else {
        return html! {
            <div class="attempt-page">
                <p class="hint">{ "Попытка недоступна" }</p>
                <button class="btn-secondary" onclick={link.callback(|_| Msg::Back)}>{ "К списку тестов" }</button>
            </div>
        };
    };
    html! {
        <div class="attempt-page">
            if let Some(results) = flow.results() {
                { results_panel(results) }
            }
            { palette(flow, link) }
            { question_card(page, flow, link) }
            <div class="attempt-footer">
                <span class="hint">
                    { format!("Отвечено {} из {}", flow.answered_count(), flow.questions().len()) }
                    if page.in_flight > 0 {
                        { " · сохранение..." }
                    }
                </span>
                <button class="btn-secondary" onclick={link.callback(|_| Msg::Back)}>{ "К списку тестов" }</button>
                if !flow.is_finished() {
                    <button class="btn-primary" disabled={page.finishing} onclick={link.callback(|_| Msg::Finish)}>
                        { if page.finishing { "Завершение..." } else { "Завершить тест" } }
                    </button>
                }
            </div>
        </div>
    }
}

fn results_panel(results: TestResults) -> Html {
    html! {
        <section class="card results">
            <h3>{ "Тест завершён" }</h3>
            <p>{ format!("Набрано баллов: {} из {}", trim_score(results.score), trim_score(results.max_score)) }</p>
            <div class="progress">
                <div class="progress-bar" style={format!("width: {}%", results.percentage.min(100))}></div>
            </div>
            <p class="percentage">{ format!("{}%", results.percentage) }</p>
        </section>
    }
}

/// `3` rather than `3.0`; fractional scores keep one decimal.
fn trim_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{:.1}", score)
    }
}

fn palette(flow: &AttemptFlow, link: &Scope<AttemptPage>) -> Html {
    html! {
        <nav class="question-palette">
            { for flow.questions().iter().enumerate().map(|(index, question)| {
                let class = classes!(
                    "palette-item",
                    (index == flow.current_index()).then_some("current"),
                    flow.is_answered(question.id).then_some("answered"),
                    (flow.is_answered(question.id) && !flow.is_saved(question.id)).then_some("unsaved"),
                );
                html! {
                    <button {class} onclick={link.callback(move |_| Msg::GoTo(index))}>
                        { (index + 1).to_string() }
                    </button>
                }
            }) }
        </nav>
    }
}

fn question_card(page: &AttemptPage, flow: &AttemptFlow, link: &Scope<AttemptPage>) -> Html {
    let Some(question) = flow.current_question() else {
        return html! { <p class="hint">{ "В попытке нет вопросов" }</p> };
    };
    let index = flow.current_index();
    let last = index + 1 == flow.questions().len();
    let disabled = flow.is_finished() || page.finishing;
    html! {
        <section class="card question-card">
            <header>
                <span>{ format!("Вопрос {} из {}", index + 1, flow.questions().len()) }</span>
                <span class="hint">{ format!("{} · баллов: {}", question.question_type.label(), question.points) }</span>
            </header>
            <p class="question-text">{ question.question_text.clone() }</p>
            { answer_view(question, flow.current_answer(), disabled, link.callback(Msg::Edit)) }
            <div class="question-nav">
                <button class="btn-secondary" disabled={index == 0} onclick={link.callback(|_| Msg::Prev)}>
                    { "Назад" }
                </button>
                <button class="btn-secondary" disabled={last} onclick={link.callback(|_| Msg::Next)}>
                    { "Далее" }
                </button>
            </div>
        </section>
    }
}
