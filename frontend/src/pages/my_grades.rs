//! The signed-in student's standing per discipline: points by category,
//! attended lectures and the resulting mark.

use common::model::discipline::Discipline;
use common::model::progress::{Attendance, StudentProgress};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::PageProps;
use crate::api::{disciplines, progress};
use crate::components::inputs::loading;

#[derive(Clone, PartialEq)]
pub struct GradeRow {
    discipline: Discipline,
    progress: Option<StudentProgress>,
    attendance: Option<Attendance>,
}

pub enum Msg {
    Loaded(Vec<GradeRow>),
    Select(i64),
}

pub struct MyGradesPage {
    rows: Option<Vec<GradeRow>>,
    selected: Option<i64>,
}

async fn load_rows(props: &PageProps) -> Result<Vec<GradeRow>, common::error::ApiError> {
    let mut rows = Vec::new();
    for id in disciplines::my_ids(&props.api).await? {
        let discipline = match disciplines::get(&props.api, id).await {
            Ok(discipline) => discipline,
            Err(err) => {
                log::debug!("discipline {} skipped: {}", id, err);
                continue;
            }
        };
        rows.push(GradeRow {
            discipline,
            progress: progress::own(&props.api, id).await.ok(),
            attendance: progress::attendance(&props.api, id).await.ok(),
        });
    }
    Ok(rows)
}

impl Component for MyGradesPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props().clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match load_rows(&props).await {
                Ok(rows) => link.send_message(Msg::Loaded(rows)),
                Err(err) => {
                    props.failed("Не удалось загрузить оценки", &err);
                    link.send_message(Msg::Loaded(Vec::new()));
                }
            }
        });
        Self {
            rows: None,
            selected: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(rows) => {
                self.selected = rows.first().map(|row| row.discipline.id);
                self.rows = Some(rows);
            }
            Msg::Select(id) => self.selected = Some(id),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let Some(rows) = &self.rows else {
            return loading();
        };
        if rows.is_empty() {
            return html! { <p class="hint">{ "Дисциплины не найдены" }</p> };
        }
        let selected = rows.iter().find(|row| Some(row.discipline.id) == self.selected);
        html! {
            <div class="my-grades-page two-columns">
                <ul class="list">
                    { for rows.iter().map(|row| {
                        let id = row.discipline.id;
                        let mark = row.progress.as_ref().map(|p| p.final_mark().to_string()).unwrap_or_else(|| "—".into());
                        html! {
                            <li class={classes!((self.selected == Some(id)).then_some("selected"))}>
                                <button class="link-btn" onclick={link.callback(move |_| Msg::Select(id))}>
                                    { row.discipline.name.clone() }
                                </button>
                                <span class="badge">{ mark }</span>
                            </li>
                        }
                    }) }
                </ul>
                if let Some(row) = selected {
                    { detail(row) }
                }
            </div>
        }
    }
}

fn detail(row: &GradeRow) -> Html {
    let discipline = &row.discipline;
    let Some(progress) = &row.progress else {
        return html! {
            <section class="card">
                <h3>{ discipline.name.clone() }</h3>
                <p class="hint">{ "Баллы ещё не выставлены" }</p>
            </section>
        };
    };
    let lab_total = discipline.lab_points();
    html! {
        <section class="card">
            <h3>{ discipline.name.clone() }</h3>
            <table class="table">
                <thead><tr><th>{ "Раздел" }</th><th>{ "Получено" }</th><th>{ "Максимум" }</th></tr></thead>
                <tbody>
                    <tr><td>{ "Лекции" }</td><td>{ progress.lecture_points_awarded }</td><td>{ discipline.lecture_points }</td></tr>
                    <tr><td>{ "Лабораторные" }</td><td>{ progress.labs_points_awarded }</td><td>{ lab_total }</td></tr>
                    <tr><td>{ "Тест" }</td><td>{ progress.test_points_awarded }</td><td>{ discipline.test_points }</td></tr>
                    <tr class="total"><td>{ "Итого" }</td><td>{ progress.total_awarded }</td><td>{ progress.total_possible }</td></tr>
                </tbody>
            </table>
            <p>
                { format!("{:.0}% · оценка ", progress.percentage()) }
                <strong>{ progress.final_mark() }</strong>
            </p>
            { attendance_strip(discipline.lecture_count, row.attendance.as_ref()) }
        </section>
    }
}

fn attendance_strip(lecture_count: u32, attendance: Option<&Attendance>) -> Html {
    let Some(attendance) = attendance else {
        return html! {};
    };
    html! {
        <div class="attendance">
            <span>{ format!("Посещено лекций: {} из {}", attendance.attended.len(), lecture_count) }</span>
            <div class="attendance-strip">
                { for (1..=lecture_count).map(|no| {
                    let class = if attendance.attended(no) { "lecture attended" } else { "lecture missed" };
                    html! { <span {class} title={format!("Лекция {}", no)}>{ no }</span> }
                }) }
            </div>
        </div>
    }
}
