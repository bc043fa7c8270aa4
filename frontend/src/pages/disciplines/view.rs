use common::model::discipline::{Discipline, PendingLab};
use common::model::user::Role;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::DisciplinesPage;
use crate::components::group_selector::group_checklist;
use crate::components::inputs::{input_value, loading, number_field, parse_id, select_field, text_area, text_field};
use crate::tops_sheet::top_sheet::TopSheet;

pub fn view(page: &DisciplinesPage, ctx: &Context<DisciplinesPage>) -> Html {
    let link = ctx.link();
    let admin = ctx.props().api.session().role() == Role::Admin;
    html! {
        <div class="disciplines-page">
            if admin {
                <div class="toolbar">
                    <button class="btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                        { "Создать дисциплину" }
                    </button>
                </div>
            }
            if page.loading {
                { loading() }
            } else if page.items.is_empty() {
                <p class="hint">{ "Дисциплин пока нет" }</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{ "Название" }</th>
                            <th>{ "Группы" }</th>
                            <th>{ "Лекции" }</th>
                            <th>{ "Лабораторные" }</th>
                            <th>{ "Тест" }</th>
                            <th>{ "Всего баллов" }</th>
                            if admin {
                                <th></th>
                            }
                        </tr>
                    </thead>
                    <tbody>
                        { for page.items.iter().map(|d| row(page, d, admin, link)) }
                    </tbody>
                </table>
            }
            if admin {
                { editor(page, link) }
            }
        </div>
    }
}

fn row(page: &DisciplinesPage, discipline: &Discipline, admin: bool, link: &Scope<DisciplinesPage>) -> Html {
    let id = discipline.id;
    let edit = discipline.clone();
    let test = page
        .test_title(discipline.test_id)
        .map(|title| format!("{} ({} б.)", title, discipline.test_points))
        .unwrap_or_else(|| format!("{} б.", discipline.test_points));
    html! {
        <tr>
            <td>
                <div>{ discipline.name.clone() }</div>
                if let Some(description) = discipline.description.as_ref().filter(|d| !d.is_empty()) {
                    <small class="hint">{ description.clone() }</small>
                }
            </td>
            <td>{ page.group_names(&discipline.group_ids) }</td>
            <td>{ format!("{} ({} б.)", discipline.lecture_count, discipline.lecture_points) }</td>
            <td>{ format!("{} ({} б.)", discipline.labs_len(), discipline.lab_points()) }</td>
            <td>{ test }</td>
            <td>{ discipline.total_points().to_string() }</td>
            if admin {
                <td class="row-actions">
                    <button class="btn-secondary" onclick={link.callback(move |_| Msg::OpenEdit(edit.clone()))}>
                        { "Изменить" }
                    </button>
                    <button class="btn-danger" onclick={link.callback(move |_| Msg::Delete(id))}>
                        { "Удалить" }
                    </button>
                </td>
            }
        </tr>
    }
}

fn editor(page: &DisciplinesPage, link: &Scope<DisciplinesPage>) -> Html {
    let draft = &page.draft;
    let title = if page.editing.is_some() { "Редактирование дисциплины" } else { "Новая дисциплина" };
    let tests = page.tests.iter().map(|t| (t.id.to_string(), t.title.clone())).collect();
    let selected_test = draft.test_id.map(|id| id.to_string()).unwrap_or_default();
    html! {
        <TopSheet node_ref={page.sheet_ref.clone()} title={title} on_close={Callback::noop()}>
            <div class="form">
                { text_field("Название", &draft.name, link.callback(Msg::SetName)) }
                { text_area("Описание", &draft.description, link.callback(Msg::SetDescription)) }
                <fieldset>
                    <legend>{ "Группы" }</legend>
                    { group_checklist(&page.groups, &draft.group_ids, link.callback(Msg::ToggleGroup)) }
                </fieldset>
                <div class="row">
                    { number_field("Количество лекций", draft.lecture_count, link.callback(Msg::SetLectureCount)) }
                    { number_field("Баллы за лекции", draft.lecture_points, link.callback(Msg::SetLecturePoints)) }
                </div>
                <div class="row">
                    { select_field(
                        "Тест",
                        "Без теста",
                        tests,
                        &selected_test,
                        link.callback(|raw: String| Msg::SetTest(parse_id(&raw))),
                    ) }
                    { number_field("Баллы за тест", draft.test_points, link.callback(Msg::SetTestPoints)) }
                </div>
                <fieldset>
                    <legend>{ "Лабораторные работы" }</legend>
                    { for draft.existing_labs.iter().enumerate().map(|(i, lab)| html! {
                        <div class="lab-row existing">
                            <span>{ lab.title.clone().unwrap_or_else(|| format!("Лабораторная работа {}", i + 1)) }</span>
                            <span class="hint">{ format!("{} б.", lab.points) }</span>
                        </div>
                    }) }
                    { for draft.pending_labs.iter().map(|lab| pending_lab(lab, link)) }
                    <button class="btn-secondary" onclick={link.callback(|_| Msg::AddLab)}>
                        { "Добавить лабораторную" }
                    </button>
                </fieldset>
                <p class="total">{ format!("Всего баллов: {}", draft.total_points()) }</p>
                <button class="btn-primary" disabled={page.saving} onclick={link.callback(|_| Msg::Save)}>
                    { if page.saving { "Сохранение..." } else { "Сохранить" } }
                </button>
            </div>
        </TopSheet>
    }
}

fn pending_lab(lab: &PendingLab, link: &Scope<DisciplinesPage>) -> Html {
    let number = lab.number;
    html! {
        <div class="lab-row">
            <input
                type="text"
                value={lab.title.clone()}
                oninput={link.callback(move |e: InputEvent| Msg::SetLabTitle(number, input_value(&e)))}
            />
            <input
                type="number"
                min="0"
                value={lab.points.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::SetLabPoints(number, input_value(&e).trim().parse().unwrap_or(0))
                })}
            />
            <button class="btn-danger" onclick={link.callback(move |_| Msg::RemoveLab(number))}>
                { "✕" }
            </button>
        </div>
    }
}
