//! Schedule panel: which students of a discipline may take its test, and
//! when. Creation is one bulk call for every selected student.

use chrono::Utc;
use common::gateway;
use common::model::discipline::Discipline;
use common::model::schedule::{format_date_time, format_duration, ScheduleDraft, TestSchedule};
use common::model::user::User;
use common::notice::Notice;
use common::validation::RequestGeneration;
use log::warn;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{disciplines, groups, schedules};
use crate::components::inputs::{checkbox, confirm, date_time_field, loading, local_offset, number_field, parse_id, select_field};
use crate::pages::PageProps;
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet, TopSheet};

pub enum Msg {
    DisciplinesLoaded(Vec<Discipline>),
    Select(Option<i64>),
    Reload,
    Loaded(u64, Vec<TestSchedule>, Vec<User>),
    OpenCreate,
    OpenEdit(TestSchedule),
    SetOpensAt(String),
    SetClosesAt(String),
    SetTimeLimit(u32),
    SetMaxAttempts(u32),
    ToggleStudent(i64),
    ToggleAll,
    Save,
    Saved,
    Delete(i64),
    Failed,
}

pub struct SchedulePanel {
    disciplines: Vec<Discipline>,
    discipline_id: Option<i64>,
    schedules: Option<Vec<TestSchedule>>,
    students: Vec<User>,
    generation: RequestGeneration,
    /// Schedule being edited; `None` for a bulk create.
    editing: Option<i64>,
    draft: ScheduleDraft,
    saving: bool,
    sheet_ref: NodeRef,
}

impl Component for SchedulePanel {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props().clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match disciplines::list(&props.api).await {
                Ok(list) => link.send_message(Msg::DisciplinesLoaded(list)),
                Err(err) => props.failed("Не удалось загрузить дисциплины", &err),
            }
        });
        Self {
            disciplines: Vec::new(),
            discipline_id: None,
            schedules: None,
            students: Vec::new(),
            generation: RequestGeneration::default(),
            editing: None,
            draft: ScheduleDraft::with_offset(local_offset()),
            saving: false,
            sheet_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::DisciplinesLoaded(list) => {
                self.disciplines = list;
                true
            }
            Msg::Select(id) => {
                self.discipline_id = id;
                self.schedules = None;
                self.students.clear();
                ctx.link().send_message(Msg::Reload);
                true
            }
            Msg::Reload => {
                let tag = self.generation.next();
                let Some(discipline) = self.selected().cloned() else {
                    return false;
                };
                let props = props.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let list = match schedules::for_discipline(&props.api, discipline.id).await {
                        Ok(list) => list,
                        Err(err) => {
                            props.failed("Не удалось загрузить расписание", &err);
                            link.send_message(Msg::Failed);
                            return;
                        }
                    };
                    let mut students = Vec::new();
                    for group_id in &discipline.group_ids {
                        match groups::students(&props.api, *group_id).await {
                            Ok(roster) => students.extend(roster),
                            Err(err) => warn!("roster of group {} unavailable: {}", group_id, err),
                        }
                    }
                    students.sort_by_key(|user| user.full_name());
                    link.send_message(Msg::Loaded(tag, list, students));
                });
                false
            }
            Msg::Loaded(tag, list, students) => {
                if !self.generation.is_current(tag) {
                    return false;
                }
                self.schedules = Some(list);
                self.students = students;
                true
            }
            Msg::OpenCreate => {
                self.editing = None;
                self.draft = ScheduleDraft::with_offset(local_offset());
                open_top_sheet(&self.sheet_ref);
                true
            }
            Msg::OpenEdit(schedule) => {
                self.editing = Some(schedule.id);
                self.draft = ScheduleDraft::from_schedule(&schedule, local_offset());
                open_top_sheet(&self.sheet_ref);
                true
            }
            Msg::SetOpensAt(value) => {
                self.draft.opens_at = value;
                true
            }
            Msg::SetClosesAt(value) => {
                self.draft.closes_at = value;
                true
            }
            Msg::SetTimeLimit(minutes) => {
                self.draft.set_time_limit_min(minutes);
                true
            }
            Msg::SetMaxAttempts(count) => {
                self.draft.max_attempts = (count > 0).then_some(count);
                true
            }
            Msg::ToggleStudent(id) => {
                self.draft.toggle_student(id);
                true
            }
            Msg::ToggleAll => {
                if self.draft.user_ids.len() == self.students.len() {
                    self.draft.user_ids.clear();
                } else {
                    self.draft.user_ids = self.students.iter().map(|s| s.id).collect();
                }
                true
            }
            Msg::Save => {
                let Some(discipline_id) = self.discipline_id else {
                    return false;
                };
                let props = props.clone();
                let link = ctx.link().clone();
                match self.editing {
                    Some(id) => {
                        let update = match self.draft.validate_window() {
                            Ok(update) => update,
                            Err(err) => {
                                props.on_notice.emit(Notice::error(err.to_string()));
                                return false;
                            }
                        };
                        spawn_local(async move {
                            match schedules::update(&props.api, id, &update).await {
                                Ok(()) => {
                                    props.succeeded("Расписание обновлено");
                                    link.send_message(Msg::Saved);
                                }
                                Err(err) => {
                                    props.failed("Ошибка при сохранении расписания", &err);
                                    link.send_message(Msg::Failed);
                                }
                            }
                        });
                    }
                    None => {
                        let draft = self.draft.clone();
                        spawn_local(async move {
                            match gateway::schedule_test(&props.api, discipline_id, &draft).await {
                                Ok(count) => {
                                    props.succeeded(&format!("Тест назначен студентам: {}", count));
                                    link.send_message(Msg::Saved);
                                }
                                Err(err) => {
                                    props.failed("Ошибка при назначении теста", &err);
                                    link.send_message(Msg::Failed);
                                }
                            }
                        });
                    }
                }
                self.saving = true;
                true
            }
            Msg::Saved => {
                self.saving = false;
                close_top_sheet(&self.sheet_ref);
                ctx.link().send_message(Msg::Reload);
                true
            }
            Msg::Delete(id) => {
                if !confirm("Удалить расписание?") {
                    return false;
                }
                let props = props.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match schedules::delete(&props.api, id).await {
                        Ok(()) => {
                            props.succeeded("Расписание удалено");
                            link.send_message(Msg::Reload);
                        }
                        Err(err) => props.failed("Ошибка при удалении расписания", &err),
                    }
                });
                false
            }
            Msg::Failed => {
                self.saving = false;
                if self.schedules.is_none() && self.discipline_id.is_some() {
                    self.schedules = Some(Vec::new());
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let options = self
            .disciplines
            .iter()
            .map(|d| (d.id.to_string(), d.name.clone()))
            .collect();
        let selected = self.discipline_id.map(|id| id.to_string()).unwrap_or_default();
        html! {
            <div class="schedule-panel">
                <div class="toolbar">
                    { select_field(
                        "Дисциплина",
                        "Выберите дисциплину",
                        options,
                        &selected,
                        link.callback(|raw: String| Msg::Select(parse_id(&raw))),
                    ) }
                    if self.discipline_id.is_some() {
                        <button class="btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                            { "Назначить тест" }
                        </button>
                    }
                </div>
                { match (&self.discipline_id, &self.schedules) {
                    (None, _) => html! {},
                    (Some(_), None) => loading(),
                    (Some(_), Some(list)) if list.is_empty() => html! {
                        <p class="hint">{ "Расписаний нет" }</p>
                    },
                    (Some(_), Some(list)) => self.table(list, link),
                } }
                { self.editor(link) }
            </div>
        }
    }
}

impl SchedulePanel {
    fn selected(&self) -> Option<&Discipline> {
        self.disciplines.iter().find(|d| Some(d.id) == self.discipline_id)
    }

    fn student_name(&self, id: i64) -> String {
        self.students
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.short_name())
            .unwrap_or_else(|| format!("Студент #{}", id))
    }

    fn table(&self, list: &[TestSchedule], link: &Scope<Self>) -> Html {
        let now = Utc::now();
        let offset = local_offset();
        html! {
            <table class="table">
                <thead>
                    <tr>
                        <th>{ "Студент" }</th>
                        <th>{ "Открытие" }</th>
                        <th>{ "Закрытие" }</th>
                        <th>{ "Время" }</th>
                        <th>{ "Попытки" }</th>
                        <th>{ "Статус" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for list.iter().map(|schedule| {
                        let id = schedule.id;
                        let edit = schedule.clone();
                        let (label, class) = match schedule.status_at(now) {
                            Some(status) => (status.label(), format!("badge {:?}", status).to_lowercase()),
                            None => ("Некорректные даты", "badge".to_string()),
                        };
                        html! {
                            <tr>
                                <td>{ self.student_name(schedule.user_id) }</td>
                                <td>{ format_date_time(&schedule.opens_at, offset) }</td>
                                <td>{ format_date_time(&schedule.closes_at, offset) }</td>
                                <td>{ format_duration(schedule.attempt_time_limit_sec) }</td>
                                <td>{ schedule.max_attempts.map(|n| n.to_string()).unwrap_or_else(|| "∞".to_string()) }</td>
                                <td><span {class}>{ label }</span></td>
                                <td class="row-actions">
                                    <button class="btn-secondary" onclick={link.callback(move |_| Msg::OpenEdit(edit.clone()))}>
                                        { "Изменить" }
                                    </button>
                                    <button class="btn-danger" onclick={link.callback(move |_| Msg::Delete(id))}>
                                        { "Удалить" }
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        }
    }

    fn editor(&self, link: &Scope<Self>) -> Html {
        let creating = self.editing.is_none();
        let title = if creating { "Назначение теста" } else { "Изменение расписания" };
        let draft = &self.draft;
        html! {
            <TopSheet node_ref={self.sheet_ref.clone()} title={title} on_close={Callback::noop()}>
                <div class="form">
                    { date_time_field("Открытие", &draft.opens_at, link.callback(Msg::SetOpensAt)) }
                    { date_time_field("Закрытие", &draft.closes_at, link.callback(Msg::SetClosesAt)) }
                    { number_field("Время на прохождение, мин", draft.time_limit_min(), link.callback(Msg::SetTimeLimit)) }
                    if creating {
                        { number_field(
                            "Число попыток (0, если без ограничения)",
                            draft.max_attempts.unwrap_or(0),
                            link.callback(Msg::SetMaxAttempts),
                        ) }
                        <fieldset>
                            <legend>{ format!("Студенты ({} выбрано)", draft.user_ids.len()) }</legend>
                            if self.students.is_empty() {
                                <p class="hint">{ "У дисциплины нет студентов" }</p>
                            } else {
                                { checkbox(
                                    "Выбрать всех",
                                    draft.user_ids.len() == self.students.len(),
                                    link.callback(|_| Msg::ToggleAll),
                                ) }
                                { for self.students.iter().map(|student| {
                                    let id = student.id;
                                    checkbox(
                                        &student.full_name(),
                                        draft.user_ids.contains(&id),
                                        link.callback(move |_| Msg::ToggleStudent(id)),
                                    )
                                }) }
                            }
                        </fieldset>
                    }
                    <button class="btn-primary" disabled={self.saving} onclick={link.callback(|_| Msg::Save)}>
                        { if self.saving { "Сохранение..." } else { "Сохранить" } }
                    </button>
                </div>
            </TopSheet>
        }
    }
}
