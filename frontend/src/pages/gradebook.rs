//! Staff gradebook: one row per student of a group, one column per lecture
//! and lab. Attendance marks are kept on this screen only; the API has no
//! endpoint to record them.

use std::collections::HashSet;

use common::model::discipline::Discipline;
use common::model::group::Group;
use common::model::user::User;
use common::validation::RequestGeneration;
use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use super::PageProps;
use crate::api::{disciplines, groups};
use crate::components::group_selector::group_select;
use crate::components::inputs::{loading, parse_id, select_field};

pub enum Msg {
    DisciplinesLoaded(Vec<Discipline>),
    GroupsLoaded(Vec<Group>),
    SelectDiscipline(Option<i64>),
    SelectGroup(Option<i64>),
    RosterLoaded(u64, Vec<User>),
    ToggleAbsence(i64, u32),
}

pub struct GradebookPage {
    disciplines: Option<Vec<Discipline>>,
    groups: Vec<Group>,
    discipline_id: Option<i64>,
    group_id: Option<i64>,
    roster: Option<Vec<User>>,
    generation: RequestGeneration,
    /// (student, lecture) pairs marked absent.
    absences: HashSet<(i64, u32)>,
}

impl Component for GradebookPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props().clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match disciplines::list(&props.api).await {
                Ok(list) => link.send_message(Msg::DisciplinesLoaded(list)),
                Err(err) => {
                    props.failed("Не удалось загрузить дисциплины", &err);
                    link.send_message(Msg::DisciplinesLoaded(Vec::new()));
                }
            }
            match groups::list(&props.api).await {
                Ok(list) => link.send_message(Msg::GroupsLoaded(list)),
                Err(err) => props.failed("Не удалось загрузить группы", &err),
            }
        });
        Self {
            disciplines: None,
            groups: Vec::new(),
            discipline_id: None,
            group_id: None,
            roster: None,
            generation: RequestGeneration::default(),
            absences: HashSet::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DisciplinesLoaded(list) => self.disciplines = Some(list),
            Msg::GroupsLoaded(list) => self.groups = list,
            Msg::SelectDiscipline(id) => {
                self.discipline_id = id;
                self.absences.clear();
            }
            Msg::SelectGroup(group_id) => {
                self.group_id = group_id;
                self.roster = None;
                let tag = self.generation.next();
                if let Some(id) = group_id {
                    let props = ctx.props().clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match groups::students(&props.api, id).await {
                            Ok(list) => link.send_message(Msg::RosterLoaded(tag, list)),
                            Err(err) => {
                                props.failed("Не удалось загрузить студентов", &err);
                                link.send_message(Msg::RosterLoaded(tag, Vec::new()));
                            }
                        }
                    });
                }
            }
            Msg::RosterLoaded(tag, mut list) => {
                if !self.generation.is_current(tag) {
                    return false;
                }
                list.sort_by_key(|user| user.full_name());
                self.roster = Some(list);
            }
            Msg::ToggleAbsence(user_id, lecture) => {
                if !self.absences.remove(&(user_id, lecture)) {
                    self.absences.insert((user_id, lecture));
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let Some(disciplines) = &self.disciplines else {
            return loading();
        };
        let options = disciplines
            .iter()
            .map(|d| (d.id.to_string(), d.name.clone()))
            .collect();
        let selected = self.discipline_id.map(|id| id.to_string()).unwrap_or_default();
        let discipline = disciplines.iter().find(|d| Some(d.id) == self.discipline_id);
        let groups: Vec<Group> = match discipline {
            Some(d) if !d.group_ids.is_empty() => self
                .groups
                .iter()
                .filter(|group| d.group_ids.contains(&group.id))
                .cloned()
                .collect(),
            _ => self.groups.clone(),
        };
        html! {
            <div class="gradebook-page">
                <div class="toolbar">
                    { select_field(
                        "Дисциплина",
                        "Выберите дисциплину",
                        options,
                        &selected,
                        link.callback(|raw: String| Msg::SelectDiscipline(parse_id(&raw))),
                    ) }
                    { group_select(&groups, self.group_id, link.callback(Msg::SelectGroup)) }
                </div>
                { match (discipline, &self.roster) {
                    (Some(discipline), Some(roster)) => self.sheet(discipline, roster, link),
                    (Some(_), None) if self.group_id.is_some() => loading(),
                    _ => html! { <p class="hint">{ "Выберите дисциплину и группу" }</p> },
                } }
            </div>
        }
    }
}

impl GradebookPage {
    fn sheet(&self, discipline: &Discipline, roster: &[User], link: &Scope<Self>) -> Html {
        let lectures = discipline.lecture_count;
        html! {
            <>
                <h3>{ format!("Ведомость дисциплины «{}»", discipline.name) }</h3>
                <table class="table gradebook">
                    <thead>
                        <tr>
                            <th rowspan="2">{ "Студент" }</th>
                            if lectures > 0 {
                                <th colspan={lectures.to_string()}>{ "Лекции" }</th>
                            }
                            { for discipline.labs.iter().enumerate().map(|(i, lab)| html! {
                                <th rowspan="2" title={lab.title.clone().unwrap_or_default()}>
                                    { format!("Лаб{} ({})", i + 1, lab.points) }
                                </th>
                            }) }
                            <th rowspan="2">{ format!("Тест ({})", discipline.test_points) }</th>
                            <th rowspan="2">{ format!("Итог ({})", discipline.total_points()) }</th>
                        </tr>
                        <tr>
                            { for (1..=lectures).map(|no| html! { <th>{ no.to_string() }</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for roster.iter().map(|student| {
                            let user_id = student.id;
                            html! {
                                <tr>
                                    <td>{ student.short_name() }</td>
                                    { for (1..=lectures).map(|no| {
                                        let absent = self.absences.contains(&(user_id, no));
                                        html! {
                                            <td class="cell" onclick={link.callback(move |_| Msg::ToggleAbsence(user_id, no))}>
                                                { if absent { "Н" } else { "" } }
                                            </td>
                                        }
                                    }) }
                                    { for discipline.labs.iter().map(|_| html! { <td class="cell"></td> }) }
                                    <td class="cell"></td>
                                    <td class="cell"></td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
                if roster.is_empty() {
                    <p class="hint">{ "В группе нет студентов" }</p>
                }
            </>
        }
    }
}
