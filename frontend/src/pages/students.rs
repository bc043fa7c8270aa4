//! Pending approvals and group rosters. Approving and deleting accounts is
//! left to administrators; seminarists only browse rosters.

use common::model::group::Group;
use common::model::user::{Role, User};
use common::validation::RequestGeneration;
use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use super::PageProps;
use crate::api::{groups, users};
use crate::components::group_selector::group_select;
use crate::components::inputs::{confirm, loading};

pub enum Msg {
    LoadPending,
    PendingLoaded(Vec<User>),
    GroupsLoaded(Vec<Group>),
    SelectGroup(Option<i64>),
    RosterLoaded(u64, Vec<User>),
    Approve(i64),
    Delete(i64),
    Changed(&'static str),
}

pub struct StudentsPage {
    pending: Option<Vec<User>>,
    groups: Vec<Group>,
    group_id: Option<i64>,
    roster: Vec<User>,
    roster_generation: RequestGeneration,
    admin: bool,
}

impl Component for StudentsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let admin = ctx.props().api.session().role() == Role::Admin;
        if admin {
            ctx.link().send_message(Msg::LoadPending);
        }
        let props = ctx.props().clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match groups::list(&props.api).await {
                Ok(list) => link.send_message(Msg::GroupsLoaded(list)),
                Err(err) => props.failed("Не удалось загрузить группы", &err),
            }
        });
        Self {
            pending: None,
            groups: Vec::new(),
            group_id: None,
            roster: Vec::new(),
            roster_generation: RequestGeneration::default(),
            admin,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LoadPending => {
                let props = ctx.props().clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match users::pending(&props.api).await {
                        Ok(list) => link.send_message(Msg::PendingLoaded(list)),
                        Err(err) => {
                            props.failed("Не удалось загрузить заявки", &err);
                            link.send_message(Msg::PendingLoaded(Vec::new()));
                        }
                    }
                });
                false
            }
            Msg::PendingLoaded(list) => {
                self.pending = Some(list);
                true
            }
            Msg::GroupsLoaded(list) => {
                self.groups = list;
                true
            }
            Msg::SelectGroup(group_id) => {
                self.group_id = group_id;
                self.roster.clear();
                let tag = self.roster_generation.next();
                if let Some(id) = group_id {
                    let props = ctx.props().clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match groups::students(&props.api, id).await {
                            Ok(list) => link.send_message(Msg::RosterLoaded(tag, list)),
                            Err(err) => props.failed("Не удалось загрузить студентов", &err),
                        }
                    });
                }
                true
            }
            Msg::RosterLoaded(tag, list) => {
                if !self.roster_generation.is_current(tag) {
                    return false;
                }
                self.roster = list;
                true
            }
            Msg::Approve(id) => {
                let props = ctx.props().clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match users::approve(&props.api, id).await {
                        Ok(()) => link.send_message(Msg::Changed("Пользователь подтверждён")),
                        Err(err) => props.failed("Ошибка при подтверждении", &err),
                    }
                });
                false
            }
            Msg::Delete(id) => {
                if !confirm("Удалить пользователя?") {
                    return false;
                }
                let props = ctx.props().clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match users::delete(&props.api, id).await {
                        Ok(()) => link.send_message(Msg::Changed("Пользователь удалён")),
                        Err(err) => props.failed("Ошибка при удалении", &err),
                    }
                });
                false
            }
            Msg::Changed(text) => {
                ctx.props().succeeded(text);
                if self.admin {
                    ctx.link().send_message(Msg::LoadPending);
                }
                ctx.link().send_message(Msg::SelectGroup(self.group_id));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="students-page">
                if self.admin {
                    <section class="card">
                        <h3>{ "Заявки на регистрацию" }</h3>
                        { match &self.pending {
                            None => loading(),
                            Some(list) if list.is_empty() => html! { <p class="hint">{ "Новых заявок нет" }</p> },
                            Some(list) => self.user_table(list, true, link),
                        } }
                    </section>
                }
                <section class="card">
                    <h3>{ "Студенты группы" }</h3>
                    { group_select(&self.groups, self.group_id, link.callback(Msg::SelectGroup)) }
                    if self.group_id.is_some() {
                        { self.user_table(&self.roster, false, link) }
                    }
                </section>
            </div>
        }
    }
}

impl StudentsPage {
    fn group_name(&self, id: Option<i64>) -> String {
        id.and_then(|id| self.groups.iter().find(|group| group.id == id))
            .map(|group| group.name.clone())
            .unwrap_or_else(|| "—".to_string())
    }

    fn user_table(&self, list: &[User], pending: bool, link: &Scope<Self>) -> Html {
        html! {
            <table class="table">
                <thead>
                    <tr><th>{ "ФИО" }</th><th>{ "Почта" }</th><th>{ "Группа" }</th><th></th></tr>
                </thead>
                <tbody>
                    { for list.iter().map(|user| {
                        let id = user.id;
                        html! {
                            <tr>
                                <td>{ user.full_name() }</td>
                                <td>{ user.email.clone() }</td>
                                <td>{ self.group_name(user.group_id) }</td>
                                <td class="actions">
                                    if self.admin && (pending || !user.is_approved) {
                                        <button class="btn-primary" onclick={link.callback(move |_| Msg::Approve(id))}>
                                            { "Подтвердить" }
                                        </button>
                                    }
                                    if self.admin {
                                        <button class="btn-danger" onclick={link.callback(move |_| Msg::Delete(id))}>
                                            { "Удалить" }
                                        </button>
                                    }
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        }
    }
}
