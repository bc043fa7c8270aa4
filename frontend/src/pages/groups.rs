use common::model::group::{Group, GroupInput};
use common::model::user::User;
use common::notice::Notice;
use common::error::ValidationError;
use common::validation::RequestGeneration;
use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use super::PageProps;
use crate::api::groups;
use crate::components::inputs::{input_value, loading, text_field};

pub enum Msg {
    Load,
    Loaded(u64, Vec<Group>),
    SetNewName(String),
    Create,
    StartRename(i64, String),
    SetRename(String),
    CancelRename,
    SaveRename,
    SetArchived(i64, bool),
    ShowStudents(i64),
    StudentsLoaded(i64, Vec<User>),
    Changed(String),
    Failed,
}

pub struct GroupsPage {
    groups: Vec<Group>,
    loading: bool,
    generation: RequestGeneration,
    new_name: String,
    renaming: Option<(i64, String)>,
    roster: Option<(i64, Vec<User>)>,
    busy: bool,
}

impl GroupsPage {
    /// Runs a write, then reports and reloads.
    fn write<F>(&mut self, ctx: &Context<Self>, action: &'static str, done: &'static str, call: F)
    where
        F: std::future::Future<Output = Result<(), common::error::ApiError>> + 'static,
    {
        self.busy = true;
        let props = ctx.props().clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match call.await {
                Ok(()) => link.send_message(Msg::Changed(done.to_string())),
                Err(err) => {
                    props.failed(action, &err);
                    link.send_message(Msg::Failed);
                }
            }
        });
    }
}

impl Component for GroupsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            groups: Vec::new(),
            loading: true,
            generation: RequestGeneration::default(),
            new_name: String::new(),
            renaming: None,
            roster: None,
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let api = ctx.props().api.clone();
        match msg {
            Msg::Load => {
                let tag = self.generation.next();
                let props = ctx.props().clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match groups::list(&props.api).await {
                        Ok(list) => link.send_message(Msg::Loaded(tag, list)),
                        Err(err) => {
                            props.failed("Не удалось загрузить группы", &err);
                            link.send_message(Msg::Failed);
                        }
                    }
                });
                return false;
            }
            Msg::Loaded(tag, list) => {
                if !self.generation.is_current(tag) {
                    return false;
                }
                self.groups = list;
                self.loading = false;
            }
            Msg::SetNewName(name) => self.new_name = name,
            Msg::Create => {
                let name = self.new_name.trim().to_string();
                if name.is_empty() {
                    ctx.props().on_notice.emit(Notice::error(ValidationError::MissingFields.to_string()));
                    return false;
                }
                self.new_name.clear();
                self.write(ctx, "Ошибка при создании группы", "Группа создана", async move {
                    groups::create(&api, &GroupInput { name }).await.map(|_| ())
                });
            }
            Msg::StartRename(id, name) => self.renaming = Some((id, name)),
            Msg::SetRename(name) => {
                if let Some((_, current)) = &mut self.renaming {
                    *current = name;
                }
            }
            Msg::CancelRename => self.renaming = None,
            Msg::SaveRename => {
                let Some((id, name)) = self.renaming.take() else {
                    return false;
                };
                let name = name.trim().to_string();
                if name.is_empty() {
                    return true;
                }
                self.write(ctx, "Ошибка при переименовании группы", "Группа переименована", async move {
                    groups::rename(&api, id, &GroupInput { name }).await
                });
            }
            Msg::SetArchived(id, archived) => {
                if archived {
                    self.write(ctx, "Ошибка при архивации группы", "Группа перенесена в архив", async move {
                        groups::archive(&api, id).await
                    });
                } else {
                    self.write(ctx, "Ошибка при восстановлении группы", "Группа восстановлена", async move {
                        groups::unarchive(&api, id).await
                    });
                }
            }
            Msg::ShowStudents(id) => {
                let props = ctx.props().clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match groups::students(&props.api, id).await {
                        Ok(users) => link.send_message(Msg::StudentsLoaded(id, users)),
                        Err(err) => props.failed("Не удалось загрузить студентов", &err),
                    }
                });
                return false;
            }
            Msg::StudentsLoaded(id, users) => self.roster = Some((id, users)),
            Msg::Changed(text) => {
                self.busy = false;
                ctx.props().succeeded(&text);
                ctx.link().send_message(Msg::Load);
            }
            Msg::Failed => {
                self.busy = false;
                self.loading = false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="groups-page">
                <div class="toolbar">
                    { text_field("Новая группа", &self.new_name, link.callback(Msg::SetNewName)) }
                    <button class="btn-primary" disabled={self.busy} onclick={link.callback(|_| Msg::Create)}>
                        { "Создать" }
                    </button>
                </div>
                if self.loading {
                    { loading() }
                } else {
                    <table class="table">
                        <thead>
                            <tr><th>{ "Группа" }</th><th>{ "Статус" }</th><th></th></tr>
                        </thead>
                        <tbody>
                            { for self.groups.iter().map(|group| self.row(group, link)) }
                        </tbody>
                    </table>
                }
                { self.roster_view() }
            </div>
        }
    }
}

impl GroupsPage {
    fn row(&self, group: &Group, link: &Scope<Self>) -> Html {
        let id = group.id;
        let archived = group.is_archived();
        let name_cell = match &self.renaming {
            Some((renaming, name)) if *renaming == id => html! {
                <>
                    <input
                        type="text"
                        value={name.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetRename(input_value(&e)))}
                    />
                    <button class="btn-primary" onclick={link.callback(|_| Msg::SaveRename)}>{ "OK" }</button>
                    <button class="btn-secondary" onclick={link.callback(|_| Msg::CancelRename)}>{ "Отмена" }</button>
                </>
            },
            _ => html! { <>{ group.name.clone() }</> },
        };
        let current = group.name.clone();
        html! {
            <tr class={classes!(archived.then_some("archived"))}>
                <td>{ name_cell }</td>
                <td>{ if archived { "В архиве" } else { "Активна" } }</td>
                <td class="actions">
                    <button class="btn-secondary" onclick={link.callback(move |_| Msg::ShowStudents(id))}>
                        { "Студенты" }
                    </button>
                    <button class="btn-secondary" onclick={link.callback(move |_| Msg::StartRename(id, current.clone()))}>
                        { "Переименовать" }
                    </button>
                    <button
                        class="btn-secondary"
                        disabled={self.busy}
                        onclick={link.callback(move |_| Msg::SetArchived(id, !archived))}
                    >
                        { if archived { "Восстановить" } else { "В архив" } }
                    </button>
                </td>
            </tr>
        }
    }

    fn roster_view(&self) -> Html {
        let Some((id, users)) = &self.roster else {
            return html! {};
        };
        let name = self
            .groups
            .iter()
            .find(|group| group.id == *id)
            .map(|group| group.name.clone())
            .unwrap_or_default();
        html! {
            <section class="card">
                <h3>{ format!("Студенты группы {}", name) }</h3>
                if users.is_empty() {
                    <p class="hint">{ "В группе нет студентов" }</p>
                } else {
                    <ol>
                        { for users.iter().map(|user| html! { <li>{ user.full_name() }{ " · " }{ user.email.clone() }</li> }) }
                    </ol>
                }
            </section>
        }
    }
}
