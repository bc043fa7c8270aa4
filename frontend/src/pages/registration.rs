use common::menu::Page;
use common::model::group::Group;
use common::notice::Notice;
use common::session;
use common::validation::RegistrationDraft;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::PageProps;
use crate::api::groups;
use crate::components::group_selector::group_select;
use crate::components::inputs::{password_field, text_field};

pub enum Field {
    FirstName,
    LastName,
    Patronymic,
    Email,
    Password,
    ConfirmPassword,
}

pub enum Msg {
    GroupsLoaded(Vec<Group>),
    Set(Field, String),
    SetGroup(Option<i64>),
    Submit,
    Done(bool),
}

pub struct RegistrationPage {
    draft: RegistrationDraft,
    groups: Vec<Group>,
    submitting: bool,
}

impl Component for RegistrationPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props().clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match groups::list(&props.api).await {
                Ok(list) => link.send_message(Msg::GroupsLoaded(list)),
                Err(err) => props.failed("Не удалось загрузить группы", &err),
            }
        });
        Self {
            draft: RegistrationDraft::default(),
            groups: Vec::new(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::GroupsLoaded(groups) => self.groups = groups,
            Msg::Set(field, value) => {
                let slot = match field {
                    Field::FirstName => &mut self.draft.first_name,
                    Field::LastName => &mut self.draft.last_name,
                    Field::Patronymic => &mut self.draft.patronymic,
                    Field::Email => &mut self.draft.email,
                    Field::Password => &mut self.draft.password,
                    Field::ConfirmPassword => &mut self.draft.confirm_password,
                };
                *slot = value;
            }
            Msg::SetGroup(group_id) => self.draft.group_id = group_id,
            Msg::Submit => {
                let input = match self.draft.validate() {
                    Ok(input) => input,
                    Err(err) => {
                        ctx.props().on_notice.emit(Notice::error(err.to_string()));
                        return false;
                    }
                };
                self.submitting = true;
                let props = ctx.props().clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = session::registration(&props.api, &input).await;
                    if let Err(err) = &result {
                        props.failed("Ошибка регистрации", err);
                    }
                    link.send_message(Msg::Done(result.is_ok()));
                });
            }
            Msg::Done(ok) => {
                self.submitting = false;
                if ok {
                    ctx.props()
                        .succeeded("Регистрация прошла успешно. Дождитесь подтверждения администратора.");
                    ctx.props().on_navigate.emit(Page::Login);
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let set = |field: fn() -> Field| link.callback(move |value| Msg::Set(field(), value));
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        html! {
            <div class="auth-card">
                <h2>{ "Регистрация" }</h2>
                <form {onsubmit}>
                    { text_field("Фамилия", &self.draft.last_name, set(|| Field::LastName)) }
                    { text_field("Имя", &self.draft.first_name, set(|| Field::FirstName)) }
                    { text_field("Отчество", &self.draft.patronymic, set(|| Field::Patronymic)) }
                    { group_select(&self.groups, self.draft.group_id, link.callback(Msg::SetGroup)) }
                    { text_field("Электронная почта", &self.draft.email, set(|| Field::Email)) }
                    { password_field("Пароль", &self.draft.password, set(|| Field::Password)) }
                    { password_field("Повторите пароль", &self.draft.confirm_password, set(|| Field::ConfirmPassword)) }
                    <button class="btn-primary" type="submit" disabled={self.submitting}>
                        { "Зарегистрироваться" }
                    </button>
                </form>
                <button class="link-btn" onclick={ctx.props().on_navigate.reform(|_| Page::Login)}>
                    { "Уже есть аккаунт? Войти" }
                </button>
            </div>
        }
    }
}
