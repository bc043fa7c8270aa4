use common::menu::Page;
use common::notice::Notice;
use common::session;
use common::validation::validate_login;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::inputs::{password_field, text_field};

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    pub api: ApiClient,
    pub on_notice: Callback<Notice>,
    pub on_navigate: Callback<Page>,
    pub on_signed_in: Callback<()>,
}

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Done(bool),
}

pub struct LoginPage {
    email: String,
    password: String,
    submitting: bool,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(email) => self.email = email,
            Msg::SetPassword(password) => self.password = password,
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                if let Err(err) = validate_login(&self.email, &self.password) {
                    ctx.props().on_notice.emit(Notice::error(err.to_string()));
                    return false;
                }
                self.submitting = true;
                let api = ctx.props().api.clone();
                let on_notice = ctx.props().on_notice.clone();
                let (email, password) = (self.email.clone(), self.password.clone());
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = session::login(api.session().cell(), &api, &email, &password).await;
                    if let Err(err) = &result {
                        on_notice.emit(Notice::failed("Ошибка входа", err));
                    }
                    link.send_message(Msg::Done(result.is_ok()));
                });
            }
            Msg::Done(ok) => {
                self.submitting = false;
                if ok {
                    self.password.clear();
                    ctx.props().on_signed_in.emit(());
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        html! {
            <div class="auth-card">
                <h2>{ "Вход" }</h2>
                <form {onsubmit}>
                    { text_field("Электронная почта", &self.email, link.callback(Msg::SetEmail)) }
                    { password_field("Пароль", &self.password, link.callback(Msg::SetPassword)) }
                    <button class="btn-primary" type="submit" disabled={self.submitting}>
                        { if self.submitting { "Вход..." } else { "Войти" } }
                    </button>
                </form>
                <button
                    class="link-btn"
                    onclick={ctx.props().on_navigate.reform(|_| Page::Registration)}
                >
                    { "Нет аккаунта? Зарегистрироваться" }
                </button>
            </div>
        }
    }
}
