//! Application shell: owns the session, the current page and the notice
//! banner. Pages talk to it through the callbacks in [`PageProps`].

use common::error::ApiError;
use common::menu::{allows, Page};
use common::notice::Notice;
use common::session;
use gloo_timers::callback::Timeout;
use log::{info, warn};
use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::inputs::loading;
use crate::components::notice_banner::notice_banner;
use crate::pages::attempt::AttemptPage;
use crate::pages::disciplines::DisciplinesPage;
use crate::pages::gradebook::GradebookPage;
use crate::pages::groups::GroupsPage;
use crate::pages::login::LoginPage;
use crate::pages::materials::MaterialsPage;
use crate::pages::menu::MenuPage;
use crate::pages::my_grades::MyGradesPage;
use crate::pages::news::NewsPage;
use crate::pages::questions::QuestionsPage;
use crate::pages::registration::RegistrationPage;
use crate::pages::student_tests::StudentTestsPage;
use crate::pages::students::StudentsPage;
use crate::pages::tests::TestsPage;
use crate::pages::PageProps;
use crate::session::SessionHandle;

pub enum Msg {
    Restored,
    Navigate(Page),
    SignedIn,
    Logout,
    Unauthorized,
    Notify(Notice),
    DismissNotice,
}

pub struct App {
    session: SessionHandle,
    api: ApiClient,
    page: Page,
    booting: bool,
    notice: Option<Notice>,
    notice_timeout: Option<Timeout>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let session = SessionHandle::new();
        let api = ApiClient::new(session.clone(), ctx.link().callback(|_| Msg::Unauthorized));

        let link = ctx.link().clone();
        let restoring = api.clone();
        spawn_local(async move {
            if let Err(err) = session::restore(restoring.session().cell(), &restoring).await {
                warn!("session restore failed: {}", err);
            }
            link.send_message(Msg::Restored);
        });

        Self {
            session,
            api,
            page: Page::Login,
            booting: true,
            notice: None,
            notice_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Restored => {
                self.booting = false;
                self.page = if self.session.is_auth() { Page::Menu } else { Page::Login };
                true
            }
            Msg::Navigate(page) => {
                if !page.is_public() && !self.session.is_auth() {
                    self.page = Page::Login;
                } else if allows(self.session.role(), page) {
                    self.page = page;
                } else {
                    warn!("{:?} is not available to {:?}", page, self.session.role());
                    self.page = Page::Menu;
                }
                true
            }
            Msg::SignedIn => {
                info!("signed in as {:?}", self.session.role());
                self.page = Page::Menu;
                true
            }
            Msg::Logout => {
                self.session.logout();
                self.page = Page::Login;
                true
            }
            Msg::Unauthorized => {
                self.page = Page::Login;
                ctx.link()
                    .send_message(Msg::Notify(Notice::error(ApiError::Unauthorized.user_message())));
                true
            }
            Msg::Notify(notice) => {
                let link = ctx.link().clone();
                self.notice_timeout = Some(Timeout::new(notice.dismiss_after_ms(), move || {
                    link.send_message(Msg::DismissNotice)
                }));
                self.notice = Some(notice);
                true
            }
            Msg::DismissNotice => {
                self.notice_timeout = None;
                self.notice.take().is_some()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = PageProps {
            api: self.api.clone(),
            on_notice: link.callback(Msg::Notify),
            on_navigate: link.callback(Msg::Navigate),
        };

        html! {
            <div class="app">
                { self.header(link) }
                { notice_banner(self.notice.as_ref(), link.callback(|_| Msg::DismissNotice)) }
                <main class="page">
                    if self.booting {
                        { loading() }
                    } else {
                        { self.page_view(props, link) }
                    }
                </main>
            </div>
        }
    }
}

impl App {
    fn header(&self, link: &Scope<Self>) -> Html {
        if self.booting || !self.session.is_auth() {
            return html! {};
        }
        let name = self.session.user().map(|user| user.short_name()).unwrap_or_default();
        html! {
            <header class="app-header">
                <button class="link-btn" onclick={link.callback(|_| Msg::Navigate(Page::Menu))}>
                    { "Электронный журнал" }
                </button>
                <span class="page-title">{ self.page.title() }</span>
                <span class="user-name">{ name }</span>
                <button class="btn-secondary" onclick={link.callback(|_| Msg::Logout)}>{ "Выйти" }</button>
            </header>
        }
    }

    fn page_view(&self, props: PageProps, link: &Scope<Self>) -> Html {
        let PageProps {
            api,
            on_notice,
            on_navigate,
        } = props;
        match self.page {
            Page::Login => html! {
                <LoginPage {api} {on_notice} {on_navigate} on_signed_in={link.callback(|_| Msg::SignedIn)} />
            },
            Page::Registration => html! { <RegistrationPage {api} {on_notice} {on_navigate} /> },
            Page::Menu => html! { <MenuPage {api} {on_notice} {on_navigate} /> },
            Page::News => html! { <NewsPage {api} {on_notice} {on_navigate} /> },
            Page::Disciplines => html! { <DisciplinesPage {api} {on_notice} {on_navigate} /> },
            Page::Tests => html! { <TestsPage {api} {on_notice} {on_navigate} /> },
            Page::Questions => html! { <QuestionsPage {api} {on_notice} {on_navigate} /> },
            Page::Groups => html! { <GroupsPage {api} {on_notice} {on_navigate} /> },
            Page::Students => html! { <StudentsPage {api} {on_notice} {on_navigate} /> },
            Page::Materials => html! { <MaterialsPage {api} {on_notice} {on_navigate} /> },
            Page::Gradebook => html! { <GradebookPage {api} {on_notice} {on_navigate} /> },
            Page::MyTests => html! { <StudentTestsPage {api} {on_notice} {on_navigate} /> },
            Page::MyGrades => html! { <MyGradesPage {api} {on_notice} {on_navigate} /> },
            Page::Attempt(attempt_id) => html! {
                <AttemptPage key={attempt_id} {api} {on_notice} {on_navigate} {attempt_id} />
            },
        }
    }
}
