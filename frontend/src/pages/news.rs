//! News feed. Everyone reads; staff create, edit and delete through a
//! top-sheet form with a markdown preview.

use common::error::ValidationError;
use common::model::group::Group;
use common::model::news::{filter_news, News, NewsInput};
use common::notice::Notice;
use common::validation::RequestGeneration;
use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use super::PageProps;
use crate::api::{groups, news};
use crate::components::group_selector::group_checklist;
use crate::components::inputs::{confirm, input_value, loading, parse_id, text_area, text_field};
use crate::components::markdown::render_markdown;
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet, TopSheet};

pub enum Msg {
    Load,
    Loaded(u64, Vec<News>),
    GroupsLoaded(Vec<Group>),
    SetQuery(String),
    OpenCreate,
    OpenEdit(News),
    SetTitle(String),
    SetDescription(String),
    SetFileUrl(String),
    SetTestId(String),
    ToggleGroup(i64),
    Save,
    Saved,
    Delete(i64),
    Failed,
}

pub struct NewsPage {
    items: Vec<News>,
    groups: Vec<Group>,
    loading: bool,
    generation: RequestGeneration,
    query: String,
    editing: Option<i64>,
    form: NewsInput,
    saving: bool,
    sheet_ref: NodeRef,
}

impl Component for NewsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        if ctx.props().api.session().role().is_staff() {
            let props = ctx.props().clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match groups::list(&props.api).await {
                    Ok(list) => link.send_message(Msg::GroupsLoaded(list)),
                    Err(err) => props.failed("Не удалось загрузить группы", &err),
                }
            });
        }
        Self {
            items: Vec::new(),
            groups: Vec::new(),
            loading: true,
            generation: RequestGeneration::default(),
            query: String::new(),
            editing: None,
            form: NewsInput::default(),
            saving: false,
            sheet_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Load => {
                let tag = self.generation.next();
                let props = props.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match news::list(&props.api).await {
                        Ok(items) => link.send_message(Msg::Loaded(tag, items)),
                        Err(err) => {
                            props.failed("Не удалось загрузить новости", &err);
                            link.send_message(Msg::Failed);
                        }
                    }
                });
                false
            }
            Msg::Loaded(tag, items) => {
                if !self.generation.is_current(tag) {
                    return false;
                }
                self.items = items;
                self.loading = false;
                true
            }
            Msg::GroupsLoaded(groups) => {
                self.groups = groups;
                true
            }
            Msg::SetQuery(query) => {
                self.query = query;
                true
            }
            Msg::OpenCreate => {
                self.editing = None;
                self.form = NewsInput::default();
                open_top_sheet(&self.sheet_ref);
                true
            }
            Msg::OpenEdit(item) => {
                self.editing = Some(item.id);
                self.form = NewsInput::from_news(&item);
                open_top_sheet(&self.sheet_ref);
                true
            }
            Msg::SetTitle(title) => {
                self.form.title = title;
                true
            }
            Msg::SetDescription(description) => {
                self.form.description = description;
                true
            }
            Msg::SetFileUrl(url) => {
                self.form.file_url = Some(url.trim().to_string()).filter(|url| !url.is_empty());
                true
            }
            Msg::SetTestId(raw) => {
                self.form.test_id = parse_id(&raw);
                true
            }
            Msg::ToggleGroup(id) => {
                if let Some(pos) = self.form.group_ids.iter().position(|g| *g == id) {
                    self.form.group_ids.remove(pos);
                } else {
                    self.form.group_ids.push(id);
                }
                true
            }
            Msg::Save => {
                if self.form.title.trim().is_empty() {
                    props.on_notice.emit(Notice::error(ValidationError::MissingFields.to_string()));
                    return false;
                }
                self.saving = true;
                let (form, editing) = (self.form.clone(), self.editing);
                let props = props.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match editing {
                        Some(id) => news::update(&props.api, id, &form).await,
                        None => news::create(&props.api, &form).await.map(|_| ()),
                    };
                    match result {
                        Ok(()) => {
                            props.succeeded("Новость сохранена");
                            link.send_message(Msg::Saved);
                        }
                        Err(err) => {
                            props.failed("Ошибка при сохранении новости", &err);
                            link.send_message(Msg::Failed);
                        }
                    }
                });
                true
            }
            Msg::Saved => {
                self.saving = false;
                close_top_sheet(&self.sheet_ref);
                ctx.link().send_message(Msg::Load);
                true
            }
            Msg::Delete(id) => {
                if !confirm("Удалить новость?") {
                    return false;
                }
                let props = props.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match news::delete(&props.api, id).await {
                        Ok(()) => {
                            props.succeeded("Новость удалена");
                            link.send_message(Msg::Load);
                        }
                        Err(err) => props.failed("Ошибка при удалении новости", &err),
                    }
                });
                false
            }
            Msg::Failed => {
                self.saving = false;
                self.loading = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let staff = ctx.props().api.session().role().is_staff();
        let found = filter_news(&self.items, &self.query);

        html! {
            <div class="news-page">
                <div class="toolbar">
                    <input
                        type="search"
                        placeholder="Поиск по новостям"
                        value={self.query.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetQuery(input_value(&e)))}
                    />
                    if staff {
                        <button class="btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                            { "Добавить новость" }
                        </button>
                    }
                </div>
                if self.loading {
                    { loading() }
                } else if found.is_empty() {
                    <p class="hint">{ "Новостей нет" }</p>
                } else {
                    { for found.into_iter().map(|item| self.news_card(item, staff, link)) }
                }
                { self.editor(link) }
            </div>
        }
    }
}

impl NewsPage {
    fn news_card(&self, item: &News, staff: bool, link: &Scope<Self>) -> Html {
        let id = item.id;
        let edit = item.clone();
        html! {
            <article class="card news-card">
                <h3>{ item.title.clone() }</h3>
                { render_markdown(&item.description) }
                if let Some(url) = &item.file_url {
                    <a href={url.clone()} target="_blank" rel="noopener">{ "Вложение" }</a>
                }
                if staff {
                    <div class="card-actions">
                        <button class="btn-secondary" onclick={link.callback(move |_| Msg::OpenEdit(edit.clone()))}>
                            { "Редактировать" }
                        </button>
                        <button class="btn-danger" onclick={link.callback(move |_| Msg::Delete(id))}>
                            { "Удалить" }
                        </button>
                    </div>
                }
            </article>
        }
    }

    fn editor(&self, link: &Scope<Self>) -> Html {
        let title = if self.editing.is_some() { "Редактирование новости" } else { "Новая новость" };
        let test_id = self.form.test_id.map(|id| id.to_string()).unwrap_or_default();
        html! {
            <TopSheet node_ref={self.sheet_ref.clone()} title={title} on_close={Callback::noop()}>
                <div class="form">
                    { text_field("Заголовок", &self.form.title, link.callback(Msg::SetTitle)) }
                    { text_area("Текст (Markdown)", &self.form.description, link.callback(Msg::SetDescription)) }
                    <div class="preview">{ render_markdown(&self.form.description) }</div>
                    { text_field("Ссылка на файл", self.form.file_url.as_deref().unwrap_or_default(), link.callback(Msg::SetFileUrl)) }
                    { text_field("Номер теста", &test_id, link.callback(Msg::SetTestId)) }
                    { group_checklist(&self.groups, &self.form.group_ids, link.callback(Msg::ToggleGroup)) }
                    <button class="btn-primary" disabled={self.saving} onclick={link.callback(|_| Msg::Save)}>
                        { if self.saving { "Сохранение..." } else { "Сохранить" } }
                    </button>
                </div>
            </TopSheet>
        }
    }
}
