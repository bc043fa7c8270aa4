//! Lecture materials. Everyone lists and downloads what their role can see;
//! administrators also upload, edit and delete.

use common::error::ValidationError;
use common::model::discipline::Discipline;
use common::model::material::{format_file_size, LectureMaterial, MaterialUpdate, MaterialUpload};
use common::model::user::Role;
use common::notice::Notice;
use common::validation::RequestGeneration;
use gloo_file::{Blob, ObjectUrl};
use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlInputElement};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::PageProps;
use crate::api::{disciplines, materials};
use crate::components::inputs::{confirm, loading, number_field, parse_id, select_field, text_area, text_field};
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet, TopSheet};

pub enum Msg {
    Load,
    Loaded(u64, Vec<LectureMaterial>),
    DisciplinesLoaded(Vec<Discipline>),
    OpenUpload,
    OpenEdit(LectureMaterial),
    SetTitle(String),
    SetDescription(String),
    SetDiscipline(Option<i64>),
    SetLectureNo(u32),
    Save,
    Saved,
    Delete(i64),
    Download(LectureMaterial),
    Failed,
}

/// Form shared by upload and edit; edit ignores the discipline and file.
#[derive(Default)]
struct MaterialForm {
    title: String,
    description: String,
    discipline_id: Option<i64>,
    lecture_no: u32,
}

impl MaterialForm {
    fn from_material(material: &LectureMaterial) -> Self {
        Self {
            title: material.title.clone(),
            description: material.description.clone().unwrap_or_default(),
            discipline_id: Some(material.discipline_id),
            lecture_no: material.lecture_no.unwrap_or(0),
        }
    }

    fn lecture_no(&self) -> Option<u32> {
        (self.lecture_no > 0).then_some(self.lecture_no)
    }

    fn upload(&self) -> MaterialUpload {
        MaterialUpload {
            title: self.title.clone(),
            description: self.description.clone(),
            discipline_id: self.discipline_id,
            lecture_no: self.lecture_no(),
        }
    }

    fn update(&self) -> MaterialUpdate {
        MaterialUpdate {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            lecture_no: self.lecture_no(),
        }
    }
}

pub struct MaterialsPage {
    items: Vec<LectureMaterial>,
    disciplines: Vec<Discipline>,
    loading: bool,
    generation: RequestGeneration,
    editing: Option<i64>,
    form: MaterialForm,
    saving: bool,
    sheet_ref: NodeRef,
    file_ref: NodeRef,
}

impl Component for MaterialsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        let props = ctx.props().clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let role = props.api.session().role();
            let list = if role == Role::Student {
                load_own_disciplines(&props).await
            } else {
                disciplines::list(&props.api).await
            };
            match list {
                Ok(list) => link.send_message(Msg::DisciplinesLoaded(list)),
                Err(err) => warn!("discipline names unavailable: {}", err),
            }
        });
        Self {
            items: Vec::new(),
            disciplines: Vec::new(),
            loading: true,
            generation: RequestGeneration::default(),
            editing: None,
            form: MaterialForm::default(),
            saving: false,
            sheet_ref: NodeRef::default(),
            file_ref: NodeRef::default(),
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
                    let role = props.api.session().role();
                    match materials::visible_to(&props.api, role).await {
                        Ok(items) => link.send_message(Msg::Loaded(tag, items)),
                        Err(err) => {
                            props.failed("Не удалось загрузить материалы", &err);
                            link.send_message(Msg::Failed);
                        }
                    }
                });
                false
            }
            Msg::Loaded(tag, mut items) => {
                if !self.generation.is_current(tag) {
                    return false;
                }
                items.sort_by_key(|m| (m.discipline_id, m.lecture_no, m.id));
                self.items = items;
                self.loading = false;
                true
            }
            Msg::DisciplinesLoaded(list) => {
                self.disciplines = list;
                true
            }
            Msg::OpenUpload => {
                self.editing = None;
                self.form = MaterialForm::default();
                if let Some(input) = self.file_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
                open_top_sheet(&self.sheet_ref);
                true
            }
            Msg::OpenEdit(material) => {
                self.editing = Some(material.id);
                self.form = MaterialForm::from_material(&material);
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
            Msg::SetDiscipline(id) => {
                self.form.discipline_id = id;
                true
            }
            Msg::SetLectureNo(no) => {
                self.form.lecture_no = no;
                true
            }
            Msg::Save => {
                if self.form.title.trim().is_empty() {
                    props.on_notice.emit(Notice::error(ValidationError::MissingFields.to_string()));
                    return false;
                }
                let props = props.clone();
                let link = ctx.link().clone();
                match self.editing {
                    Some(id) => {
                        let update = self.form.update();
                        spawn_local(async move {
                            match materials::update(&props.api, id, &update).await {
                                Ok(()) => {
                                    props.succeeded("Материал обновлён");
                                    link.send_message(Msg::Saved);
                                }
                                Err(err) => {
                                    props.failed("Ошибка при сохранении материала", &err);
                                    link.send_message(Msg::Failed);
                                }
                            }
                        });
                    }
                    None => {
                        if self.form.discipline_id.is_none() {
                            props.on_notice.emit(Notice::error(ValidationError::MissingFields.to_string()));
                            return false;
                        }
                        let Some(file) = self.selected_file() else {
                            props.on_notice.emit(Notice::error(ValidationError::MissingFile.to_string()));
                            return false;
                        };
                        let upload = self.form.upload();
                        spawn_local(async move {
                            match materials::upload(&props.api, &upload, &file).await {
                                Ok(_) => {
                                    props.succeeded("Материал загружен");
                                    link.send_message(Msg::Saved);
                                }
                                Err(err) => {
                                    props.failed("Ошибка при загрузке материала", &err);
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
                ctx.link().send_message(Msg::Load);
                true
            }
            Msg::Delete(id) => {
                if !confirm("Удалить материал?") {
                    return false;
                }
                let props = props.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match materials::delete(&props.api, id).await {
                        Ok(()) => {
                            props.succeeded("Материал удалён");
                            link.send_message(Msg::Load);
                        }
                        Err(err) => props.failed("Ошибка при удалении материала", &err),
                    }
                });
                false
            }
            Msg::Download(material) => {
                let props = props.clone();
                spawn_local(async move {
                    match materials::download(&props.api, material.id).await {
                        Ok((bytes, mime)) => {
                            let mime = mime.unwrap_or(material.mime_type);
                            save_file(&bytes, &mime, &material.file_name);
                        }
                        Err(err) => props.failed("Не удалось скачать файл", &err),
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
        let admin = ctx.props().api.session().role() == Role::Admin;
        html! {
            <div class="materials-page">
                if admin {
                    <div class="toolbar">
                        <button class="btn-primary" onclick={link.callback(|_| Msg::OpenUpload)}>
                            { "Загрузить материал" }
                        </button>
                    </div>
                }
                if self.loading {
                    { loading() }
                } else if self.items.is_empty() {
                    <p class="hint">{ "Материалов пока нет" }</p>
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{ "Название" }</th>
                                <th>{ "Дисциплина" }</th>
                                <th>{ "Лекция" }</th>
                                <th>{ "Файл" }</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for self.items.iter().map(|m| self.row(m, admin, link)) }
                        </tbody>
                    </table>
                }
                if admin {
                    { self.editor(link) }
                }
            </div>
        }
    }
}

impl MaterialsPage {
    fn selected_file(&self) -> Option<web_sys::File> {
        self.file_ref.cast::<HtmlInputElement>()?.files()?.get(0)
    }

    fn discipline_name(&self, id: i64) -> String {
        self.disciplines
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| format!("#{}", id))
    }

    fn row(&self, material: &LectureMaterial, admin: bool, link: &Scope<Self>) -> Html {
        let id = material.id;
        let download = material.clone();
        let edit = material.clone();
        html! {
            <tr>
                <td>
                    <div>{ material.title.clone() }</div>
                    if let Some(description) = &material.description {
                        <small class="hint">{ description.clone() }</small>
                    }
                </td>
                <td>{ self.discipline_name(material.discipline_id) }</td>
                <td>{ material.lecture_no.map(|no| no.to_string()).unwrap_or_default() }</td>
                <td>
                    <a href="#" onclick={link.callback(move |e: MouseEvent| {
                        e.prevent_default();
                        Msg::Download(download.clone())
                    })}>
                        { material.file_name.clone() }
                    </a>
                    <small class="hint">{ format!(" ({})", format_file_size(material.size_bytes)) }</small>
                </td>
                <td class="row-actions">
                    if admin {
                        <button class="btn-secondary" onclick={link.callback(move |_| Msg::OpenEdit(edit.clone()))}>
                            { "Изменить" }
                        </button>
                        <button class="btn-danger" onclick={link.callback(move |_| Msg::Delete(id))}>
                            { "Удалить" }
                        </button>
                    }
                </td>
            </tr>
        }
    }

    fn editor(&self, link: &Scope<Self>) -> Html {
        let uploading = self.editing.is_none();
        let title = if uploading { "Новый материал" } else { "Редактирование материала" };
        let options = self
            .disciplines
            .iter()
            .map(|d| (d.id.to_string(), d.name.clone()))
            .collect();
        let selected = self.form.discipline_id.map(|id| id.to_string()).unwrap_or_default();
        html! {
            <TopSheet node_ref={self.sheet_ref.clone()} title={title} on_close={Callback::noop()}>
                <div class="form">
                    { text_field("Название", &self.form.title, link.callback(Msg::SetTitle)) }
                    { text_area("Описание", &self.form.description, link.callback(Msg::SetDescription)) }
                    { number_field("Номер лекции (0, если без номера)", self.form.lecture_no, link.callback(Msg::SetLectureNo)) }
                    if uploading {
                        { select_field(
                            "Дисциплина",
                            "Выберите дисциплину",
                            options,
                            &selected,
                            link.callback(|raw: String| Msg::SetDiscipline(parse_id(&raw))),
                        ) }
                        <label class="field">
                            <span>{ "Файл" }</span>
                            <input type="file" ref={self.file_ref.clone()} />
                        </label>
                    }
                    <button class="btn-primary" disabled={self.saving} onclick={link.callback(|_| Msg::Save)}>
                        { if self.saving { "Сохранение..." } else { "Сохранить" } }
                    </button>
                </div>
            </TopSheet>
        }
    }
}

async fn load_own_disciplines(props: &PageProps) -> Result<Vec<Discipline>, common::error::ApiError> {
    let mut list = Vec::new();
    for id in disciplines::my_ids(&props.api).await? {
        if let Ok(discipline) = disciplines::get(&props.api, id).await {
            list.push(discipline);
        }
    }
    Ok(list)
}

/// Hands the bytes to the browser as a file download.
fn save_file(bytes: &[u8], mime: &str, file_name: &str) {
    let blob = Blob::new_with_options(bytes, Some(mime));
    let url = ObjectUrl::from(blob);
    let anchor = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.create_element("a").ok())
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok());
    let Some(anchor) = anchor else {
        warn!("cannot create download link for {}", file_name);
        return;
    };
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    // The browser reads the object URL after this handler returns.
    Timeout::new(1_000, move || drop(url)).forget();
}
