//! Topic catalogue and the question bank of each topic.

use common::error::{ApiError, ValidationError};
use common::model::question::{Question, QuestionData, QuestionInput, QuestionType};
use common::model::topic::{Topic, TopicInput};
use common::notice::Notice;
use common::validation::RequestGeneration;
use log::warn;
use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use super::PageProps;
use crate::api::{questions, topics};
use crate::components::inputs::{confirm, loading, number_field, select_field, text_area, text_field};
use crate::components::question_editor::question_data_editor;
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet, TopSheet};

pub enum Msg {
    LoadTopics,
    TopicsLoaded(Vec<Topic>),
    SelectTopic(i64),
    LoadQuestions,
    QuestionsLoaded(u64, Vec<Question>),
    OpenTopic(Option<Topic>),
    SetTopicTitle(String),
    SetTopicDescription(String),
    SaveTopic,
    DeleteTopic(i64),
    OpenQuestion(Option<Question>),
    SetQuestionText(String),
    SetQuestionType(String),
    SetPoints(u32),
    SetData(QuestionData),
    SaveQuestion,
    DeleteQuestion(i64),
    TopicSaved(&'static str),
    QuestionSaved(&'static str),
    Failed,
}

struct QuestionForm {
    id: Option<i64>,
    text: String,
    kind: QuestionType,
    points: u32,
    data: Option<QuestionData>,
}

impl Default for QuestionForm {
    fn default() -> Self {
        Self {
            id: None,
            text: String::new(),
            kind: QuestionType::SingleChoice,
            points: 1,
            data: QuestionData::default_for(QuestionType::SingleChoice),
        }
    }
}

impl QuestionForm {
    fn from_question(question: &Question) -> Self {
        let data = QuestionData::parse(question.question_type, &question.data).or_else(|| {
            warn!("question {} data does not fit its type, starting over", question.id);
            QuestionData::default_for(question.question_type)
        });
        Self {
            id: Some(question.id),
            text: question.question_text.clone(),
            kind: question.question_type,
            points: question.points,
            data,
        }
    }

    fn to_input(&self, topic_id: i64) -> Result<QuestionInput, ValidationError> {
        let data = self.data.as_ref().ok_or(ValidationError::MissingFields)?;
        if self.text.trim().is_empty() || self.points == 0 {
            return Err(ValidationError::MissingFields);
        }
        data.validate()?;
        Ok(QuestionInput {
            question_text: self.text.trim().to_string(),
            question_type: self.kind,
            points: self.points,
            data: data.to_value(),
            topic_id,
        })
    }
}

pub struct QuestionsPage {
    topics: Option<Vec<Topic>>,
    selected: Option<i64>,
    questions: Vec<Question>,
    questions_loading: bool,
    generation: RequestGeneration,
    topic_id: Option<i64>,
    topic_form: TopicInput,
    question_form: QuestionForm,
    saving: bool,
    topic_sheet: NodeRef,
    question_sheet: NodeRef,
}

impl QuestionsPage {
    fn run<F>(&mut self, ctx: &Context<Self>, action: &'static str, done: Msg, call: F)
    where
        F: std::future::Future<Output = Result<(), ApiError>> + 'static,
    {
        self.saving = true;
        let props = ctx.props().clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match call.await {
                Ok(()) => link.send_message(done),
                Err(err) => {
                    props.failed(action, &err);
                    link.send_message(Msg::Failed);
                }
            }
        });
    }
}

impl Component for QuestionsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::LoadTopics);
        Self {
            topics: None,
            selected: None,
            questions: Vec::new(),
            questions_loading: false,
            generation: RequestGeneration::default(),
            topic_id: None,
            topic_form: TopicInput::default(),
            question_form: QuestionForm::default(),
            saving: false,
            topic_sheet: NodeRef::default(),
            question_sheet: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let api = ctx.props().api.clone();
        match msg {
            Msg::LoadTopics => {
                let props = ctx.props().clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match topics::list(&props.api).await {
                        Ok(list) => link.send_message(Msg::TopicsLoaded(list)),
                        Err(err) => {
                            props.failed("Не удалось загрузить темы", &err);
                            link.send_message(Msg::TopicsLoaded(Vec::new()));
                        }
                    }
                });
                return false;
            }
            Msg::TopicsLoaded(list) => self.topics = Some(list),
            Msg::SelectTopic(id) => {
                self.selected = Some(id);
                ctx.link().send_message(Msg::LoadQuestions);
            }
            Msg::LoadQuestions => {
                let Some(topic_id) = self.selected else {
                    return false;
                };
                self.questions_loading = true;
                let tag = self.generation.next();
                let props = ctx.props().clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match questions::for_topic(&props.api, topic_id).await {
                        Ok(list) => link.send_message(Msg::QuestionsLoaded(tag, list)),
                        Err(err) => {
                            props.failed("Не удалось загрузить вопросы", &err);
                            link.send_message(Msg::QuestionsLoaded(tag, Vec::new()));
                        }
                    }
                });
            }
            Msg::QuestionsLoaded(tag, list) => {
                if !self.generation.is_current(tag) {
                    return false;
                }
                self.questions = list;
                self.questions_loading = false;
            }
            Msg::OpenTopic(topic) => {
                self.topic_id = topic.as_ref().map(|t| t.id);
                self.topic_form = TopicInput {
                    title: topic.as_ref().map(|t| t.title.clone()).unwrap_or_default(),
                    description: topic.and_then(|t| t.description),
                };
                open_top_sheet(&self.topic_sheet);
            }
            Msg::SetTopicTitle(title) => self.topic_form.title = title,
            Msg::SetTopicDescription(description) => {
                self.topic_form.description = Some(description).filter(|d| !d.trim().is_empty());
            }
            Msg::SaveTopic => {
                if self.topic_form.title.trim().is_empty() {
                    ctx.props().on_notice.emit(Notice::error(ValidationError::MissingFields.to_string()));
                    return false;
                }
                let (form, id) = (self.topic_form.clone(), self.topic_id);
                self.run(ctx, "Ошибка при сохранении темы", Msg::TopicSaved("Тема сохранена"), async move {
                    match id {
                        Some(id) => topics::update(&api, id, &form).await,
                        None => topics::create(&api, &form).await.map(|_| ()),
                    }
                });
            }
            Msg::DeleteTopic(id) => {
                if !confirm("Удалить тему вместе с её вопросами?") {
                    return false;
                }
                if self.selected == Some(id) {
                    self.selected = None;
                    self.questions.clear();
                }
                self.run(ctx, "Ошибка при удалении темы", Msg::TopicSaved("Тема удалена"), async move {
                    topics::delete(&api, id).await
                });
            }
            Msg::OpenQuestion(question) => {
                self.question_form = question.as_ref().map(QuestionForm::from_question).unwrap_or_default();
                open_top_sheet(&self.question_sheet);
            }
            Msg::SetQuestionText(text) => self.question_form.text = text,
            Msg::SetQuestionType(tag) => {
                let kind = QuestionType::from_tag(&tag);
                if kind != self.question_form.kind {
                    self.question_form.kind = kind;
                    self.question_form.data = QuestionData::default_for(kind);
                }
            }
            Msg::SetPoints(points) => self.question_form.points = points,
            Msg::SetData(data) => self.question_form.data = Some(data),
            Msg::SaveQuestion => {
                let Some(topic_id) = self.selected else {
                    return false;
                };
                let input = match self.question_form.to_input(topic_id) {
                    Ok(input) => input,
                    Err(err) => {
                        ctx.props().on_notice.emit(Notice::error(err.to_string()));
                        return false;
                    }
                };
                let id = self.question_form.id;
                self.run(ctx, "Ошибка при сохранении вопроса", Msg::QuestionSaved("Вопрос сохранён"), async move {
                    match id {
                        Some(id) => questions::update(&api, id, &input).await,
                        None => questions::create(&api, &input).await.map(|_| ()),
                    }
                });
            }
            Msg::DeleteQuestion(id) => {
                if !confirm("Удалить вопрос?") {
                    return false;
                }
                self.run(ctx, "Ошибка при удалении вопроса", Msg::QuestionSaved("Вопрос удалён"), async move {
                    questions::delete(&api, id).await
                });
            }
            Msg::TopicSaved(text) => {
                self.saving = false;
                close_top_sheet(&self.topic_sheet);
                ctx.props().succeeded(text);
                ctx.link().send_message(Msg::LoadTopics);
            }
            Msg::QuestionSaved(text) => {
                self.saving = false;
                close_top_sheet(&self.question_sheet);
                ctx.props().succeeded(text);
                ctx.link().send_message(Msg::LoadQuestions);
            }
            Msg::Failed => self.saving = false,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="questions-page two-columns">
                <section class="card">
                    <div class="toolbar">
                        <h3>{ "Темы" }</h3>
                        <button class="btn-primary" onclick={link.callback(|_| Msg::OpenTopic(None))}>{ "Новая тема" }</button>
                    </div>
                    { self.topic_list(link) }
                </section>
                <section class="card">
                    { self.question_list(link) }
                </section>
                { self.topic_editor(link) }
                { self.question_editor(link) }
            </div>
        }
    }
}

impl QuestionsPage {
    fn topic_list(&self, link: &Scope<Self>) -> Html {
        let Some(topics) = &self.topics else {
            return loading();
        };
        if topics.is_empty() {
            return html! { <p class="hint">{ "Тем пока нет" }</p> };
        }
        html! {
            <ul class="list">
                { for topics.iter().map(|topic| {
                    let id = topic.id;
                    let edit = topic.clone();
                    html! {
                        <li class={classes!((self.selected == Some(id)).then_some("selected"))}>
                            <button class="link-btn" onclick={link.callback(move |_| Msg::SelectTopic(id))}>
                                { topic.title.clone() }
                            </button>
                            <button class="icon-btn" title="Изменить" onclick={link.callback(move |_| Msg::OpenTopic(Some(edit.clone())))}>{ "✎" }</button>
                            <button class="icon-btn" title="Удалить" onclick={link.callback(move |_| Msg::DeleteTopic(id))}>{ "✕" }</button>
                        </li>
                    }
                }) }
            </ul>
        }
    }

    fn question_list(&self, link: &Scope<Self>) -> Html {
        if self.selected.is_none() {
            return html! { <p class="hint">{ "Выберите тему, чтобы увидеть её вопросы" }</p> };
        }
        html! {
            <>
                <div class="toolbar">
                    <h3>{ "Вопросы" }</h3>
                    <button class="btn-primary" onclick={link.callback(|_| Msg::OpenQuestion(None))}>{ "Новый вопрос" }</button>
                </div>
                if self.questions_loading {
                    { loading() }
                } else if self.questions.is_empty() {
                    <p class="hint">{ "В теме нет вопросов" }</p>
                } else {
                    <table class="table">
                        <thead>
                            <tr><th>{ "Вопрос" }</th><th>{ "Тип" }</th><th>{ "Баллы" }</th><th></th></tr>
                        </thead>
                        <tbody>
                            { for self.questions.iter().map(|question| {
                                let id = question.id;
                                let edit = question.clone();
                                html! {
                                    <tr>
                                        <td>{ question.question_text.clone() }</td>
                                        <td>{ question.question_type.label() }</td>
                                        <td>{ question.points }</td>
                                        <td class="actions">
                                            <button class="btn-secondary" onclick={link.callback(move |_| Msg::OpenQuestion(Some(edit.clone())))}>
                                                { "Изменить" }
                                            </button>
                                            <button class="btn-danger" onclick={link.callback(move |_| Msg::DeleteQuestion(id))}>
                                                { "Удалить" }
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                }
            </>
        }
    }

    fn topic_editor(&self, link: &Scope<Self>) -> Html {
        let title = if self.topic_id.is_some() { "Редактирование темы" } else { "Новая тема" };
        html! {
            <TopSheet node_ref={self.topic_sheet.clone()} title={title} on_close={Callback::noop()}>
                <div class="form">
                    { text_field("Название", &self.topic_form.title, link.callback(Msg::SetTopicTitle)) }
                    { text_area(
                        "Описание",
                        self.topic_form.description.as_deref().unwrap_or_default(),
                        link.callback(Msg::SetTopicDescription),
                    ) }
                    <button class="btn-primary" disabled={self.saving} onclick={link.callback(|_| Msg::SaveTopic)}>
                        { "Сохранить" }
                    </button>
                </div>
            </TopSheet>
        }
    }

    fn question_editor(&self, link: &Scope<Self>) -> Html {
        let form = &self.question_form;
        let title = if form.id.is_some() { "Редактирование вопроса" } else { "Новый вопрос" };
        let kinds = QuestionType::ALL
            .iter()
            .map(|kind| (kind.as_str().to_string(), kind.label().to_string()))
            .collect();
        html! {
            <TopSheet node_ref={self.question_sheet.clone()} title={title} on_close={Callback::noop()}>
                <div class="form">
                    { text_area("Текст вопроса", &form.text, link.callback(Msg::SetQuestionText)) }
                    { select_field("Тип", "Выберите тип", kinds, form.kind.as_str(), link.callback(Msg::SetQuestionType)) }
                    { number_field("Баллы", form.points, link.callback(Msg::SetPoints)) }
                    if let Some(data) = &form.data {
                        { question_data_editor(data, link.callback(Msg::SetData)) }
                    }
                    <button class="btn-primary" disabled={self.saving} onclick={link.callback(|_| Msg::SaveQuestion)}>
                        { "Сохранить" }
                    </button>
                </div>
            </TopSheet>
        }
    }
}
