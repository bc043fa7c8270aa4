use common::gateway;
use common::model::test::{TestInput, TestTopic};
use common::notice::Notice;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::TestsPage;
use crate::api::{tests, topics};
use crate::components::inputs::confirm;
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

pub fn update(page: &mut TestsPage, ctx: &Context<TestsPage>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::Load => {
            let tag = page.generation.next();
            let props = props.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match tests::list(&props.api).await {
                    Ok(items) => link.send_message(Msg::Loaded(tag, items)),
                    Err(err) => {
                        props.failed("Не удалось загрузить тесты", &err);
                        link.send_message(Msg::Failed);
                    }
                }
            });
            false
        }
        Msg::Loaded(tag, items) => {
            if !page.generation.is_current(tag) {
                return false;
            }
            page.items = items;
            page.loading = false;
            true
        }
        Msg::LoadTopics => {
            let props = props.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match topics::list(&props.api).await {
                    Ok(list) => link.send_message(Msg::TopicsLoaded(list)),
                    Err(err) => props.failed("Не удалось загрузить темы", &err),
                }
            });
            false
        }
        Msg::TopicsLoaded(list) => {
            page.topics = list;
            true
        }
        Msg::OpenCreate => {
            page.editing = None;
            page.form = TestInput::default();
            page.form_topics.clear();
            page.topics_pending = false;
            open_top_sheet(&page.sheet_ref);
            true
        }
        Msg::OpenEdit(test) => {
            page.editing = Some(test.id);
            page.form = TestInput {
                title: test.title.clone(),
                description: test.description.clone(),
            };
            page.form_topics.clear();
            page.topics_pending = true;
            let id = test.id;
            let props = props.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match tests::topics(&props.api, id).await {
                    Ok(list) => link.send_message(Msg::TestTopicsLoaded(id, list)),
                    Err(err) => {
                        props.failed("Не удалось загрузить темы теста", &err);
                        link.send_message(Msg::TestTopicsLoaded(id, Vec::new()));
                    }
                }
            });
            open_top_sheet(&page.sheet_ref);
            true
        }
        Msg::TestTopicsLoaded(id, list) => {
            if page.editing != Some(id) {
                return false;
            }
            page.form_topics = list;
            page.topics_pending = false;
            true
        }
        Msg::SetTitle(title) => {
            page.form.title = title;
            true
        }
        Msg::SetDescription(description) => {
            page.form.description = Some(description).filter(|d| !d.trim().is_empty());
            true
        }
        Msg::AddTopic => match page.unused_topic() {
            Some(id) => {
                page.form_topics.push(TestTopic::new(id, 1));
                true
            }
            None => {
                props.on_notice.emit(Notice::error("Все темы уже добавлены"));
                false
            }
        },
        Msg::RemoveTopic(index) => {
            if index < page.form_topics.len() {
                page.form_topics.remove(index);
            }
            true
        }
        Msg::SetTopic(index, id) => {
            if let (Some(topic), Some(id)) = (page.form_topics.get_mut(index), id) {
                topic.topic_id = id;
            }
            true
        }
        Msg::SetCount(index, count) => {
            if let Some(topic) = page.form_topics.get_mut(index) {
                topic.questions_count = count;
            }
            true
        }
        Msg::SetQuota(index, kind, count) => {
            if let Some(topic) = page.form_topics.get_mut(index) {
                topic.set_quota(kind, count);
            }
            true
        }
        Msg::Save => {
            if page.topics_pending {
                return false;
            }
            page.saving = true;
            let (input, replace, editing) = (page.form.clone(), page.topics_replace(), page.editing);
            let props = props.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match editing {
                    Some(id) => gateway::update_test_with_topics(&props.api, id, &input, &replace).await,
                    None => gateway::create_test_with_topics(&props.api, &input, &replace)
                        .await
                        .map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        props.succeeded("Тест сохранён");
                        link.send_message(Msg::Saved);
                    }
                    Err(err) => {
                        props.failed("Ошибка при сохранении теста", &err);
                        link.send_message(Msg::Failed);
                    }
                }
            });
            true
        }
        Msg::Saved => {
            page.saving = false;
            close_top_sheet(&page.sheet_ref);
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::Delete(id) => {
            if !confirm("Удалить тест?") {
                return false;
            }
            let props = props.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match tests::delete(&props.api, id).await {
                    Ok(()) => {
                        props.succeeded("Тест удалён");
                        link.send_message(Msg::Load);
                    }
                    Err(err) => props.failed("Ошибка при удалении теста", &err),
                }
            });
            false
        }
        Msg::Failed => {
            page.saving = false;
            page.loading = false;
            true
        }
    }
}
