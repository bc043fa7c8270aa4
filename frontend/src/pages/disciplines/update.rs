use common::gateway;
use common::model::discipline::DisciplineDraft;
use common::model::user::Role;
use common::notice::Notice;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::DisciplinesPage;
use crate::api::{disciplines, groups, tests};
use crate::components::inputs::confirm;
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

pub fn update(page: &mut DisciplinesPage, ctx: &Context<DisciplinesPage>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::Load => {
            let tag = page.generation.next();
            let props = props.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match disciplines::list(&props.api).await {
                    Ok(items) => link.send_message(Msg::Loaded(tag, items)),
                    Err(err) => {
                        props.failed("Не удалось загрузить дисциплины", &err);
                        link.send_message(Msg::Failed);
                    }
                }
            });
            false
        }
        Msg::Loaded(tag, mut items) => {
            if !page.generation.is_current(tag) {
                return false;
            }
            items.sort_by(|a, b| a.name.cmp(&b.name));
            page.items = items;
            page.loading = false;
            true
        }
        Msg::LoadRefs => {
            let admin = props.api.session().role() == Role::Admin;
            let props = props.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match groups::list(&props.api).await {
                    Ok(list) => link.send_message(Msg::GroupsLoaded(list)),
                    Err(err) => props.failed("Не удалось загрузить группы", &err),
                }
                if admin {
                    match tests::list(&props.api).await {
                        Ok(list) => link.send_message(Msg::TestsLoaded(list)),
                        Err(err) => props.failed("Не удалось загрузить тесты", &err),
                    }
                }
            });
            false
        }
        Msg::GroupsLoaded(list) => {
            page.groups = list;
            true
        }
        Msg::TestsLoaded(list) => {
            page.tests = list;
            true
        }
        Msg::OpenCreate => {
            page.editing = None;
            page.draft = DisciplineDraft::new();
            open_top_sheet(&page.sheet_ref);
            true
        }
        Msg::OpenEdit(discipline) => {
            page.editing = Some(discipline.id);
            page.draft = DisciplineDraft::from_discipline(&discipline);
            open_top_sheet(&page.sheet_ref);
            true
        }
        Msg::SetName(name) => {
            page.draft.name = name;
            true
        }
        Msg::SetDescription(description) => {
            page.draft.description = description;
            true
        }
        Msg::SetLectureCount(count) => {
            page.draft.lecture_count = count;
            true
        }
        Msg::SetLecturePoints(points) => {
            page.draft.lecture_points = points;
            true
        }
        Msg::SetTestPoints(points) => {
            page.draft.test_points = points;
            true
        }
        Msg::SetTest(id) => {
            page.draft.test_id = id;
            true
        }
        Msg::ToggleGroup(id) => {
            let ids = &mut page.draft.group_ids;
            match ids.iter().position(|g| *g == id) {
                Some(pos) => {
                    ids.remove(pos);
                }
                None => ids.push(id),
            }
            true
        }
        Msg::AddLab => {
            page.draft.add_lab();
            true
        }
        Msg::RemoveLab(number) => {
            page.draft.remove_lab(number);
            true
        }
        Msg::SetLabTitle(number, title) => {
            page.draft.set_lab_title(number, title);
            true
        }
        Msg::SetLabPoints(number, points) => {
            page.draft.set_lab_points(number, points);
            true
        }
        Msg::Save => {
            if let Err(err) = page.draft.validate() {
                props.on_notice.emit(Notice::error(err.to_string()));
                return false;
            }
            page.saving = true;
            let (draft, editing) = (page.draft.clone(), page.editing);
            let props = props.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match editing {
                    Some(id) => gateway::update_discipline(&props.api, id, draft).await,
                    None => gateway::create_discipline(&props.api, draft).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        props.succeeded(if editing.is_some() { "Дисциплина обновлена" } else { "Дисциплина создана" });
                        link.send_message(Msg::Saved);
                    }
                    Err(err) => {
                        props.failed("Ошибка при сохранении дисциплины", &err);
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
            if !confirm("Удалить дисциплину? Это действие нельзя отменить.") {
                return false;
            }
            let props = props.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match disciplines::delete(&props.api, id).await {
                    Ok(()) => {
                        props.succeeded("Дисциплина удалена");
                        link.send_message(Msg::Load);
                    }
                    Err(err) => props.failed("Ошибка при удалении дисциплины", &err),
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
