use common::model::group::Group;
use yew::prelude::*;

use super::inputs::{parse_id, select_field};

/// Checkbox list of active groups; archived ones are listed only while selected.
pub fn group_checklist(groups: &[Group], selected: &[i64], on_toggle: Callback<i64>) -> Html {
    html! {
        <fieldset class="group-checklist">
            <legend>{ "Группы" }</legend>
            { for groups
                .iter()
                .filter(|group| !group.is_archived() || selected.contains(&group.id))
                .map(|group| {
                    let id = group.id;
                    html! {
                        <label class="check">
                            <input
                                type="checkbox"
                                checked={selected.contains(&id)}
                                onchange={on_toggle.reform(move |_: Event| id)}
                            />
                            <span>{ group.name.clone() }</span>
                        </label>
                    }
                }) }
        </fieldset>
    }
}

pub fn group_select(groups: &[Group], selected: Option<i64>, on_change: Callback<Option<i64>>) -> Html {
    let options = groups
        .iter()
        .filter(|group| !group.is_archived())
        .map(|group| (group.id.to_string(), group.name.clone()))
        .collect();
    let selected = selected.map(|id| id.to_string()).unwrap_or_default();
    select_field(
        "Группа",
        "Выберите группу",
        options,
        &selected,
        on_change.reform(|raw: String| parse_id(&raw)),
    )
}
