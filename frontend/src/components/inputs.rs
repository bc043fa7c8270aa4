//! Labelled form controls shared by the pages. Each takes the current value
//! and a callback receiving the new one.

use chrono::{FixedOffset, Local};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Empty or malformed text reads as `None`.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

pub fn text_field(label: &str, value: &str, on_change: Callback<String>) -> Html {
    labelled(label, "text", value, on_change)
}

pub fn password_field(label: &str, value: &str, on_change: Callback<String>) -> Html {
    labelled(label, "password", value, on_change)
}

/// Browser's current UTC offset, for `datetime-local` values.
pub fn local_offset() -> FixedOffset {
    *Local::now().offset()
}

pub fn date_time_field(label: &str, value: &str, on_change: Callback<String>) -> Html {
    labelled(label, "datetime-local", value, on_change)
}

fn labelled(label: &str, kind: &'static str, value: &str, on_change: Callback<String>) -> Html {
    html! {
        <label class="field">
            <span>{ label.to_string() }</span>
            <input
                type={kind}
                value={value.to_string()}
                oninput={on_change.reform(|e: InputEvent| input_value(&e))}
            />
        </label>
    }
}

/// Non-negative integer input; anything unparsable reads as 0.
pub fn number_field(label: &str, value: u32, on_change: Callback<u32>) -> Html {
    html! {
        <label class="field">
            <span>{ label.to_string() }</span>
            <input
                type="number"
                min="0"
                value={value.to_string()}
                oninput={on_change.reform(|e: InputEvent| input_value(&e).trim().parse().unwrap_or(0))}
            />
        </label>
    }
}

pub fn text_area(label: &str, value: &str, on_change: Callback<String>) -> Html {
    html! {
        <label class="field">
            <span>{ label.to_string() }</span>
            <textarea
                rows="5"
                value={value.to_string()}
                oninput={on_change.reform(|e: InputEvent| textarea_value(&e))}
            />
        </label>
    }
}

pub fn checkbox(label: &str, checked: bool, on_toggle: Callback<()>) -> Html {
    html! {
        <label class="check">
            <input type="checkbox" {checked} onchange={on_toggle.reform(|_: Event| ())} />
            <span>{ label.to_string() }</span>
        </label>
    }
}

/// `<select>` over `(value, label)` pairs with an empty first entry.
pub fn select_field(
    label: &str,
    placeholder: &str,
    options: Vec<(String, String)>,
    selected: &str,
    on_change: Callback<String>,
) -> Html {
    html! {
        <label class="field">
            <span>{ label.to_string() }</span>
            <select onchange={on_change.reform(|e: Event| select_value(&e))}>
                <option value="" selected={selected.is_empty()}>{ placeholder.to_string() }</option>
                { for options.into_iter().map(|(value, text)| {
                    let is_selected = value == selected;
                    html! { <option selected={is_selected} {value}>{ text }</option> }
                }) }
            </select>
        </label>
    }
}

/// Browser confirmation dialog; `false` when it cannot be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn loading() -> Html {
    html! { <div class="loading">{ "Загрузка..." }</div> }
}
