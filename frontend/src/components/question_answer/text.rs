use common::model::answer::Answer;
use yew::prelude::*;

use crate::components::inputs::input_value;

pub fn view(current: Option<&str>, disabled: bool, on_change: Callback<Answer>) -> Html {
    html! {
        <input
            class="answer-text"
            type="text"
            placeholder="Введите ответ"
            value={current.unwrap_or_default().to_string()}
            {disabled}
            oninput={on_change.reform(|e: InputEvent| Answer::Text(input_value(&e)))}
        />
    }
}
