use common::model::answer::Answer;
use yew::prelude::*;

use crate::components::inputs::input_value;

pub fn view(current: Option<f64>, disabled: bool, on_change: Callback<Answer>) -> Html {
    // Intermediate input such as "-" or "1e" is not sent.
    let oninput = on_change.filter_reform(|e: InputEvent| {
        input_value(&e).trim().replace(',', ".").parse().ok().map(Answer::Number)
    });
    let oninput = Callback::from(move |e: InputEvent| {
        oninput.emit(e);
    });
    html! {
        <input
            class="answer-number"
            type="number"
            step="any"
            placeholder="Введите число"
            value={current.map(|n| n.to_string()).unwrap_or_default()}
            {disabled}
            {oninput}
        />
    }
}
