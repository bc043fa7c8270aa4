use common::model::answer::Answer;
use yew::prelude::*;

pub fn view(name: &str, options: &[String], chosen: Option<usize>, disabled: bool, on_change: Callback<Answer>) -> Html {
    html! {
        <div class="answer-options">
            { for options.iter().enumerate().map(|(index, option)| html! {
                <label class="check">
                    <input
                        type="radio"
                        name={name.to_string()}
                        checked={chosen == Some(index)}
                        {disabled}
                        onchange={on_change.reform(move |_: Event| Answer::Choice(index))}
                    />
                    <span>{ option.clone() }</span>
                </label>
            }) }
        </div>
    }
}
