use common::model::answer::Answer;
use yew::prelude::*;

fn toggled(chosen: &[usize], index: usize) -> Vec<usize> {
    let mut next: Vec<usize> = chosen.iter().copied().filter(|i| *i != index).collect();
    if next.len() == chosen.len() {
        next.push(index);
        next.sort_unstable();
    }
    next
}

pub fn view(options: &[String], chosen: Option<&[usize]>, disabled: bool, on_change: Callback<Answer>) -> Html {
    let chosen = chosen.unwrap_or_default().to_vec();
    html! {
        <div class="answer-options">
            { for options.iter().enumerate().map(|(index, option)| {
                let next = toggled(&chosen, index);
                html! {
                    <label class="check">
                        <input
                            type="checkbox"
                            checked={chosen.contains(&index)}
                            {disabled}
                            onchange={on_change.reform(move |_: Event| Answer::Indices(next.clone()))}
                        />
                        <span>{ option.clone() }</span>
                    </label>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::toggled;

    #[test]
    fn toggling_keeps_indices_sorted() {
        assert_eq!(toggled(&[2], 0), vec![0, 2]);
        assert_eq!(toggled(&[0, 2], 2), vec![0]);
        assert!(toggled(&[1], 1).is_empty());
    }
}
