use std::collections::BTreeMap;

use common::model::answer::Answer;
use common::model::question::Item;
use yew::prelude::*;

use crate::components::inputs::select_value;

/// Pairs after choosing `raw` (a right item key, empty to clear) for `left`.
fn chosen(pairs: &BTreeMap<usize, usize>, left: usize, raw: &str) -> BTreeMap<usize, usize> {
    let mut next = pairs.clone();
    match raw.parse::<usize>() {
        Ok(right) => next.insert(left, right),
        Err(_) => next.remove(&left),
    };
    next
}

pub fn view(
    left: &[Item],
    right: &[Item],
    pairs: Option<&BTreeMap<usize, usize>>,
    disabled: bool,
    on_change: Callback<Answer>,
) -> Html {
    let pairs = pairs.cloned().unwrap_or_default();
    html! {
        <table class="answer-matching">
            <tbody>
            { for left.iter().map(|item| {
                let key = item.key;
                let current = pairs.get(&key).copied();
                let base = pairs.clone();
                let onchange = on_change.reform(move |e: Event| Answer::Matching(chosen(&base, key, &select_value(&e))));
                html! {
                    <tr>
                        <td>{ item.text.clone() }</td>
                        <td>
                            <select {disabled} {onchange}>
                                <option value="" selected={current.is_none()}>{ "—" }</option>
                                { for right.iter().map(|option| html! {
                                    <option value={option.key.to_string()} selected={current == Some(option.key)}>
                                        { option.text.clone() }
                                    </option>
                                }) }
                            </select>
                        </td>
                    </tr>
                }
            }) }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_map_item_ids() {
        let pairs = chosen(&BTreeMap::new(), 11, "21");
        assert_eq!(pairs, BTreeMap::from([(11, 21)]));
        let pairs = chosen(&pairs, 12, "22");
        assert_eq!(pairs, BTreeMap::from([(11, 21), (12, 22)]));
        assert_eq!(chosen(&pairs, 11, ""), BTreeMap::from([(12, 22)]));
    }
}
