use common::model::answer::Answer;
use common::model::question::Item;
use yew::prelude::*;

/// The saved order when it is a permutation of the item keys, otherwise the
/// order the items came in.
fn current_order(items: &[Item], saved: Option<&[usize]>) -> Vec<usize> {
    let keys: Vec<usize> = items.iter().map(|item| item.key).collect();
    if let Some(saved) = saved {
        let mut expected = keys.clone();
        expected.sort_unstable();
        let mut sorted = saved.to_vec();
        sorted.sort_unstable();
        if sorted == expected {
            return saved.to_vec();
        }
    }
    keys
}

fn swapped(order: &[usize], a: usize, b: usize) -> Vec<usize> {
    let mut next = order.to_vec();
    next.swap(a, b);
    next
}

pub fn view(items: &[Item], saved: Option<&[usize]>, disabled: bool, on_change: Callback<Answer>) -> Html {
    let order = current_order(items, saved);
    let last = order.len().saturating_sub(1);
    html! {
        <ol class="answer-sorting">
            { for order.iter().enumerate().map(|(position, key)| {
                let text = items
                    .iter()
                    .find(|item| item.key == *key)
                    .map(|item| item.text.clone())
                    .unwrap_or_default();
                let up = swapped(&order, position, position.saturating_sub(1));
                let down = swapped(&order, position, (position + 1).min(last));
                html! {
                    <li>
                        <span>{ text }</span>
                        <button
                            class="icon-btn"
                            title="Выше"
                            disabled={disabled || position == 0}
                            onclick={on_change.reform(move |_: MouseEvent| Answer::Indices(up.clone()))}
                        >{ "▲" }</button>
                        <button
                            class="icon-btn"
                            title="Ниже"
                            disabled={disabled || position == last}
                            onclick={on_change.reform(move |_: MouseEvent| Answer::Indices(down.clone()))}
                        >{ "▼" }</button>
                    </li>
                }
            }) }
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(keys: &[usize]) -> Vec<Item> {
        keys.iter()
            .map(|key| Item {
                key: *key,
                text: format!("пункт {}", key),
            })
            .collect()
    }

    #[test]
    fn foreign_orders_fall_back_to_identity() {
        assert_eq!(current_order(&items(&[0, 1, 2]), Some(&[2, 0, 1])), vec![2, 0, 1]);
        assert_eq!(current_order(&items(&[0, 1, 2]), Some(&[0, 0, 1])), vec![0, 1, 2]);
        assert_eq!(current_order(&items(&[0, 1]), Some(&[0, 1, 2])), vec![0, 1]);
        assert_eq!(current_order(&items(&[0, 1]), None), vec![0, 1]);
    }

    #[test]
    fn orders_are_built_from_item_ids() {
        let list = items(&[7, 3]);
        assert_eq!(current_order(&list, None), vec![7, 3]);
        assert_eq!(current_order(&list, Some(&[3, 7])), vec![3, 7]);
        assert_eq!(current_order(&list, Some(&[1, 0])), vec![7, 3]);
        assert_eq!(swapped(&current_order(&list, None), 1, 0), vec![3, 7]);
    }
}
