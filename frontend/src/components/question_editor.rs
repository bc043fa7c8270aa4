//! Authoring controls for the typed `data` of a question. Every edit emits a
//! whole new [`QuestionData`]; the page keeps the value.

use std::collections::BTreeMap;

use common::model::question::{
    MatchingData, MultipleChoiceData, NumericData, QuestionData, SingleChoiceData, SortingData, TextData,
};
use yew::prelude::*;

use super::inputs::{checkbox, input_value, select_value};

pub fn question_data_editor(data: &QuestionData, on_change: Callback<QuestionData>) -> Html {
    match data {
        QuestionData::SingleChoice(d) => single_choice(d, on_change),
        QuestionData::MultipleChoice(d) => multiple_choice(d, on_change),
        QuestionData::Text(d) => text(d, on_change),
        QuestionData::Numeric(d) => numeric(d, on_change),
        QuestionData::Sorting(d) => sorting(d, on_change),
        QuestionData::Matching(d) => matching(d, on_change),
    }
}

/// Editable list of strings with add and remove buttons. `marker` renders
/// the per-row control (radio, checkbox, position) in front of the text.
fn string_list(
    title: &str,
    items: &[String],
    on_change: Callback<Vec<String>>,
    marker: impl Fn(usize) -> Html,
) -> Html {
    let add = {
        let items = items.to_vec();
        on_change.reform(move |_: MouseEvent| {
            let mut next = items.clone();
            next.push(String::new());
            next
        })
    };
    html! {
        <div class="string-list">
            <span class="string-list-title">{ title.to_string() }</span>
            { for items.iter().enumerate().map(|(index, item)| {
                let edit = {
                    let items = items.to_vec();
                    on_change.reform(move |e: InputEvent| {
                        let mut next = items.clone();
                        next[index] = input_value(&e);
                        next
                    })
                };
                let remove = {
                    let items = items.to_vec();
                    on_change.reform(move |_: MouseEvent| {
                        let mut next = items.clone();
                        next.remove(index);
                        next
                    })
                };
                html! {
                    <div class="string-list-row">
                        { marker(index) }
                        <input type="text" value={item.clone()} oninput={edit} />
                        <button class="icon-btn" title="Удалить" disabled={items.len() <= 1} onclick={remove}>{ "✕" }</button>
                    </div>
                }
            }) }
            <button class="btn-secondary" onclick={add}>{ "Добавить" }</button>
        </div>
    }
}

/// Drops indices that point past a shortened list.
fn reindex(indices: &[usize], old_len: usize, new_len: usize) -> Vec<usize> {
    if new_len >= old_len {
        return indices.to_vec();
    }
    indices.iter().copied().filter(|i| *i < new_len).collect()
}

fn single_choice(data: &SingleChoiceData, on_change: Callback<QuestionData>) -> Html {
    let options = {
        let data = data.clone();
        on_change.reform(move |options: Vec<String>| {
            let correct = if data.correct < options.len() { data.correct } else { 0 };
            QuestionData::SingleChoice(SingleChoiceData { options, correct })
        })
    };
    let marker = |index: usize| {
        let mut next = data.clone();
        next.correct = index;
        html! {
            <input
                type="radio"
                title="Правильный ответ"
                checked={data.correct == index}
                onchange={on_change.reform(move |_: Event| QuestionData::SingleChoice(next.clone()))}
            />
        }
    };
    string_list("Варианты ответа", &data.options, options, marker)
}

fn multiple_choice(data: &MultipleChoiceData, on_change: Callback<QuestionData>) -> Html {
    let options = {
        let data = data.clone();
        on_change.reform(move |options: Vec<String>| {
            let correct = reindex(&data.correct, data.options.len(), options.len());
            QuestionData::MultipleChoice(MultipleChoiceData { options, correct })
        })
    };
    let marker = |index: usize| {
        let mut next = data.clone();
        if let Some(pos) = next.correct.iter().position(|i| *i == index) {
            next.correct.remove(pos);
        } else {
            next.correct.push(index);
            next.correct.sort_unstable();
        }
        html! {
            <input
                type="checkbox"
                title="Правильный ответ"
                checked={data.correct.contains(&index)}
                onchange={on_change.reform(move |_: Event| QuestionData::MultipleChoice(next.clone()))}
            />
        }
    };
    string_list("Варианты ответа", &data.options, options, marker)
}

fn text(data: &TextData, on_change: Callback<QuestionData>) -> Html {
    let answers = {
        let data = data.clone();
        on_change.reform(move |correct: Vec<String>| QuestionData::Text(TextData { correct, ..data.clone() }))
    };
    let case = {
        let data = data.clone();
        on_change.reform(move |_| {
            QuestionData::Text(TextData {
                case_insensitive: !data.case_insensitive,
                ..data.clone()
            })
        })
    };
    let trim = {
        let data = data.clone();
        on_change.reform(move |_| QuestionData::Text(TextData { trim: !data.trim, ..data.clone() }))
    };
    html! {
        <>
            { string_list("Допустимые ответы", &data.correct, answers, |_| html! {}) }
            { checkbox("Без учёта регистра", data.case_insensitive, case) }
            { checkbox("Игнорировать пробелы по краям", data.trim, trim) }
        </>
    }
}

fn numeric(data: &NumericData, on_change: Callback<QuestionData>) -> Html {
    let answer = {
        let data = data.clone();
        let filtered = on_change.filter_reform(move |e: InputEvent| {
            let answer = input_value(&e).trim().replace(',', ".").parse().ok()?;
            Some(QuestionData::Numeric(NumericData { answer, ..data.clone() }))
        });
        Callback::from(move |e: InputEvent| {
            filtered.emit(e);
        })
    };
    let tolerance = {
        let data = data.clone();
        let filtered = on_change.filter_reform(move |e: InputEvent| {
            let tolerance = input_value(&e).trim().replace(',', ".").parse().ok()?;
            Some(QuestionData::Numeric(NumericData { tolerance, ..data.clone() }))
        });
        Callback::from(move |e: InputEvent| {
            filtered.emit(e);
        })
    };
    html! {
        <>
            <label class="field">
                <span>{ "Правильный ответ" }</span>
                <input type="number" step="any" value={data.answer.to_string()} oninput={answer} />
            </label>
            <label class="field">
                <span>{ "Допуск, %" }</span>
                <input type="number" step="any" min="0" value={data.tolerance.to_string()} oninput={tolerance} />
            </label>
        </>
    }
}

/// Position of each item in the correct order, 1-based.
fn positions(order: &[usize], len: usize) -> Vec<usize> {
    let mut positions = vec![0; len];
    for (position, item) in order.iter().enumerate() {
        if let Some(slot) = positions.get_mut(*item) {
            *slot = position + 1;
        }
    }
    positions
}

fn sorting(data: &SortingData, on_change: Callback<QuestionData>) -> Html {
    let items = {
        let data = data.clone();
        on_change.reform(move |items: Vec<String>| {
            let mut correct_order: Vec<usize> = data
                .correct_order
                .iter()
                .copied()
                .filter(|i| *i < items.len())
                .collect();
            for index in 0..items.len() {
                if !correct_order.contains(&index) {
                    correct_order.push(index);
                }
            }
            QuestionData::Sorting(SortingData { items, correct_order })
        })
    };
    let current = positions(&data.correct_order, data.items.len());
    let len = data.items.len();
    let marker = |index: usize| {
        let data = data.clone();
        let onchange = on_change.filter_reform(move |e: Event| {
            let wanted: usize = select_value(&e).parse().ok()?;
            let from = data.correct_order.iter().position(|i| *i == index)?;
            let mut next = data.clone();
            next.correct_order.swap(from, wanted.checked_sub(1)?);
            Some(QuestionData::Sorting(next))
        });
        let onchange = Callback::from(move |e: Event| {
            onchange.emit(e);
        });
        html! {
            <select title="Место в правильном порядке" {onchange}>
                { for (1..=len).map(|p| html! {
                    <option value={p.to_string()} selected={current.get(index) == Some(&p)}>{ p }</option>
                }) }
            </select>
        }
    };
    string_list("Элементы", &data.items, items, marker)
}

fn matching(data: &MatchingData, on_change: Callback<QuestionData>) -> Html {
    let left = {
        let data = data.clone();
        on_change.reform(move |left_items: Vec<String>| {
            let len = left_items.len();
            let pairs = data.pairs.iter().filter(|(l, _)| **l < len).map(|(l, r)| (*l, *r)).collect();
            QuestionData::Matching(MatchingData {
                left_items,
                pairs,
                ..data.clone()
            })
        })
    };
    let right = {
        let data = data.clone();
        on_change.reform(move |right_items: Vec<String>| {
            let len = right_items.len();
            let pairs = data.pairs.iter().filter(|(_, r)| **r < len).map(|(l, r)| (*l, *r)).collect();
            QuestionData::Matching(MatchingData {
                right_items,
                pairs,
                ..data.clone()
            })
        })
    };
    let pair_rows = data.left_items.iter().enumerate().map(|(l, text)| {
        let chosen = data.pairs.get(&l).copied();
        let base = data.clone();
        let onchange = on_change.reform(move |e: Event| {
            let mut pairs: BTreeMap<usize, usize> = base.pairs.clone();
            match select_value(&e).parse::<usize>() {
                Ok(r) => pairs.insert(l, r),
                Err(_) => pairs.remove(&l),
            };
            QuestionData::Matching(MatchingData { pairs, ..base.clone() })
        });
        html! {
            <tr>
                <td>{ text.clone() }</td>
                <td>
                    <select {onchange}>
                        <option value="" selected={chosen.is_none()}>{ "—" }</option>
                        { for data.right_items.iter().enumerate().map(|(r, option)| html! {
                            <option value={r.to_string()} selected={chosen == Some(r)}>{ option.clone() }</option>
                        }) }
                    </select>
                </td>
            </tr>
        }
    });
    html! {
        <>
            { string_list("Левый столбец", &data.left_items, left, |_| html! {}) }
            { string_list("Правый столбец", &data.right_items, right, |_| html! {}) }
            <table class="pairs">
                <thead><tr><th>{ "Элемент" }</th><th>{ "Соответствие" }</th></tr></thead>
                <tbody>{ for pair_rows }</tbody>
            </table>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorting_positions_are_one_based() {
        assert_eq!(positions(&[2, 0, 1], 3), vec![2, 3, 1]);
        assert_eq!(positions(&[5], 2), vec![0, 0]);
    }

    #[test]
    fn shrinking_drops_out_of_range_indices() {
        assert_eq!(reindex(&[0, 2], 3, 2), vec![0]);
        assert_eq!(reindex(&[0, 2], 3, 4), vec![0, 2]);
    }
}
