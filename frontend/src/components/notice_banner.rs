use common::notice::{Notice, NoticeKind};
use yew::prelude::*;

pub fn notice_banner(notice: Option<&Notice>, on_close: Callback<MouseEvent>) -> Html {
    let Some(notice) = notice else {
        return html! {};
    };
    let class = match notice.kind {
        NoticeKind::Error => "notice notice-error",
        NoticeKind::Success => "notice notice-success",
    };
    html! {
        <div {class} role="alert">
            <span>{ notice.text.clone() }</span>
            <button class="icon-btn" onclick={on_close}>{ "✕" }</button>
        </div>
    }
}
