//! Sliding modal panel. It stays mounted; opening and closing toggle the
//! `show` class so the CSS transition runs.

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use web_sys::{HtmlElement, MouseEvent};
use yew::{html, Callback, Component, Context, Html, NodeRef, Properties};

pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: String,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let close = props.on_close.clone().map(|on_close| {
            let node_ref = props.node_ref.clone();
            Callback::from(move |_: MouseEvent| {
                close_top_sheet(&node_ref);
                on_close.emit(());
            })
        });
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="top-sheet-panel">
                    <div class="top-sheet-header">
                        <h3>{ props.title.clone() }</h3>
                        if let Some(onclick) = close {
                            <button class="icon-btn" title="Закрыть" {onclick}>{ "✕" }</button>
                        }
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}

fn toggle_later(node_ref: &NodeRef, show: bool) {
    if let Some(sheet) = node_ref.cast::<HtmlElement>() {
        Timeout::new(50, move || {
            let classes = sheet.class_list();
            let _ = if show { classes.add_1("show") } else { classes.remove_1("show") };
        })
        .forget();
    }
}

pub fn open_top_sheet(node_ref: &NodeRef) {
    toggle_later(node_ref, true);
}

pub fn close_top_sheet(node_ref: &NodeRef) {
    toggle_later(node_ref, false);
}
