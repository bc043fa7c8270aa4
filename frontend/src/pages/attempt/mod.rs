//! Attempt screen: one question at a time, answers autosaved after a pause
//! in typing and flushed on every navigation, results once finished.
//!
//! The per-attempt rules live in `common::attempt::AttemptFlow`; this module
//! owns the debounce timer and the network.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AttemptProps;
pub use state::AttemptPage;

impl Component for AttemptPage {
    type Message = Msg;
    type Properties = AttemptProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        AttemptPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
