//! Test management for administrators: tests with their topic quotas, and
//! the schedules that open a discipline's test to its students.

use yew::prelude::*;

mod messages;
mod schedules;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::TestsPage;

use super::PageProps;

impl Component for TestsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message_batch(vec![Msg::Load, Msg::LoadTopics]);
        TestsPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
