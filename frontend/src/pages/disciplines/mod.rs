//! Disciplines: list for staff; administrators create, edit and delete.
//!
//! The page follows the state / messages / update / view split. Saving goes
//! through `common::gateway`, which creates the pending labs before the
//! discipline itself.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::DisciplinesPage;

use super::PageProps;

impl Component for DisciplinesPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message_batch(vec![Msg::Load, Msg::LoadRefs]);
        DisciplinesPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
