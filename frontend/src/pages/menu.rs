use common::menu::menu_for_role;
use yew::prelude::*;

use super::PageProps;

pub struct MenuPage;

impl Component for MenuPage {
    type Message = ();
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let session = props.api.session();
        let items = menu_for_role(session.role());
        let greeting = session
            .user()
            .map(|user| format!("Здравствуйте, {}!", user.full_name()))
            .unwrap_or_default();

        html! {
            <div class="menu">
                <h2>{ greeting }</h2>
                if items.is_empty() {
                    <p class="hint">
                        { "Ваша учётная запись ожидает подтверждения администратором." }
                    </p>
                } else {
                    <div class="menu-grid">
                        { for items.into_iter().map(|page| html! {
                            <button class="menu-tile" onclick={props.on_navigate.reform(move |_| page)}>
                                { page.title() }
                            </button>
                        }) }
                    </div>
                }
            </div>
        }
    }
}
