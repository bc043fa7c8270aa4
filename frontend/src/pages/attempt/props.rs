use common::menu::Page;
use common::notice::Notice;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::pages::PageProps;

#[derive(Properties, PartialEq, Clone)]
pub struct AttemptProps {
    pub api: ApiClient,
    pub on_notice: Callback<Notice>,
    pub on_navigate: Callback<Page>,
    pub attempt_id: i64,
}

impl AttemptProps {
    pub fn page(&self) -> PageProps {
        PageProps {
            api: self.api.clone(),
            on_notice: self.on_notice.clone(),
            on_navigate: self.on_navigate.clone(),
        }
    }
}
