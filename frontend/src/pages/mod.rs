//! Screens of the application. Each page fetches what it shows on mount,
//! keeps it in component state and refetches after every successful write.

use common::error::ApiError;
use common::menu::Page;
use common::notice::Notice;
use yew::{Callback, Properties};

use crate::api::ApiClient;

pub mod attempt;
pub mod disciplines;
pub mod gradebook;
pub mod groups;
pub mod login;
pub mod materials;
pub mod menu;
pub mod my_grades;
pub mod news;
pub mod questions;
pub mod registration;
pub mod student_tests;
pub mod students;
pub mod tests;

#[derive(Properties, PartialEq, Clone)]
pub struct PageProps {
    pub api: ApiClient,
    pub on_notice: Callback<Notice>,
    pub on_navigate: Callback<Page>,
}

impl PageProps {
    /// Error banner for a failed call. 401s are reported by the app shell.
    pub fn failed(&self, action: &str, err: &ApiError) {
        if !err.is_unauthorized() {
            self.on_notice.emit(Notice::failed(action, err));
        }
    }

    pub fn succeeded(&self, text: &str) {
        self.on_notice.emit(Notice::success(text));
    }
}
