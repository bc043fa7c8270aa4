pub mod group_selector;
pub mod inputs;
pub mod markdown;
pub mod notice_banner;
pub mod question_answer;
pub mod question_editor;
