use crate::app::App;

mod api;
mod app;
mod components;
mod logger;
mod pages;
mod session;
mod storage;
mod tops_sheet;

fn main() {
    logger::init();
    yew::Renderer::<App>::new().render();
}
