use crate::core::settings;

mod app;
mod core;
mod helpers;
mod pages;
mod widgets;

fn main() -> cosmic::iced::Result {
    settings::init();
    cosmic::app::run::<app::App>(settings::settings(), settings::flags())
}
