use cosmic::app::Settings;
use tracing_subscriber::EnvFilter;

use crate::app::flags::Flags;

use super::i18n;

pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);
}

pub fn settings() -> Settings {
    Settings::default()
        .size(cosmic::iced::Size::new(1024., 720.))
        .size_limits(cosmic::iced::Limits::new(
            cosmic::iced::Size::new(800., 600.),
            cosmic::iced::Size::INFINITY,
        ))
        .debug(false)
}

pub fn flags() -> Flags {
    Flags::default()
}
