use i18n_embed::{
    fluent::{fluent_language_loader, FluentLanguageLoader},
    DefaultLocalizer, LanguageLoader, Localizer,
};
use lazy_static::lazy_static;
use rust_embed::RustEmbed;

pub use i18n_embed::unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

lazy_static! {
    pub static ref LANGUAGE_LOADER: FluentLanguageLoader = {
        let loader: FluentLanguageLoader = fluent_language_loader!();
        if let Err(err) = loader.load_fallback_language(&Localizations) {
            tracing::error!("error while loading fallback language: {err}");
        }
        loader
    };
}

pub fn localizer() -> Box<dyn Localizer> {
    Box::from(DefaultLocalizer::new(&*LANGUAGE_LOADER, &Localizations))
}

pub fn init(requested_languages: &[LanguageIdentifier]) {
    if let Err(err) = localizer().select(requested_languages) {
        tracing::error!("error while loading language for the dashboard: {err}");
    }
}

/// Looks up a message in the embedded Fluent files.
#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::core::i18n::LANGUAGE_LOADER, $message_id)
    }};

    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::core::i18n::LANGUAGE_LOADER, $message_id, $($args), *)
    }};
}
