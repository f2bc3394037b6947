pub mod config;
pub mod i18n;
pub mod icons;
pub mod insights;
pub mod inventory;
pub mod route;
pub mod sales;
pub mod settings;
