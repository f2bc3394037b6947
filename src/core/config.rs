use cosmic::{
    cosmic_config::{self, cosmic_config_derive::CosmicConfigEntry, Config, CosmicConfigEntry},
    Application,
};
use serde::{Deserialize, Serialize};

use crate::app::App;

#[derive(Debug, Default, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct DashboardConfig {
    pub app_theme: AppTheme,
}

impl DashboardConfig {
    pub fn config_handler() -> Option<Config> {
        match Config::new(App::APP_ID, Self::VERSION) {
            Ok(handler) => Some(handler),
            Err(err) => {
                tracing::error!("failed to open config: {err:?}");
                None
            }
        }
    }

    pub fn config() -> DashboardConfig {
        match Self::config_handler() {
            Some(config_handler) => {
                DashboardConfig::get_entry(&config_handler).unwrap_or_else(|(errs, config)| {
                    tracing::error!("errors loading config: {:?}", errs);
                    config
                })
            }
            None => DashboardConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum AppTheme {
    #[default]
    System,
    Dark,
    Light,
}

impl From<usize> for AppTheme {
    fn from(value: usize) -> Self {
        match value {
            1 => AppTheme::Dark,
            2 => AppTheme::Light,
            _ => AppTheme::System,
        }
    }
}

impl From<AppTheme> for usize {
    fn from(value: AppTheme) -> Self {
        match value {
            AppTheme::System => 0,
            AppTheme::Dark => 1,
            AppTheme::Light => 2,
        }
    }
}

impl AppTheme {
    pub fn theme(&self) -> cosmic::theme::Theme {
        match self {
            Self::Dark => {
                let mut t = cosmic::theme::system_dark();
                t.theme_type.prefer_dark(Some(true));
                t
            }
            Self::Light => {
                let mut t = cosmic::theme::system_light();
                t.theme_type.prefer_dark(Some(false));
                t
            }
            Self::System => cosmic::theme::system_preference(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn theme_index_round_trips() {
        for theme in [AppTheme::System, AppTheme::Dark, AppTheme::Light] {
            assert_eq!(AppTheme::from(usize::from(theme)), theme);
        }
        assert_eq!(AppTheme::from(7), AppTheme::System);
    }
}
