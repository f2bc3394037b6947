use cosmic::iced::keyboard::{Key, Modifiers};

use crate::app::context::ContextPage;
use crate::core::config::DashboardConfig;
use crate::core::route::Route;

#[derive(Clone, Debug, PartialEq)]
pub enum AppMessage {
    MarketingGroupSelected(usize),
    ClassifiedCategorySelected(usize),

    Navigate(Route),

    Key(Modifiers, Key),
    Modifiers(Modifiers),
    ConfigChanged(DashboardConfig),
    SystemThemeChanged,
    AppTheme(usize),
    Open(String),
    ToggleContextPage(ContextPage),
    ContextClose,
}
