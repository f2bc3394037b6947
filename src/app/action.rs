use cosmic::widget::menu::Action as MenuAction;

use super::context::ContextPage;
use super::message::AppMessage;
use crate::core::route::Route;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    About,
    Settings,
    Navigate(Route),
}

impl MenuAction for Action {
    type Message = AppMessage;
    fn message(&self) -> Self::Message {
        match self {
            Action::About => AppMessage::ToggleContextPage(ContextPage::About),
            Action::Settings => AppMessage::ToggleContextPage(ContextPage::Settings),
            Action::Navigate(route) => AppMessage::Navigate(*route),
        }
    }
}
