pub mod insights;
pub mod inventory;
pub mod sales;

use crate::app::message::AppMessage;
use cosmic::app::Task;
use cosmic::Element;

pub trait Page {
    // Required methods
    fn update(&mut self, message: AppMessage) -> Task<AppMessage>;

    fn view(&self) -> Element<'_, AppMessage>;

    // Optional methods
    fn footer(&self) -> Option<Element<'_, AppMessage>> {
        None
    }
}

/// Page title with its one-line description underneath.
fn header<'a>(title: String, subtitle: String) -> Element<'a, AppMessage> {
    let theme = cosmic::theme::active();
    let cosmic = theme.cosmic();

    cosmic::widget::column()
        .spacing(cosmic.space_xxs())
        .push(cosmic::widget::text::title1(title))
        .push(cosmic::widget::text::title4(subtitle))
        .into()
}
