use crate::app::message::AppMessage;
use crate::core::icons;
use crate::core::insights::{self, Insight, MockInsightSource};
use crate::core::sales;
use crate::fl;

use cosmic::{app::Task, cosmic_theme, iced, theme, widget, Element};

pub struct InsightsPage {
    insights: Vec<Insight>,
}

impl InsightsPage {
    pub fn new() -> Self {
        Self {
            insights: insights::insights(&MockInsightSource, sales::dataset()),
        }
    }

    fn insight<'a>(&'a self, insight: &'a Insight) -> Element<'a, AppMessage> {
        let theme = theme::active();
        let cosmic = theme.cosmic();

        let notice = widget::layer_container(
            widget::row()
                .spacing(cosmic.space_xs())
                .align_y(iced::Alignment::Center)
                .push(icons::get_icon("dialog-information-symbolic", 18))
                .push(widget::text::body(insight.answer.notice.as_str())),
        )
        .layer(cosmic_theme::Layer::Secondary)
        .padding([cosmic.space_xs(), cosmic.space_s()])
        .width(iced::Length::Fill);

        widget::column()
            .spacing(cosmic.space_xs())
            .push(widget::text::title3(fl!(
                "insight-heading",
                index = insight.index,
                question = insight.question
            )))
            .push(widget::text::monotext(
                insight.answer.recommendation.as_str(),
            ))
            .push(notice)
            .into()
    }
}

impl super::Page for InsightsPage {
    fn update(&mut self, _message: AppMessage) -> Task<AppMessage> {
        Task::none()
    }

    fn view(&self) -> Element<'_, AppMessage> {
        let theme = theme::active();
        let cosmic = theme.cosmic();

        let mut column = widget::column()
            .spacing(cosmic.space_l())
            .padding([cosmic.space_s(), cosmic.space_m()])
            .push(super::header(
                fl!("insights-title"),
                fl!("insights-subtitle"),
            ));
        for insight in &self.insights {
            column = column.push(self.insight(insight));
        }
        column.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::route::Route;
    use crate::pages::Page;

    #[test]
    fn navigation_does_not_change_insights() {
        let mut page = InsightsPage::new();
        let before = page.insights.clone();
        for route in Route::ALL {
            let _ = page.update(AppMessage::Navigate(route));
        }
        let _ = page.update(AppMessage::MarketingGroupSelected(1));
        assert_eq!(page.insights, before);
        assert_eq!(page.insights.len(), 3);
    }
}
