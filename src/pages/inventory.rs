use crate::app::message::AppMessage;
use crate::core::icons;
use crate::core::inventory::{self, InventoryRecord};
use crate::fl;
use crate::helpers::format_number;
use crate::widgets::table;

use cosmic::{app::Task, cosmic_theme, iced, theme, widget, Element};

pub struct InventoryPage {
    records: &'static [InventoryRecord],
}

impl InventoryPage {
    pub fn new() -> Self {
        Self {
            records: inventory::overview(),
        }
    }

    fn stock_out_alert(&self) -> Element<'_, AppMessage> {
        let theme = theme::active();
        let cosmic = theme.cosmic();

        widget::layer_container(
            widget::row()
                .spacing(cosmic.space_xs())
                .align_y(iced::Alignment::Center)
                .push(icons::get_icon("dialog-warning-symbolic", 18))
                .push(widget::text::body(inventory::STOCK_OUT_STATUS)),
        )
        .layer(cosmic_theme::Layer::Secondary)
        .padding([cosmic.space_s(), cosmic.space_m()])
        .width(iced::Length::Fill)
        .into()
    }
}

impl super::Page for InventoryPage {
    fn update(&mut self, _message: AppMessage) -> Task<AppMessage> {
        Task::none()
    }

    fn view(&self) -> Element<'_, AppMessage> {
        let theme = theme::active();
        let cosmic = theme.cosmic();

        let columns = [
            table::Column::new(fl!("column-brand"), 140.),
            table::Column::new(fl!("column-stock-level"), 140.),
            table::Column::new(fl!("column-turnover-rate"), 140.),
        ];

        widget::column()
            .spacing(cosmic.space_m())
            .padding([cosmic.space_s(), cosmic.space_m()])
            .push(super::header(
                fl!("inventory-title"),
                fl!("inventory-subtitle"),
            ))
            .push(widget::text::title3(fl!("inventory-overview")))
            .push(table::table(
                &columns,
                self.records.iter().map(cells).collect(),
            ))
            .push(widget::text::title3(fl!("stock-out-alerts")))
            .push(self.stock_out_alert())
            .into()
    }
}

fn cells(record: &InventoryRecord) -> Vec<String> {
    vec![
        record.brand.clone(),
        record.stock_level.to_string(),
        format_number(f64::from(record.turnover_rate)),
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cells_render_literal_values() {
        let page = InventoryPage::new();
        let rows = page.records.iter().map(cells).collect::<Vec<_>>();
        assert_eq!(
            rows,
            [
                ["Brand A", "100", "1.2"],
                ["Brand B", "50", "0.8"],
                ["Brand C", "75", "1.5"],
                ["Brand D", "20", "0.7"],
            ]
        );
    }
}
