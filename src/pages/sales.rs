use crate::app::message::AppMessage;
use crate::core::sales::{self, FilterField, SalesFilter, SalesRecord, SalesReport, Trend};
use crate::fl;
use crate::widgets::{line_chart, table};

use cosmic::{app::Task, cosmic_theme, iced, theme, widget, Element};

pub struct SalesPage {
    marketing_groups: Vec<String>,
    classified_categories: Vec<String>,
    selected_group: usize,
    selected_category: usize,
    report: SalesReport,
}

impl SalesPage {
    pub fn new() -> Self {
        let records = sales::dataset();
        let marketing_groups = sales::distinct(records, FilterField::MarketingGroup);
        let classified_categories = sales::distinct(records, FilterField::ClassifiedCategory);
        let filter = SalesFilter::new(
            selection(&marketing_groups, 0),
            selection(&classified_categories, 0),
        );
        Self {
            marketing_groups,
            classified_categories,
            selected_group: 0,
            selected_category: 0,
            report: SalesReport::build(records, &filter),
        }
    }

    pub fn filter(&self) -> SalesFilter {
        SalesFilter::new(
            selection(&self.marketing_groups, self.selected_group),
            selection(&self.classified_categories, self.selected_category),
        )
    }

    pub fn report(&self) -> &SalesReport {
        &self.report
    }

    fn refresh(&mut self) {
        let filter = self.filter();
        self.report = SalesReport::build(sales::dataset(), &filter);
        tracing::debug!(
            "sales filter {:?}/{:?} matched {} records",
            filter.marketing_group,
            filter.classified_category,
            self.report.rows.len()
        );
    }

    fn filters(&self) -> Element<'_, AppMessage> {
        widget::settings::section()
            .title(fl!("filters"))
            .add(widget::settings::item::item(
                fl!("select-marketing-group"),
                widget::dropdown(
                    &self.marketing_groups,
                    Some(self.selected_group),
                    AppMessage::MarketingGroupSelected,
                ),
            ))
            .add(widget::settings::item::item(
                fl!("select-classified-category"),
                widget::dropdown(
                    &self.classified_categories,
                    Some(self.selected_category),
                    AppMessage::ClassifiedCategorySelected,
                ),
            ))
            .into()
    }

    fn trend(&self) -> Element<'_, AppMessage> {
        match &self.report.trend {
            Trend::Chart(pivot) => line_chart::chart(pivot),
            Trend::Empty => {
                let theme = theme::active();
                let cosmic = theme.cosmic();
                widget::layer_container(widget::text::body(fl!("no-sales-data")))
                    .layer(cosmic_theme::Layer::Primary)
                    .padding([cosmic.space_s(), cosmic.space_m()])
                    .width(iced::Length::Fill)
                    .into()
            }
        }
    }
}

impl super::Page for SalesPage {
    fn update(&mut self, message: AppMessage) -> Task<AppMessage> {
        match message {
            AppMessage::MarketingGroupSelected(index) if index < self.marketing_groups.len() => {
                self.selected_group = index;
                self.refresh();
            }
            AppMessage::ClassifiedCategorySelected(index)
                if index < self.classified_categories.len() =>
            {
                self.selected_category = index;
                self.refresh();
            }
            _ => {}
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, AppMessage> {
        let theme = theme::active();
        let cosmic = theme.cosmic();

        widget::column()
            .spacing(cosmic.space_m())
            .padding([cosmic.space_s(), cosmic.space_m()])
            .push(super::header(fl!("sales-title"), fl!("sales-subtitle")))
            .push(self.filters())
            .push(table::table(
                &columns(),
                self.report.rows.iter().map(cells).collect(),
            ))
            .push(widget::text::title3(fl!("sales-trend")))
            .push(self.trend())
            .into()
    }

    fn footer(&self) -> Option<Element<'_, AppMessage>> {
        let theme = theme::active();
        let cosmic = theme.cosmic();

        let row = widget::row()
            .align_y(iced::Alignment::Center)
            .push(widget::horizontal_space())
            .push(widget::text::caption(fl!(
                "records-shown",
                shown = self.report.rows.len(),
                total = sales::dataset().len()
            )));

        Some(
            widget::layer_container(row)
                .layer(cosmic_theme::Layer::Primary)
                .padding([cosmic.space_xxs(), cosmic.space_xs()])
                .into(),
        )
    }
}

fn selection(values: &[String], index: usize) -> String {
    values.get(index).cloned().unwrap_or_default()
}

fn columns() -> Vec<table::Column> {
    vec![
        table::Column::new(fl!("column-month"), 110.),
        table::Column::new(fl!("column-brand"), 100.),
        table::Column::new(fl!("column-quantity-sold"), 120.),
        table::Column::new(fl!("column-quantity-in-stock"), 140.),
        table::Column::new(fl!("column-marketing-group"), 140.),
        table::Column::new(fl!("column-classified-category"), 160.),
        table::Column::new(fl!("column-category"), 100.),
    ]
}

fn cells(record: &SalesRecord) -> Vec<String> {
    vec![
        record.month.clone(),
        record.brand.clone(),
        record.quantity_sold.to_string(),
        record.quantity_in_stock.to_string(),
        record.marketing_group.clone(),
        record.classified_category.clone(),
        record.category.clone(),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pages::Page;

    #[test]
    fn starts_on_first_values() {
        let page = SalesPage::new();
        assert_eq!(page.filter(), SalesFilter::new("Group 1", "Category 1"));
        assert_eq!(page.report().rows.len(), 2);
        assert!(matches!(page.report().trend, Trend::Chart(_)));
    }

    #[test]
    fn switching_to_unmatched_pair_shows_empty_state() {
        let mut page = SalesPage::new();
        let _ = page.update(AppMessage::MarketingGroupSelected(1));
        assert_eq!(page.filter(), SalesFilter::new("Group 2", "Category 1"));
        assert!(page.report().rows.is_empty());
        assert_eq!(page.report().trend, Trend::Empty);

        let _ = page.update(AppMessage::ClassifiedCategorySelected(1));
        assert_eq!(
            page.report()
                .rows
                .iter()
                .map(|r| r.month.as_str())
                .collect::<Vec<_>>(),
            ["February", "April"]
        );
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut page = SalesPage::new();
        let _ = page.update(AppMessage::MarketingGroupSelected(9));
        assert_eq!(page.filter(), SalesFilter::new("Group 1", "Category 1"));
    }

    #[test]
    fn row_cells_follow_column_order() {
        let record = &sales::dataset()[0];
        assert_eq!(
            cells(record),
            ["January", "Brand A", "120", "60", "Group 1", "Category 1", "Men"]
        );
    }
}
