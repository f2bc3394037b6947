use cosmic::iced::{Alignment, Length};
use cosmic::{cosmic_theme, iced, theme, widget, Element};

use crate::app::message::AppMessage;

pub struct Column {
    pub title: String,
    pub width: Length,
}

impl Column {
    pub fn new(title: String, width: f32) -> Self {
        Self {
            title,
            width: Length::Fixed(width),
        }
    }
}

/// Read-only table. Cells beyond the number of columns are dropped.
pub fn table<'a>(columns: &[Column], rows: Vec<Vec<String>>) -> Element<'a, AppMessage> {
    let theme = theme::active();
    let cosmic = theme.cosmic();

    let mut header_row = widget::row().align_y(Alignment::Center);
    for column in columns {
        header_row = header_row.push(
            widget::container(widget::text::heading(column.title.clone())).width(column.width),
        );
    }

    let mut body = widget::column()
        .spacing(cosmic.space_xs())
        .width(Length::Fill);
    for row in rows {
        let mut cells = widget::row().align_y(Alignment::Center);
        for (column, cell) in columns.iter().zip(row) {
            cells = cells.push(widget::container(widget::text::body(cell)).width(column.width));
        }
        body = body.push(cells);
    }

    widget::layer_container(
        widget::column()
            .spacing(cosmic.space_xs())
            .push(header_row)
            .push(iced::widget::horizontal_rule(1))
            .push(body),
    )
    .layer(cosmic_theme::Layer::Primary)
    .padding([cosmic.space_s(), cosmic.space_m()])
    .width(Length::Fill)
    .into()
}
