use cosmic::iced::mouse::Cursor;
use cosmic::iced::{Length, Point, Rectangle, Renderer};
use cosmic::iced_widget::canvas::Geometry;
use cosmic::widget::canvas;
use cosmic::widget::canvas::path::Builder;
use cosmic::widget::canvas::{Fill, LineCap, LineJoin, Path, Stroke, Style};
use cosmic::{cosmic_theme, iced, theme, widget, Element};

use crate::app::message::AppMessage;
use crate::core::sales::PivotTable;

/// One line per brand over the months of a [`PivotTable`].
#[derive(Clone, Debug)]
pub struct LineChart {
    // Points (out of 1), one per month
    pub series: Vec<Vec<f32>>,
    pub steps: usize,
}

impl LineChart {
    pub fn from_pivot(pivot: &PivotTable) -> Self {
        let max = pivot.max();
        let series = pivot
            .brands
            .iter()
            .filter_map(|brand| pivot.series(brand))
            .map(|values| normalize(&values, max))
            .collect();
        Self {
            series,
            steps: pivot.months.len(),
        }
    }
}

/// Scales `values` into `0..=1` against `max`. A zero max maps everything to 0.
pub fn normalize(values: &[u64], max: u64) -> Vec<f32> {
    if max == 0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|value| (*value as f64 / max as f64) as f32)
        .collect()
}

/// Horizontal position of point `index` out of `steps`. A lone point sits in the middle.
pub fn x_position(index: usize, steps: usize, width: f32) -> f32 {
    if steps <= 1 {
        width / 2.0
    } else {
        index as f32 * width / (steps - 1) as f32
    }
}

fn series_color(cosmic: &cosmic_theme::Theme, index: usize) -> iced::Color {
    let palette = &cosmic.palette;
    let colors = [
        palette.accent_blue,
        palette.accent_orange,
        palette.accent_green,
        palette.accent_purple,
        palette.accent_red,
        palette.accent_yellow,
    ];
    colors[index % colors.len()].into()
}

impl canvas::Program<AppMessage, theme::Theme> for LineChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &theme::Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry<Renderer>> {
        let cosmic = theme.cosmic();
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Leave room for the stroke and point markers at the edges
        let inset = 6.0;
        let width = frame.width() - inset * 2.0;
        let height = frame.height() - inset * 2.0;

        // Background grid
        let mut builder = Builder::new();
        for i in 0..=4 {
            let y = inset + height * i as f32 / 4.0;
            builder.move_to(Point::new(inset, y));
            builder.line_to(Point::new(inset + width, y));
        }
        for i in 0..self.steps {
            let x = inset + x_position(i, self.steps, width);
            builder.move_to(Point::new(x, inset));
            builder.line_to(Point::new(x, inset + height));
        }
        frame.stroke(
            &builder.build(),
            Stroke {
                style: Style::Solid(cosmic.bg_divider().into()),
                width: 1.0,
                ..Default::default()
            },
        );

        for (index, points) in self.series.iter().enumerate() {
            let color = series_color(cosmic, index);
            let positions = points
                .iter()
                .enumerate()
                .map(|(i, point)| {
                    Point::new(
                        inset + x_position(i, self.steps, width),
                        inset + height - point * height,
                    )
                })
                .collect::<Vec<Point>>();

            let mut line = Builder::new();
            for (i, position) in positions.iter().enumerate() {
                if i == 0 {
                    line.move_to(*position);
                } else {
                    line.line_to(*position);
                }
            }
            frame.stroke(
                &line.build(),
                Stroke {
                    style: Style::Solid(color),
                    width: 2.0,
                    line_cap: LineCap::Round,
                    line_join: LineJoin::Round,
                    ..Default::default()
                },
            );

            for position in positions {
                frame.fill(
                    &Path::circle(position, 4.0),
                    Fill {
                        style: Style::Solid(color),
                        ..Default::default()
                    },
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

/// The chart with a month axis underneath and a brand legend.
pub fn chart<'a>(pivot: &PivotTable) -> Element<'a, AppMessage> {
    let theme = theme::active();
    let cosmic = theme.cosmic();

    let mut months = widget::row().spacing(cosmic.space_xxs());
    for (i, month) in pivot.months.iter().enumerate() {
        if i > 0 {
            months = months.push(widget::horizontal_space());
        }
        months = months.push(widget::text::caption(month.clone()));
    }

    let mut legend = widget::row().spacing(cosmic.space_s());
    for (index, brand) in pivot.brands.iter().enumerate() {
        legend = legend.push(
            widget::text::body(format!("● {brand}"))
                .class(theme::Text::Color(series_color(cosmic, index))),
        );
    }

    widget::layer_container(
        widget::column()
            .spacing(cosmic.space_xs())
            .push(
                widget::canvas(LineChart::from_pivot(pivot))
                    .width(Length::Fill)
                    .height(Length::Fixed(260.)),
            )
            .push(months)
            .push(legend),
    )
    .layer(cosmic_theme::Layer::Primary)
    .padding([cosmic.space_s(), cosmic.space_m()])
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::sales::{self, SalesFilter, SalesReport, Trend};

    #[test]
    fn normalize_against_max() {
        assert_eq!(normalize(&[0, 75, 150], 150), [0.0, 0.5, 1.0]);
        assert_eq!(normalize(&[0, 0], 0), [0.0, 0.0]);
    }

    #[test]
    fn x_position_spans_width() {
        assert_eq!(x_position(0, 4, 300.0), 0.0);
        assert_eq!(x_position(3, 4, 300.0), 300.0);
        assert_eq!(x_position(0, 1, 300.0), 150.0);
    }

    #[test]
    fn one_series_per_brand() {
        let report = SalesReport::build(sales::dataset(), &SalesFilter::new("Group 1", "Category 1"));
        let Trend::Chart(pivot) = report.trend else {
            panic!("expected a chart");
        };
        let chart = LineChart::from_pivot(&pivot);
        assert_eq!(chart.steps, 2);
        assert_eq!(chart.series, [vec![0.8, 0.0], vec![0.0, 1.0]]);
    }
}
