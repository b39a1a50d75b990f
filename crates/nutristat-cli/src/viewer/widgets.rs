use nutristat_stats::boxplot::BoxPlotSummary;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::{Marker, merge::MergeStrategy},
    widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph, Widget},
};

use crate::figure;

const Y_TICKS: usize = 5;

const BOX_CENTER: f64 = 1.0;
const BOX_HALF_WIDTH: f64 = 0.3;
const CAP_HALF_WIDTH: f64 = 0.15;
const X_BOUNDS: [f64; 2] = [0.0, 2.0];

/// Line segments and points of a vertical box plot centered at x = 1.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct BoxShape {
    pub outline: [(f64, f64); 5],
    pub median: [(f64, f64); 2],
    pub whiskers: [[(f64, f64); 2]; 2],
    pub caps: [[(f64, f64); 2]; 2],
    pub outliers: Vec<(f64, f64)>,
}

impl BoxShape {
    pub(super) fn new(summary: &BoxPlotSummary) -> Self {
        let left = BOX_CENTER - BOX_HALF_WIDTH;
        let right = BOX_CENTER + BOX_HALF_WIDTH;
        let q = &summary.quartiles;
        let cap = |y: f64| {
            [
                (BOX_CENTER - CAP_HALF_WIDTH, y),
                (BOX_CENTER + CAP_HALF_WIDTH, y),
            ]
        };
        Self {
            outline: [
                (left, q.q1),
                (right, q.q1),
                (right, q.q3),
                (left, q.q3),
                (left, q.q1),
            ],
            median: [(left, q.median), (right, q.median)],
            whiskers: [
                [(BOX_CENTER, summary.lower_whisker), (BOX_CENTER, q.q1)],
                [(BOX_CENTER, q.q3), (BOX_CENTER, summary.upper_whisker)],
            ],
            caps: [cap(summary.lower_whisker), cap(summary.upper_whisker)],
            outliers: summary
                .outliers
                .iter()
                .map(|&v| (BOX_CENTER, v))
                .collect(),
        }
    }
}

fn chart_block(title: &str) -> Block<'_> {
    Block::bordered()
        .merge_borders(MergeStrategy::Exact)
        .title(title)
}

fn line(data: &[(f64, f64)], color: Color) -> Dataset<'_> {
    Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)
}

fn render_no_data(title: &str, area: Rect, buf: &mut Buffer) {
    let paragraph = Paragraph::new("No data")
        .alignment(Alignment::Center)
        .block(chart_block(title));
    Widget::render(paragraph, area, buf);
}

pub(super) struct BoxPlotChart<'a> {
    pub title: &'a str,
    pub summary: Option<&'a BoxPlotSummary>,
}

impl Widget for BoxPlotChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let Some(summary) = self.summary else {
            render_no_data(self.title, area, buf);
            return;
        };
        let shape = BoxShape::new(summary);
        let (low, high) = summary.extent();
        let y_bounds = figure::padded_bounds(low, high);

        let mut datasets = vec![
            line(&shape.outline, Color::Cyan),
            line(&shape.median, Color::Yellow),
        ];
        for segment in shape.whiskers.iter().chain(&shape.caps) {
            datasets.push(line(segment, Color::White));
        }
        datasets.push(
            Dataset::default()
                .marker(Marker::Dot)
                .style(Style::default().fg(Color::Red))
                .data(&shape.outliers),
        );

        let chart = Chart::new(datasets)
            .block(chart_block(self.title))
            .x_axis(Axis::default().bounds(X_BOUNDS))
            .y_axis(
                Axis::default()
                    .bounds(y_bounds)
                    .labels(figure::tick_labels(y_bounds, Y_TICKS)),
            );
        Widget::render(chart, area, buf);
    }
}

pub(super) struct ScatterChart<'a> {
    pub title: &'a str,
    pub x_title: &'a str,
    pub y_title: &'a str,
    pub points: &'a [(f64, f64)],
}

impl Widget for ScatterChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if self.points.is_empty() {
            render_no_data(self.title, area, buf);
            return;
        }
        let x_bounds = figure::data_bounds(self.points.iter().map(|p| p.0));
        let y_bounds = figure::data_bounds(self.points.iter().map(|p| p.1));

        let dataset = Dataset::default()
            .marker(Marker::Dot)
            .style(Style::default().fg(Color::Cyan))
            .data(self.points);
        let chart = Chart::new(vec![dataset])
            .block(chart_block(self.title))
            .x_axis(
                Axis::default()
                    .title(self.x_title)
                    .bounds(x_bounds)
                    .labels(figure::tick_labels(x_bounds, 3)),
            )
            .y_axis(
                Axis::default()
                    .title(self.y_title)
                    .bounds(y_bounds)
                    .labels(figure::tick_labels(y_bounds, Y_TICKS)),
            );
        Widget::render(chart, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_shape() {
        let summary = BoxPlotSummary::new([1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        let shape = BoxShape::new(&summary);
        let q = summary.quartiles;

        let (left, right) = (BOX_CENTER - BOX_HALF_WIDTH, BOX_CENTER + BOX_HALF_WIDTH);

        assert_eq!(shape.outline[0], shape.outline[4]);
        assert!(shape.outline.iter().all(|&(x, _)| x == left || x == right));
        assert_eq!(shape.median, [(left, q.median), (right, q.median)]);
        assert_eq!(shape.whiskers[0], [(1.0, 1.0), (1.0, q.q1)]);
        assert_eq!(shape.whiskers[1], [(1.0, q.q3), (1.0, 5.0)]);
        assert_eq!(shape.caps[1][0].1, 5.0);
        assert!(shape.caps[1][0].0 > left && shape.caps[1][1].0 < right);
        assert_eq!(shape.outliers, vec![(1.0, 100.0)]);
    }

    #[test]
    fn test_render_empty_box_plot() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        BoxPlotChart {
            title: "Alcohol Mujeres",
            summary: None,
        }
        .render(area, &mut buf);
        let text = buf
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(text.contains("No data"));
        assert!(text.contains("Alcohol Mujeres"));
    }

    #[test]
    fn test_render_box_plot_and_scatter() {
        let area = Rect::new(0, 0, 60, 20);
        let summary = BoxPlotSummary::new([1.0, 2.0, 3.0, 4.0, 50.0]).unwrap();
        let mut buf = Buffer::empty(area);
        BoxPlotChart {
            title: "Population Alcohol",
            summary: Some(&summary),
        }
        .render(area, &mut buf);

        let points = [(0.0, 1000.0), (5.0, 1500.0), (10.0, 2500.0)];
        let mut buf = Buffer::empty(area);
        ScatterChart {
            title: "Calorías vs Alcohol",
            x_title: "Alcohol",
            y_title: "Calorías",
            points: &points,
        }
        .render(area, &mut buf);
    }
}
