use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};
use crate::hourly::HourlyPoint;

/// Y axis bounds used when there are no points to derive bounds from
const EMPTY_Y_BOUNDS: [f64; 2] = [0.0, 10.0];

/// Padding in degrees below and above the measured temperature range
const Y_PAD: f64 = 1.0;

/// Represents the data required to draw the hourly temperature chart.
/// Both series are drawn over the same x positions, one per display point,
/// with the temperature series solid and the feels-like series dimmed.
pub struct TemperatureChart<'a> {
    /// The display points, at most one per shown hour.
    pub points: &'a [HourlyPoint],

    /// The chart title.
    pub title: &'a str,

    /// Suffix for y axis labels, e.g. "°".
    pub unit: &'a str,

    /// Index of the highlighted point, if any.
    pub selected: Option<usize>,
}

impl TemperatureChart<'_> {
    /// Generates the x axis bounds, one unit per display point
    fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.points.len().saturating_sub(1).max(1) as f64]
    }

    /// Generates the x axis labels from the point hour labels
    fn x_labels(&self) -> Vec<Span<'_>> {
        self.points.iter().map(|p| Span::raw(p.time.as_str())).collect()
    }

    /// Generates the y axis bounds from both series with some padding so the
    /// lines never hug the frame
    fn y_bounds(&self) -> [f64; 2] {
        if self.points.is_empty() {
            return EMPTY_Y_BOUNDS;
        }

        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for p in self.points {
            min = min.min(p.temp.min(p.feels_like) as f64);
            max = max.max(p.temp.max(p.feels_like) as f64);
        }

        [min - Y_PAD, max + Y_PAD]
    }

    /// Generates low, mid and high y axis labels carrying the unit suffix
    fn y_labels(&self) -> Vec<String> {
        let [low, high] = self.y_bounds();
        let mid = (low + high) / 2.0;

        vec![
            format!("{:.0}{}", low, self.unit),
            format!("{:.0}{}", mid, self.unit),
            format!("{:.0}{}", high, self.unit),
        ]
    }

    /// Draws the temperature chart at the given location. An empty point
    /// sequence draws an empty chart with default bounds.
    ///
    /// # Arguments
    ///
    /// * 'frame' - the frame being rendered
    /// * 'area' - location to draw the chart at
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let temp_data: Vec<(f64, f64)> = self.points.iter().enumerate()
            .map(|(i, p)| (i as f64, p.temp as f64))
            .collect();
        let feels_data: Vec<(f64, f64)> = self.points.iter().enumerate()
            .map(|(i, p)| (i as f64, p.feels_like as f64))
            .collect();
        let selected_data: Vec<(f64, f64)> = self.selected
            .and_then(|i| temp_data.get(i).copied())
            .into_iter()
            .collect();

        let mut datasets = vec![
            Dataset::default()
                .name("temp")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&temp_data),
            Dataset::default()
                .name("feels like")
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&feels_data),
        ];
        if !selected_data.is_empty() {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Block)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(Color::Yellow))
                    .data(&selected_data),
            );
        }

        let x_axis = Axis::default()
            .style(Style::default().fg(Color::Gray))
            .bounds(self.x_bounds())
            .labels(self.x_labels());

        let y_labels = self.y_labels();
        let y_axis = Axis::default()
            .style(Style::default().fg(Color::Gray))
            .bounds(self.y_bounds())
            .labels(y_labels.iter().map(|l| Span::raw(l.as_str())).collect::<Vec<_>>());

        let chart = Chart::new(datasets)
            .block(Block::bordered()
                .title(Span::styled(self.title, Style::default().add_modifier(Modifier::BOLD))))
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use super::*;

    fn point(time: &str, temp: i32, feels_like: i32) -> HourlyPoint {
        HourlyPoint { time: time.to_string(), temp, feels_like }
    }

    fn create_chart(points: &[HourlyPoint]) -> TemperatureChart<'_> {
        TemperatureChart {
            points,
            title: "Today's Temperature",
            unit: "°",
            selected: None,
        }
    }

    #[test]
    fn y_bounds_pad_the_measured_range() {
        let points = vec![point("2PM", 18, 16), point("5PM", 14, 11), point("8PM", 12, 12)];
        let chart = create_chart(&points);

        assert_eq!(chart.y_bounds(), [10.0, 19.0]);
    }

    #[test]
    fn y_bounds_default_when_empty() {
        let chart = create_chart(&[]);
        assert_eq!(chart.y_bounds(), EMPTY_Y_BOUNDS);
    }

    #[test]
    fn y_labels_carry_the_unit() {
        let points = vec![point("2PM", 10, 10), point("5PM", 20, 20)];
        let chart = create_chart(&points);

        assert_eq!(chart.y_labels(), vec!["9°", "15°", "21°"]);
    }

    #[test]
    fn x_labels_match_point_order() {
        let points = vec![point("2PM", 18, 16), point("5PM", 14, 11)];
        let chart = create_chart(&points);

        let labels: Vec<String> = chart.x_labels().iter().map(|s| s.content.to_string()).collect();
        assert_eq!(labels, vec!["2PM", "5PM"]);
    }

    #[test]
    fn x_bounds_cover_single_and_empty_input() {
        let points = vec![point("2PM", 18, 16)];
        assert_eq!(create_chart(&points).x_bounds(), [0.0, 1.0]);
        assert_eq!(create_chart(&[]).x_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn drawing_without_data_does_not_fail() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| create_chart(&[]).draw(frame, frame.area())).unwrap();
    }

    #[test]
    fn drawing_with_selection_does_not_fail() {
        let points = vec![point("2PM", 18, 16), point("5PM", 14, 11)];
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| {
            let mut chart = create_chart(&points);
            chart.selected = Some(1);
            chart.draw(frame, frame.area());
        }).unwrap();
    }
}
