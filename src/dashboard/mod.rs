use std::time::Duration;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{info, warn};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};
use crate::config::Config;
use crate::dashboard::chart::TemperatureChart;
use crate::forecast_source::ForecastSource;
use crate::hourly::{hourly_points, HourlyPoint};

mod chart;

/// The dashboard view over the forecast source.
///
/// Display points are derived from the payload once per source change and
/// kept until the next change, never recomputed per frame.
pub struct Dashboard {
    source: ForecastSource,
    points: Vec<HourlyPoint>,
    city: Option<String>,
    selected: usize,
    title: String,
    unit: String,
    tick: Duration,
}

impl Dashboard {
    /// Returns a Dashboard with display points derived from whatever the
    /// source currently holds
    ///
    /// # Arguments
    ///
    /// * 'config' - the loaded configuration
    /// * 'source' - the forecast source to watch
    pub fn new(config: &Config, source: ForecastSource) -> Dashboard {
        let mut dashboard = Dashboard {
            source,
            points: Vec::new(),
            city: None,
            selected: 0,
            title: config.display.title.clone(),
            unit: config.display.unit.clone(),
            tick: Duration::from_millis(config.display.tick_millis),
        };
        dashboard.rebuild();

        dashboard
    }

    /// Runs the dashboard until the user quits, restoring the terminal
    /// whatever the outcome
    pub fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();

        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        info!("dashboard started with {} points displayed", self.points.len());

        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(self.tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Left => self.select_previous(),
                        KeyCode::Right => self.select_next(),
                        KeyCode::Char('r') => self.reload(),
                        _ => {}
                    }
                }
            } else {
                self.refresh();
            }
        }

        info!("dashboard stopped");
        Ok(())
    }

    /// Reloads only when the source reports a change. A failing refresh is
    /// logged and the last good data stays on screen.
    fn refresh(&mut self) {
        match self.source.refresh() {
            Ok(true) => {
                self.rebuild();
                info!("forecast changed, {} points displayed", self.points.len());
            }
            Ok(false) => {}
            Err(e) => warn!("forecast refresh failed: {}", e),
        }
    }

    /// Forced reload regardless of source change
    fn reload(&mut self) {
        match self.source.load() {
            Ok(()) => {
                self.rebuild();
                info!("forecast reloaded, {} points displayed", self.points.len());
            }
            Err(e) => warn!("forecast reload failed: {}", e),
        }
    }

    /// Re-derives display state from the source payload
    fn rebuild(&mut self) {
        self.points = self.source.forecast().map(hourly_points).unwrap_or_default();
        self.city = self.source.forecast()
            .and_then(|f| f.city.as_ref())
            .map(|c| c.name.clone());
        self.selected = self.selected.min(self.points.len().saturating_sub(1));
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.points.len() {
            self.selected += 1;
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [header, chart_area, readout] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ]).areas(frame.area());

        frame.render_widget(Paragraph::new(self.header_line()), header);

        TemperatureChart {
            points: &self.points,
            title: &self.title,
            unit: &self.unit,
            selected: if self.points.is_empty() { None } else { Some(self.selected) },
        }.draw(frame, chart_area);

        frame.render_widget(Paragraph::new(self.readout_line()), readout);
    }

    fn header_line(&self) -> Line<'_> {
        let mut spans = vec![
            Span::styled("hourcast", Style::default().add_modifier(Modifier::BOLD)),
        ];
        if let Some(city) = &self.city {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(city.as_str(), Style::default().fg(Color::Gray)));
        }
        spans.push(Span::raw("  "));
        spans.push(Span::styled("←/→ hour  r reload  q quit", Style::default().fg(Color::DarkGray)));

        Line::from(spans)
    }

    /// The readout for the selected hour, the keyboard counterpart of a
    /// pointer hovering a chart point
    fn readout_line(&self) -> Line<'_> {
        match self.points.get(self.selected) {
            Some(p) => Line::from(vec![
                Span::styled(p.time.as_str(), Style::default().fg(Color::Yellow)),
                Span::raw("  "),
                Span::styled("TEMPERATURE ", Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{}{}", p.temp, self.unit),
                             Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled("FEELS LIKE ", Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{}{}", p.feels_like, self.unit),
                             Style::default().add_modifier(Modifier::BOLD)),
            ]),
            None => Line::from(Span::styled("no forecast data", Style::default().fg(Color::DarkGray))),
        }
    }
}
