use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
};

use super::widgets::{BoxPlotChart, ScatterChart};
use crate::figure::Figure;

#[derive(Debug)]
pub(super) struct FigureScreen {
    figures: Vec<Figure>,
    selected: usize,
    exiting: bool,
}

impl FigureScreen {
    pub(super) fn new(figures: Vec<Figure>) -> Self {
        Self {
            figures,
            selected: 0,
            exiting: false,
        }
    }

    pub(super) fn should_exit(&self) -> bool {
        self.exiting
    }

    pub(super) fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key_event) = event
            && key_event.kind == KeyEventKind::Press
        {
            self.handle_key(*key_event);
        }
    }

    fn handle_key(&mut self, key_event: KeyEvent) {
        let len = self.figures.len();
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exiting = true,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exiting = true;
            }
            KeyCode::Right | KeyCode::Char('l' | 'n') | KeyCode::Tab if len > 0 => {
                self.selected = (self.selected + 1) % len;
            }
            KeyCode::Left | KeyCode::Char('h' | 'p') | KeyCode::BackTab if len > 0 => {
                self.selected = (self.selected + len - 1) % len;
            }
            _ => {}
        }
    }

    pub(super) fn draw(&self, frame: &mut Frame) {
        let [chart_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        match self.figures.get(self.selected) {
            Some(Figure::BoxPlot { title, summary }) => frame.render_widget(
                BoxPlotChart {
                    title,
                    summary: summary.as_ref(),
                },
                chart_area,
            ),
            Some(Figure::Scatter {
                title,
                x_label,
                y_label,
                points,
            }) => frame.render_widget(
                ScatterChart {
                    title,
                    x_title: x_label,
                    y_title: y_label,
                    points,
                },
                chart_area,
            ),
            None => {}
        }

        frame.render_widget(self.help_line(), help_area);
    }

    fn help_line(&self) -> Line<'static> {
        let key = Style::default().fg(Color::Yellow);
        Line::from(vec![
            Span::raw(format!(
                " Figure {}/{} ",
                self.selected + 1,
                self.figures.len()
            )),
            Span::styled(" ←/→ ", key),
            Span::raw("switch "),
            Span::styled(" q ", key),
            Span::raw("quit"),
        ])
    }
}
