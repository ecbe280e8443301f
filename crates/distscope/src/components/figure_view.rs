use distscope_core::{Figure, Panel};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

/// Renders one composed figure: a shared title line over a row of chart
/// panels, each panel the density histogram of one sample with the
/// theoretical curve drawn across the same x-range.
pub struct FigureView<'a> {
    figure: &'a Figure,
}

impl<'a> FigureView<'a> {
    #[must_use]
    pub fn new(figure: &'a Figure) -> Self {
        Self { figure }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);

        let title = Paragraph::new(self.figure.title.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(title, chunks[0]);

        if self.figure.panels.is_empty() {
            let empty = Paragraph::new("No panels: the sample size list is empty")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, chunks[1]);
            return;
        }

        let count = self.figure.panels.len() as u32;
        let columns =
            Layout::horizontal(vec![Constraint::Ratio(1, count); count as usize]).split(chunks[1]);

        for (i, panel) in self.figure.panels.iter().enumerate() {
            // The legend belongs to the rightmost panel only, so the figure
            // carries one legend like a composite plot
            let show_legend = i + 1 == self.figure.panels.len();
            self.render_panel(frame, columns[i], panel, show_legend);
        }
    }

    fn render_panel(&self, frame: &mut Frame, area: Rect, panel: &Panel, show_legend: bool) {
        let bars = panel.histogram.bars();

        let mut histogram = Dataset::default()
            .marker(symbols::Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(Color::Cyan))
            .data(&bars);
        let mut density = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&panel.curve.points);
        if show_legend {
            histogram = histogram.name("sample histogram");
            density = density.name("theoretical density");
        }

        let (x_min, x_max) = self.figure.x_range;
        let x_labels = vec![
            Span::raw(format!("{x_min:.0}")),
            Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
            Span::raw(format!("{x_max:.0}")),
        ];

        // Headroom above the tallest of histogram and curve
        let y_max = panel.max_density() * 1.05;
        let y_labels = vec![Span::raw("0.00"), Span::raw(format!("{y_max:.2}"))];

        let chart = Chart::new(vec![histogram, density])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(panel.caption.as_str()),
            )
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([x_min, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            )
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        frame.render_widget(chart, area);
    }
}
