use nvrd_core::ReaderView;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const STATUS_COLOR: Color = Color::Indexed(241);

/// Draw the visible lines followed by the dim status line.
pub fn render(frame: &mut Frame, view: &ReaderView) {
    let text_rows = u16::try_from(view.height).unwrap_or(u16::MAX);
    let [text_area, status_area] = Layout::vertical([
        Constraint::Length(text_rows),
        Constraint::Length(1),
    ])
    .areas(frame.area());
    let lines: Vec<Line> = view
        .lines
        .iter()
        .map(|line| Line::raw(line.as_str()))
        .collect();
    frame.render_widget(Paragraph::new(lines), text_area);
    frame.render_widget(
        Paragraph::new(status_line(view)).style(Style::default().fg(STATUS_COLOR)),
        status_area,
    );
}

/// Reading position, or the loading/error text while there is one.
pub fn status_line(view: &ReaderView) -> String {
    if let Some(status) = &view.status {
        return status.clone();
    }
    let position = if view.total == 0 { 0 } else { view.cursor + 1 };
    format!(
        "{:.2}%  {}/{}  {}",
        view.progress, position, view.total, view.title
    )
}
