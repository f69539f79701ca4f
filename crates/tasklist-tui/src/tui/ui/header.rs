/*
[INPUT]:  Number of tasks in the current snapshot
[OUTPUT]: Header bar with the task counter
[POS]:    TUI UI header rendering
[UPDATE]: When the header content changes
*/

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_header(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    count: usize,
) {
    let line = Line::from(vec![
        Span::styled(" to.do ", header_style()),
        Span::raw("  "),
        Span::raw("You have "),
        Span::styled(count_label(count), Style::default().add_modifier(Modifier::BOLD)),
    ]);
    let widget = Paragraph::new(line).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style()),
    );
    frame.render_widget(widget, area);
}

pub(super) fn count_label(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{count} tasks")
    }
}
