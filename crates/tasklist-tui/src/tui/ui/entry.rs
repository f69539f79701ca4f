/*
[INPUT]:  Entry text input and focus state
[OUTPUT]: New-task text field with cursor placement
[POS]:    TUI UI entry field rendering
[UPDATE]: When the add-task control changes
*/

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{AppState, Focus};
use crate::tui::runtime::{border_style, focused_border_style};

const PLACEHOLDER: &str = "Add a new task...";

pub(in crate::tui) fn draw_entry(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    let focused = app.focus == Focus::Entry;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            focused_border_style()
        } else {
            border_style()
        })
        .title("New task");

    let width = area.width.saturating_sub(3) as usize;
    let scroll = app.entry.visual_scroll(width);

    let widget = if app.entry.value().is_empty() && !focused {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.entry.value()).scroll((0, scroll as u16))
    };
    frame.render_widget(widget.block(block), area);

    if focused && app.active_prompt.is_none() {
        let cursor = app.entry.visual_cursor().max(scroll) - scroll;
        frame.set_cursor_position((area.x + 1 + cursor as u16, area.y + 1));
    }
}
