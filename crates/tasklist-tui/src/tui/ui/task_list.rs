/*
[INPUT]:  AppState snapshot, per-row editors, list selection
[OUTPUT]: Task rows rendered into Ratatui frame
[POS]:    TUI UI task list rendering
[UPDATE]: When row layout or row controls change
*/

use std::collections::HashMap;

use chrono::Local;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use tasklist_store::{RowEditor, Task, TaskId};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{AppState, Focus};
use crate::tui::runtime::{border_style, disabled_style, done_style, focused_border_style};

const HIGHLIGHT_SYMBOL: &str = "> ";
const MARKER_DONE: &str = "[✓] ";
const MARKER_OPEN: &str = "[ ] ";

pub(in crate::tui) fn draw_task_list(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let items = if app.snapshot.is_empty() {
        vec![ListItem::new(Line::styled(
            "No tasks yet. Type a title above and press Enter.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.snapshot
            .iter()
            .map(|task| ListItem::new(row_line(&app.rows, task)))
            .collect()
    };

    let focused = app.focus == Focus::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            focused_border_style()
        } else {
            border_style()
        })
        .title("Tasks");
    let inner = block.inner(area);

    let list = List::new(items)
        .block(block)
        .highlight_style(if focused {
            Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        })
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, area, &mut app.list_state);

    if focused && app.active_prompt.is_none() && app.selected_is_editing() {
        place_edit_cursor(frame, inner, app);
    }
}

fn row_line<'a>(rows: &'a HashMap<TaskId, RowEditor>, task: &'a Task) -> Line<'a> {
    let row = rows.get(&task.id);
    let editing = row.is_some_and(|row| row.is_editing());
    let title = row.map(|row| row.scratch()).unwrap_or(task.title.as_str());

    let marker = if task.done {
        Span::styled(MARKER_DONE, Style::default().fg(Color::LightGreen))
    } else {
        Span::raw(MARKER_OPEN)
    };
    let title = if editing {
        Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED),
        )
    } else if task.done {
        Span::styled(title, done_style())
    } else {
        Span::raw(title)
    };
    let edit_control = if editing {
        Span::styled("  [Esc] cancel", Style::default().fg(Color::Red))
    } else {
        Span::raw("  [e] edit")
    };
    let delete_control = if editing {
        Span::styled("[d] delete", disabled_style())
    } else {
        Span::raw("[d] delete")
    };
    let created = task.created_at.with_timezone(&Local).format("%H:%M");

    Line::from(vec![
        marker,
        title,
        edit_control,
        Span::styled(" | ", disabled_style()),
        delete_control,
        Span::styled(format!("  {created}"), disabled_style()),
    ])
}

fn place_edit_cursor(frame: &mut ratatui::Frame, inner: ratatui::layout::Rect, app: &AppState) {
    let (Some(selected), Some(task)) = (app.list_state.selected(), app.selected_task()) else {
        return;
    };
    let Some(visible_row) = selected.checked_sub(app.list_state.offset()) else {
        return;
    };
    if visible_row >= inner.height as usize {
        return;
    }
    let scratch = app.row(task.id).map(|row| row.scratch()).unwrap_or_default();
    let x = inner.x as usize
        + HIGHLIGHT_SYMBOL.width()
        + MARKER_OPEN.width()
        + scratch.width();
    let max_x = (inner.x + inner.width.saturating_sub(1)) as usize;
    frame.set_cursor_position((x.min(max_x) as u16, inner.y + visible_row as u16));
}
