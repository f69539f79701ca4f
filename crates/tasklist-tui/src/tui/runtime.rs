/*
[INPUT]:  AppConfig, crossterm input events, log buffer
[OUTPUT]: Ratatui-based TUI run loop, frame layout, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or the event loop
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tracing_subscriber::fmt::MakeWriter;

use super::app::{AppState, Focus};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::*;
use crate::config::AppConfig;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

/// Ring of the most recent log lines.
#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.min(LOG_BUFFER_CAPACITY)),
            capacity,
        }
    }

    pub fn handle(capacity: usize) -> LogBufferHandle {
        Arc::new(StdMutex::new(Self::new(capacity)))
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Last `count` lines, oldest first
    pub fn tail(&self, count: usize) -> Vec<String> {
        let start = self.lines.len().saturating_sub(count);
        self.lines.iter().skip(start).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// `MakeWriter` that routes formatted tracing output into a `LogBuffer`.
#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl LogWriter {
    fn push(&self, line: String) {
        // A poisoned buffer only means a panic happened mid-push; the lines
        // themselves are still valid.
        let mut guard = match self.buffer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push_line(line);
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial.drain(..=pos);
            self.push(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            self.push(line);
        }
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

enum UiEvent {
    Input(CrosstermEvent),
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn focused_border_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn done_style() -> Style {
    Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub(crate) fn disabled_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM)
}

pub async fn run_tui_with_log(config: AppConfig, log_buffer: LogBufferHandle) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    if event_tx.send(UiEvent::Input(event)).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut app = AppState::new(&config, log_buffer);
    let mut tick = tokio::time::interval(Duration::from_millis(config.ui.tick_interval_ms));
    let mut should_quit = false;
    info!("task list ready");

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        should_quit = handle_key_event(&mut app, key);
                    }
                    Some(UiEvent::Input(CrosstermEvent::Resize(width, height))) => {
                        debug!(width, height, "terminal resized");
                    }
                    Some(_) => {}
                    None => should_quit = true,
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    input_shutdown.cancel();
    info!(count = app.snapshot.len(), "task list closed");
    Ok(())
}

pub(super) fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(area);

    draw_header(frame, layout[0], app.snapshot.len());
    draw_entry(frame, layout[1], app);

    if app.show_logs {
        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout[2]);
        draw_task_list(frame, middle[0], app);
        draw_logs(frame, middle[1], &app.log_buffer);
    } else {
        draw_task_list(frame, layout[2], app);
    }

    draw_footer(frame, layout[3], app);

    if let Some(prompt) = app.active_prompt.as_ref() {
        draw_prompt(frame, centered_rect(area, 60, 40), prompt, &app.prompt_texts);
    }
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key = |label: &'static str| Span::styled(label, key_style);

    let line1 = if app.active_prompt.is_some() {
        Line::from(vec![
            key("[y/Enter]"),
            Span::raw(" Confirm  "),
            key("[n/Esc]"),
            Span::raw(" Decline"),
        ])
    } else if app.focus == Focus::Entry {
        Line::from(vec![
            key("[Enter]"),
            Span::raw(" Add task  "),
            key("[Esc]"),
            Span::raw(" Clear  "),
            key("[Tab]"),
            Span::raw(" List"),
        ])
    } else if app.selected_is_editing() {
        Line::from(vec![
            key("[Enter]"),
            Span::raw(" Save  "),
            key("[Esc]"),
            Span::raw(" Cancel  "),
            key("[Ctrl+T]"),
            Span::raw(" Done  "),
            key("[Up/Down]"),
            Span::raw(" Select"),
        ])
    } else {
        Line::from(vec![
            key("[Up/Down]"),
            Span::raw(" Select  "),
            key("[Space]"),
            Span::raw(" Done  "),
            key("[e]"),
            Span::raw(" Edit  "),
            key("[d]"),
            Span::raw(" Delete  "),
            key("[Tab]"),
            Span::raw(" New  "),
            key("[l]"),
            Span::raw(" Logs  "),
            key("[q]"),
            Span::raw(" Quit"),
        ])
    };
    let line2 = Line::from(Span::raw(format!("Status: {}", app.status_message)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let widget = Paragraph::new(Text::from(vec![line1, line2]))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(crate) fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
