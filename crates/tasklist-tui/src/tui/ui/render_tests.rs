/*
[INPUT]:  AppState driven through its actions
[OUTPUT]: Rendered frames checked on ratatui's TestBackend
[POS]:    TUI UI render smoke tests
[UPDATE]: When visible labels change
*/

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tasklist_store::PromptOutcome;
use tui_input::Input;

use crate::config::AppConfig;
use crate::tui::LogBuffer;
use crate::tui::app::AppState;
use crate::tui::runtime::draw_ui;

fn render(app: &mut AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| draw_ui(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn app_with(titles: &[&str]) -> AppState {
    let mut app = AppState::new(&AppConfig::default(), LogBuffer::handle(16));
    for title in titles {
        app.entry = Input::new(title.to_string());
        app.submit_entry();
    }
    app
}

#[test]
fn test_empty_screen() {
    let mut app = app_with(&[]);
    let screen = render(&mut app);
    assert!(screen.contains("You have 0 tasks"));
    assert!(screen.contains("No tasks yet"));
    assert!(screen.contains("[Enter] Add task"));
}

#[test]
fn test_rows_show_titles_and_done_marker() {
    let mut app = app_with(&["Buy milk", "Walk dog"]);
    app.toggle_selected();
    let screen = render(&mut app);
    assert!(screen.contains("You have 2 tasks"));
    assert!(screen.contains("[ ] Buy milk"));
    assert!(screen.contains("[✓] Walk dog"));
}

#[test]
fn test_editing_row_shows_cancel_control() {
    let mut app = app_with(&["Read"]);
    app.toggle_focus();
    app.start_edit_selected();
    app.edit_insert_char('!');
    let screen = render(&mut app);
    assert!(screen.contains("Read!"));
    assert!(screen.contains("[Esc] cancel"));
    assert!(screen.contains("Ctrl+T"));
}

#[test]
fn test_remove_prompt_is_drawn() {
    let mut app = app_with(&["Temp"]);
    app.toggle_focus();
    app.request_remove_selected();
    let screen = render(&mut app);
    assert!(screen.contains("Remove item"));
    assert!(screen.contains("\"Temp\""));
    assert!(screen.contains("[y] Yes"));

    app.resolve_prompt(PromptOutcome::Decline);
    let screen = render(&mut app);
    assert!(!screen.contains("Remove item"));
    assert!(screen.contains("[ ] Temp"));
}

#[test]
fn test_duplicate_notice_is_drawn() {
    let mut app = app_with(&["Buy milk", "Buy milk"]);
    let screen = render(&mut app);
    assert!(screen.contains("Task already exists"));
    assert!(screen.contains("[Enter] OK"));
}

#[test]
fn test_log_panel_shows_buffered_lines() {
    let mut app = app_with(&[]);
    app.log_buffer
        .lock()
        .unwrap()
        .push_line("hello from the log".to_string());
    app.toggle_logs();
    let screen = render(&mut app);
    assert!(screen.contains("Logs"));
    assert!(screen.contains("hello from the log"));
}
