/*
[INPUT]:  Crossterm key events
[OUTPUT]: AppState actions routed by prompt, focus, and row edit mode
[POS]:    TUI key routing
[UPDATE]: When keybindings change
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tasklist_store::PromptOutcome;
use tui_input::InputRequest;

use super::app::{AppState, Focus};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.active_prompt.is_some() {
        handle_prompt_key(app, key.code);
        return false;
    }

    match app.focus {
        Focus::Entry => {
            handle_entry_key(app, key);
            false
        }
        Focus::List if app.selected_is_editing() => {
            handle_editing_key(app, key);
            false
        }
        Focus::List => handle_list_key(app, key.code),
    }
}

fn handle_prompt_key(app: &mut AppState, key: KeyCode) {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter | KeyCode::Char(' ') => {
            app.resolve_prompt(PromptOutcome::Confirm)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.resolve_prompt(PromptOutcome::Decline)
        }
        _ => {}
    }
}

fn handle_entry_key(app: &mut AppState, key: KeyEvent) {
    let request = match key.code {
        KeyCode::Enter => {
            app.submit_entry();
            return;
        }
        KeyCode::Esc => {
            app.clear_entry();
            return;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.toggle_focus();
            return;
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputRequest::DeleteLine
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputRequest::InsertChar(ch)
        }
        KeyCode::Backspace => InputRequest::DeletePrevChar,
        KeyCode::Delete => InputRequest::DeleteNextChar,
        KeyCode::Left => InputRequest::GoToPrevChar,
        KeyCode::Right => InputRequest::GoToNextChar,
        KeyCode::Home => InputRequest::GoToStart,
        KeyCode::End => InputRequest::GoToEnd,
        _ => return,
    };
    app.entry_request(request);
}

fn handle_editing_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_selected()
        }
        KeyCode::Enter => app.commit_edit_selected(),
        KeyCode::Esc => app.cancel_edit_selected(),
        KeyCode::Backspace => app.edit_delete_char(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Delete => app.request_remove_selected(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_insert_char(ch)
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('e') => app.start_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_remove_selected(),
        KeyCode::Char('l') => app.toggle_logs(),
        KeyCode::Tab | KeyCode::Esc => app.toggle_focus(),
        _ => {}
    }
    false
}
