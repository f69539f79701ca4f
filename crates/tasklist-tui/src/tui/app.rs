/*
[INPUT]:  TaskStore mutations, per-row editors, entry text, prompt answers
[OUTPUT]: AppState helpers for TUI rendering and task control
[POS]:    TUI app state - screen-level controller owning the task store
[UPDATE]: When adding a user action or changing how a mutation is surfaced
*/

use std::collections::HashMap;
use std::sync::Arc;

use ratatui::widgets::ListState;
use tasklist_store::{
    Prompt, PromptOutcome, RowEditor, Snapshot, Task, TaskId, TaskStore,
};
use tracing::{debug, warn};
use tui_input::{Input, InputRequest};

use crate::config::{AppConfig, PromptTexts};
use crate::tui::LogBufferHandle;

/// Which control receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    Entry,
    List,
}

pub(crate) struct AppState {
    store: TaskStore,
    pub(super) snapshot: Snapshot,
    /// Edit state per row, keyed by task. A row only ever touches its own entry.
    pub(super) rows: HashMap<TaskId, RowEditor>,
    pub(super) entry: Input,
    pub(super) focus: Focus,
    pub(super) list_state: ListState,
    pub(super) active_prompt: Option<Prompt>,
    pub(super) prompt_texts: PromptTexts,
    pub(super) show_logs: bool,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) status_message: String,
}

impl AppState {
    pub(crate) fn new(config: &AppConfig, log_buffer: LogBufferHandle) -> Self {
        let store = TaskStore::new();
        let snapshot = store.snapshot();
        Self {
            store,
            snapshot,
            rows: HashMap::new(),
            entry: Input::default(),
            focus: Focus::Entry,
            list_state: ListState::default(),
            active_prompt: None,
            prompt_texts: config.prompts.clone(),
            show_logs: config.ui.show_logs,
            log_buffer,
            status_message: "Ready".to_string(),
        }
    }

    pub(super) fn selected_task(&self) -> Option<&Arc<Task>> {
        let idx = self.list_state.selected()?;
        self.snapshot.tasks().get(idx)
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|task| task.id)
    }

    pub(super) fn row(&self, id: TaskId) -> Option<&RowEditor> {
        self.rows.get(&id)
    }

    pub(super) fn selected_is_editing(&self) -> bool {
        self.selected_id()
            .and_then(|id| self.rows.get(&id))
            .is_some_and(RowEditor::is_editing)
    }

    /// Editor of the selected row, created from the task on first use
    fn selected_row_mut(&mut self) -> Option<&mut RowEditor> {
        let task = Arc::clone(self.selected_task()?);
        Some(
            self.rows
                .entry(task.id)
                .or_insert_with(|| RowEditor::new(&task)),
        )
    }

    pub(super) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Entry if !self.snapshot.is_empty() => Focus::List,
            Focus::Entry => Focus::Entry,
            Focus::List => Focus::Entry,
        };
        if self.focus == Focus::List && self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
    }

    pub(super) fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub(super) fn entry_request(&mut self, request: InputRequest) {
        self.entry.handle(request);
    }

    pub(super) fn clear_entry(&mut self) {
        self.entry.reset();
    }

    /// Submit the entry text as a new task.
    pub(super) fn submit_entry(&mut self) {
        let title = self.entry.value().to_string();
        if title.trim().is_empty() {
            return;
        }

        match self.store.add(title) {
            Ok(id) => {
                self.entry.reset();
                self.refresh();
                let position = self.store.position(id);
                self.list_state.select(position);
                self.status_message = format!("task added: {id}");
            }
            Err(err) => {
                self.status_message = err.to_string();
                self.active_prompt = Some(Prompt::from(err));
            }
        }
    }

    /// Toggling is always allowed, including while the row is being edited.
    pub(super) fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.store.toggle_done(id) {
            self.refresh();
        }
    }

    pub(super) fn start_edit_selected(&mut self) {
        let Some(row) = self.selected_row_mut() else {
            return;
        };
        match row.start_editing() {
            Ok(()) => self.status_message = "editing title".to_string(),
            Err(err) => debug!(error = %err, "start edit ignored"),
        }
    }

    pub(super) fn commit_edit_selected(&mut self) {
        let Some(row) = self.selected_row_mut() else {
            return;
        };
        let command = match row.submit() {
            Ok(command) => command,
            Err(err) => {
                debug!(error = %err, "commit ignored");
                return;
            }
        };
        if self.store.edit_title(command.id, command.title) {
            self.refresh();
            self.status_message = format!("task renamed: {}", command.id);
        }
    }

    pub(super) fn cancel_edit_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            return;
        };
        let Some(row) = self.rows.get_mut(&task.id) else {
            return;
        };
        match row.cancel(&task.title) {
            Ok(()) => self.status_message = "edit cancelled".to_string(),
            Err(err) => debug!(error = %err, "cancel ignored"),
        }
    }

    pub(super) fn edit_insert_char(&mut self, ch: char) {
        if let Some(row) = self.selected_row_mut() {
            if let Err(err) = row.insert_char(ch) {
                debug!(error = %err, "insert ignored");
            }
        }
    }

    pub(super) fn edit_delete_char(&mut self) {
        if let Some(row) = self.selected_row_mut() {
            if let Err(err) = row.delete_char() {
                debug!(error = %err, "delete ignored");
            }
        }
    }

    /// Ask for confirmation before removing the selected task.
    pub(super) fn request_remove_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.rows.get(&id).is_some_and(|row| !row.delete_enabled()) {
            self.status_message = "finish editing before deleting".to_string();
            return;
        }
        if let Some(prompt) = self.store.request_removal(id) {
            self.active_prompt = Some(Prompt::from(prompt));
        }
    }

    /// Answer the open prompt. Notices accept either outcome as acknowledgement.
    pub(super) fn resolve_prompt(&mut self, outcome: PromptOutcome) {
        let Some(prompt) = self.active_prompt.take() else {
            return;
        };
        match prompt {
            Prompt::DuplicateTitle { title } => {
                debug!(title = %title, "duplicate notice acknowledged");
            }
            Prompt::ConfirmRemoval(removal) => {
                let id = removal.id();
                if self.store.resolve_removal(removal, outcome) {
                    self.refresh();
                    self.status_message = format!("task removed: {id}");
                } else if outcome == PromptOutcome::Decline {
                    self.status_message = "removal cancelled".to_string();
                } else {
                    warn!(task_id = %id, "confirmed removal of a task that is gone");
                }
            }
        }
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        if self.snapshot.is_empty() {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (self.snapshot.len() - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    /// Pick up the store's latest snapshot and drop state of removed rows.
    fn refresh(&mut self) {
        self.snapshot = self.store.snapshot();
        let snapshot = &self.snapshot;
        self.rows.retain(|id, _| snapshot.get(*id).is_some());

        if self.snapshot.is_empty() {
            self.list_state.select(None);
            self.focus = Focus::Entry;
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= self.snapshot.len() {
                self.list_state.select(Some(self.snapshot.len() - 1));
            }
        }
    }

    #[cfg(test)]
    pub(super) fn store(&self) -> &TaskStore {
        &self.store
    }
}
