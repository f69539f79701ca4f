/*
[INPUT]:  RowAction requests and scratch-text edits for one list row
[OUTPUT]: Validated Viewing/Editing transitions and EditTitle commands
[POS]:    Row domain logic - per-row edit state machine
[UPDATE]: When row edit transitions or delete gating change
*/

use thiserror::Error;

use crate::types::{Task, TaskId};

/// Edit mode of a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Viewing,
    Editing,
}

/// Actions that can trigger row mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    StartEdit,
    Submit,
    Cancel,
}

/// Store mutation requested by a committed edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    pub id: TaskId,
    pub title: String,
}

/// Errors occurring while driving a row
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("Invalid transition: {from:?} -> {action:?}")]
    InvalidTransition { from: RowMode, action: RowAction },
    #[error("Row is not being edited")]
    NotEditing,
}

/// Transient edit state owned by one row of the list.
///
/// The scratch title starts as a copy of the task's title and only reaches
/// the store through the command returned by a submit.
#[derive(Debug, Clone)]
pub struct RowEditor {
    task_id: TaskId,
    mode: RowMode,
    scratch: String,
}

impl RowEditor {
    pub fn new(task: &Task) -> Self {
        Self {
            task_id: task.id,
            mode: RowMode::Viewing,
            scratch: task.title.clone(),
        }
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    /// Text shown in the row's title field
    pub fn scratch(&self) -> &str {
        &self.scratch
    }

    /// Deleting a row is not allowed while its title is being edited
    pub fn delete_enabled(&self) -> bool {
        self.mode == RowMode::Viewing
    }

    /// Check if `action` is valid from the current mode
    pub fn can_transition(&self, action: RowAction) -> bool {
        matches!(
            (self.mode, action),
            (RowMode::Viewing, RowAction::StartEdit)
                | (RowMode::Editing, RowAction::Submit)
                | (RowMode::Editing, RowAction::Cancel)
        )
    }

    pub fn start_editing(&mut self) -> Result<(), RowError> {
        self.check(RowAction::StartEdit)?;
        self.mode = RowMode::Editing;
        Ok(())
    }

    /// Leave edit mode keeping the scratch text, returning the edit to apply.
    pub fn submit(&mut self) -> Result<EditCommand, RowError> {
        self.check(RowAction::Submit)?;
        self.mode = RowMode::Viewing;
        Ok(EditCommand {
            id: self.task_id,
            title: self.scratch.clone(),
        })
    }

    /// Leave edit mode discarding the scratch text in favour of `current_title`.
    pub fn cancel(&mut self, current_title: &str) -> Result<(), RowError> {
        self.check(RowAction::Cancel)?;
        self.scratch = current_title.to_string();
        self.mode = RowMode::Viewing;
        Ok(())
    }

    pub fn insert_char(&mut self, ch: char) -> Result<(), RowError> {
        self.ensure_editing()?;
        self.scratch.push(ch);
        Ok(())
    }

    pub fn delete_char(&mut self) -> Result<(), RowError> {
        self.ensure_editing()?;
        self.scratch.pop();
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), RowError> {
        self.ensure_editing()?;
        self.scratch.clear();
        Ok(())
    }

    fn ensure_editing(&self) -> Result<(), RowError> {
        if self.is_editing() {
            Ok(())
        } else {
            Err(RowError::NotEditing)
        }
    }

    fn check(&self, action: RowAction) -> Result<(), RowError> {
        if self.can_transition(action) {
            Ok(())
        } else {
            Err(RowError::InvalidTransition {
                from: self.mode,
                action,
            })
        }
    }
}
