/*
[INPUT]:  Store decisions that need the user's answer before acting
[OUTPUT]: Prompt, RemovalPrompt, and PromptOutcome
[POS]:    Prompt protocol - two-step interactions between store and view
[UPDATE]: When a new confirmation or notice is introduced
*/

use crate::error::StoreError;
use crate::types::TaskId;

/// Answer given by the user to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Confirm,
    Decline,
}

/// Pending removal issued by `TaskStore::request_removal`.
///
/// Nothing is removed until the prompt is resolved with
/// `PromptOutcome::Confirm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalPrompt {
    id: TaskId,
    title: String,
}

impl RemovalPrompt {
    pub(crate) fn new(id: TaskId, title: String) -> Self {
        Self { id, title }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Title of the task at the time the prompt was issued
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Something the view must show before the interaction can continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Acknowledge-only notice for a rejected addition
    DuplicateTitle { title: String },
    /// Accept/decline question guarding a removal
    ConfirmRemoval(RemovalPrompt),
}

impl Prompt {
    /// Whether the prompt offers a decline choice
    pub fn is_question(&self) -> bool {
        matches!(self, Prompt::ConfirmRemoval(_))
    }
}

impl From<StoreError> for Prompt {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateTitle { title } => Prompt::DuplicateTitle { title },
        }
    }
}

impl From<RemovalPrompt> for Prompt {
    fn from(prompt: RemovalPrompt) -> Self {
        Prompt::ConfirmRemoval(prompt)
    }
}
