/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task store crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod error;
pub mod prompt;
pub mod row;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use prompt::{Prompt, PromptOutcome, RemovalPrompt};
pub use row::{EditCommand, RowAction, RowEditor, RowError, RowMode};
pub use store::{Snapshot, TaskStore};
pub use types::{Task, TaskId};
