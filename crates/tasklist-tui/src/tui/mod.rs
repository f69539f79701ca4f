/*
[INPUT]:  AppConfig and log buffer from the binary entry point
[OUTPUT]: Ratatui task list screen with row editing and prompts
[POS]:    TUI module root
[UPDATE]: When TUI submodules or exports change
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{LogBuffer, LogBufferHandle, LogWriterFactory, run_tui_with_log};
