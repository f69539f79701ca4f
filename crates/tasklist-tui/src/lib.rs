/*
[INPUT]:  Public API exports for tasklist-tui crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod tui;

pub use config::AppConfig;
pub use tui::{LogBuffer, LogBufferHandle, LogWriterFactory, run_tui_with_log};
