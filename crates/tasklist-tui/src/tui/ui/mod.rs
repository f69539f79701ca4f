/*
[INPUT]:  TUI app state and store snapshots for UI components
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding or renaming a panel
*/

mod entry;
mod header;
mod logs;
mod modal;
mod task_list;

pub(in crate::tui) use entry::draw_entry;
pub(in crate::tui) use header::draw_header;
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use modal::draw_prompt;
pub(in crate::tui) use task_list::draw_task_list;

#[cfg(test)]
mod render_tests;
