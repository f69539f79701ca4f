/*
[INPUT]:  Titles and ids forwarded from the view layer, prompt outcomes
[OUTPUT]: Ordered task collection published as immutable snapshots
[POS]:    Task store - owns the collection and its four mutations
[UPDATE]: When list invariants or mutation semantics change
*/

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::prompt::{PromptOutcome, RemovalPrompt};
use crate::types::{Task, TaskId};

/// Immutable view of the collection at one version.
///
/// Tasks untouched by a mutation are shared between consecutive snapshots,
/// so holding a snapshot never observes later changes.
#[derive(Debug, Clone)]
pub struct Snapshot {
    version: u64,
    tasks: Arc<[Arc<Task>]>,
}

impl Snapshot {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn tasks(&self) -> &[Arc<Task>] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id).map(Arc::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().map(Arc::as_ref)
    }

    /// Whether both snapshots point at the same collection
    pub fn same_collection(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }
}

/// Owner of the task collection.
///
/// Ids come from a counter that only moves forward, so an id is never
/// handed out twice even after the task holding it is removed.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Arc<[Arc<Task>]>,
    next_id: u64,
    version: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new().into(),
            next_id: 1,
            version: 0,
        }
    }

    /// Append a task titled `title`.
    ///
    /// Rejected when a present task carries exactly the same title; the
    /// collection is left untouched in that case.
    pub fn add(&mut self, title: impl Into<String>) -> Result<TaskId> {
        let title = title.into();
        if self.contains_title(&title) {
            debug!(title = %title, "rejecting duplicate task title");
            return Err(StoreError::DuplicateTitle { title });
        }

        let id = TaskId::new(self.next_id);
        self.next_id += 1;

        let mut tasks = self.tasks.to_vec();
        tasks.push(Arc::new(Task::new(id, title)));
        self.publish(tasks);

        info!(task_id = %id, count = self.len(), "task added");
        Ok(id)
    }

    /// Flip `done` on the task with `id`. Returns `false` when no task matched.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        let matched = self.replace(id, Task::toggled);
        if matched {
            debug!(task_id = %id, "task done flag toggled");
        } else {
            debug!(task_id = %id, "toggle ignored: no such task");
        }
        matched
    }

    /// Overwrite the title of the task with `id`.
    ///
    /// Titles are not re-checked for uniqueness here and may be empty.
    /// Returns `false` when no task matched.
    pub fn edit_title(&mut self, id: TaskId, title: impl Into<String>) -> bool {
        let title = title.into();
        let matched = self.replace(id, |task| task.retitled(title));
        if matched {
            debug!(task_id = %id, "task title edited");
        } else {
            debug!(task_id = %id, "edit ignored: no such task");
        }
        matched
    }

    /// First step of a removal: issue the question to put to the user.
    ///
    /// Returns `None` when no task matched.
    pub fn request_removal(&self, id: TaskId) -> Option<RemovalPrompt> {
        match self.get(id) {
            Some(task) => Some(RemovalPrompt::new(id, task.title.clone())),
            None => {
                debug!(task_id = %id, "removal ignored: no such task");
                None
            }
        }
    }

    /// Second step of a removal: act on the user's answer.
    ///
    /// Returns `true` only when a task was actually removed.
    pub fn resolve_removal(&mut self, prompt: RemovalPrompt, outcome: PromptOutcome) -> bool {
        let id = prompt.id();
        if outcome == PromptOutcome::Decline {
            debug!(task_id = %id, "removal declined");
            return false;
        }

        let before = self.tasks.len();
        let tasks: Vec<Arc<Task>> = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();
        if tasks.len() == before {
            debug!(task_id = %id, "removal confirmed for a task already gone");
            return false;
        }

        self.publish(tasks);
        info!(task_id = %id, count = self.len(), "task removed");
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: self.version,
            tasks: Arc::clone(&self.tasks),
        }
    }

    /// Number of effective mutations applied so far
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id).map(Arc::as_ref)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().map(Arc::as_ref)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|task| task.title == title)
    }

    fn replace(&mut self, id: TaskId, update: impl FnOnce(&Task) -> Task) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let mut tasks = self.tasks.to_vec();
        tasks[index] = Arc::new(update(&tasks[index]));
        self.publish(tasks);
        true
    }

    fn publish(&mut self, tasks: Vec<Arc<Task>>) {
        self.tasks = tasks.into();
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn store_with(titles: &[&str]) -> (TaskStore, Vec<TaskId>) {
        let mut store = TaskStore::new();
        let ids = titles
            .iter()
            .map(|title| store.add(*title).expect("fresh title"))
            .collect();
        (store, ids)
    }

    fn titles(store: &TaskStore) -> Vec<String> {
        store.iter().map(|task| task.title.clone()).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = TaskStore::new();
        assert!(store.is_empty());
        assert_eq!(store.version(), 0);
        assert!(store.snapshot().is_empty());
    }

    #[rstest]
    #[case(&[], "Buy milk")]
    #[case(&["Buy milk"], "Walk dog")]
    #[case(&["a", "b", "c"], "d")]
    #[case(&["Read"], "read")]
    fn test_add_fresh_title_grows_by_one(#[case] existing: &[&str], #[case] title: &str) {
        let (mut store, _) = store_with(existing);
        let before = store.len();

        let id = store.add(title).unwrap();

        assert_eq!(store.len(), before + 1);
        let task = store.get(id).unwrap();
        assert_eq!(task.title, title);
        assert!(!task.done);
        assert_eq!(store.position(id), Some(before));
    }

    #[rstest]
    #[case(&["Buy milk"], "Buy milk")]
    #[case(&["a", "b", "c"], "b")]
    #[case(&[""], "")]
    fn test_add_present_title_is_rejected(#[case] existing: &[&str], #[case] title: &str) {
        let (mut store, _) = store_with(existing);
        let before = store.snapshot();

        let err = store.add(title).unwrap_err();

        assert_eq!(
            err,
            StoreError::DuplicateTitle {
                title: title.to_string()
            }
        );
        assert!(store.snapshot().same_collection(&before));
        assert_eq!(store.version(), before.version());
    }

    #[test]
    fn test_ids_are_unique_across_rapid_adds() {
        let mut store = TaskStore::new();
        let mut ids: Vec<TaskId> = (0..500)
            .map(|n| store.add(format!("task {n}")).unwrap())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let (mut store, ids) = store_with(&["Temp"]);
        let prompt = store.request_removal(ids[0]).unwrap();
        assert!(store.resolve_removal(prompt, PromptOutcome::Confirm));

        let again = store.add("Temp").unwrap();
        assert_ne!(again, ids[0]);
    }

    #[test]
    fn test_toggle_twice_restores_done() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        for id in ids {
            let original = store.get(id).unwrap().done;
            assert!(store.toggle_done(id));
            assert_eq!(store.get(id).unwrap().done, !original);
            assert!(store.toggle_done(id));
            assert_eq!(store.get(id).unwrap().done, original);
        }
        assert_eq!(titles(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_toggle_absent_id_leaves_collection_unchanged() {
        let (mut store, _) = store_with(&["a", "b"]);
        let before = store.snapshot();

        assert!(!store.toggle_done(TaskId::new(999)));

        let after = store.snapshot();
        assert!(after.same_collection(&before));
        assert_eq!(after.version(), before.version());
    }

    #[test]
    fn test_edit_title_round_trip_through_duplicate() {
        let (mut store, ids) = store_with(&["a", "b"]);
        let original = store.get(ids[0]).unwrap().title.clone();

        assert!(store.edit_title(ids[0], "b"));
        assert_eq!(titles(&store), vec!["b", "b"]);

        assert!(store.edit_title(ids[0], original.clone()));
        assert_eq!(store.get(ids[0]).unwrap().title, original);
    }

    #[test]
    fn test_edit_title_accepts_empty_string() {
        let (mut store, ids) = store_with(&["a"]);
        assert!(store.edit_title(ids[0], ""));
        assert_eq!(store.get(ids[0]).unwrap().title, "");
    }

    #[test]
    fn test_edit_absent_id_is_silent() {
        let (mut store, _) = store_with(&["a"]);
        let before = store.snapshot();
        assert!(!store.edit_title(TaskId::new(77), "x"));
        assert!(store.snapshot().same_collection(&before));
    }

    #[test]
    fn test_removal_decline_keeps_task() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        let before = store.snapshot();

        let prompt = store.request_removal(ids[1]).unwrap();
        assert_eq!(prompt.title(), "b");
        assert!(!store.resolve_removal(prompt, PromptOutcome::Decline));

        assert!(store.snapshot().same_collection(&before));
    }

    #[test]
    fn test_removal_confirm_preserves_order_and_fields_of_rest() {
        let (mut store, ids) = store_with(&["a", "b", "c", "d"]);
        store.toggle_done(ids[2]);
        let survivors: Vec<Task> = store
            .iter()
            .filter(|task| task.id != ids[1])
            .cloned()
            .collect();

        let prompt = store.request_removal(ids[1]).unwrap();
        assert!(store.resolve_removal(prompt, PromptOutcome::Confirm));

        assert!(store.get(ids[1]).is_none());
        let remaining: Vec<Task> = store.iter().cloned().collect();
        assert_eq!(remaining, survivors);
    }

    #[test]
    fn test_request_removal_of_absent_id() {
        let (store, _) = store_with(&["a"]);
        assert!(store.request_removal(TaskId::new(42)).is_none());
    }

    #[test]
    fn test_confirming_a_stale_prompt_is_a_noop() {
        let (mut store, ids) = store_with(&["a", "b"]);
        let first = store.request_removal(ids[0]).unwrap();
        let second = store.request_removal(ids[0]).unwrap();

        assert!(store.resolve_removal(first, PromptOutcome::Confirm));
        let before = store.snapshot();
        assert!(!store.resolve_removal(second, PromptOutcome::Confirm));
        assert!(store.snapshot().same_collection(&before));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_mutation_shares_untouched_tasks() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        let before = store.snapshot();

        store.toggle_done(ids[1]);
        let after = store.snapshot();

        assert!(!after.same_collection(&before));
        assert!(Arc::ptr_eq(&before.tasks()[0], &after.tasks()[0]));
        assert!(!Arc::ptr_eq(&before.tasks()[1], &after.tasks()[1]));
        assert!(Arc::ptr_eq(&before.tasks()[2], &after.tasks()[2]));

        assert!(!before.get(ids[1]).unwrap().done);
        assert!(after.get(ids[1]).unwrap().done);
        assert_eq!(after.version(), before.version() + 1);
    }
}
