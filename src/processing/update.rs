//! Value-returning updates: each function returns a new collection and leaves its input alone.

use crate::types::Task;

/// Returns a copy of `items` with the task matching `id` marked done.
///
/// If no task matches, the result equals the input.
pub fn mark_done(items: &[Task], id: u64) -> Vec<Task> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                Task {
                    done: true,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Same as [`mark_done`]; kept under the name task-service callers use.
pub fn complete_task(list: &[Task], id: u64) -> Vec<Task> {
    mark_done(list, id)
}

/// Id the next appended task receives: `max(id) + 1`, or `1` for an empty list.
///
/// If some task already holds `u64::MAX`, the smallest unused id is taken instead so ids stay
/// unique.
pub fn next_task_id(list: &[Task]) -> u64 {
    let Some(max) = list.iter().map(|t| t.id).max() else {
        return 1;
    };
    max.checked_add(1).unwrap_or_else(|| smallest_unused_id(list))
}

fn smallest_unused_id(list: &[Task]) -> u64 {
    let mut used: Vec<u64> = list.iter().map(|t| t.id).collect();
    used.sort_unstable();
    used.dedup();
    // First gap in the sorted ids, starting at 1.
    let mut candidate = 1u64;
    for id in used {
        if id > candidate {
            break;
        }
        if id == candidate {
            candidate = candidate.saturating_add(1);
        }
    }
    candidate
}

/// Appends an open task with a trimmed `title` and the next id.
pub fn add_task(list: &[Task], title: &str) -> Vec<Task> {
    let mut out = Vec::with_capacity(list.len() + 1);
    out.extend_from_slice(list);
    out.push(Task::new(next_task_id(list), title.trim()));
    out
}

/// Appends `new_tag` trimmed and lower-cased, unless it is empty or already present
/// (compared case-insensitively).
pub fn add_unique_tag<S>(tags: &[S], new_tag: &str) -> Vec<String>
where
    S: AsRef<str>,
{
    let mut out: Vec<String> = tags.iter().map(|t| str::to_string(t.as_ref())).collect();
    let normalized = new_tag.trim().to_lowercase();
    if normalized.is_empty() || out.iter().any(|t| t.to_lowercase() == normalized) {
        return out;
    }
    out.push(normalized);
    out
}
