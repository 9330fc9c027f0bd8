//! Plain-text rendering of lists for terminal front ends.

use crate::types::{List, Todo};

/// Render a single list with its todos, or a placeholder when no list is
/// selected.
pub fn render_list(list: Option<&List>) -> String {
    let Some(list) = list else {
        return "No list selected.\n".to_string();
    };

    let mut out = format!("#{} {}\n", list.id, list.title);
    match list.todos.as_deref() {
        None => out.push_str("  (todos not loaded)\n"),
        Some([]) => out.push_str("  (empty)\n"),
        Some(todos) => {
            for todo in todos {
                out.push_str(&render_todo(todo));
            }
        }
    }
    out
}

/// One line per list with a completion summary.
pub fn render_lists(lists: &[List]) -> String {
    if lists.is_empty() {
        return "No lists.\n".to_string();
    }
    let mut out = String::new();
    for list in lists {
        let line = match list.todos.as_deref() {
            Some(todos) => {
                let done = todos.iter().filter(|t| t.complete).count();
                format!("#{} {} ({done}/{})\n", list.id, list.title, todos.len())
            }
            None => format!("#{} {}\n", list.id, list.title),
        };
        out.push_str(&line);
    }
    out
}

fn render_todo(todo: &Todo) -> String {
    let mark = if todo.complete { 'x' } else { ' ' };
    format!("  [{mark}] {:>4}  {}\n", todo.id, todo.description)
}
