//! Due-date bucketing for a member's assigned todos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campfire_store::Todo;

/// The four assignment buckets of the "My Assignments" view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoFilter {
    All,
    Active,
    Completed,
    Overdue,
}

impl TodoFilter {
    /// Whether `todo` falls into this bucket at time `now`.
    pub fn matches(&self, todo: &Todo, now: DateTime<Utc>) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.completed,
            TodoFilter::Completed => todo.completed,
            TodoFilter::Overdue => is_overdue(todo, now),
        }
    }
}

/// A todo is overdue when it is incomplete and its due date falls on a
/// calendar day strictly before `now`'s day.  Same-day due dates are not
/// overdue, whatever the time.
pub fn is_overdue(todo: &Todo, now: DateTime<Utc>) -> bool {
    if todo.completed {
        return false;
    }
    match todo.due_date {
        Some(due) => due.date_naive() < now.date_naive(),
        None => false,
    }
}

/// Select the todos matching `filter`, preserving input order.
pub fn filter_todos(todos: &[Todo], filter: TodoFilter, now: DateTime<Utc>) -> Vec<Todo> {
    todos
        .iter()
        .filter(|t| filter.matches(t, now))
        .cloned()
        .collect()
}

/// Badge counts for all four buckets, computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FilterCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl FilterCounts {
    pub fn tally(todos: &[Todo], now: DateTime<Utc>) -> Self {
        todos.iter().fold(Self::default(), |mut counts, todo| {
            counts.all += 1;
            if todo.completed {
                counts.completed += 1;
            } else {
                counts.active += 1;
            }
            if is_overdue(todo, now) {
                counts.overdue += 1;
            }
            counts
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn todo(completed: bool, due_date: Option<DateTime<Utc>>) -> Todo {
        Todo {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            list_id: None,
            title: "task".to_string(),
            assignee: "You".to_string(),
            completed,
            completed_at: completed.then(Utc::now),
            due_date,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_overdue_requires_past_day_and_incomplete() {
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 0).unwrap();

        let due_past = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert!(is_overdue(&todo(false, Some(due_past)), now));

        // Completed todos are never overdue.
        assert!(!is_overdue(&todo(true, Some(due_past)), now));

        // Same-day due dates are not overdue, even earlier in the day.
        let due_today = Utc.with_ymd_and_hms(2023, 6, 1, 0, 30, 0).unwrap();
        assert!(!is_overdue(&todo(false, Some(due_today)), now));

        // No due date, nothing to be late against.
        assert!(!is_overdue(&todo(false, None), now));

        let due_future = now + Duration::days(2);
        assert!(!is_overdue(&todo(false, Some(due_future)), now));
    }

    #[test]
    fn test_filter_buckets() {
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 0).unwrap();
        let overdue = todo(false, Some(now - Duration::days(3)));
        let open = todo(false, None);
        let done = todo(true, None);
        let todos = vec![overdue.clone(), open.clone(), done.clone()];

        assert_eq!(filter_todos(&todos, TodoFilter::All, now).len(), 3);
        assert_eq!(
            filter_todos(&todos, TodoFilter::Active, now),
            vec![overdue.clone(), open]
        );
        assert_eq!(filter_todos(&todos, TodoFilter::Completed, now), vec![done]);
        assert_eq!(
            filter_todos(&todos, TodoFilter::Overdue, now),
            vec![overdue]
        );
    }

    #[test]
    fn test_overdue_scenario_from_due_date_in_january() {
        // Todo due 2023-01-01, incomplete, observed on 2023-06-01.
        let due = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let t1 = todo(false, Some(due));

        let filtered = filter_todos(std::slice::from_ref(&t1), TodoFilter::Overdue, now);
        assert_eq!(filtered, vec![t1]);
    }

    #[test]
    fn test_counts_match_independent_filters() {
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 0).unwrap();
        let todos = vec![
            todo(false, Some(now - Duration::days(1))),
            todo(false, Some(now)),
            todo(true, Some(now - Duration::days(5))),
            todo(false, None),
        ];

        let counts = FilterCounts::tally(&todos, now);
        assert_eq!(counts.all, 4);
        assert_eq!(counts.active, 3);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.overdue, 1);

        // One pass must agree with the four independent scans.
        for (count, filter) in [
            (counts.all, TodoFilter::All),
            (counts.active, TodoFilter::Active),
            (counts.completed, TodoFilter::Completed),
            (counts.overdue, TodoFilter::Overdue),
        ] {
            assert_eq!(count, filter_todos(&todos, filter, now).len());
        }
    }
}
