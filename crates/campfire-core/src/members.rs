//! Team roster statistics derived from project membership and todo
//! assignments.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use campfire_store::{Project, Todo};

/// Presence signal for a team member.
///
/// This is an explicit input, never guessed: members missing from the
/// roster report [`Presence::Offline`], so the derivation stays
/// deterministic across recomputations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Away,
    Offline,
}

/// Explicit name -> presence mapping fed by the caller.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    presence: HashMap<String, Presence>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, presence: Presence) {
        self.presence.insert(name.into(), presence);
    }

    /// Presence for `name`, defaulting to offline for unlisted members.
    pub fn presence_of(&self, name: &str) -> Presence {
        self.presence
            .get(name)
            .copied()
            .unwrap_or(Presence::Offline)
    }
}

/// Per-member statistics.  Computed, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStat {
    pub name: String,
    /// Projects whose member list contains the name (case-sensitive).
    pub project_count: usize,
    pub completed_todos: usize,
    pub active_todos: usize,
    pub presence: Presence,
}

/// Collect every distinct member name across all projects (first-seen
/// order) and derive their statistics.
pub fn member_stats(projects: &[Project], todos: &[Todo], roster: &Roster) -> Vec<MemberStat> {
    let mut names: Vec<&str> = Vec::new();
    for project in projects {
        for member in &project.members {
            if !names.contains(&member.as_str()) {
                names.push(member);
            }
        }
    }

    names
        .into_iter()
        .map(|name| {
            let project_count = projects
                .iter()
                .filter(|p| p.members.iter().any(|m| m == name))
                .count();

            let (completed_todos, active_todos) =
                todos.iter().filter(|t| t.assignee == name).fold(
                    (0, 0),
                    |(done, open), todo| {
                        if todo.completed {
                            (done + 1, open)
                        } else {
                            (done, open + 1)
                        }
                    },
                );

            MemberStat {
                name: name.to_string(),
                project_count,
                completed_todos,
                active_todos,
                presence: roster.presence_of(name),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn project(name: &str, members: &[&str]) -> Project {
        let now = Utc::now();
        Project {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            members: members.iter().map(|m| m.to_string()).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    fn todo(project_id: Uuid, assignee: &str, completed: bool) -> Todo {
        Todo {
            id: Uuid::new_v4(),
            project_id,
            list_id: None,
            title: "task".to_string(),
            assignee: assignee.to_string(),
            completed,
            completed_at: completed.then(Utc::now),
            due_date: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_members_collected_in_first_seen_order() {
        let projects = vec![
            project("a", &["You", "Ana"]),
            project("b", &["Ana", "Felix"]),
        ];
        let stats = member_stats(&projects, &[], &Roster::new());
        let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["You", "Ana", "Felix"]);
    }

    #[test]
    fn test_counts_partition_by_completion() {
        let p = project("a", &["You", "Ana"]);
        let todos = vec![
            todo(p.id, "You", false),
            todo(p.id, "You", true),
            todo(p.id, "You", true),
            todo(p.id, "Ana", false),
        ];

        let stats = member_stats(std::slice::from_ref(&p), &todos, &Roster::new());

        let you = stats.iter().find(|s| s.name == "You").unwrap();
        assert_eq!(you.project_count, 1);
        assert_eq!(you.completed_todos, 2);
        assert_eq!(you.active_todos, 1);

        let ana = stats.iter().find(|s| s.name == "Ana").unwrap();
        assert_eq!(ana.completed_todos, 0);
        assert_eq!(ana.active_todos, 1);
    }

    #[test]
    fn test_member_match_is_case_sensitive() {
        let projects = vec![project("a", &["Ana"]), project("b", &["ana"])];
        let stats = member_stats(&projects, &[], &Roster::new());
        assert_eq!(stats.len(), 2);
        assert!(stats.iter().all(|s| s.project_count == 1));
    }

    #[test]
    fn test_presence_comes_from_roster_with_offline_default() {
        let p = project("a", &["You", "Ana"]);
        let mut roster = Roster::new();
        roster.set("You", Presence::Online);

        let stats = member_stats(std::slice::from_ref(&p), &[], &roster);

        assert_eq!(stats[0].presence, Presence::Online);
        assert_eq!(stats[1].presence, Presence::Offline);
    }

    #[test]
    fn test_stats_are_deterministic() {
        let projects = vec![
            project("a", &["You", "Ana"]),
            project("b", &["Felix", "Ana"]),
        ];
        let todos = vec![todo(projects[0].id, "Ana", true)];
        let roster = Roster::new();

        let first = member_stats(&projects, &todos, &roster);
        let second = member_stats(&projects, &todos, &roster);
        assert_eq!(first, second);
    }
}
