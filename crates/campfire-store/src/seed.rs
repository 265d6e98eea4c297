//! Bundled demo fixtures.
//!
//! The store is purely in-memory, so every process starts from this fixed
//! data set.  Timestamps are expressed relative to startup to keep the
//! dashboard's "recent activity" view populated.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::{Comment, File, Message, Project, Todo};

/// The four seed collections, referentially consistent with each other.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub projects: Vec<Project>,
    pub messages: Vec<Message>,
    pub todos: Vec<Todo>,
    pub files: Vec<File>,
}

/// Build the demo data set: three projects, a small team, a mix of open,
/// completed and overdue todos, threaded messages and a few attachments.
pub fn demo_data() -> SeedData {
    let now = Utc::now();

    let website = Uuid::new_v4();
    let mobile = Uuid::new_v4();
    let marketing = Uuid::new_v4();

    let projects = vec![
        Project {
            id: website,
            name: "Website Redesign".to_string(),
            description: "Refresh the marketing site with the new brand".to_string(),
            members: vec![
                "You".to_string(),
                "Ana Moreno".to_string(),
                "Felix Tran".to_string(),
            ],
            created_at: now - Duration::days(21),
            updated_at: now - Duration::days(2),
        },
        Project {
            id: mobile,
            name: "Mobile App".to_string(),
            description: "Ship the iOS and Android companion app".to_string(),
            members: vec!["You".to_string(), "Priya Shah".to_string()],
            created_at: now - Duration::days(14),
            updated_at: now - Duration::days(1),
        },
        Project {
            id: marketing,
            name: "Q3 Campaign".to_string(),
            description: "Plan and launch the back-to-school campaign".to_string(),
            members: vec![
                "Ana Moreno".to_string(),
                "Priya Shah".to_string(),
                "Felix Tran".to_string(),
            ],
            created_at: now - Duration::days(7),
            updated_at: now - Duration::hours(6),
        },
    ];

    let messages = vec![
        Message {
            id: Uuid::new_v4(),
            project_id: website,
            title: "Homepage hero draft".to_string(),
            content: "First pass at the hero section is up for review.".to_string(),
            author: "Ana Moreno".to_string(),
            created_at: now - Duration::hours(3),
            comments: vec![Comment {
                id: Uuid::new_v4(),
                author: "You".to_string(),
                text: "Love the type scale, let's tighten the copy.".to_string(),
                created_at: now - Duration::hours(2),
            }],
        },
        Message {
            id: Uuid::new_v4(),
            project_id: mobile,
            title: "Beta build 0.4 is out".to_string(),
            content: "TestFlight link in the usual place, focus on onboarding.".to_string(),
            author: "Priya Shah".to_string(),
            created_at: now - Duration::hours(26),
            comments: Vec::new(),
        },
        Message {
            id: Uuid::new_v4(),
            project_id: marketing,
            title: "Budget sign-off".to_string(),
            content: "Finance approved the media spend for August.".to_string(),
            author: "Felix Tran".to_string(),
            created_at: now - Duration::days(3),
            comments: Vec::new(),
        },
    ];

    let todos = vec![
        Todo {
            id: Uuid::new_v4(),
            project_id: website,
            list_id: None,
            title: "Audit current page performance".to_string(),
            assignee: "You".to_string(),
            completed: true,
            completed_at: Some(now - Duration::hours(5)),
            due_date: Some(now - Duration::days(1)),
            created_at: now - Duration::days(10),
        },
        Todo {
            id: Uuid::new_v4(),
            project_id: website,
            list_id: None,
            title: "Migrate blog to the new CMS".to_string(),
            assignee: "Felix Tran".to_string(),
            completed: false,
            completed_at: None,
            due_date: Some(now - Duration::days(2)),
            created_at: now - Duration::days(9),
        },
        Todo {
            id: Uuid::new_v4(),
            project_id: mobile,
            list_id: None,
            title: "Fix push-notification opt-in flow".to_string(),
            assignee: "You".to_string(),
            completed: false,
            completed_at: None,
            due_date: Some(now + Duration::days(3)),
            created_at: now - Duration::days(4),
        },
        Todo {
            id: Uuid::new_v4(),
            project_id: mobile,
            list_id: None,
            title: "Write release notes for 0.4".to_string(),
            assignee: "Priya Shah".to_string(),
            completed: true,
            completed_at: Some(now - Duration::hours(30)),
            due_date: None,
            created_at: now - Duration::days(5),
        },
        Todo {
            id: Uuid::new_v4(),
            project_id: marketing,
            list_id: None,
            title: "Brief the design team on ad formats".to_string(),
            assignee: "Ana Moreno".to_string(),
            completed: false,
            completed_at: None,
            due_date: Some(now + Duration::days(1)),
            created_at: now - Duration::days(2),
        },
    ];

    let files = vec![
        File {
            id: Uuid::new_v4(),
            project_id: website,
            name: "brand-guidelines.pdf".to_string(),
            url: "https://files.campfire.example/brand-guidelines.pdf".to_string(),
            size: 2_400_000,
            kind: "application/pdf".to_string(),
            uploaded_by: "Ana Moreno".to_string(),
            uploaded_at: now - Duration::days(6),
        },
        File {
            id: Uuid::new_v4(),
            project_id: marketing,
            name: "campaign-calendar.xlsx".to_string(),
            url: "https://files.campfire.example/campaign-calendar.xlsx".to_string(),
            size: 84_000,
            kind: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
                .to_string(),
            uploaded_by: "Felix Tran".to_string(),
            uploaded_at: now - Duration::days(3),
        },
    ];

    SeedData {
        projects,
        messages,
        todos,
        files,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_referentially_consistent() {
        let seed = demo_data();
        let project_ids: Vec<_> = seed.projects.iter().map(|p| p.id).collect();

        assert!(seed
            .messages
            .iter()
            .all(|m| project_ids.contains(&m.project_id)));
        assert!(seed
            .todos
            .iter()
            .all(|t| project_ids.contains(&t.project_id)));
        assert!(seed
            .files
            .iter()
            .all(|f| project_ids.contains(&f.project_id)));
    }

    #[test]
    fn test_seed_todos_keep_completion_invariant() {
        let seed = demo_data();
        for todo in &seed.todos {
            assert_eq!(todo.completed, todo.completed_at.is_some());
        }
    }
}
