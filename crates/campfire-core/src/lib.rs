//! # campfire-core
//!
//! Pure derivation logic for the Campfire dashboard: turning raw entity
//! collections into view models.  No I/O, no clocks other than the `now`
//! arguments callers pass in, so every function here is deterministic and
//! trivially testable.

pub mod assignments;
pub mod dashboard;
pub mod members;

pub use assignments::{filter_todos, is_overdue, FilterCounts, TodoFilter};
pub use dashboard::{
    aggregate, aggregate_with_limit, Activity, ActivityKind, DashboardView, EnrichedProject,
    DEFAULT_FEED_LIMIT, UNKNOWN_PROJECT,
};
pub use members::{member_stats, MemberStat, Presence, Roster};
