//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod dashboard_repo;
pub mod decision_repo;
pub mod meeting_repo;
pub mod role_repo;
pub mod schedule_repo;
pub mod session_repo;
pub mod student_profile_repo;
pub mod study_plan_repo;
pub mod user_repo;

pub use activity_repo::ActivityRepo;
pub use dashboard_repo::DashboardRepo;
pub use decision_repo::DecisionRepo;
pub use meeting_repo::MeetingRepo;
pub use role_repo::RoleRepo;
pub use schedule_repo::ScheduleRepo;
pub use session_repo::SessionRepo;
pub use student_profile_repo::StudentProfileRepo;
pub use study_plan_repo::StudyPlanRepo;
pub use user_repo::UserRepo;
