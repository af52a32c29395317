//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod class_session_repo;
pub mod cost_repo;
pub mod dashboard_repo;
pub mod discipline_repo;
pub mod dismissal_repo;
pub mod payment_repo;
pub mod plan_repo;
pub mod student_repo;
pub mod teacher_repo;

pub use class_session_repo::ClassSessionRepo;
pub use cost_repo::CostRepo;
pub use dashboard_repo::DashboardRepo;
pub use discipline_repo::DisciplineRepo;
pub use dismissal_repo::DismissalRepo;
pub use payment_repo::PaymentRepo;
pub use plan_repo::PlanRepo;
pub use student_repo::StudentRepo;
pub use teacher_repo::TeacherRepo;
