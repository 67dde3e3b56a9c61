pub mod plan_controller;
pub mod profile_controller;
pub mod resources_controller;
pub mod triage_controller;

pub use plan_controller::PlanController;
pub use profile_controller::ProfileController;
pub use resources_controller::ResourcesController;
pub use triage_controller::TriageController;
