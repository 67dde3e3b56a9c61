mod manage_profile;
mod preventive_plan;
mod resource_search;
mod structured_completion;
mod symptom_triage;

pub use manage_profile::*;
pub use preventive_plan::*;
pub use resource_search::*;
pub use structured_completion::parse_structured;
pub use symptom_triage::*;
