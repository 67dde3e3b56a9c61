mod health_resource;
mod schema;
mod screening;
mod triage;
mod user_profile;

pub use health_resource::*;
pub use schema::*;
pub use screening::*;
pub use triage::*;
pub use user_profile::*;
