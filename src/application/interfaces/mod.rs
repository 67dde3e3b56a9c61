mod completion_client;
mod profile_repository;

pub use completion_client::*;
pub use profile_repository::*;
