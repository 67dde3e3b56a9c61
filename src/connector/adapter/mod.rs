mod gemini_client;
mod in_memory_profile_repository;
mod json_file_profile_repository;
mod mock_completion;

pub use gemini_client::*;
pub use in_memory_profile_repository::*;
pub use json_file_profile_repository::*;
pub use mock_completion::*;
