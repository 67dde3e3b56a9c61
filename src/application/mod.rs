//! # Application Layer
//!
//! Prompt builders, the mediators that pair them with a completion client,
//! and the profile management use case.

pub mod interfaces;
pub mod prompts;
pub mod use_cases;

pub use interfaces::*;
pub use prompts::*;
pub use use_cases::*;
