//! # Domain Layer
//!
//! Value shapes shared by every flow: the user profile, the three kinds of
//! generated guidance, and the schema descriptor sent alongside each prompt.
//! This layer performs no I/O.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
