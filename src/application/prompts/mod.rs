//! Prompt builders.
//!
//! Pure functions turning domain input into a [`StructuredPrompt`]: the
//! instruction text plus the schema the provider must answer with. They do
//! no I/O and are deterministic for identical input.
//!
//! [`StructuredPrompt`]: crate::domain::StructuredPrompt

mod preventive;
mod resources;
mod triage;

pub use preventive::*;
pub use resources::*;
pub use triage::*;
