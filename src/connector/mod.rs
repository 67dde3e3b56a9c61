//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion provider (Gemini over HTTP, mock for tests)
//! - Profile storage (JSON file, in-memory)
//! - Outer surfaces (CLI controllers, HTTP API)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
