//! Shared types for the club management system
//!
//! Data models, response envelopes and utility types used by the
//! edge server and frontend clients (via API).

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::MethodResponse;
