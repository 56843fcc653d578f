//! Data models
//!
//! Shared between club-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod customer;
pub mod guest_onboarding;
pub mod membership_agreement;
pub mod quotation;
pub mod room;
pub mod service_item;

// Re-exports
pub use customer::*;
pub use guest_onboarding::*;
pub use membership_agreement::*;
pub use quotation::*;
pub use room::*;
pub use service_item::*;
