//! Service Item Model

use serde::{Deserialize, Serialize};

/// Bookable service item (club services catalog)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ServiceItem {
    pub id: i64,
    pub item_code: String,
    pub item_name: String,
    pub item_group: String,
    pub description: Option<String>,
    pub rate: f64,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create service item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceItemCreate {
    pub item_code: String,
    pub item_name: String,
    pub item_group: Option<String>,
    pub description: Option<String>,
    pub rate: Option<f64>,
}
