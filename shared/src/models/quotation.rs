//! Quotation Model

use serde::{Deserialize, Serialize};

/// Quotation header (报价单)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Quotation {
    pub id: i64,
    /// Document name, e.g. `QTN-1234567890`
    pub name: String,
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub transaction_date: Option<String>,
    pub valid_till: Option<String>,
    pub grand_total: f64,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Quotation line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct QuotationItem {
    pub id: i64,
    pub quotation_id: i64,
    pub item_code: String,
    pub item_name: String,
    pub description: Option<String>,
    pub qty: f64,
    pub rate: f64,
    pub amount: f64,
    pub idx: i64,
}

/// Quotation header + items (detail view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationWithItems {
    #[serde(flatten)]
    pub quotation: Quotation,
    pub items: Vec<QuotationItem>,
}

/// Create quotation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationCreate {
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub transaction_date: Option<String>,
    pub valid_till: Option<String>,
    pub items: Vec<QuotationItemCreate>,
}

/// Line item within a quotation create payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationItemCreate {
    pub item_code: String,
    pub item_name: String,
    pub description: Option<String>,
    pub qty: f64,
    pub rate: f64,
}
