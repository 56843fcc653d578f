//! Membership Agreement Model

use serde::{Deserialize, Serialize};

/// Agreement status values
pub const AGREEMENT_STATUS_DRAFT: &str = "Draft";
pub const AGREEMENT_STATUS_ACTIVE: &str = "Active";
pub const AGREEMENT_STATUS_CANCELLED: &str = "Cancelled";

/// Membership agreement header (会籍协议)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MembershipAgreement {
    pub id: i64,
    /// Document name, e.g. `MA-1234567890`
    pub name: String,
    /// Quotation this agreement was copied from, if any
    pub quotation_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub agreement_date: Option<String>,
    pub valid_till: Option<String>,
    pub grand_total: f64,
    /// "Draft" | "Active" | "Cancelled"
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Agreement line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MembershipAgreementItem {
    pub id: i64,
    pub agreement_id: i64,
    pub item_code: String,
    pub item_name: String,
    pub description: Option<String>,
    pub qty: f64,
    pub rate: f64,
    pub amount: f64,
    pub idx: i64,
}

/// Agreement header + items (detail view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipAgreementWithItems {
    #[serde(flatten)]
    pub agreement: MembershipAgreement,
    pub items: Vec<MembershipAgreementItem>,
}

/// Unsaved agreement built from a quotation.
///
/// Nothing is persisted until the client explicitly saves the draft via
/// `POST /api/agreements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipAgreementDraft {
    pub quotation_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub agreement_date: Option<String>,
    pub valid_till: Option<String>,
    pub grand_total: f64,
    pub items: Vec<MembershipAgreementItemDraft>,
}

/// Unsaved agreement line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipAgreementItemDraft {
    pub item_code: String,
    pub item_name: String,
    pub description: Option<String>,
    pub qty: f64,
    pub rate: f64,
    pub amount: f64,
}
