//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer entity (会员客户)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    /// Document name, e.g. `CUST-1234567890`
    pub name: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub customer_group: String,
    pub customer_type: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create customer payload (`create_customer` method endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub customer_group: Option<String>,
    pub customer_type: Option<String>,
}

/// Identifying fields echoed back after creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub name: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
}

impl From<&Customer> for CustomerSummary {
    fn from(c: &Customer) -> Self {
        Self {
            name: c.name.clone(),
            customer_name: c.customer_name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
        }
    }
}
