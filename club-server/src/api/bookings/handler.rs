//! Service Booking API Handlers

use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::ServerState;
use crate::db::repository::{customer, quotation, service_item};
use shared::models::{QuotationCreate, QuotationItemCreate};
use shared::response::MethodResponse;

/// 预订请求：服务项目购物车 + 起止日期 + 人数 + 客户邮箱
#[derive(Debug, Clone, Deserialize)]
pub struct BookingCreate {
    /// Cart of service item codes
    #[serde(default)]
    pub item_codes: Vec<String>,
    /// Single-item fallback kept for older clients
    pub item_code: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub number_of_people: Option<i64>,
    pub email: Option<String>,
}

/// Method endpoint payload: success and failure share the envelope
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BookingResult {
    Ok {
        success: bool,
        message: String,
        /// Quotation docname holding the booking
        booking: String,
        /// Customer docname the booking was placed for
        customer: String,
    },
    Err {
        success: bool,
        error: String,
    },
}

impl BookingResult {
    fn ok(message: impl Into<String>, booking: String, customer: String) -> Self {
        Self::Ok {
            success: true,
            message: message.into(),
            booking,
            customer,
        }
    }

    fn err(error: impl Into<String>) -> Self {
        Self::Err {
            success: false,
            error: error.into(),
        }
    }
}

/// POST /api/method/club_management.api.create_service_booking - 服务预订
///
/// 始终返回 HTTP 200；校验失败与持久化错误都降级为
/// `{"message": {"success": false, "error": "..."}}`。
pub async fn create_service_booking(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> Json<MethodResponse<BookingResult>> {
    Json(MethodResponse::new(
        try_create_booking(&state, payload).await,
    ))
}

async fn try_create_booking(state: &ServerState, payload: BookingCreate) -> BookingResult {
    let mut item_codes = payload.item_codes;
    if item_codes.is_empty()
        && let Some(code) = payload.item_code
        && !code.trim().is_empty()
    {
        item_codes.push(code);
    }
    if item_codes.is_empty() {
        return BookingResult::err("At least one service item is required");
    }

    let Some(from_raw) = non_empty(payload.from_date) else {
        return BookingResult::err("From Date is required");
    };
    let Some(to_raw) = non_empty(payload.to_date) else {
        return BookingResult::err("To Date is required");
    };
    let Some(people) = payload.number_of_people else {
        return BookingResult::err("Number Of People is required");
    };

    let (from, to) = match (
        NaiveDate::parse_from_str(&from_raw, "%Y-%m-%d"),
        NaiveDate::parse_from_str(&to_raw, "%Y-%m-%d"),
    ) {
        (Ok(from), Ok(to)) => (from, to),
        _ => return BookingResult::err("Invalid date format, expected YYYY-MM-DD"),
    };
    if to < from {
        return BookingResult::err("To Date must be after or equal to From Date");
    }
    // Qty = inclusive day count of the stay, minimum one day
    let days = ((to - from).num_days() + 1).max(1);

    let Some(email) = non_empty(payload.email) else {
        return BookingResult::err("Email is required to book a service");
    };
    let email = email.to_lowercase();
    let booked_for = match customer::find_by_email(&state.pool, &email).await {
        Ok(Some(c)) => c,
        Ok(None) => {
            warn!(target: "api", "Booking attempt for unknown customer email: {}", email);
            return BookingResult::err("Customer account not found. Please contact support.");
        }
        Err(e) => return BookingResult::err(e.to_string()),
    };

    let occupants = if people > 1 { "Occupants" } else { "Occupant" };
    let from_fmt = from.format("%d-%m-%Y").to_string();
    let to_fmt = to.format("%d-%m-%Y").to_string();

    let mut items = Vec::with_capacity(item_codes.len());
    for code in &item_codes {
        let item = match service_item::find_by_code(&state.pool, code).await {
            Ok(Some(item)) => item,
            Ok(None) => return BookingResult::err(format!("Service item '{code}' not found")),
            Err(e) => return BookingResult::err(e.to_string()),
        };
        items.push(QuotationItemCreate {
            description: Some(format!(
                "{} for {} {} from {} till {}",
                item.item_name, people, occupants, from_fmt, to_fmt
            )),
            item_code: item.item_code,
            item_name: item.item_name,
            qty: days as f64,
            rate: item.rate,
        });
    }

    // Booking lands as a draft quotation: transaction date is today,
    // validity runs until the stay begins
    let data = QuotationCreate {
        customer_id: Some(booked_for.id),
        customer_name: booked_for.customer_name.clone(),
        transaction_date: Some(shared::util::today()),
        valid_till: Some(from_raw),
        items,
    };

    match quotation::create(&state.pool, data).await {
        Ok(created) => {
            info!(
                target: "api",
                "Service booking created: {} for customer {} ({} day(s))",
                created.quotation.name, booked_for.name, days
            );
            BookingResult::ok(
                "Service booking created successfully",
                created.quotation.name,
                booked_for.name,
            )
        }
        Err(e) => BookingResult::err(e.to_string()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
