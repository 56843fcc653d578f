//! Guest Onboarding API Handlers
//!
//! 动作端点的统一流程：加载记录 → 调用纯处理函数 → 运行保存前校验 →
//! 持久化 → 执行副作用命令。房间同步失败会作为阻断错误返回，但宾客
//! 记录本身不回滚 (观察到的契约，无逆向同步)。

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::ServerState;
use crate::db::repository::{guest_onboarding, room};
use crate::forms::guest_onboarding as form;
use crate::forms::{FormNotice, SideEffect};
use crate::utils::{AppError, AppResult, validation};
use shared::models::{GuestOnboarding, GuestOnboardingCreate};

/// Guest record plus the non-blocking notices raised while saving it
#[derive(Debug, Serialize)]
pub struct GuestResponse {
    #[serde(flatten)]
    pub guest: GuestOnboarding,
    pub notices: Vec<FormNotice>,
}

#[derive(Debug, Deserialize)]
pub struct TimestampPayload {
    /// `HH:MM:SS`
    pub time: String,
}

#[derive(Debug, Deserialize)]
pub struct RoomAssignPayload {
    pub room_number: String,
}

/// GET /api/guests - 获取所有入住登记
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<GuestOnboarding>>> {
    let guests = guest_onboarding::find_all(&state.pool).await?;
    Ok(Json(guests))
}

/// GET /api/guests/:id - 获取单条登记
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<GuestOnboarding>> {
    let guest = guest_onboarding::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Guest onboarding {}", id)))?;
    Ok(Json(guest))
}

/// POST /api/guests - 创建入住登记
///
/// 保存前校验在插入之前运行：护照/签证规则不满足时整条记录被拒绝。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GuestOnboardingCreate>,
) -> AppResult<Json<GuestResponse>> {
    validation::validate_required_text(&payload.guest, "Guest name", validation::MAX_NAME_LEN)?;
    validation::validate_optional_text(
        &payload.rfid_card_code,
        "RFID card code",
        validation::MAX_SHORT_TEXT_LEN,
    )?;

    // Run the pre-save rules against a transient record before inserting
    let prospective = prospective_record(&payload);
    let notices = form::validate(&prospective)?;

    let guest = guest_onboarding::create(&state.pool, payload).await?;
    info!(target: "api", "Guest onboarding created: {}", guest.id);
    Ok(Json(GuestResponse { guest, notices }))
}

/// POST /api/guests/:id/check-in - 登记入住时间
pub async fn check_in(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TimestampPayload>,
) -> AppResult<Json<GuestResponse>> {
    let record = load(&state, id).await?;
    let (record, effects) = form::check_in(record, payload.time);
    save_and_execute(&state, record, effects).await
}

/// POST /api/guests/:id/check-out - 登记退房时间
///
/// 允许在没有入住时间的情况下退房；两个时间处理函数互相独立。
pub async fn check_out(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TimestampPayload>,
) -> AppResult<Json<GuestResponse>> {
    let record = load(&state, id).await?;
    let (record, effects) = form::check_out(record, payload.time);
    save_and_execute(&state, record, effects).await
}

/// POST /api/guests/:id/room - 分配房间并同步占用状态
pub async fn assign_room(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RoomAssignPayload>,
) -> AppResult<Json<GuestResponse>> {
    if payload.room_number.trim().is_empty() {
        return Err(AppError::validation("Room number is required"));
    }
    let record = load(&state, id).await?;
    let (record, effects) = form::assign_room(record, payload.room_number);
    save_and_execute(&state, record, effects).await
}

async fn load(state: &ServerState, id: i64) -> AppResult<GuestOnboarding> {
    guest_onboarding::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Guest onboarding {}", id)))
}

/// 统一的保存 + 副作用执行路径
async fn save_and_execute(
    state: &ServerState,
    record: GuestOnboarding,
    effects: Vec<SideEffect>,
) -> AppResult<Json<GuestResponse>> {
    let mut notices = form::validate(&record)?;
    let guest = guest_onboarding::save_form_state(&state.pool, &record).await?;

    for effect in effects {
        match effect {
            SideEffect::SyncRoom { room_number, sync } => {
                // Guest record stays saved even if the room update fails
                match room::sync_occupancy(&state.pool, &room_number, &sync).await {
                    Ok(_) => {
                        info!(target: "api", "Room {} occupancy updated for guest {}", room_number, guest.id);
                        notices.push(FormNotice {
                            message: format!("Room {} updated successfully", room_number),
                        });
                    }
                    Err(e) => {
                        warn!(target: "api", "Room {} update failed: {}", room_number, e);
                        return Err(AppError::business_rule(format!(
                            "Failed to update room {}: {}",
                            room_number, e
                        )));
                    }
                }
            }
        }
    }

    Ok(Json(GuestResponse { guest, notices }))
}

fn prospective_record(payload: &GuestOnboardingCreate) -> GuestOnboarding {
    GuestOnboarding {
        id: 0,
        guest: payload.guest.clone(),
        customer_id: payload.customer_id,
        from_date: payload.from_date.clone(),
        to_date: payload.to_date.clone(),
        no_of_guests: payload.no_of_guests.unwrap_or(1),
        nationality: payload.nationality.clone(),
        id_proof_type: payload.id_proof_type.clone(),
        id_proof_number: payload.id_proof_number.clone(),
        passport_number: payload.passport_number.clone(),
        visa_number: payload.visa_number.clone(),
        room_number: None,
        rfid_card_code: payload.rfid_card_code.clone(),
        check_in_time: None,
        check_out_time: None,
        status: shared::models::GUEST_STATUS_PENDING.to_string(),
        created_at: 0,
        updated_at: 0,
    }
}
