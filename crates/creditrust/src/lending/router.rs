use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::engine::features::FeatureInput;
use crate::engine::risk::RiskFactorInput;

use super::domain::UserAddress;
use super::repository::{ApplicationLog, ProfileRepository, RepaymentLedger};
use super::service::{LendingService, LendingServiceError};

/// Router exposing the lending API. Field names match the original wire
/// format consumed by existing clients.
pub fn lending_router<P, A, L>(service: Arc<LendingService<P, A, L>>) -> Router
where
    P: ProfileRepository + 'static,
    A: ApplicationLog + 'static,
    L: RepaymentLedger + 'static,
{
    Router::new()
        .route("/api/user/profile", get(profile_handler::<P, A, L>))
        .route("/api/credit/score", post(score_handler::<P, A, L>))
        .route("/api/credit/apply", post(apply_handler::<P, A, L>))
        .route(
            "/api/repayment/schedule",
            post(schedule_handler::<P, A, L>),
        )
        .route(
            "/api/repayment/status",
            get(repayment_status_handler::<P, A, L>),
        )
        .route("/api/risk/analysis", post(risk_handler::<P, A, L>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddressQuery {
    pub(crate) address: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) address: String,
    #[serde(flatten)]
    pub(crate) features: FeatureInput,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplyRequest {
    pub(crate) address: String,
    pub(crate) requested_amount: f64,
}

fn default_term_months() -> u32 {
    12
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScheduleRequest {
    pub(crate) address: String,
    pub(crate) loan_amount: f64,
    #[serde(default = "default_term_months")]
    pub(crate) term_months: u32,
    #[serde(default)]
    pub(crate) start_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepaymentStatusQuery {
    pub(crate) address: String,
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

fn error_response(error: LendingServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (error.status_code(), axum::Json(payload)).into_response()
}

pub(crate) async fn profile_handler<P, A, L>(
    State(service): State<Arc<LendingService<P, A, L>>>,
    Query(query): Query<AddressQuery>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationLog + 'static,
    L: RepaymentLedger + 'static,
{
    let address = UserAddress(query.address);
    match service.profile(&address) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler<P, A, L>(
    State(service): State<Arc<LendingService<P, A, L>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationLog + 'static,
    L: RepaymentLedger + 'static,
{
    let address = UserAddress(request.address);
    match service.score(&address, request.features) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn apply_handler<P, A, L>(
    State(service): State<Arc<LendingService<P, A, L>>>,
    axum::Json(request): axum::Json<ApplyRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationLog + 'static,
    L: RepaymentLedger + 'static,
{
    let address = UserAddress(request.address);
    match service.apply(&address, request.requested_amount) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn schedule_handler<P, A, L>(
    State(service): State<Arc<LendingService<P, A, L>>>,
    axum::Json(request): axum::Json<ScheduleRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationLog + 'static,
    L: RepaymentLedger + 'static,
{
    let address = UserAddress(request.address);
    let start_date = request
        .start_date
        .unwrap_or_else(|| Utc::now().date_naive());
    match service.schedule(&address, request.loan_amount, request.term_months, start_date) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn repayment_status_handler<P, A, L>(
    State(service): State<Arc<LendingService<P, A, L>>>,
    Query(query): Query<RepaymentStatusQuery>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationLog + 'static,
    L: RepaymentLedger + 'static,
{
    let address = UserAddress(query.address);
    let today = query.today.unwrap_or_else(|| Utc::now().date_naive());
    match service.repayment_status(&address, today) {
        Ok(overview) => (StatusCode::OK, axum::Json(overview)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn risk_handler<P, A, L>(
    State(service): State<Arc<LendingService<P, A, L>>>,
    axum::Json(input): axum::Json<RiskFactorInput>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationLog + 'static,
    L: RepaymentLedger + 'static,
{
    let assessment = service.risk(input);
    (StatusCode::OK, axum::Json(assessment)).into_response()
}
