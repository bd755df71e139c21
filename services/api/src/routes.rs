use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use creditrust::lending::{
    lending_router, ApplicationLog, LendingService, ProfileRepository, RepaymentLedger,
};

pub(crate) fn with_lending_routes<P, A, L>(service: Arc<LendingService<P, A, L>>) -> axum::Router
where
    P: ProfileRepository + 'static,
    A: ApplicationLog + 'static,
    L: RepaymentLedger + 'static,
{
    lending_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{
        InMemoryApplicationLog, InMemoryProfileRepository, InMemoryRepaymentLedger,
    };
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use creditrust::engine::risk::RiskAnalyzer;
    use creditrust::engine::scoring::ScoringModel;
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn router() -> axum::Router {
        let service = Arc::new(LendingService::new(
            Arc::new(InMemoryProfileRepository::default()),
            Arc::new(InMemoryApplicationLog::default()),
            Arc::new(InMemoryRepaymentLedger::default()),
            ScoringModel::standard(),
            RiskAnalyzer::default(),
        ));
        with_lending_routes(service)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn healthcheck_reports_healthy() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn profile_endpoint_creates_on_first_read() {
        let app = router();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/user/profile?address=0xdemo")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["credit_score"], 600);
        assert_eq!(body["income"], 50_000.0);
    }

    #[tokio::test]
    async fn score_endpoint_returns_wire_fields() {
        let app = router();
        let request = Request::builder()
            .method("POST")
            .uri("/api/credit/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "address": "0xdemo",
                    "income": 4000.0,
                    "employment_years": 3.0,
                    "debt_to_income": 0.4,
                    "payment_history_score": 80.0,
                    "credit_utilization": 0.2,
                    "account_age": 4.0
                })
                .to_string(),
            ))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["credit_score"], 634);
        assert_eq!(body["apr"], 16.0);
        assert_eq!(body["risk_level"], "HIGH");
        assert_eq!(body["features_used"]["income"], 4000.0);
    }

    #[tokio::test]
    async fn apply_endpoint_requires_a_profile() {
        let app = router();
        let request = Request::builder()
            .method("POST")
            .uri("/api/credit/apply")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "address": "0xunknown", "requested_amount": 1000.0 }).to_string(),
            ))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "user profile not found");
    }

    #[tokio::test]
    async fn schedule_endpoint_rejects_invalid_input() {
        let app = router();

        // Seed the profile first so validation is what fails.
        let seeded = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/user/profile?address=0xdemo")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(seeded.status(), StatusCode::OK);

        let request = Request::builder()
            .method("POST")
            .uri("/api/repayment/schedule")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "address": "0xdemo",
                    "loan_amount": -200.0,
                    "term_months": 12,
                    "start_date": "2024-01-01"
                })
                .to_string(),
            ))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn risk_endpoint_returns_the_rubric_outcome() {
        let app = router();
        let request = Request::builder()
            .method("POST")
            .uri("/api/risk/analysis")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "credit_score": 500,
                    "debt_to_income": 0.5,
                    "employment_years": 0.5,
                    "income": 20000.0,
                    "collateral_ratio": 1.0
                })
                .to_string(),
            ))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["risk_score"], 125);
        assert_eq!(body["risk_level"], "VERY_HIGH");
        assert_eq!(
            body["recommendation"],
            "Decline or require additional collateral"
        );
        assert_eq!(body["risk_factors"].as_array().expect("array").len(), 5);
    }
}
