use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{DonationTools, ToolError, ToolOutcome};
use crate::models::{
    DashboardQuery, DistanceRequest, DistanceResponse, ErrorResponse, FindDonorsRequest,
    HealthResponse, ReportFormat,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub tools: DonationTools,
    pub top_n: usize,
}

/// Configure all tool routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/tools/inventory", web::get().to(check_inventory))
        .route("/tools/matches", web::post().to(find_donors))
        .route("/tools/distance", web::post().to(calculate_distance))
        .route("/dashboard", web::get().to(dashboard));
}

/// HTTP status carried alongside a tool error value
pub fn error_status(err: &ToolError) -> StatusCode {
    match err {
        ToolError::RecipientNotFound(_) | ToolError::HospitalNotFound(_) => StatusCode::NOT_FOUND,
        ToolError::InvalidInput(_) | ToolError::InvalidLocation(_) => StatusCode::BAD_REQUEST,
        ToolError::DatasetUnreadable(_) | ToolError::DatasetMalformed(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn outcome_response<T: serde::Serialize>(outcome: &ToolOutcome<T>) -> HttpResponse {
    let status = outcome.error().map(error_status).unwrap_or(StatusCode::OK);
    HttpResponse::build(status).json(outcome)
}

fn blocking_failed(e: actix_web::error::BlockingError) -> HttpResponse {
    tracing::error!("Tool call did not complete: {}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Tool call failed".to_string(),
        message: e.to_string(),
        status_code: 500,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Inventory audit endpoint
///
/// GET /api/v1/tools/inventory
async fn check_inventory(state: web::Data<AppState>) -> impl Responder {
    let tools = state.tools.clone();

    match web::block(move || tools.audit_inventory()).await {
        Ok(outcome) => outcome_response(&outcome),
        Err(e) => blocking_failed(e),
    }
}

/// Find compatible donors endpoint
///
/// POST /api/v1/tools/matches
///
/// Request body:
/// ```json
/// { "recipientId": "R001" }
/// ```
async fn find_donors(
    state: web::Data<AppState>,
    req: web::Json<FindDonorsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_donors request: {:?}", errors);
        let outcome: ToolOutcome<()> = ToolOutcome::Error(ToolError::InvalidInput(errors.to_string()));
        return outcome_response(&outcome);
    }

    let tools = state.tools.clone();
    let recipient_id = req.into_inner().recipient_id;

    match web::block(move || tools.match_donors(&recipient_id)).await {
        Ok(outcome) => outcome_response(&outcome),
        Err(e) => blocking_failed(e),
    }
}

/// Distance endpoint
///
/// POST /api/v1/tools/distance
///
/// Request body:
/// ```json
/// { "loc1": {"lat": 34.05, "lon": -118.24}, "loc2": {"lat": 36.17, "lon": -115.14} }
/// ```
async fn calculate_distance(
    state: web::Data<AppState>,
    req: web::Json<DistanceRequest>,
) -> impl Responder {
    match state.tools.distance(&req.loc1, &req.loc2) {
        Ok(distance_km) => HttpResponse::Ok().json(DistanceResponse { distance_km }),
        Err(e) => HttpResponse::build(error_status(&e)).json(e),
    }
}

/// Dashboard report endpoint
///
/// GET /api/v1/dashboard?format=json|markdown&topN=3
async fn dashboard(
    state: web::Data<AppState>,
    query: web::Query<DashboardQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let tools = state.tools.clone();
    let top_n = query.top_n.unwrap_or(state.top_n);

    let report = match web::block(move || tools.dashboard_report(top_n)).await {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => return HttpResponse::build(error_status(&e)).json(e),
        Err(e) => return blocking_failed(e),
    };

    tracing::info!(
        "Returning dashboard report {} ({} alerts)",
        report.report_id,
        report.alerts.len()
    );

    match query.format {
        ReportFormat::Json => HttpResponse::Ok().json(report),
        ReportFormat::Markdown => HttpResponse::Ok()
            .content_type("text/markdown; charset=utf-8")
            .body(report.to_markdown()),
    }
}
