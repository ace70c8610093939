// Route table for the dashboard views
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    fault_diagnosis, fault_diagnosis_secondary, health_check, motor_detail, not_found, overview,
    rms_kurtosis, temperature_trends, vibration_fft,
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Compression is applied per response in http_response, so no CompressionLayer here
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(overview))
        .route("/motor/:id", get(motor_detail))
        .route("/vibration-fft", get(vibration_fft))
        .route("/fault-diagnosis", get(fault_diagnosis))
        .route("/fault-diagnosis-secondary", get(fault_diagnosis_secondary))
        .route("/temperature-trends", get(temperature_trends))
        .route("/rms-kurtosis", get(rms_kurtosis))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
