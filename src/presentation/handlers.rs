// HTTP request handlers
use crate::domain::navigation::{Axis, Route, RouteError, TimeRange};
use crate::domain::page::{Page, PageStatus};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Longest window a `hours` override may request (90 days)
pub const MAX_WINDOW_HOURS: i64 = 2160;

#[derive(Deserialize)]
pub struct AxisQuery {
    pub axis: Option<String>,
}

#[derive(Deserialize)]
pub struct WindowQuery {
    pub range: Option<String>,
    pub hours: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn compress(state: &AppState, headers: &HeaderMap) -> bool {
    state.compress && accepts_brotli(headers)
}

async fn respond<T: Serialize>(status: StatusCode, body: &T, compress: bool) -> Response {
    json_response(status, body, compress)
        .await
        .unwrap_or_else(|status| status.into_response())
}

async fn bad_request(err: RouteError, compress: bool) -> Response {
    tracing::warn!("Rejected view parameters: {}", err);
    let body = ErrorBody { error: err.to_string() };
    respond(StatusCode::BAD_REQUEST, &body, compress).await
}

async fn page_response(page: Page, compress: bool) -> Response {
    let status = match page.status {
        PageStatus::Ok => StatusCode::OK,
        PageStatus::NotFound => StatusCode::NOT_FOUND,
    };
    respond(status, &page, compress).await
}

async fn render(state: &AppState, headers: &HeaderMap, route: Route, hours: Option<usize>) -> Response {
    let compress = compress(state, headers);
    match state.view_service.render_window(route, hours).await {
        Ok(page) => page_response(page, compress).await,
        Err(e) => {
            tracing::error!("Error rendering {}: {:#}", route.path(), e);
            let body = ErrorBody {
                error: "failed to render view".to_string(),
            };
            respond(StatusCode::INTERNAL_SERVER_ERROR, &body, compress).await
        }
    }
}

fn parse_range(raw: Option<&str>) -> Result<TimeRange, RouteError> {
    raw.map_or(Ok(TimeRange::default()), str::parse)
}

/// Parse a raw `hours` override and clamp it into `0..=MAX_WINDOW_HOURS`
fn window_hours(raw: Option<&str>) -> Result<Option<usize>, RouteError> {
    raw.map(|h| {
        h.trim()
            .parse::<i64>()
            .map(|h| h.clamp(0, MAX_WINDOW_HOURS) as usize)
            .map_err(|_| RouteError::InvalidHours(h.to_string()))
    })
    .transpose()
}

/// Apply the query's range selection to a ranged view, plus any hours override
fn windowed(view: Route, query: &WindowQuery) -> Result<(Route, Option<usize>), RouteError> {
    let range = parse_range(query.range.as_deref())?;
    let hours = window_hours(query.hours.as_deref())?;
    Ok((view.with_range(range), hours))
}

async fn render_windowed(
    state: &AppState,
    headers: &HeaderMap,
    view: Route,
    query: &WindowQuery,
) -> Response {
    match windowed(view, query) {
        Ok((route, hours)) => render(state, headers, route, hours).await,
        Err(e) => bad_request(e, compress(state, headers)).await,
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn overview(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    render(&state, &headers, Route::Home, None).await
}

/// Motor detail; a malformed id renders the same not-found page as an unknown one
pub async fn motor_detail(
    Path(segment): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match Route::motor(&segment) {
        Ok(route) => render(&state, &headers, route, None).await,
        Err(e) => {
            tracing::info!("Rendering not-found view: {}", e);
            let page = Page::not_found(format!("/motor/{}", segment), "Motor not found");
            page_response(page, compress(&state, &headers)).await
        }
    }
}

pub async fn vibration_fft(
    Query(query): Query<AxisQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let axis = match query.axis.as_deref().map_or(Ok(Axis::default()), str::parse) {
        Ok(axis) => axis,
        Err(e) => return bad_request(e, compress(&state, &headers)).await,
    };
    let route = Route::VibrationFft { axis: Axis::default() }.with_axis(axis);
    render(&state, &headers, route, None).await
}

pub async fn fault_diagnosis(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    render(&state, &headers, Route::FaultDiagnosis, None).await
}

pub async fn fault_diagnosis_secondary(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    render(&state, &headers, Route::FaultDiagnosisSecondary, None).await
}

pub async fn temperature_trends(
    Query(query): Query<WindowQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let view = Route::TemperatureTrends { range: TimeRange::default() };
    render_windowed(&state, &headers, view, &query).await
}

pub async fn rms_kurtosis(
    Query(query): Query<WindowQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let view = Route::RmsKurtosis { range: TimeRange::default() };
    render_windowed(&state, &headers, view, &query).await
}

/// Any path outside the route table
pub async fn not_found(
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    tracing::info!("No view at {}", uri.path());
    let page = Page::not_found(uri.path().to_string(), "Page not found");
    page_response(page, compress(&state, &headers)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_hours_clamps() {
        assert_eq!(window_hours(None), Ok(None));
        assert_eq!(window_hours(Some("-5")), Ok(Some(0)));
        assert_eq!(window_hours(Some("36")), Ok(Some(36)));
        assert_eq!(window_hours(Some("100000")), Ok(Some(2160)));
    }

    #[test]
    fn test_window_hours_rejects_non_numeric() {
        assert_eq!(window_hours(Some("abc")), Err(RouteError::InvalidHours("abc".to_string())));
        assert!(window_hours(Some("1.5")).is_err());
    }

    #[test]
    fn test_windowed_applies_range_transition() {
        let query = WindowQuery {
            range: Some("24h".to_string()),
            hours: Some("12".to_string()),
        };
        let view = Route::TemperatureTrends { range: TimeRange::default() };
        assert_eq!(
            windowed(view, &query),
            Ok((Route::TemperatureTrends { range: TimeRange::Day }, Some(12)))
        );
    }

    #[test]
    fn test_parse_range_defaults_to_week() {
        assert_eq!(parse_range(None), Ok(TimeRange::Week));
        assert_eq!(parse_range(Some("30d")), Ok(TimeRange::Month));
        assert!(matches!(parse_range(Some("90d")), Err(RouteError::InvalidRange(_))));
    }
}
