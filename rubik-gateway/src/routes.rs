//! Axum route handlers for the solve API.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use rubik_core::ColourMap;
use rubik_solver::{SolvePipeline, SolveReport};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Pipeline = Arc<SolvePipeline>;

// ── Request / response types ──────────────────────────────────────────────────

/// Body of `POST /solve`. Both fields are optional and the body itself may
/// be empty.
#[derive(Debug, Default, Deserialize)]
pub struct SolveBody {
    /// Scramble in standard notation; blank means "generate one".
    #[serde(default)]
    pub scramble: Option<String>,
    /// A cube given directly as sticker colours, instead of a scramble.
    #[serde(default)]
    pub state: Option<ColourMap>,
}

/// Result returned by `POST /solve`.
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub scramble: String,
    pub solution: String,
    pub pre_state: ColourMap,
    pub post_state: ColourMap,
    pub solved: bool,
    pub solve_time_ms: u128,
}

impl From<SolveReport> for SolveResponse {
    fn from(report: SolveReport) -> Self {
        Self {
            scramble: report.scramble.to_string(),
            solution: report.solution.to_string(),
            pre_state: report.pre_state,
            post_state: report.post_state,
            solved: report.solved,
            solve_time_ms: report.solve_time.as_millis(),
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around the given pipeline.
pub fn create_router(pipeline: Pipeline) -> Router {
    Router::new()
        .route("/solve", post(solve))
        .route("/health", get(health))
        .route("/health/solver", get(solver_health))
        .with_state(pipeline)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /health/solver`: readiness of the solver backend.
///
/// # Errors
/// Returns [`GatewayError::SolverUnavailable`] if the backend's health check
/// fails.
pub async fn solver_health(
    State(pipeline): State<Pipeline>,
) -> Result<impl IntoResponse, GatewayError> {
    pipeline
        .backend()
        .health_check()
        .await
        .map_err(GatewayError::SolverUnavailable)?;
    Ok((StatusCode::OK, Json(serde_json::json!({"status": "ok"}))))
}

/// `POST /solve`: scramble (or take) a cube, solve it and verify the answer.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] for an unreadable body or when
/// both `scramble` and `state` are given, a 400 [`GatewayError::Solve`] for
/// malformed scrambles or unrecognised colours, and a 500
/// [`GatewayError::Solve`] when the solver fails.
pub async fn solve(
    State(pipeline): State<Pipeline>,
    body: Bytes,
) -> Result<Json<SolveResponse>, GatewayError> {
    let body = parse_solve_body(&body)?;
    let scramble = body.scramble.as_deref().filter(|s| !s.trim().is_empty());

    let report = match (scramble, body.state) {
        (Some(_), Some(_)) => {
            return Err(GatewayError::InvalidRequest(
                "supply either 'scramble' or 'state', not both".to_owned(),
            ))
        }
        (None, Some(state)) => pipeline.solve_state(&state).await?,
        (scramble, None) => pipeline.solve_scramble(scramble).await?,
    };

    Ok(Json(report.into()))
}

/// Decode the `/solve` body. An empty body or JSON `null` is the same as `{}`.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the body is not a valid
/// [`SolveBody`].
pub fn parse_solve_body(bytes: &[u8]) -> Result<SolveBody, GatewayError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(SolveBody::default());
    }
    let body: Option<SolveBody> = serde_json::from_slice(bytes)
        .map_err(|e| GatewayError::InvalidRequest(format!("malformed JSON body: {e}")))?;
    Ok(body.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use rubik_core::{FaceletString, MoveSequence};
    use rubik_solver::{SolverBackend, SolverError};
    use tower::ServiceExt;

    /// Answers every solve with the same notation.
    struct FixedBackend(&'static str);

    #[async_trait]
    impl SolverBackend for FixedBackend {
        async fn solve(&self, _facelets: &FaceletString) -> Result<MoveSequence, SolverError> {
            self.0.parse().map_err(|source| SolverError::InvalidOutput {
                output: self.0.to_owned(),
                source,
            })
        }

        async fn health_check(&self) -> Result<(), SolverError> {
            Ok(())
        }
    }

    struct AlwaysFailBackend;

    #[async_trait]
    impl SolverBackend for AlwaysFailBackend {
        async fn solve(&self, _facelets: &FaceletString) -> Result<MoveSequence, SolverError> {
            Err(SolverError::Rejected(
                "Error 1: There is not exactly one facelet of each colour".to_owned(),
            ))
        }

        async fn health_check(&self) -> Result<(), SolverError> {
            Err(SolverError::SpawnFailed("mock".to_owned()))
        }
    }

    fn router(backend: impl SolverBackend + 'static) -> Router {
        create_router(Arc::new(SolvePipeline::new(backend)))
    }

    fn post_solve(body: &str) -> Request<Body> {
        match Request::builder()
            .method("POST")
            .uri("/solve")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
        {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        }
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        let status = resp.status();
        let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        let body = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        };
        (status, body)
    }

    #[tokio::test]
    async fn health_response_format_returns_ok_with_status_field() {
        let app = router(FixedBackend(""));
        let req = match Request::builder().uri("/health").body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn solver_health_reports_backend_failure() {
        let app = router(AlwaysFailBackend);
        let req = match Request::builder().uri("/health/solver").body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["error"].as_str().is_some_and(|e| e.starts_with("solver unavailable")));
    }

    #[tokio::test]
    async fn solve_with_scramble_returns_full_report() {
        let app = router(FixedBackend("U R U' R'"));
        let (status, body) = send(app, post_solve(r#"{"scramble": "R U R' U'"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scramble"], "R U R' U'");
        assert_eq!(body["solution"], "U R U' R'");
        assert_eq!(body["solved"], true);
        assert_eq!(body["post_state"]["F"][0], "green");
        assert_eq!(body["pre_state"]["U"].as_array().map(Vec::len), Some(9));
        assert!(body["solve_time_ms"].is_u64());
    }

    #[tokio::test]
    async fn solve_with_empty_body_generates_scramble() {
        let app = router(FixedBackend(""));
        let req = match Request::builder().method("POST").uri("/solve").body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::OK);
        let scramble = body["scramble"].as_str().unwrap_or_default();
        assert_eq!(scramble.split_whitespace().count(), 25);
        assert_eq!(body["solution"], "");
    }

    #[tokio::test]
    async fn solve_with_blank_scramble_generates_scramble() {
        let app = router(FixedBackend(""));
        let (status, body) = send(app, post_solve(r#"{"scramble": "  "}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scramble"].as_str().map(|s| s.split(' ').count()), Some(25));
    }

    #[tokio::test]
    async fn scramble_is_echoed_in_normalised_notation() {
        let app = router(FixedBackend("F2' U R'"));
        let (status, body) = send(app, post_solve(r#"{"scramble": "RU'F2"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scramble"], "R U' F2");
        assert_eq!(body["solution"], "F2 U R'");
        assert_eq!(body["solved"], true);
    }

    #[tokio::test]
    async fn abbreviated_state_labels_report_solved() {
        let app = router(FixedBackend(""));
        let mut state = rubik_core::Cube::solved().colour_map();
        if let Some(stickers) = state.get_mut(&rubik_core::Face::F) {
            stickers[0] = rubik_core::Colour::new("gr");
        }
        if let Some(stickers) = state.get_mut(&rubik_core::Face::R) {
            stickers[4] = rubik_core::Colour::new("");
        }
        let body = serde_json::json!({ "state": state }).to_string();
        let (status, body) = send(app, post_solve(&body)).await;
        assert_eq!(status, StatusCode::OK, "body: {body}");
        assert_eq!(body["scramble"], "");
        assert_eq!(body["solved"], true);
        assert_eq!(body["post_state"]["F"][0], "gr");
    }

    #[tokio::test]
    async fn malformed_scramble_returns_400() {
        let app = router(FixedBackend(""));
        let (status, body) = send(app, post_solve(r#"{"scramble": "R U X"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some_and(|e| e.starts_with("invalid scramble")));
    }

    #[tokio::test]
    async fn unrecognized_colour_returns_400() {
        let app = router(FixedBackend(""));
        let mut state = rubik_core::Cube::solved().colour_map();
        if let Some(stickers) = state.get_mut(&rubik_core::Face::D) {
            stickers[3] = rubik_core::Colour::new("purple");
        }
        let body = serde_json::json!({ "state": state }).to_string();
        let (status, body) = send(app, post_solve(&body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["error"].as_str().is_some_and(|e| e.contains("purple")),
            "error must name the colour: {body}"
        );
    }

    #[tokio::test]
    async fn solve_with_state_skips_scramble() {
        let app = router(FixedBackend("R'"));
        let mut cube = rubik_core::Cube::solved();
        cube.apply(rubik_core::Move::new(rubik_core::Face::R, rubik_core::Turn::Clockwise));
        let body = serde_json::json!({ "state": cube.colour_map() }).to_string();
        let (status, body) = send(app, post_solve(&body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scramble"], "");
        assert_eq!(body["solved"], true);
    }

    #[tokio::test]
    async fn scramble_and_state_together_returns_400() {
        let app = router(FixedBackend(""));
        let state = rubik_core::Cube::solved().colour_map();
        let body = serde_json::json!({ "scramble": "R", "state": state }).to_string();
        let (status, _) = send(app, post_solve(&body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn solver_failure_returns_500() {
        let app = router(AlwaysFailBackend);
        let (status, body) = send(app, post_solve(r#"{"scramble": "F2"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().is_some_and(|e| e.starts_with("solver error")));
    }

    #[tokio::test]
    async fn malformed_json_returns_400() {
        let app = router(FixedBackend(""));
        let (status, _) = send(app, post_solve("{\"scramble\": ")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn cors_allows_browser_origin() {
        let app = router(FixedBackend(""));
        let req = match Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
        {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[test]
    fn parse_solve_body_accepts_empty_and_null() {
        for raw in ["", "  \n", "null", "{}"] {
            match parse_solve_body(raw.as_bytes()) {
                Ok(body) => {
                    assert!(body.scramble.is_none() && body.state.is_none(), "{raw:?}");
                }
                Err(e) => panic!("{raw:?} rejected: {e}"),
            }
        }
    }

    #[test]
    fn solve_response_serializes_states_in_face_order() {
        let cube = rubik_core::Cube::solved();
        let response = SolveResponse {
            scramble: String::new(),
            solution: String::new(),
            pre_state: cube.colour_map(),
            post_state: cube.colour_map(),
            solved: true,
            solve_time_ms: 7,
        };
        let json = match serde_json::to_string(&response) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        let positions: Vec<usize> = ["\"U\"", "\"R\"", "\"F\"", "\"D\"", "\"L\"", "\"B\""]
            .iter()
            .filter_map(|key| json.find(key))
            .collect();
        assert_eq!(positions.len(), 6, "every face key must appear");
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "faces out of order in {json}");
        assert!(json.contains("\"solve_time_ms\":7"), "missing solve_time_ms field");
    }
}
