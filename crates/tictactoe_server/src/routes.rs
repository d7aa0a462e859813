//! HTTP routes for the shared board.

use crate::error::ApiError;
use crate::service::GameService;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Request, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::GameState;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, info, instrument};

/// Body of `POST /move`.
///
/// Any JSON integer is accepted; values beyond `i64` saturate so the
/// engine still reports them as out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Row, 0 at the top.
    #[serde(deserialize_with = "saturating_coord")]
    pub row: i64,
    /// Column, 0 on the left.
    #[serde(deserialize_with = "saturating_coord")]
    pub col: i64,
}

fn saturating_coord<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CoordVisitor)
}

struct CoordVisitor;

impl Visitor<'_> for CoordVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        Ok(i64::try_from(v).unwrap_or(i64::MAX))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<i64, E> {
        Ok(v.clamp(i64::MIN.into(), i64::MAX.into()) as i64)
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<i64, E> {
        Ok(i64::try_from(v).unwrap_or(i64::MAX))
    }

    // serde_json hands integers wider than u64 over as floats.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        if v.fract() != 0.0 || v.is_nan() {
            return Err(E::invalid_type(de::Unexpected::Float(v), &self));
        }
        Ok(v as i64)
    }
}

/// Builds the application router.
///
/// `GET /` and `/static/*` are served from `static_dir`; everything else is
/// the JSON API backed by `service`.
#[instrument(skip_all, fields(static_dir = %static_dir.as_ref().display()))]
pub fn router(service: GameService, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    debug!("Building router");

    Router::new()
        .route("/state", get(get_state))
        .route("/state/peek", get(peek_state))
        .route("/move", post(make_move))
        .route("/reset", post(reset_game))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::very_permissive())
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(service)
}

fn log_request(req: Request) -> Request {
    info!(
        method = %req.method(),
        uri = %req.uri(),
        "Incoming HTTP request"
    );
    req
}

/// Starts a new game and returns it.
///
/// Reading the state through this route always resets the board; clients
/// call it on page load. Use `/state/peek` to look without resetting.
#[instrument(skip(service))]
async fn get_state(State(service): State<GameService>) -> Json<GameState> {
    Json(service.fresh_state().await)
}

#[instrument(skip(service))]
async fn peek_state(State(service): State<GameService>) -> Json<GameState> {
    Json(service.peek().await)
}

#[instrument(skip(service, payload))]
async fn make_move(
    State(service): State<GameService>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameState>, ApiError> {
    let Json(req) = payload?;
    let state = service.apply_move(req.row, req.col).await?;
    Ok(Json(state))
}

#[instrument(skip(service))]
async fn reset_game(State(service): State<GameService>) -> Json<GameState> {
    Json(service.reset().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> MoveRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_coordinates_saturate() {
        assert_eq!(parse(r#"{"row": 1, "col": 2}"#), MoveRequest { row: 1, col: 2 });
        assert_eq!(parse(r#"{"row": 18446744073709551615, "col": 0}"#).row, i64::MAX);
        assert_eq!(parse(r#"{"row": 0, "col": -1e30}"#).col, i64::MIN);
    }

    #[test]
    fn test_non_integer_coordinates_fail() {
        assert!(serde_json::from_str::<MoveRequest>(r#"{"row": 0.5, "col": 0}"#).is_err());
        assert!(serde_json::from_str::<MoveRequest>(r#"{"row": "1", "col": 0}"#).is_err());
    }
}
