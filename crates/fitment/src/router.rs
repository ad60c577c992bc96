use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use crate::error::{AppError, InputError};
use crate::geometry::{DisplayProfile, GlassGeometry, ScreenGeometry, UniversalRule};
use crate::matcher::{Clock, CompatibilityEngine, MatchResult};
use crate::shortlist::{shortlist, GlassCandidate, Shortlist};

#[derive(Debug, Deserialize)]
pub struct GlassMatchRequest {
    pub screen: ScreenGeometry,
    pub glass: GlassGeometry,
    #[serde(default)]
    pub rule: Option<UniversalRule>,
}

#[derive(Debug, Deserialize)]
pub struct DisplayMatchRequest {
    pub target: DisplayProfile,
    pub donor: DisplayProfile,
}

#[derive(Debug, Deserialize)]
pub struct ShortlistRequest {
    pub screen: ScreenGeometry,
    #[serde(default)]
    pub candidates: Vec<GlassCandidate>,
}

/// Router builder exposing the engine's call contracts over HTTP.
pub fn compatibility_router<C>(engine: Arc<CompatibilityEngine<C>>) -> Router
where
    C: Clock + 'static,
{
    Router::new()
        .route("/api/v1/compatibility/glass", post(glass_handler::<C>))
        .route("/api/v1/compatibility/display", post(display_handler::<C>))
        .route(
            "/api/v1/compatibility/shortlist",
            post(shortlist_handler::<C>),
        )
        .with_state(engine)
}

pub(crate) async fn glass_handler<C>(
    State(engine): State<Arc<CompatibilityEngine<C>>>,
    payload: Result<Json<GlassMatchRequest>, JsonRejection>,
) -> Result<Json<MatchResult>, AppError>
where
    C: Clock + 'static,
{
    let Json(request) = payload.map_err(InputError::from)?;
    Ok(Json(engine.match_glass(&request.screen, &request.glass, request.rule.as_ref())))
}

pub(crate) async fn display_handler<C>(
    State(engine): State<Arc<CompatibilityEngine<C>>>,
    payload: Result<Json<DisplayMatchRequest>, JsonRejection>,
) -> Result<Json<MatchResult>, AppError>
where
    C: Clock + 'static,
{
    let Json(request) = payload.map_err(InputError::from)?;
    Ok(Json(engine.match_display(&request.target, &request.donor)))
}

pub(crate) async fn shortlist_handler<C>(
    State(engine): State<Arc<CompatibilityEngine<C>>>,
    payload: Result<Json<ShortlistRequest>, JsonRejection>,
) -> Result<Json<Shortlist>, AppError>
where
    C: Clock + 'static,
{
    let Json(request) = payload.map_err(InputError::from)?;
    Ok(Json(shortlist(&engine, &request.screen, request.candidates)))
}
