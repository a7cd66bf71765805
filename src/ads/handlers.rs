use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    ads::{
        dto::{AdPatch, CreateAdRequest, CreatedAd, PublicAd},
        repo_types::Ad,
    },
    common::{row_id, IdResponse},
    error::{AppError, AppResult},
    state::AppState,
};

const RESOURCE: &str = "ad";

pub fn ad_routes() -> Router<AppState> {
    Router::new()
        .route("/ads/", post(create_ad))
        .route("/ads/:id", get(get_ad).patch(patch_ad).delete(delete_ad))
}

fn write_failed(e: sqlx::Error) -> AppError {
    let err = AppError::from_write(e, RESOURCE);
    match &err {
        AppError::Conflict(_) => warn!("ad title already exists"),
        AppError::UnknownOwner => warn!("ad owner does not exist"),
        _ => {}
    }
    err
}

#[instrument(skip(state))]
pub async fn get_ad(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PublicAd>> {
    let id = row_id(RESOURCE, id)?;
    let mut tx = state.db.begin().await?;
    let ad = Ad::find(&mut tx, id)
        .await?
        .ok_or(AppError::NotFound(RESOURCE))?;
    tx.commit().await?;
    Ok(Json(ad.into()))
}

#[instrument(skip(state, payload))]
pub async fn create_ad(
    State(state): State<AppState>,
    Json(payload): Json<CreateAdRequest>,
) -> AppResult<Json<CreatedAd>> {
    let new_ad = payload.validate()?;

    let mut tx = state.db.begin().await?;
    let ad = Ad::create(&mut tx, &new_ad.title, &new_ad.description, new_ad.user_id)
        .await
        .map_err(write_failed)?;
    tx.commit().await?;

    info!(ad_id = ad.id, user_id = ad.user_id, "ad created");
    Ok(Json(CreatedAd { id: ad.id, ad: ad.id }))
}

#[instrument(skip(state, payload))]
pub async fn patch_ad(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut payload): Json<AdPatch>,
) -> AppResult<Json<IdResponse>> {
    let id = row_id(RESOURCE, id)?;
    payload.validate()?;

    let mut tx = state.db.begin().await?;
    let mut ad = Ad::find_for_update(&mut tx, id)
        .await?
        .ok_or(AppError::NotFound(RESOURCE))?;
    payload.apply_to(&mut ad);
    ad.save(&mut tx).await.map_err(write_failed)?;
    tx.commit().await?;

    info!(ad_id = ad.id, "ad updated");
    Ok(Json(IdResponse { id: ad.id }))
}

#[instrument(skip(state))]
pub async fn delete_ad(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<IdResponse>> {
    let id = row_id(RESOURCE, id)?;
    let mut tx = state.db.begin().await?;
    let ad = Ad::find_for_update(&mut tx, id)
        .await?
        .ok_or(AppError::NotFound(RESOURCE))?;
    ad.delete(&mut tx).await?;
    tx.commit().await?;

    info!(ad_id = ad.id, "ad deleted");
    Ok(Json(IdResponse { id: ad.id }))
}
