use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    common::{row_id, IdResponse},
    db::is_foreign_key_violation,
    error::{AppError, AppResult},
    state::AppState,
    users::{
        dto::{CreateUserRequest, PublicUser, UserPatch},
        password::hash_password_blocking,
        repo_types::{User, UserChanges},
    },
};

const RESOURCE: &str = "user";

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", post(create_user))
        .route(
            "/users/:id",
            get(get_user).patch(patch_user).delete(delete_user),
        )
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PublicUser>> {
    let id = row_id(RESOURCE, id)?;
    let mut tx = state.db.begin().await?;
    let user = User::find(&mut tx, id)
        .await?
        .ok_or(AppError::NotFound(RESOURCE))?;
    tx.commit().await?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<Json<IdResponse>> {
    let name = payload.validate()?;
    let hash = hash_password_blocking(payload.password).await?;

    let mut tx = state.db.begin().await?;
    let user = match User::create(&mut tx, &name, &hash).await {
        Ok(u) => u,
        Err(e) => {
            let err = AppError::from_write(e, RESOURCE);
            if matches!(err, AppError::Conflict(_)) {
                warn!(%name, "user already exists");
            }
            return Err(err);
        }
    };
    tx.commit().await?;

    info!(user_id = user.id, "user created");
    Ok(Json(IdResponse { id: user.id }))
}

#[instrument(skip(state, payload))]
pub async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut payload): Json<UserPatch>,
) -> AppResult<Json<IdResponse>> {
    let id = row_id(RESOURCE, id)?;
    payload.validate()?;
    let changes = UserChanges {
        name: payload.name,
        password: match payload.password {
            Some(plain) => Some(hash_password_blocking(plain).await?),
            None => None,
        },
    };

    let mut tx = state.db.begin().await?;
    let mut user = User::find_for_update(&mut tx, id)
        .await?
        .ok_or(AppError::NotFound(RESOURCE))?;
    changes.apply_to(&mut user);
    user.save(&mut tx)
        .await
        .map_err(|e| AppError::from_write(e, RESOURCE))?;
    tx.commit().await?;

    info!(user_id = user.id, "user updated");
    Ok(Json(IdResponse { id: user.id }))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<IdResponse>> {
    let id = row_id(RESOURCE, id)?;
    let mut tx = state.db.begin().await?;
    let user = User::find_for_update(&mut tx, id)
        .await?
        .ok_or(AppError::NotFound(RESOURCE))?;
    user.delete(&mut tx).await.map_err(|e| {
        if is_foreign_key_violation(&e) {
            warn!(user_id = id, "user still owns ads");
            AppError::Conflict("user has ads".into())
        } else {
            AppError::Db(e)
        }
    })?;
    tx.commit().await?;

    info!(user_id = user.id, "user deleted");
    Ok(Json(IdResponse { id: user.id }))
}
