use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vinyl_core::Album;

use crate::error::{AppError, Result};
use crate::model::MessageResponse;
use crate::state::AppState;

/// `GET /albums`: the mirror's contents, verbatim.
pub async fn list_albums_handler(State(state): State<AppState>) -> Json<Vec<Album>> {
    Json(state.mirror().snapshot().await)
}

/// `GET /albums/{id}`: linear scan of the mirror.
pub async fn get_album_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Album>> {
    state
        .mirror()
        .find_by_id(&id)
        .await
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// `POST /albums`: write-through create. The mirror is only appended
/// to once the store has accepted the document.
pub async fn create_album_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Album>, JsonRejection>,
) -> Result<(StatusCode, Json<Album>)> {
    let Json(album) = payload?;

    state
        .repository()
        .insert(&album)
        .await
        .map_err(AppError::Insert)?;
    state.mirror().push(album.clone()).await;

    Ok((StatusCode::CREATED, Json(album)))
}

/// `DELETE /albums/{id}`: write-through delete. The mirror entry is
/// only spliced out when the store reports exactly one deletion.
pub async fn delete_album_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let deleted = state
        .repository()
        .delete_by_id(&id)
        .await
        .map_err(AppError::Delete)?;

    if !deleted {
        return Err(AppError::NotFound);
    }

    state.mirror().remove_by_id(&id).await;
    Ok(Json(MessageResponse::new("album deleted")))
}
