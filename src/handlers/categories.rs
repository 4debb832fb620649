use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};

pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.categories().list().await?;
    Ok(Json(rows))
}
