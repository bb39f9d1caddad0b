// src/handlers/categoria.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::{error::AppError, response::sucesso},
    config::AppState,
};

// GET /api/v1/external/public/categoria
#[utoipa::path(
    get,
    path = "/api/v1/external/public/categoria",
    tag = "Categoria",
    responses(
        (status = 200, description = "Categorias ativas com a contagem de pastéis", body = Vec<crate::models::categoria::Categoria>)
    )
)]
pub async fn list_categorias(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categorias = app_state.categoria_service.listar().await?;

    Ok((StatusCode::OK, sucesso(categorias)))
}
