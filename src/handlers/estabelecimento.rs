// src/handlers/estabelecimento.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::{error::AppError, response::sucesso},
    config::AppState,
};

// GET /api/v1/external/public/estabelecimento
#[utoipa::path(
    get,
    path = "/api/v1/external/public/estabelecimento",
    tag = "Estabelecimento",
    responses(
        (status = 200, description = "Ficha completa: dados principais, horários, feriados, história, equipe, certificações, FAQ e acessibilidade", body = crate::models::estabelecimento::EstabelecimentoCompleto),
        (status = 404, description = "Estabelecimento não cadastrado")
    )
)]
pub async fn get_estabelecimento(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let ficha = app_state.estabelecimento_service.obter().await?;

    Ok((StatusCode::OK, sucesso(ficha)))
}
