// src/handlers/novo_sabor.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    common::{error::AppError, extractors::ValidatedQuery, response::sucesso},
    config::AppState,
};

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListarNovosSaboresQuery {
    #[validate(range(max = 1, message = "O campo 'apenasDestaqueHome' aceita apenas 0 ou 1."))]
    pub apenas_destaque_home: Option<u8>,
}

// GET /api/v1/external/public/novo-sabor
#[utoipa::path(
    get,
    path = "/api/v1/external/public/novo-sabor",
    tag = "NovoSabor",
    params(ListarNovosSaboresQuery),
    responses(
        (status = 200, description = "Sabores dentro do período de novidade", body = Vec<crate::models::novo_sabor::NovoSabor>),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn list_novos_sabores(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListarNovosSaboresQuery>,
) -> Result<impl IntoResponse, AppError> {
    let sabores = app_state
        .novo_sabor_service
        .listar(query.apenas_destaque_home == Some(1))
        .await?;

    Ok((StatusCode::OK, sucesso(sabores)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn extrair(uri: &str) -> Result<ListarNovosSaboresQuery, String> {
        let uri: Uri = uri.parse().unwrap();
        let Query(query) =
            Query::<ListarNovosSaboresQuery>::try_from_uri(&uri).map_err(|e| e.to_string())?;
        query.validate().map_err(|e| e.to_string())?;
        Ok(query)
    }

    #[test]
    fn flag_aceita_somente_0_ou_1() {
        assert!(extrair("/novo-sabor?apenasDestaqueHome=0").is_ok());
        assert!(extrair("/novo-sabor?apenasDestaqueHome=1").is_ok());
        assert!(extrair("/novo-sabor?apenasDestaqueHome=2").is_err());
        assert!(extrair("/novo-sabor?apenasDestaqueHome=sim").is_err());
    }
}
