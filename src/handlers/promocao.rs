// src/handlers/promocao.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        extractors::{IdPath, ValidatedQuery},
        response::sucesso,
    },
    config::AppState,
    models::promocao::{CategoriaPromocao, PromocaoListParams, StatusPromocao},
};

// ---
// Query: ListarPromocoesQuery
// ---
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListarPromocoesQuery {
    pub status: Option<StatusPromocao>,

    pub categoria: Option<CategoriaPromocao>,

    pub data_inicio: Option<NaiveDate>,

    pub data_fim: Option<NaiveDate>,

    #[validate(range(max = 1, message = "O campo 'apenasDestaque' aceita apenas 0 ou 1."))]
    pub apenas_destaque: Option<u8>,
}

// Diferente do cardápio, o default aqui é mostrar tudo: o destaque só
// filtra quando o cliente manda `apenasDestaque=1`.
fn montar_params(query: ListarPromocoesQuery) -> PromocaoListParams {
    PromocaoListParams {
        status: query.status,
        categoria: query.categoria,
        data_inicio: query.data_inicio,
        data_fim: query.data_fim,
        apenas_destaque: query.apenas_destaque == Some(1),
    }
}

// GET /api/v1/external/public/promocao
#[utoipa::path(
    get,
    path = "/api/v1/external/public/promocao",
    tag = "Promocao",
    params(ListarPromocoesQuery),
    responses(
        (status = 200, description = "Promoções filtradas", body = Vec<crate::models::promocao::Promocao>),
        (status = 400, description = "Parâmetros de filtro inválidos")
    )
)]
pub async fn list_promocoes(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListarPromocoesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let promocoes = app_state
        .promocao_service
        .listar(montar_params(query))
        .await?;

    Ok((StatusCode::OK, sucesso(promocoes)))
}

// GET /api/v1/external/public/promocao/{id}
#[utoipa::path(
    get,
    path = "/api/v1/external/public/promocao/{id}",
    tag = "Promocao",
    params(("id" = i32, Path, description = "Identificador da promoção")),
    responses(
        (status = 200, description = "Detalhe da promoção", body = crate::models::promocao::PromocaoDetalhe),
        (status = 400, description = "Identificador inválido"),
        (status = 404, description = "Promoção não encontrada")
    )
)]
pub async fn get_promocao(
    State(app_state): State<AppState>,
    IdPath(id_promocao): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let promocao = app_state.promocao_service.obter(id_promocao).await?;

    Ok((StatusCode::OK, sucesso(promocao)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn extrair(uri: &str) -> Result<ListarPromocoesQuery, String> {
        let uri: Uri = uri.parse().unwrap();
        let Query(query) =
            Query::<ListarPromocoesQuery>::try_from_uri(&uri).map_err(|e| e.to_string())?;
        query.validate().map_err(|e| e.to_string())?;
        Ok(query)
    }

    #[test]
    fn aceita_status_e_categoria_validos() {
        let query = extrair("/promocao?status=ativa&categoria=data_comemorativa").unwrap();
        assert_eq!(query.status, Some(StatusPromocao::Ativa));
        assert_eq!(query.categoria, Some(CategoriaPromocao::DataComemorativa));
    }

    #[test]
    fn rejeita_status_desconhecido() {
        assert!(extrair("/promocao?status=pausada").is_err());
    }

    #[test]
    fn rejeita_flag_fora_do_intervalo() {
        assert!(extrair("/promocao?apenasDestaque=7").is_err());
    }

    #[test]
    fn destaque_ausente_nao_filtra() {
        let params = montar_params(extrair("/promocao").unwrap());
        assert!(!params.apenas_destaque);

        let params = montar_params(extrair("/promocao?apenasDestaque=1").unwrap());
        assert!(params.apenas_destaque);
    }
}
