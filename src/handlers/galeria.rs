// src/handlers/galeria.rs

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
    models::galeria::{FotoListParams, OrdenacaoFoto},
};

// ---
// Query: ListarFotosQuery
// ---
// As datas seguem o formato YYYY-MM-DD; valores fora do formato são
// rejeitados na desserialização.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListarFotosQuery {
    #[validate(range(
        min = 1,
        message = "O campo 'idCategoriaFoto' deve ser um inteiro positivo."
    ))]
    pub id_categoria_foto: Option<i32>,

    pub data_inicio: Option<NaiveDate>,

    pub data_fim: Option<NaiveDate>,

    pub ordenacao: Option<OrdenacaoFoto>,
}

// GET /api/v1/external/public/galeria/categoria
#[utoipa::path(
    get,
    path = "/api/v1/external/public/galeria/categoria",
    tag = "Galeria",
    responses(
        (status = 200, description = "Categorias de foto ativas com contagem", body = Vec<crate::models::galeria::CategoriaFoto>)
    )
)]
pub async fn list_categorias_foto(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categorias = app_state.galeria_service.listar_categorias().await?;

    Ok((StatusCode::OK, sucesso(categorias)))
}

// GET /api/v1/external/public/galeria/foto
#[utoipa::path(
    get,
    path = "/api/v1/external/public/galeria/foto",
    tag = "Galeria",
    params(ListarFotosQuery),
    responses(
        (status = 200, description = "Fotos filtradas e ordenadas", body = Vec<crate::models::galeria::Foto>),
        (status = 400, description = "Parâmetros de filtro inválidos")
    )
)]
pub async fn list_fotos(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListarFotosQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = FotoListParams {
        id_categoria_foto: query.id_categoria_foto,
        data_inicio: query.data_inicio,
        data_fim: query.data_fim,
        ordenacao: query.ordenacao.unwrap_or(OrdenacaoFoto::MaisRecentes),
    };

    let fotos = app_state.galeria_service.listar_fotos(params).await?;

    Ok((StatusCode::OK, sucesso(fotos)))
}

// GET /api/v1/external/public/galeria/foto/{id}
#[utoipa::path(
    get,
    path = "/api/v1/external/public/galeria/foto/{id}",
    tag = "Galeria",
    params(("id" = i32, Path, description = "Identificador da foto")),
    responses(
        (status = 200, description = "Detalhe da foto", body = crate::models::galeria::FotoDetalhe),
        (status = 400, description = "Identificador inválido"),
        (status = 404, description = "Foto não encontrada")
    )
)]
pub async fn get_foto(
    State(app_state): State<AppState>,
    IdPath(id_foto): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let foto = app_state.galeria_service.obter_foto(id_foto).await?;

    Ok((StatusCode::OK, sucesso(foto)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn extrair(uri: &str) -> Result<ListarFotosQuery, String> {
        let uri: Uri = uri.parse().unwrap();
        let Query(query) =
            Query::<ListarFotosQuery>::try_from_uri(&uri).map_err(|e| e.to_string())?;
        query.validate().map_err(|e| e.to_string())?;
        Ok(query)
    }

    #[test]
    fn aceita_intervalo_de_datas() {
        let query = extrair("/foto?dataInicio=2026-01-01&dataFim=2026-02-01").unwrap();
        assert_eq!(
            query.data_inicio,
            Some(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        );
    }

    #[test]
    fn rejeita_data_malformada() {
        assert!(extrair("/foto?dataInicio=01-01-2026").is_err());
        assert!(extrair("/foto?dataInicio=ontem").is_err());
    }

    #[test]
    fn rejeita_categoria_nao_positiva() {
        assert!(extrair("/foto?idCategoriaFoto=0").is_err());
    }

    #[test]
    fn ordenacao_aceita_somente_os_dois_valores() {
        assert!(extrair("/foto?ordenacao=mais_recentes").is_ok());
        assert!(extrair("/foto?ordenacao=mais_antigas").is_ok());
        assert!(extrair("/foto?ordenacao=alfabetica").is_err());
    }
}
