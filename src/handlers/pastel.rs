// src/handlers/pastel.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse};
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
    models::pastel::{OrdenacaoPastel, PastelListParams, Restricao},
};

// ---
// Query: ListarPasteisQuery
// ---
// Os flags booleanos chegam como 0/1, convenção BIT herdada do banco.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListarPasteisQuery {
    #[validate(range(min = 1, message = "O campo 'idCategoria' deve ser um inteiro positivo."))]
    pub id_categoria: Option<i32>,

    #[validate(range(min = 0.0, message = "O campo 'precoMin' não pode ser negativo."))]
    pub preco_min: Option<f64>,

    #[validate(range(min = 0.0, message = "O campo 'precoMax' não pode ser negativo."))]
    pub preco_max: Option<f64>,

    #[validate(length(min = 3, message = "O filtro 'ingrediente' exige ao menos 3 caracteres."))]
    pub ingrediente: Option<String>,

    pub restricao: Option<Restricao>,

    #[validate(range(max = 1, message = "O campo 'apenasDisponiveis' aceita apenas 0 ou 1."))]
    pub apenas_disponiveis: Option<u8>,

    pub ordenacao: Option<OrdenacaoPastel>,
}

// Aplica os defaults documentados: sem `apenasDisponiveis` o cardápio
// esconde indisponíveis; sem `ordenacao` a lista sai por nome.
fn montar_params(query: ListarPasteisQuery) -> PastelListParams {
    PastelListParams {
        id_categoria: query.id_categoria,
        preco_min: query.preco_min,
        preco_max: query.preco_max,
        ingrediente: query.ingrediente,
        restricao: query.restricao,
        apenas_disponiveis: query.apenas_disponiveis.map(|v| v == 1).unwrap_or(true),
        ordenacao: query.ordenacao.unwrap_or(OrdenacaoPastel::NomeAsc),
    }
}

// GET /api/v1/external/public/pastel
#[utoipa::path(
    get,
    path = "/api/v1/external/public/pastel",
    tag = "Pastel",
    params(ListarPasteisQuery),
    responses(
        (status = 200, description = "Lista de pastéis no envelope {success, data}", body = Vec<crate::models::pastel::Pastel>),
        (status = 400, description = "Parâmetros de filtro inválidos")
    )
)]
pub async fn list_pasteis(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListarPasteisQuery>,
) -> Result<impl IntoResponse, AppError> {
    let pasteis = app_state
        .pastel_service
        .listar(montar_params(query))
        .await?;

    Ok((StatusCode::OK, sucesso(pasteis)))
}

// GET /api/v1/external/public/pastel/{id}
#[utoipa::path(
    get,
    path = "/api/v1/external/public/pastel/{id}",
    tag = "Pastel",
    params(("id" = i32, Path, description = "Identificador do pastel")),
    responses(
        (status = 200, description = "Detalhe do pastel", body = crate::models::pastel::Pastel),
        (status = 400, description = "Identificador inválido"),
        (status = 404, description = "Pastel não encontrado")
    )
)]
pub async fn get_pastel(
    State(app_state): State<AppState>,
    IdPath(id_pastel): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let pastel = app_state.pastel_service.obter(id_pastel).await?;

    Ok((StatusCode::OK, sucesso(pastel)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn extrair(uri: &str) -> Result<ListarPasteisQuery, String> {
        let uri: Uri = uri.parse().unwrap();
        let Query(query) = Query::<ListarPasteisQuery>::try_from_uri(&uri)
            .map_err(|e| e.to_string())?;
        query.validate().map_err(|e| e.to_string())?;
        Ok(query)
    }

    #[test]
    fn aceita_filtros_validos() {
        let query = extrair(
            "/pastel?idCategoria=2&precoMin=5&precoMax=20.5&ingrediente=queijo\
             &restricao=sem_gluten&apenasDisponiveis=0&ordenacao=preco_desc",
        )
        .unwrap();

        assert_eq!(query.id_categoria, Some(2));
        assert_eq!(query.preco_max, Some(20.5));
        assert_eq!(query.restricao, Some(Restricao::SemGluten));
        assert_eq!(query.ordenacao, Some(OrdenacaoPastel::PrecoDesc));
    }

    #[test]
    fn rejeita_preco_negativo() {
        assert!(extrair("/pastel?precoMin=-1").is_err());
    }

    #[test]
    fn rejeita_ingrediente_curto() {
        assert!(extrair("/pastel?ingrediente=ab").is_err());
    }

    #[test]
    fn rejeita_ordenacao_desconhecida() {
        assert!(extrair("/pastel?ordenacao=aleatoria").is_err());
    }

    #[test]
    fn rejeita_flag_fora_do_intervalo() {
        assert!(extrair("/pastel?apenasDisponiveis=2").is_err());
    }

    #[test]
    fn coercao_do_flag_apenas_disponiveis() {
        // Ausente: o default documentado é true.
        let params = montar_params(extrair("/pastel").unwrap());
        assert!(params.apenas_disponiveis);
        assert_eq!(params.ordenacao, OrdenacaoPastel::NomeAsc);

        // `0` desliga o filtro; `1` mantém.
        let params = montar_params(extrair("/pastel?apenasDisponiveis=0").unwrap());
        assert!(!params.apenas_disponiveis);

        let params = montar_params(extrair("/pastel?apenasDisponiveis=1").unwrap());
        assert!(params.apenas_disponiveis);
    }
}
