// src/common/extractors.rs

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::common::error::AppError;

// ---
// Extrator: ValidatedQuery
// ---
// Desserializa a query string e roda as regras do `validator` em um passo só.
// Qualquer falha (valor que não desserializa, enum desconhecido, range
// estourado) vira um 400 no envelope padrão, em vez da rejeição em texto
// puro do axum.
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(valor) = Query::<T>::try_from_uri(&parts.uri)
            .map_err(|rejeicao| AppError::ParametroInvalido(rejeicao.body_text()))?;

        valor.validate()?;

        Ok(ValidatedQuery(valor))
    }
}

// ---
// Extrator: IdPath
// ---
// O `:id` das rotas de detalhe: precisa ser um inteiro positivo.
// Extraímos como String para devolver o 400 no nosso envelope quando o
// valor não é numérico (ex: `/pastel/abc`).
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(bruto) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejeicao| AppError::ParametroInvalido(rejeicao.body_text()))?;

        bruto
            .parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .map(IdPath)
            .ok_or_else(|| {
                AppError::ParametroInvalido(
                    "O parâmetro 'id' deve ser um inteiro positivo.".to_string(),
                )
            })
    }
}
