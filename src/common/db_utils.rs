// src/common/db_utils.rs

use serde::de::DeserializeOwned;

use crate::common::error::AppError;

// Código sentinela usado pelas procedures para rejeições de negócio
// (herdado do sistema de origem: RAISERROR 51000).
const SQLSTATE_SENTINELA: &str = "51000";

fn mensagem_sentinela(err: &sqlx::Error) -> Option<String> {
    err.as_database_error()
        .filter(|db_err| db_err.code().as_deref() == Some(SQLSTATE_SENTINELA))
        .map(|db_err| db_err.message().to_string())
}

/// Mapeia o erro de uma procedure de listagem: o sentinela vira 400
/// (regra de negócio); o resto segue como erro de banco.
pub fn erro_listagem(err: sqlx::Error) -> AppError {
    match mensagem_sentinela(&err) {
        Some(msg) => AppError::RegraDeNegocio(msg),
        None => AppError::DatabaseError(err),
    }
}

/// Mapeia o erro de uma procedure de detalhe: o sentinela vira 404.
pub fn erro_detalhe(err: sqlx::Error) -> AppError {
    match mensagem_sentinela(&err) {
        Some(msg) => AppError::NaoEncontrado(msg),
        None => AppError::DatabaseError(err),
    }
}

// ---
// Colunas serializadas
// ---
// Várias procedures devolvem listas embutidas como texto JSON
// (ingredientes, alergenicos, marcosHistoricos...). NULL equivale a
// lista vazia; JSON corrompido é erro interno, nunca 400.

pub fn json_lista<T: DeserializeOwned>(coluna: Option<String>) -> Result<Vec<T>, AppError> {
    match coluna {
        Some(texto) => serde_json::from_str(&texto).map_err(|e| {
            AppError::InternalServerError(anyhow::anyhow!(
                "Coluna JSON inválida vinda do banco: {e}"
            ))
        }),
        None => Ok(Vec::new()),
    }
}

pub fn json_objeto(coluna: Option<String>) -> Result<Option<serde_json::Value>, AppError> {
    match coluna {
        Some(texto) => serde_json::from_str(&texto).map(Some).map_err(|e| {
            AppError::InternalServerError(anyhow::anyhow!(
                "Coluna JSON inválida vinda do banco: {e}"
            ))
        }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_lista_desserializa_texto_valido() {
        let lista: Vec<String> =
            json_lista(Some(r#"["carne", "queijo"]"#.to_string())).unwrap();
        assert_eq!(lista, vec!["carne".to_string(), "queijo".to_string()]);
    }

    #[test]
    fn json_lista_nulo_vira_lista_vazia() {
        let lista: Vec<String> = json_lista(None).unwrap();
        assert!(lista.is_empty());
    }

    #[test]
    fn json_lista_corrompido_e_erro_interno() {
        let resultado: Result<Vec<String>, _> = json_lista(Some("{quebrado".to_string()));
        assert!(matches!(
            resultado,
            Err(AppError::InternalServerError(_))
        ));
    }

    #[test]
    fn json_objeto_nulo_vira_none() {
        assert!(json_objeto(None).unwrap().is_none());
    }

    #[test]
    fn json_objeto_desserializa_texto_valido() {
        let valor = json_objeto(Some(r#"{"calorias": 320}"#.to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(valor["calorias"], 320);
    }
}
