use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Todos os handlers devolvem `Result<_, AppError>`; a conversão para a
// resposta HTTP (envelope `{success:false, error:{...}}`) acontece aqui.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Parâmetro de query/rota que nem chegou a desserializar
    // (ex: `precoMin=abc`, `id` não numérico).
    #[error("{0}")]
    ParametroInvalido(String),

    // Recurso inexistente: a procedure de detalhe devolveu zero linhas
    // ou sinalizou o código sentinela 51000.
    #[error("{0}")]
    NaoEncontrado(String),

    // Regra de negócio rejeitada pela procedure (SQLSTATE 51000) em um
    // endpoint de listagem.
    #[error("{0}")]
    RegraDeNegocio(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = serde_json::Map::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), json!(messages));
                }
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Um ou mais parâmetros são inválidos.".to_string(),
                    Some(serde_json::Value::Object(details)),
                )
            }
            AppError::ParametroInvalido(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg, None)
            }
            AppError::NaoEncontrado(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            AppError::RegraDeNegocio(msg) => (StatusCode::BAD_REQUEST, "BUSINESS_RULE", msg, None),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` loga a mensagem detalhada; o cliente recebe só o genérico.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Ocorreu um erro inesperado.".to_string(),
                    None,
                )
            }
        };

        let mut error_body = json!({ "code": code, "message": message });
        if let Some(details) = details {
            error_body["details"] = details;
        }
        let body = Json(json!({ "success": false, "error": error_body }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use validator::Validate;

    async fn corpo_json(resp: Response) -> (StatusCode, serde_json::Value) {
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[derive(Validate)]
    struct Dummy {
        #[validate(range(min = 1, message = "deve ser positivo"))]
        id: i32,
    }

    #[tokio::test]
    async fn erro_de_validacao_vira_400_com_detalhes() {
        let err = Dummy { id: 0 }.validate().unwrap_err();
        let (status, body) = corpo_json(AppError::ValidationError(err).into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["details"]["id"][0], "deve ser positivo");
    }

    #[tokio::test]
    async fn nao_encontrado_vira_404() {
        let err = AppError::NaoEncontrado("Pastel não encontrado".to_string());
        let (status, body) = corpo_json(err.into_response()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Pastel não encontrado");
    }

    #[tokio::test]
    async fn erro_inesperado_vira_500_generico() {
        let err = AppError::InternalServerError(anyhow::anyhow!("segredo interno"));
        let (status, body) = corpo_json(err.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        // A mensagem interna nunca vaza para o cliente.
        assert_eq!(body["error"]["message"], "Ocorreu um erro inesperado.");
    }
}
