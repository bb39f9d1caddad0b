// src/routes.rs

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

// Monta o router completo da aplicação.
// Todas as rotas de conteúdo são públicas e somente leitura; as rotas
// administrativas/internas ficam fora do escopo deste serviço.
pub fn criar_app(app_state: AppState) -> Router {
    let galeria_routes = Router::new()
        .route("/categoria", get(handlers::galeria::list_categorias_foto))
        .route("/foto", get(handlers::galeria::list_fotos))
        .route("/foto/{id}", get(handlers::galeria::get_foto));

    let public_routes = Router::new()
        .route("/categoria", get(handlers::categoria::list_categorias))
        .route("/pastel", get(handlers::pastel::list_pasteis))
        .route("/pastel/{id}", get(handlers::pastel::get_pastel))
        .nest("/galeria", galeria_routes)
        .route(
            "/estabelecimento",
            get(handlers::estabelecimento::get_estabelecimento),
        )
        .route("/promocao", get(handlers::promocao::list_promocoes))
        .route("/promocao/{id}", get(handlers::promocao::get_promocao))
        .route("/novo-sabor", get(handlers::novo_sabor::list_novos_sabores));

    Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1/external/public", public_routes)
        .fallback(rota_nao_encontrada)
        .with_state(app_state)
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

// Rotas desconhecidas devolvem o mesmo envelope de erro da API.
async fn rota_nao_encontrada() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": {
                "code": "NOT_FOUND",
                "message": "Rota não encontrada."
            }
        })),
    )
}
