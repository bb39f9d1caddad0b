// src/models/categoria.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// Categoria do cardápio com a contagem de pastéis ativos,
// como devolvida por functional.sp_categoria_list.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Categoria {
    pub id_categoria: i32,
    pub nome: String,
    pub descricao: String,
    pub icone: Option<String>,
    pub ordem: i32,
    pub total_pasteis: i64,
}
