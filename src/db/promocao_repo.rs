// src/db/promocao_repo.rs

use sqlx::PgPool;

use crate::{
    common::{
        db_utils::{erro_detalhe, erro_listagem},
        error::AppError,
    },
    models::promocao::{Promocao, PromocaoDetalhe, PromocaoListParams},
};

#[derive(Clone)]
pub struct PromocaoRepository {
    pool: PgPool,
}

impl PromocaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, params: &PromocaoListParams) -> Result<Vec<Promocao>, AppError> {
        sqlx::query_as::<_, Promocao>(
            "SELECT * FROM functional.sp_promocao_list($1, $2, $3, $4, $5)",
        )
        .bind(params.status.as_ref().map(|s| s.as_str()))
        .bind(params.categoria.as_ref().map(|c| c.as_str()))
        .bind(params.data_inicio)
        .bind(params.data_fim)
        .bind(params.apenas_destaque)
        .fetch_all(&self.pool)
        .await
        .map_err(erro_listagem)
    }

    pub async fn get(&self, id_promocao: i32) -> Result<Option<PromocaoDetalhe>, AppError> {
        sqlx::query_as::<_, PromocaoDetalhe>("SELECT * FROM functional.sp_promocao_get($1)")
            .bind(id_promocao)
            .fetch_optional(&self.pool)
            .await
            .map_err(erro_detalhe)
    }
}
