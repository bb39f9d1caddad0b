// src/db/pastel_repo.rs

use sqlx::PgPool;

use crate::{
    common::{
        db_utils::{erro_detalhe, erro_listagem},
        error::AppError,
    },
    models::pastel::{PastelListParams, PastelRow},
};

#[derive(Clone)]
pub struct PastelRepository {
    pool: PgPool,
}

impl PastelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Filtragem e ordenação ficam por conta da procedure; aqui só
    // amarramos os parâmetros tipados.
    pub async fn list(&self, params: &PastelListParams) -> Result<Vec<PastelRow>, AppError> {
        sqlx::query_as::<_, PastelRow>(
            "SELECT * FROM functional.sp_pastel_list($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(params.id_categoria)
        .bind(params.preco_min)
        .bind(params.preco_max)
        .bind(params.ingrediente.as_deref())
        .bind(params.restricao.as_ref().map(|r| r.as_str()))
        .bind(params.apenas_disponiveis)
        .bind(params.ordenacao.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(erro_listagem)
    }

    pub async fn get(&self, id_pastel: i32) -> Result<Option<PastelRow>, AppError> {
        sqlx::query_as::<_, PastelRow>("SELECT * FROM functional.sp_pastel_get($1)")
            .bind(id_pastel)
            .fetch_optional(&self.pool)
            .await
            .map_err(erro_detalhe)
    }
}
