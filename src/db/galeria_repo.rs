// src/db/galeria_repo.rs

use sqlx::PgPool;

use crate::{
    common::{
        db_utils::{erro_detalhe, erro_listagem},
        error::AppError,
    },
    models::galeria::{CategoriaFoto, Foto, FotoDetalhe, FotoListParams},
};

// Repositório da galeria: categorias de foto e fotos.
#[derive(Clone)]
pub struct GaleriaRepository {
    pool: PgPool,
}

impl GaleriaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_categorias(&self) -> Result<Vec<CategoriaFoto>, AppError> {
        sqlx::query_as::<_, CategoriaFoto>("SELECT * FROM functional.sp_categoria_foto_list()")
            .fetch_all(&self.pool)
            .await
            .map_err(erro_listagem)
    }

    pub async fn list_fotos(&self, params: &FotoListParams) -> Result<Vec<Foto>, AppError> {
        sqlx::query_as::<_, Foto>("SELECT * FROM functional.sp_foto_list($1, $2, $3, $4)")
            .bind(params.id_categoria_foto)
            .bind(params.data_inicio)
            .bind(params.data_fim)
            .bind(params.ordenacao.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(erro_listagem)
    }

    pub async fn get_foto(&self, id_foto: i32) -> Result<Option<FotoDetalhe>, AppError> {
        sqlx::query_as::<_, FotoDetalhe>("SELECT * FROM functional.sp_foto_get($1)")
            .bind(id_foto)
            .fetch_optional(&self.pool)
            .await
            .map_err(erro_detalhe)
    }
}
