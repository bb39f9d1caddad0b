// src/db/categoria_repo.rs

use sqlx::PgPool;

use crate::{
    common::{db_utils::erro_listagem, error::AppError},
    models::categoria::Categoria,
};

// Repositório das categorias do cardápio: uma única procedure de leitura.
#[derive(Clone)]
pub struct CategoriaRepository {
    pool: PgPool,
}

impl CategoriaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Categorias ativas com pastéis disponíveis, já ordenadas pela procedure.
    pub async fn list(&self) -> Result<Vec<Categoria>, AppError> {
        sqlx::query_as::<_, Categoria>("SELECT * FROM functional.sp_categoria_list()")
            .fetch_all(&self.pool)
            .await
            .map_err(erro_listagem)
    }
}
