// src/db/novo_sabor_repo.rs

use sqlx::PgPool;

use crate::{
    common::{db_utils::erro_listagem, error::AppError},
    models::novo_sabor::NovoSabor,
};

#[derive(Clone)]
pub struct NovoSaborRepository {
    pool: PgPool,
}

impl NovoSaborRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // A procedure já corta os sabores fora do período de novidade e
    // calcula os dias restantes.
    pub async fn list(&self, apenas_destaque_home: bool) -> Result<Vec<NovoSabor>, AppError> {
        sqlx::query_as::<_, NovoSabor>("SELECT * FROM functional.sp_novo_sabor_list($1)")
            .bind(apenas_destaque_home)
            .fetch_all(&self.pool)
            .await
            .map_err(erro_listagem)
    }
}
