// src/services/novo_sabor_service.rs

use crate::{common::error::AppError, db::NovoSaborRepository, models::novo_sabor::NovoSabor};

#[derive(Clone)]
pub struct NovoSaborService {
    novo_sabor_repo: NovoSaborRepository,
}

impl NovoSaborService {
    pub fn new(novo_sabor_repo: NovoSaborRepository) -> Self {
        Self { novo_sabor_repo }
    }

    pub async fn listar(&self, apenas_destaque_home: bool) -> Result<Vec<NovoSabor>, AppError> {
        self.novo_sabor_repo.list(apenas_destaque_home).await
    }
}
