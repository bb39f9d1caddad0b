// src/services/categoria_service.rs

use crate::{common::error::AppError, db::CategoriaRepository, models::categoria::Categoria};

#[derive(Clone)]
pub struct CategoriaService {
    categoria_repo: CategoriaRepository,
}

impl CategoriaService {
    pub fn new(categoria_repo: CategoriaRepository) -> Self {
        Self { categoria_repo }
    }

    // Sem filtros nem remapeamento: a procedure já devolve o formato final.
    pub async fn listar(&self) -> Result<Vec<Categoria>, AppError> {
        self.categoria_repo.list().await
    }
}
