// src/services/galeria_service.rs

use crate::{
    common::error::AppError,
    db::GaleriaRepository,
    models::galeria::{CategoriaFoto, Foto, FotoDetalhe, FotoListParams},
};

#[derive(Clone)]
pub struct GaleriaService {
    galeria_repo: GaleriaRepository,
}

impl GaleriaService {
    pub fn new(galeria_repo: GaleriaRepository) -> Self {
        Self { galeria_repo }
    }

    pub async fn listar_categorias(&self) -> Result<Vec<CategoriaFoto>, AppError> {
        self.galeria_repo.list_categorias().await
    }

    pub async fn listar_fotos(&self, params: FotoListParams) -> Result<Vec<Foto>, AppError> {
        self.galeria_repo.list_fotos(&params).await
    }

    pub async fn obter_foto(&self, id_foto: i32) -> Result<FotoDetalhe, AppError> {
        self.galeria_repo
            .get_foto(id_foto)
            .await?
            .ok_or_else(|| AppError::NaoEncontrado("Foto não encontrada".to_string()))
    }
}
