// src/services/promocao_service.rs

use crate::{
    common::error::AppError,
    db::PromocaoRepository,
    models::promocao::{Promocao, PromocaoDetalhe, PromocaoListParams},
};

#[derive(Clone)]
pub struct PromocaoService {
    promocao_repo: PromocaoRepository,
}

impl PromocaoService {
    pub fn new(promocao_repo: PromocaoRepository) -> Self {
        Self { promocao_repo }
    }

    pub async fn listar(&self, params: PromocaoListParams) -> Result<Vec<Promocao>, AppError> {
        self.promocao_repo.list(&params).await
    }

    pub async fn obter(&self, id_promocao: i32) -> Result<PromocaoDetalhe, AppError> {
        self.promocao_repo
            .get(id_promocao)
            .await?
            .ok_or_else(|| AppError::NaoEncontrado("Promoção não encontrada".to_string()))
    }
}
