// src/db/estabelecimento_repo.rs

use sqlx::PgPool;

use crate::{
    common::{
        db_utils::{erro_detalhe, erro_listagem},
        error::AppError,
    },
    models::estabelecimento::{
        Certificacao, EstabelecimentoRow, Feriado, HorarioFuncionamento, ImagemAcessibilidade,
        ImagemHistoria, MembroEquipe, PerguntaFrequente,
    },
};

// No sistema de origem uma única procedure devolvia oito recordsets.
// Funções Postgres devolvem um conjunto só, então a ficha completa é
// montada a partir de oito chamadas; o service agrega o resultado.
#[derive(Clone)]
pub struct EstabelecimentoRepository {
    pool: PgPool,
}

impl EstabelecimentoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_info(&self) -> Result<Option<EstabelecimentoRow>, AppError> {
        sqlx::query_as::<_, EstabelecimentoRow>(
            "SELECT * FROM functional.sp_estabelecimento_get()",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(erro_detalhe)
    }

    pub async fn list_horarios(&self) -> Result<Vec<HorarioFuncionamento>, AppError> {
        sqlx::query_as::<_, HorarioFuncionamento>(
            "SELECT * FROM functional.sp_horario_funcionamento_list()",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(erro_listagem)
    }

    pub async fn list_feriados(&self) -> Result<Vec<Feriado>, AppError> {
        sqlx::query_as::<_, Feriado>("SELECT * FROM functional.sp_feriado_list()")
            .fetch_all(&self.pool)
            .await
            .map_err(erro_listagem)
    }

    pub async fn list_imagens_historia(&self) -> Result<Vec<ImagemHistoria>, AppError> {
        sqlx::query_as::<_, ImagemHistoria>("SELECT * FROM functional.sp_imagem_historia_list()")
            .fetch_all(&self.pool)
            .await
            .map_err(erro_listagem)
    }

    pub async fn list_equipe(&self) -> Result<Vec<MembroEquipe>, AppError> {
        sqlx::query_as::<_, MembroEquipe>("SELECT * FROM functional.sp_equipe_list()")
            .fetch_all(&self.pool)
            .await
            .map_err(erro_listagem)
    }

    pub async fn list_certificacoes(&self) -> Result<Vec<Certificacao>, AppError> {
        sqlx::query_as::<_, Certificacao>("SELECT * FROM functional.sp_certificacao_list()")
            .fetch_all(&self.pool)
            .await
            .map_err(erro_listagem)
    }

    pub async fn list_perguntas_frequentes(&self) -> Result<Vec<PerguntaFrequente>, AppError> {
        sqlx::query_as::<_, PerguntaFrequente>(
            "SELECT * FROM functional.sp_pergunta_frequente_list()",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(erro_listagem)
    }

    pub async fn list_imagens_acessibilidade(
        &self,
    ) -> Result<Vec<ImagemAcessibilidade>, AppError> {
        sqlx::query_as::<_, ImagemAcessibilidade>(
            "SELECT * FROM functional.sp_imagem_acessibilidade_list()",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(erro_listagem)
    }
}
