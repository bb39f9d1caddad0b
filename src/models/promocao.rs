// src/models/promocao.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- Status calculado pela procedure a partir das datas ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusPromocao {
    Agendada,
    Ativa,
    Encerrada,
}

impl StatusPromocao {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusPromocao::Agendada => "agendada",
            StatusPromocao::Ativa => "ativa",
            StatusPromocao::Encerrada => "encerrada",
        }
    }
}

// --- Categorias de promoção aceitas pelo filtro ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CategoriaPromocao {
    Diaria,
    Semanal,
    Sazonal,
    DataComemorativa,
}

impl CategoriaPromocao {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoriaPromocao::Diaria => "diaria",
            CategoriaPromocao::Semanal => "semanal",
            CategoriaPromocao::Sazonal => "sazonal",
            CategoriaPromocao::DataComemorativa => "data_comemorativa",
        }
    }
}

// Parâmetros já coagidos para functional.sp_promocao_list.
#[derive(Debug, Clone)]
pub struct PromocaoListParams {
    pub status: Option<StatusPromocao>,
    pub categoria: Option<CategoriaPromocao>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub apenas_destaque: bool,
}

// Item da listagem de promoções.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Promocao {
    pub id_promocao: i32,
    pub titulo: String,
    pub descricao: String,
    pub data_inicio: NaiveDate,
    pub data_termino: NaiveDate,
    pub categoria: String,
    pub desconto: Option<Decimal>,
    pub valor_promocional: Option<Decimal>,
    pub imagem_url: String,
    pub status: String,
    pub termos_condicoes: Option<String>,
    pub destaque: bool,
    pub dias_restantes: Option<i32>,
}

// Detalhe de uma promoção (inclui os carimbos de criação/atualização).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromocaoDetalhe {
    pub id_promocao: i32,
    pub titulo: String,
    pub descricao: String,
    pub data_inicio: NaiveDate,
    pub data_termino: NaiveDate,
    pub categoria: String,
    pub desconto: Option<Decimal>,
    pub valor_promocional: Option<Decimal>,
    pub imagem_url: String,
    pub status: String,
    pub termos_condicoes: Option<String>,
    pub destaque: bool,
    pub dias_restantes: Option<i32>,
    pub data_criacao: DateTime<Utc>,
    pub data_atualizacao: DateTime<Utc>,
}
