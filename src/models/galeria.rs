// src/models/galeria.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- Ordenações aceitas por spFotoList ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrdenacaoFoto {
    MaisRecentes,
    MaisAntigas,
}

impl OrdenacaoFoto {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrdenacaoFoto::MaisRecentes => "mais_recentes",
            OrdenacaoFoto::MaisAntigas => "mais_antigas",
        }
    }
}

// Parâmetros já coagidos para functional.sp_foto_list.
#[derive(Debug, Clone)]
pub struct FotoListParams {
    pub id_categoria_foto: Option<i32>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub ordenacao: OrdenacaoFoto,
}

// Categoria da galeria com a contagem de fotos ativas.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaFoto {
    pub id_categoria_foto: i32,
    pub nome: String,
    pub descricao: String,
    pub ordem: i32,
    pub quantidade_fotos: i64,
    pub data_atualizacao: DateTime<Utc>,
}

// Item da listagem de fotos.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Foto {
    pub id_foto: i32,
    pub id_categoria_foto: i32,
    pub categoria_nome: String,
    pub titulo: String,
    pub descricao: Option<String>,
    pub url_foto: String,
    pub url_miniatura: String,
    pub data_foto: NaiveDate,
    pub creditos: Option<String>,
}

// Detalhe de uma foto (inclui o flag `ativa`).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FotoDetalhe {
    pub id_foto: i32,
    pub id_categoria_foto: i32,
    pub categoria_nome: String,
    pub titulo: String,
    pub descricao: Option<String>,
    pub url_foto: String,
    pub url_miniatura: String,
    pub data_foto: NaiveDate,
    pub creditos: Option<String>,
    pub ativa: bool,
}
