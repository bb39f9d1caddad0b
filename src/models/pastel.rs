// src/models/pastel.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- Restrições alimentares aceitas pelo filtro `restricao` ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Restricao {
    Vegetariano,
    Vegano,
    SemGluten,
    SemLactose,
}

impl Restricao {
    pub fn as_str(&self) -> &'static str {
        match self {
            Restricao::Vegetariano => "vegetariano",
            Restricao::Vegano => "vegano",
            Restricao::SemGluten => "sem_gluten",
            Restricao::SemLactose => "sem_lactose",
        }
    }
}

// --- Ordenações aceitas por spPastelList ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrdenacaoPastel {
    PrecoAsc,
    PrecoDesc,
    NomeAsc,
    NomeDesc,
    Popularidade,
}

impl OrdenacaoPastel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrdenacaoPastel::PrecoAsc => "preco_asc",
            OrdenacaoPastel::PrecoDesc => "preco_desc",
            OrdenacaoPastel::NomeAsc => "nome_asc",
            OrdenacaoPastel::NomeDesc => "nome_desc",
            OrdenacaoPastel::Popularidade => "popularidade",
        }
    }
}

// Parâmetros já coagidos que o service repassa à procedure.
// Aqui os flags 0/1 da query já viraram bool e os defaults já foram
// aplicados (apenasDisponiveis=true, ordenacao=nome_asc).
#[derive(Debug, Clone)]
pub struct PastelListParams {
    pub id_categoria: Option<i32>,
    pub preco_min: Option<f64>,
    pub preco_max: Option<f64>,
    pub ingrediente: Option<String>,
    pub restricao: Option<Restricao>,
    pub apenas_disponiveis: bool,
    pub ordenacao: OrdenacaoPastel,
}

// Linha crua devolvida por functional.sp_pastel_list / sp_pastel_get.
// As colunas de coleção (ingredientes, alergenicos, info_nutricional,
// restricoes) chegam como texto JSON e são desserializadas pelo service.
#[derive(Debug, Clone, FromRow)]
pub struct PastelRow {
    pub id_pastel: i32,
    pub id_categoria: i32,
    pub categoria_nome: String,
    pub nome: String,
    pub descricao: String,
    pub preco: Decimal,
    pub imagem_url: Option<String>,
    pub disponivel: bool,
    pub destaque: bool,
    pub ingredientes: Option<String>,
    pub alergenicos: Option<String>,
    pub info_nutricional: Option<String>,
    pub restricoes: Option<String>,
    pub motivo_indisponibilidade: Option<String>,
    pub previsao_disponibilidade: Option<NaiveDate>,
}

// DTO público do cardápio (lista e detalhe compartilham o formato).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pastel {
    pub id_pastel: i32,
    pub id_categoria: i32,
    pub categoria_nome: String,
    pub nome: String,
    pub descricao: String,
    pub preco: Decimal,
    pub imagem_url: Option<String>,
    pub disponivel: bool,
    pub destaque: bool,
    pub ingredientes: Vec<String>,
    pub alergenicos: Vec<String>,
    pub info_nutricional: Option<serde_json::Value>,
    pub restricoes: Vec<String>,
    pub motivo_indisponibilidade: Option<String>,
    pub previsao_disponibilidade: Option<NaiveDate>,
}
