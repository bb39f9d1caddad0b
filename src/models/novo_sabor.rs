// src/models/novo_sabor.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// Sabor recém-lançado dentro do período de novidade, com os dados do
// pastel associado já agregados por functional.sp_novo_sabor_list.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NovoSabor {
    pub id_novo_sabor: i32,
    pub id_pastel: i32,
    pub nome_pastel: String,
    pub descricao_pastel: String,
    pub preco_pastel: Decimal,
    pub imagem_pastel: Option<String>,
    pub categoria_nome: String,
    pub data_adicao: NaiveDate,
    pub periodo_novidade: i32,
    pub destaque_home: bool,
    pub dias_restantes: i32,
}
