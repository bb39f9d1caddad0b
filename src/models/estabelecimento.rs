// src/models/estabelecimento.rs

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// ---
// Estruturas embutidas nas colunas JSON da ficha do estabelecimento
// ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarcoHistorico {
    pub data: String,
    pub descricao: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormaPagamento {
    pub nome: String,
    pub icone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutraPolitica {
    pub titulo: String,
    pub descricao: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecursoAcessibilidade {
    pub nome: String,
    pub descricao: Option<String>,
    pub icone: Option<String>,
}

// ---
// Linha crua de functional.sp_estabelecimento_get
// ---
// As quatro colunas de coleção chegam como texto JSON.
#[derive(Debug, Clone, FromRow)]
pub struct EstabelecimentoRow {
    pub id_estabelecimento: i32,
    pub nome_fantasia: String,
    pub razao_social: Option<String>,
    pub cnpj: Option<String>,
    pub logradouro: String,
    pub numero: String,
    pub complemento: Option<String>,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    pub ponto_referencia: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub telefone_fixo: Option<String>,
    pub telefone_celular: String,
    pub whatsapp: Option<String>,
    pub email: String,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub tiktok: Option<String>,
    pub horario_atendimento_contato: String,
    pub data_fundacao: NaiveDate,
    pub fundadores: String,
    pub titulo_historia: String,
    pub texto_historia: String,
    pub video_historia: Option<String>,
    pub marcos_historicos: Option<String>,
    pub titulo_politicas: String,
    pub formas_pagamento: Option<String>,
    pub politica_delivery: Option<String>,
    pub taxa_entrega: Option<Decimal>,
    pub raio_entrega: Option<Decimal>,
    pub tempo_medio_entrega: Option<String>,
    pub politica_cancelamento: Option<String>,
    pub politica_reembolso: Option<String>,
    pub valor_pedido_minimo: Option<Decimal>,
    pub outras_politicas: Option<String>,
    pub titulo_acessibilidade: Option<String>,
    pub descricao_acessibilidade: Option<String>,
    pub recursos_acessibilidade: Option<String>,
    pub contato_acessibilidade: Option<String>,
}

// Ficha principal já com as colunas JSON desserializadas.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Estabelecimento {
    pub id_estabelecimento: i32,
    pub nome_fantasia: String,
    pub razao_social: Option<String>,
    pub cnpj: Option<String>,
    pub logradouro: String,
    pub numero: String,
    pub complemento: Option<String>,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    pub ponto_referencia: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub telefone_fixo: Option<String>,
    pub telefone_celular: String,
    pub whatsapp: Option<String>,
    pub email: String,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub tiktok: Option<String>,
    pub horario_atendimento_contato: String,
    pub data_fundacao: NaiveDate,
    pub fundadores: String,
    pub titulo_historia: String,
    pub texto_historia: String,
    pub video_historia: Option<String>,
    pub marcos_historicos: Vec<MarcoHistorico>,
    pub titulo_politicas: String,
    pub formas_pagamento: Vec<FormaPagamento>,
    pub politica_delivery: Option<String>,
    pub taxa_entrega: Option<Decimal>,
    pub raio_entrega: Option<Decimal>,
    pub tempo_medio_entrega: Option<String>,
    pub politica_cancelamento: Option<String>,
    pub politica_reembolso: Option<String>,
    pub valor_pedido_minimo: Option<Decimal>,
    pub outras_politicas: Vec<OutraPolitica>,
    pub titulo_acessibilidade: Option<String>,
    pub descricao_acessibilidade: Option<String>,
    pub recursos_acessibilidade: Vec<RecursoAcessibilidade>,
    pub contato_acessibilidade: Option<String>,
}

// ---
// Recordsets auxiliares
// ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HorarioFuncionamento {
    pub id_horario_funcionamento: i32,
    pub dia_semana: String,
    pub horario_abertura: NaiveTime,
    pub horario_fechamento: NaiveTime,
    pub status_funcionamento: String,
    pub observacao: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Feriado {
    pub id_feriado: i32,
    pub nome: String,
    pub data: NaiveDate,
    pub horario_abertura: Option<NaiveTime>,
    pub horario_fechamento: Option<NaiveTime>,
    pub status_funcionamento: String,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImagemHistoria {
    pub id_imagem_historia: i32,
    pub url_imagem: String,
    pub legenda: Option<String>,
    pub ordem: i32,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembroEquipe {
    pub id_membro_equipe: i32,
    pub nome: String,
    pub cargo: String,
    pub foto_url: Option<String>,
    pub biografia: Option<String>,
    pub destaque_proprietario: bool,
    pub ordem: i32,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Certificacao {
    pub id_certificacao: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub data_certificacao: NaiveDate,
    pub imagem_url: Option<String>,
    pub entidade_certificadora: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerguntaFrequente {
    pub id_pergunta_frequente: i32,
    pub pergunta: String,
    pub resposta: String,
    pub categoria: Option<String>,
    pub ordem_exibicao: i32,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImagemAcessibilidade {
    pub id_imagem_acessibilidade: i32,
    pub url_imagem: String,
    pub legenda: Option<String>,
    pub ordem: i32,
}

// Agregado completo devolvido por GET /estabelecimento: a ficha principal
// mais os sete conjuntos auxiliares (no sistema de origem, oito recordsets
// de uma única procedure).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstabelecimentoCompleto {
    pub estabelecimento: Estabelecimento,
    pub horario_funcionamento: Vec<HorarioFuncionamento>,
    pub feriados: Vec<Feriado>,
    pub imagens_historia: Vec<ImagemHistoria>,
    pub equipe: Vec<MembroEquipe>,
    pub certificacoes: Vec<Certificacao>,
    pub perguntas_frequentes: Vec<PerguntaFrequente>,
    pub imagens_acessibilidade: Vec<ImagemAcessibilidade>,
}
