// src/services/pastel_service.rs

use crate::{
    common::{
        db_utils::{json_lista, json_objeto},
        error::AppError,
    },
    db::PastelRepository,
    models::pastel::{Pastel, PastelListParams, PastelRow},
};

#[derive(Clone)]
pub struct PastelService {
    pastel_repo: PastelRepository,
}

impl PastelService {
    pub fn new(pastel_repo: PastelRepository) -> Self {
        Self { pastel_repo }
    }

    pub async fn listar(&self, params: PastelListParams) -> Result<Vec<Pastel>, AppError> {
        let linhas = self.pastel_repo.list(&params).await?;
        linhas.into_iter().map(mapear_pastel).collect()
    }

    pub async fn obter(&self, id_pastel: i32) -> Result<Pastel, AppError> {
        let linha = self
            .pastel_repo
            .get(id_pastel)
            .await?
            .ok_or_else(|| AppError::NaoEncontrado("Pastel não encontrado".to_string()))?;

        mapear_pastel(linha)
    }
}

// Remapeia a linha crua: as colunas de coleção vêm do banco como texto
// JSON (NULL = lista vazia).
fn mapear_pastel(linha: PastelRow) -> Result<Pastel, AppError> {
    Ok(Pastel {
        id_pastel: linha.id_pastel,
        id_categoria: linha.id_categoria,
        categoria_nome: linha.categoria_nome,
        nome: linha.nome,
        descricao: linha.descricao,
        preco: linha.preco,
        imagem_url: linha.imagem_url,
        disponivel: linha.disponivel,
        destaque: linha.destaque,
        ingredientes: json_lista(linha.ingredientes)?,
        alergenicos: json_lista(linha.alergenicos)?,
        info_nutricional: json_objeto(linha.info_nutricional)?,
        restricoes: json_lista(linha.restricoes)?,
        motivo_indisponibilidade: linha.motivo_indisponibilidade,
        previsao_disponibilidade: linha.previsao_disponibilidade,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn linha_exemplo() -> PastelRow {
        PastelRow {
            id_pastel: 1,
            id_categoria: 2,
            categoria_nome: "Salgados".to_string(),
            nome: "Pastel de Carne".to_string(),
            descricao: "Carne moída temperada".to_string(),
            preco: Decimal::new(1250, 2),
            imagem_url: None,
            disponivel: true,
            destaque: false,
            ingredientes: Some(r#"["carne", "cebola"]"#.to_string()),
            alergenicos: Some(r#"["gluten"]"#.to_string()),
            info_nutricional: Some(r#"{"calorias": 320, "proteinas": 14}"#.to_string()),
            restricoes: None,
            motivo_indisponibilidade: None,
            previsao_disponibilidade: None,
        }
    }

    #[test]
    fn mapeia_colunas_json_para_listas_tipadas() {
        let pastel = mapear_pastel(linha_exemplo()).unwrap();

        assert_eq!(pastel.ingredientes, vec!["carne", "cebola"]);
        assert_eq!(pastel.alergenicos, vec!["gluten"]);
        assert_eq!(pastel.info_nutricional.unwrap()["calorias"], 320);
        // Coluna NULL vira lista vazia, nunca null no JSON de saída.
        assert!(pastel.restricoes.is_empty());
    }

    #[test]
    fn coluna_json_corrompida_propaga_erro_interno() {
        let mut linha = linha_exemplo();
        linha.ingredientes = Some("[quebrado".to_string());

        assert!(matches!(
            mapear_pastel(linha),
            Err(AppError::InternalServerError(_))
        ));
    }

    #[test]
    fn saida_serializa_em_camel_case() {
        let pastel = mapear_pastel(linha_exemplo()).unwrap();
        let valor = serde_json::to_value(&pastel).unwrap();

        assert_eq!(valor["idPastel"], 1);
        assert_eq!(valor["categoriaNome"], "Salgados");
        assert_eq!(valor["infoNutricional"]["proteinas"], 14);
        assert!(valor["previsaoDisponibilidade"].is_null());
    }
}
