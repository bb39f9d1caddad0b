// src/services/estabelecimento_service.rs

use crate::{
    common::{db_utils::json_lista, error::AppError},
    db::EstabelecimentoRepository,
    models::estabelecimento::{Estabelecimento, EstabelecimentoCompleto, EstabelecimentoRow},
};

#[derive(Clone)]
pub struct EstabelecimentoService {
    estabelecimento_repo: EstabelecimentoRepository,
}

impl EstabelecimentoService {
    pub fn new(estabelecimento_repo: EstabelecimentoRepository) -> Self {
        Self { estabelecimento_repo }
    }

    // Monta a ficha completa: a linha principal mais os sete conjuntos
    // auxiliares, todos atrás das suas procedures.
    pub async fn obter(&self) -> Result<EstabelecimentoCompleto, AppError> {
        let linha = self
            .estabelecimento_repo
            .get_info()
            .await?
            .ok_or_else(|| {
                AppError::NaoEncontrado("Estabelecimento não encontrado".to_string())
            })?;

        let estabelecimento = mapear_estabelecimento(linha)?;
        let horario_funcionamento = self.estabelecimento_repo.list_horarios().await?;
        let feriados = self.estabelecimento_repo.list_feriados().await?;
        let imagens_historia = self.estabelecimento_repo.list_imagens_historia().await?;
        let equipe = self.estabelecimento_repo.list_equipe().await?;
        let certificacoes = self.estabelecimento_repo.list_certificacoes().await?;
        let perguntas_frequentes = self
            .estabelecimento_repo
            .list_perguntas_frequentes()
            .await?;
        let imagens_acessibilidade = self
            .estabelecimento_repo
            .list_imagens_acessibilidade()
            .await?;

        Ok(EstabelecimentoCompleto {
            estabelecimento,
            horario_funcionamento,
            feriados,
            imagens_historia,
            equipe,
            certificacoes,
            perguntas_frequentes,
            imagens_acessibilidade,
        })
    }
}

// As quatro colunas de coleção da ficha principal chegam como texto JSON.
fn mapear_estabelecimento(linha: EstabelecimentoRow) -> Result<Estabelecimento, AppError> {
    Ok(Estabelecimento {
        id_estabelecimento: linha.id_estabelecimento,
        nome_fantasia: linha.nome_fantasia,
        razao_social: linha.razao_social,
        cnpj: linha.cnpj,
        logradouro: linha.logradouro,
        numero: linha.numero,
        complemento: linha.complemento,
        bairro: linha.bairro,
        cidade: linha.cidade,
        estado: linha.estado,
        cep: linha.cep,
        ponto_referencia: linha.ponto_referencia,
        latitude: linha.latitude,
        longitude: linha.longitude,
        telefone_fixo: linha.telefone_fixo,
        telefone_celular: linha.telefone_celular,
        whatsapp: linha.whatsapp,
        email: linha.email,
        facebook: linha.facebook,
        instagram: linha.instagram,
        twitter: linha.twitter,
        youtube: linha.youtube,
        tiktok: linha.tiktok,
        horario_atendimento_contato: linha.horario_atendimento_contato,
        data_fundacao: linha.data_fundacao,
        fundadores: linha.fundadores,
        titulo_historia: linha.titulo_historia,
        texto_historia: linha.texto_historia,
        video_historia: linha.video_historia,
        marcos_historicos: json_lista(linha.marcos_historicos)?,
        titulo_politicas: linha.titulo_politicas,
        formas_pagamento: json_lista(linha.formas_pagamento)?,
        politica_delivery: linha.politica_delivery,
        taxa_entrega: linha.taxa_entrega,
        raio_entrega: linha.raio_entrega,
        tempo_medio_entrega: linha.tempo_medio_entrega,
        politica_cancelamento: linha.politica_cancelamento,
        politica_reembolso: linha.politica_reembolso,
        valor_pedido_minimo: linha.valor_pedido_minimo,
        outras_politicas: json_lista(linha.outras_politicas)?,
        titulo_acessibilidade: linha.titulo_acessibilidade,
        descricao_acessibilidade: linha.descricao_acessibilidade,
        recursos_acessibilidade: json_lista(linha.recursos_acessibilidade)?,
        contato_acessibilidade: linha.contato_acessibilidade,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn linha_exemplo() -> EstabelecimentoRow {
        EstabelecimentoRow {
            id_estabelecimento: 1,
            nome_fantasia: "Pastelaria do Bairro".to_string(),
            razao_social: None,
            cnpj: None,
            logradouro: "Rua das Flores".to_string(),
            numero: "100".to_string(),
            complemento: None,
            bairro: "Centro".to_string(),
            cidade: "São Paulo".to_string(),
            estado: "SP".to_string(),
            cep: "01000-000".to_string(),
            ponto_referencia: None,
            latitude: -23.55,
            longitude: -46.63,
            telefone_fixo: None,
            telefone_celular: "+55 11 99999-0000".to_string(),
            whatsapp: None,
            email: "contato@pastelaria.com.br".to_string(),
            facebook: None,
            instagram: None,
            twitter: None,
            youtube: None,
            tiktok: None,
            horario_atendimento_contato: "9h às 18h".to_string(),
            data_fundacao: NaiveDate::from_ymd_opt(1985, 3, 12).unwrap(),
            fundadores: "Família Oliveira".to_string(),
            titulo_historia: "Nossa história".to_string(),
            texto_historia: "Começamos em uma feira...".to_string(),
            video_historia: None,
            marcos_historicos: Some(
                r#"[{"data": "1985", "descricao": "Primeira barraca na feira"}]"#.to_string(),
            ),
            titulo_politicas: "Políticas da casa".to_string(),
            formas_pagamento: Some(r#"[{"nome": "Pix"}, {"nome": "Dinheiro"}]"#.to_string()),
            politica_delivery: None,
            taxa_entrega: None,
            raio_entrega: None,
            tempo_medio_entrega: None,
            politica_cancelamento: None,
            politica_reembolso: None,
            valor_pedido_minimo: None,
            outras_politicas: None,
            titulo_acessibilidade: None,
            descricao_acessibilidade: None,
            recursos_acessibilidade: None,
            contato_acessibilidade: None,
        }
    }

    #[test]
    fn desserializa_as_colunas_json_da_ficha() {
        let ficha = mapear_estabelecimento(linha_exemplo()).unwrap();

        assert_eq!(ficha.marcos_historicos.len(), 1);
        assert_eq!(ficha.marcos_historicos[0].data, "1985");
        assert_eq!(ficha.formas_pagamento.len(), 2);
        assert_eq!(ficha.formas_pagamento[0].nome, "Pix");
        assert!(ficha.formas_pagamento[0].icone.is_none());
        assert!(ficha.outras_politicas.is_empty());
        assert!(ficha.recursos_acessibilidade.is_empty());
    }

    #[test]
    fn coluna_json_corrompida_propaga_erro_interno() {
        let mut linha = linha_exemplo();
        linha.formas_pagamento = Some("não é json".to_string());

        assert!(matches!(
            mapear_estabelecimento(linha),
            Err(AppError::InternalServerError(_))
        ));
    }
}
