// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Categoria ---
        handlers::categoria::list_categorias,

        // --- Pastel ---
        handlers::pastel::list_pasteis,
        handlers::pastel::get_pastel,

        // --- Galeria ---
        handlers::galeria::list_categorias_foto,
        handlers::galeria::list_fotos,
        handlers::galeria::get_foto,

        // --- Estabelecimento ---
        handlers::estabelecimento::get_estabelecimento,

        // --- Promocao ---
        handlers::promocao::list_promocoes,
        handlers::promocao::get_promocao,

        // --- NovoSabor ---
        handlers::novo_sabor::list_novos_sabores,
    ),
    components(
        schemas(
            models::categoria::Categoria,

            models::pastel::Pastel,
            models::pastel::Restricao,
            models::pastel::OrdenacaoPastel,

            models::galeria::CategoriaFoto,
            models::galeria::Foto,
            models::galeria::FotoDetalhe,
            models::galeria::OrdenacaoFoto,

            models::estabelecimento::Estabelecimento,
            models::estabelecimento::EstabelecimentoCompleto,
            models::estabelecimento::HorarioFuncionamento,
            models::estabelecimento::Feriado,
            models::estabelecimento::ImagemHistoria,
            models::estabelecimento::MembroEquipe,
            models::estabelecimento::Certificacao,
            models::estabelecimento::PerguntaFrequente,
            models::estabelecimento::ImagemAcessibilidade,
            models::estabelecimento::MarcoHistorico,
            models::estabelecimento::FormaPagamento,
            models::estabelecimento::OutraPolitica,
            models::estabelecimento::RecursoAcessibilidade,

            models::promocao::Promocao,
            models::promocao::PromocaoDetalhe,
            models::promocao::StatusPromocao,
            models::promocao::CategoriaPromocao,

            models::novo_sabor::NovoSabor,
        )
    ),
    tags(
        (name = "Categoria", description = "Categorias do cardápio"),
        (name = "Pastel", description = "Cardápio de pastéis"),
        (name = "Galeria", description = "Galeria de fotos"),
        (name = "Estabelecimento", description = "Informações do estabelecimento"),
        (name = "Promocao", description = "Promoções vigentes e agendadas"),
        (name = "NovoSabor", description = "Sabores em período de novidade")
    )
)]
pub struct ApiDoc;
