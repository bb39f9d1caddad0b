// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        CategoriaRepository, EstabelecimentoRepository, GaleriaRepository, NovoSaborRepository,
        PastelRepository, PromocaoRepository,
    },
    services::{
        CategoriaService, EstabelecimentoService, GaleriaService, NovoSaborService,
        PastelService, PromocaoService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub categoria_service: CategoriaService,
    pub pastel_service: PastelService,
    pub galeria_service: GaleriaService,
    pub estabelecimento_service: EstabelecimentoService,
    pub promocao_service: PromocaoService,
    pub novo_sabor_service: NovoSaborService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;

        Ok(Self::from_database_url(&database_url)?)
    }

    // A pool é preguiçosa: a primeira conexão só acontece no primeiro
    // acquire, e conexões derrubadas são refeitas pela própria pool.
    pub fn from_database_url(database_url: &str) -> Result<Self, sqlx::Error> {
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_lazy(database_url)?;

        tracing::info!("✅ Pool de conexões configurada (conexão adiada para o primeiro uso).");

        // --- Monta o gráfico de dependências ---
        let categoria_service = CategoriaService::new(CategoriaRepository::new(db_pool.clone()));
        let pastel_service = PastelService::new(PastelRepository::new(db_pool.clone()));
        let galeria_service = GaleriaService::new(GaleriaRepository::new(db_pool.clone()));
        let estabelecimento_service =
            EstabelecimentoService::new(EstabelecimentoRepository::new(db_pool.clone()));
        let promocao_service = PromocaoService::new(PromocaoRepository::new(db_pool.clone()));
        let novo_sabor_service =
            NovoSaborService::new(NovoSaborRepository::new(db_pool.clone()));

        Ok(Self {
            db_pool,
            categoria_service,
            pastel_service,
            galeria_service,
            estabelecimento_service,
            promocao_service,
            novo_sabor_service,
        })
    }
}
