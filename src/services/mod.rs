mod categoria_service;
mod estabelecimento_service;
mod galeria_service;
mod novo_sabor_service;
mod pastel_service;
mod promocao_service;

pub use categoria_service::CategoriaService;
pub use estabelecimento_service::EstabelecimentoService;
pub use galeria_service::GaleriaService;
pub use novo_sabor_service::NovoSaborService;
pub use pastel_service::PastelService;
pub use promocao_service::PromocaoService;
