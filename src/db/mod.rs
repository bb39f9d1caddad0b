mod categoria_repo;
mod estabelecimento_repo;
mod galeria_repo;
mod novo_sabor_repo;
mod pastel_repo;
mod promocao_repo;

pub use categoria_repo::CategoriaRepository;
pub use estabelecimento_repo::EstabelecimentoRepository;
pub use galeria_repo::GaleriaRepository;
pub use novo_sabor_repo::NovoSaborRepository;
pub use pastel_repo::PastelRepository;
pub use promocao_repo::PromocaoRepository;
