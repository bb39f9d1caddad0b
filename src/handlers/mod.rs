pub mod categoria;
pub mod estabelecimento;
pub mod galeria;
pub mod novo_sabor;
pub mod pastel;
pub mod promocao;
