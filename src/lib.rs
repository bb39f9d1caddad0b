// Backend público da pastelaria: catálogo, galeria, promoções e
// informações do estabelecimento, tudo somente leitura atrás de
// procedures no banco.

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
