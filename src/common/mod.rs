pub mod db_utils;
pub mod error;
pub mod extractors;
pub mod response;
