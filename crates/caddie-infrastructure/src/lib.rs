pub mod dto;
pub mod paths;
pub mod storage;
pub mod toml_session_store;

pub use crate::toml_session_store::TomlSessionStore;
