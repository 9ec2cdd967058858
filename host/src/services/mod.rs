pub mod assets;
pub mod runtime_config;
