pub mod config;

pub use config::{RecolorConfig, CONFIG_ENV_VAR};
