use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8080;

/// Settings shared by every service binary.
///
/// Layered: an optional `configuration.{toml,yaml,json}` file, then
/// `APP__*` environment variables (`APP__PORT=9000`). Binaries load `.env`
/// before calling [`Config::load`].
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        Self::from_layers(config)
    }

    fn from_layers(config: Cfg) -> Result<Self, AppError> {
        Ok(config.try_deserialize()?)
    }
}
