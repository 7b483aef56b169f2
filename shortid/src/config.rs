use crate::id_encoders::{Salt, ShortIdEncoder};
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PREFIX: &str = "SHORTID";

/// Configuration of the id encoder.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct ShortIdConfig {
    pub salt: i64,
}

impl Default for ShortIdConfig {
    fn default() -> Self {
        Self {
            salt: Salt::DEFAULT.value(),
        }
    }
}

impl ShortIdConfig {
    /// Load the configuration from an optional json file overridden by the `SHORTID_*` environment
    /// variables.
    pub fn new(path: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path).format(FileFormat::Json).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX));
        Self::from_builder(builder)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder().add_source(File::from_str(json, FileFormat::Json)))
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let s = builder.build()?;
        let cfg: ShortIdConfig = s.try_deserialize()?;

        // fail early on an unusable salt
        cfg.encoder()?;

        log::info!("id encoder configuration: {:#?}", cfg);
        Ok(cfg)
    }

    pub fn encoder(&self) -> Result<ShortIdEncoder, ConfigError> {
        let salt = Salt::new(self.salt).map_err(|err| ConfigError::Message(err.to_string()))?;
        Ok(ShortIdEncoder::new(salt))
    }
}
