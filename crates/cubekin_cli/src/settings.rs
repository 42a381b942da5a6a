use std::path::Path;

use cubekin::{Move, SolverAlphabet};
use eyre::{Context, Result};
use serde::Deserialize;

const SETTINGS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_SETTINGS_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "CUBEKIN";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub scramble: ScrambleSettings,
    pub alphabet: SolverAlphabet,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScrambleSettings {
    pub length: u32,
    pub moves: Vec<Move>,
}

impl Settings {
    /// Loads the built-in defaults, then `user_file` if there is one, then
    /// environment variables such as `CUBEKIN_SCRAMBLE__LENGTH`.
    pub fn load(user_file: Option<&Path>) -> Result<Self> {
        let mut config = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_SETTINGS_STR,
            SETTINGS_FILE_FORMAT,
        ));

        if let Some(path) = user_file {
            log::debug!("loading settings from {}", path.display());
            config = config.add_source(config::File::from(path).format(SETTINGS_FILE_FORMAT));
        }

        config = config.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        config
            .build()
            .context("error reading settings")?
            .try_deserialize()
            .context("error loading settings")
    }
}
