use std::{env, fs, io::ErrorKind, path::Path};

use anyhow::Result;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE_NAME: &str = "beermap.toml";
const DEFAULT_DATA_URL: &str = "http://localhost:8080/data/data.json";

const ENV_NAME_DATA_URL: &str = "BEERMAP_DATA_URL";
const ENV_NAME_MAP_API_KEY: &str = "BEERMAP_MAP_API_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_url: String,
    pub map_api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    data_url: Option<String>,
    map_api_key: Option<String>,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified, load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config: RawConfig = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found, load default configuration",
                        file_path.display()
                    );
                    RawConfig::default()
                }
                _ => return Err(err.into()),
            },
        };

        let mut cfg = Self::from(raw_config);
        if let Ok(url) = env::var(ENV_NAME_DATA_URL) {
            cfg.data_url = url;
        }
        match env::var(ENV_NAME_MAP_API_KEY) {
            Ok(key) => {
                cfg.map_api_key = Some(key);
            }
            Err(_) => {
                if cfg.map_api_key.is_none() {
                    log::warn!("No map API key found, the map subsystem stays inert");
                }
            }
        }
        Ok(cfg)
    }
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            data_url: raw.data_url.unwrap_or_else(|| DEFAULT_DATA_URL.to_string()),
            map_api_key: raw.map_api_key,
        }
    }
}
