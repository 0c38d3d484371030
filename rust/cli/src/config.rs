//! Layered configuration: defaults, then the TOML file named by
//! `HILO_CONFIG`, then `HILO_*` environment variables. Command-line flags
//! are applied on top by each command.

use hilo_engine::probability::Weights;
use hilo_engine::rules::Rules;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub decks: u32,
    pub seed: Option<u32>,
    pub count: f64,
    pub double_after_split: bool,
    pub resplit: bool,
    pub dealer_hits_soft_17: bool,
    pub hole_card_peek: bool,
}

impl Config {
    pub fn rules(&self) -> Rules {
        Rules {
            double_after_split: self.double_after_split,
            resplit: self.resplit,
            dealer_hits_soft_17: self.dealer_hits_soft_17,
            hole_card_peek: self.hole_card_peek,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub decks: ValueSource,
    pub seed: ValueSource,
    pub count: ValueSource,
    pub double_after_split: ValueSource,
    pub resplit: ValueSource,
    pub dealer_hits_soft_17: ValueSource,
    pub hole_card_peek: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            decks: ValueSource::Default,
            seed: ValueSource::Default,
            count: ValueSource::Default,
            double_after_split: ValueSource::Default,
            resplit: ValueSource::Default,
            dealer_hits_soft_17: ValueSource::Default,
            hole_card_peek: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decks: 6,
            seed: None,
            count: 0.0,
            double_after_split: false,
            resplit: false,
            dealer_hits_soft_17: false,
            hole_card_peek: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HILO_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.count {
            cfg.count = v;
            sources.count = ValueSource::File;
        }
        if let Some(v) = f.double_after_split {
            cfg.double_after_split = v;
            sources.double_after_split = ValueSource::File;
        }
        if let Some(v) = f.resplit {
            cfg.resplit = v;
            sources.resplit = ValueSource::File;
        }
        if let Some(v) = f.dealer_hits_soft_17 {
            cfg.dealer_hits_soft_17 = v;
            sources.dealer_hits_soft_17 = ValueSource::File;
        }
        if let Some(v) = f.hole_card_peek {
            cfg.hole_card_peek = v;
            sources.hole_card_peek = ValueSource::File;
        }
    }

    if let Ok(decks) = std::env::var("HILO_DECKS")
        && !decks.is_empty()
    {
        cfg.decks = decks
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid decks".into()))?;
        sources.decks = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("HILO_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(count) = std::env::var("HILO_COUNT")
        && !count.is_empty()
    {
        cfg.count = count
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid count".into()))?;
        sources.count = ValueSource::Env;
    }
    if let Some(v) = env_flag("HILO_DAS")? {
        cfg.double_after_split = v;
        sources.double_after_split = ValueSource::Env;
    }
    if let Some(v) = env_flag("HILO_RESPLIT")? {
        cfg.resplit = v;
        sources.resplit = ValueSource::Env;
    }
    if let Some(v) = env_flag("HILO_H17")? {
        cfg.dealer_hits_soft_17 = v;
        sources.dealer_hits_soft_17 = ValueSource::Env;
    }
    if let Some(v) = env_flag("HILO_PEEK")? {
        cfg.hole_card_peek = v;
        sources.hole_card_peek = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    decks: Option<u32>,
    #[serde(default)]
    seed: Option<u32>,
    #[serde(default)]
    count: Option<f64>,
    #[serde(default)]
    double_after_split: Option<bool>,
    #[serde(default)]
    resplit: Option<bool>,
    #[serde(default)]
    dealer_hits_soft_17: Option<bool>,
    #[serde(default)]
    hole_card_peek: Option<bool>,
}

fn env_flag(name: &str) -> Result<Option<bool>, ConfigError> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => parse_bool(&v)
            .map(Some)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid {}", name))),
        _ => Ok(None),
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.decks == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: decks must be >=1".into(),
        ));
    }
    if Weights::from_count(cfg.count).is_err() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: count {} is out of range",
            cfg.count
        )));
    }
    Ok(())
}

pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
