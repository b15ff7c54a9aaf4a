use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;

pub const ENV_REQUIRED: &str = "FLIPT_AUTHORIZATION_REQUIRED";
pub const ENV_CONFIG_PATH: &str = "FLIPT_AUTHORIZATION_CONFIG";

// Authorization settings sourced from environment variables, optionally
// overridden by a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationConfig {
    /// When false, descriptors are still computed but no engine is consulted.
    pub required: bool,
}

#[derive(Debug, Deserialize)]
struct AuthorizationConfigOverride {
    required: Option<bool>,
}

impl AuthorizationConfig {
    pub fn from_env() -> Result<Self> {
        let required = match std::env::var(ENV_REQUIRED) {
            Ok(value) => parse_bool(&value).with_context(|| format!("parse {ENV_REQUIRED}"))?,
            Err(_) => false,
        };
        Ok(Self { required })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read {ENV_CONFIG_PATH}: {path}"))?;
            let override_cfg: AuthorizationConfigOverride = serde_yaml::from_str(&contents)
                .with_context(|| "parse authorization config yaml")?;
            if let Some(value) = override_cfg.required {
                config.required = value;
            }
        }
        Ok(config)
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => bail!("expected true/false/1/0, got {other:?}"),
    }
}
