//! Runtime configuration read from the environment (and `.env`, when present).

use std::env;
use std::str::FromStr;
use std::time::Duration;
use once_cell::sync::Lazy;
use dotenvy::dotenv;
use crate::domain::AdminSettings;
use crate::recommend::ComplementRules;
use super::ConfigError;

// Load `.env` once; a missing file is not an error.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv();
});

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Settings the settings service starts with.
    pub settings: AdminSettings,
    pub complement_rules: ComplementRules,
    pub actor_buffer: usize,
    /// Simulated kitchen time between accepting and completing an order.
    pub prep_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            settings: AdminSettings::default(),
            complement_rules: ComplementRules::cafe_defaults(),
            actor_buffer: 32,
            prep_delay: Duration::from_millis(2000),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(rate) = parse_var(&lookup, "CAFE_VAT_RATE")? {
            config.settings.vat_rate = rate;
        }
        if let Some(fee) = parse_var(&lookup, "CAFE_DELIVERY_FEE")? {
            config.settings.delivery_fee = fee;
        }
        if let Some(email) = lookup("CAFE_OWNER_EMAIL") {
            config.settings.owner_email = email;
        }
        if let Some(raw) = lookup("CAFE_CATEGORIES") {
            config.settings.categories = raw
                .split(',')
                .map(|c| c.trim().to_uppercase())
                .filter(|c| !c.is_empty())
                .collect();
        }
        if let Some(raw) = lookup("CAFE_COMPLEMENT_RULES") {
            config.complement_rules = ComplementRules::parse(&raw)?;
        }
        if let Some(buffer) = parse_var::<usize>(&lookup, "CAFE_ACTOR_BUFFER")? {
            if buffer == 0 {
                return Err(ConfigError::Invalid { key: "CAFE_ACTOR_BUFFER", value: "0".to_string() });
            }
            config.actor_buffer = buffer;
        }
        if let Some(ms) = parse_var::<u64>(&lookup, "CAFE_PREP_DELAY_MS")? {
            config.prep_delay = Duration::from_millis(ms);
        }

        config.settings.validate().map_err(|reason| ConfigError::Invalid {
            key: "CAFE_*",
            value: reason,
        })?;
        Ok(config)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
