use std::env;

use thiserror::Error;

use crate::constants::{defaults, envvars};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing API credential; {0} must be set and non-empty")]
    MissingCredential(&'static str),
}

/// The full set of settings handed to the worker process. Built once at
/// startup from the environment and immutable afterwards. All values are
/// kept as strings; the worker parses whatever it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub region: String,
    pub api_key: String,
    pub api_secret: String,
    pub device_id: String,
    pub mqtt_broker: String,
    pub mqtt_port: String,
    pub mongo_uri: String,
    pub mongo_db: String,
    pub mongo_collection: String,
}

fn var_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            region: var_or(envvars::TUYA_REGION, defaults::TUYA_REGION),
            api_key: var_or(envvars::TUYA_API_KEY, ""),
            api_secret: var_or(envvars::TUYA_API_SECRET, ""),
            device_id: var_or(envvars::TUYA_DEVICE_ID, defaults::TUYA_DEVICE_ID),
            mqtt_broker: var_or(envvars::MQTT_BROKER, defaults::MQTT_BROKER),
            mqtt_port: var_or(envvars::MQTT_PORT, defaults::MQTT_PORT),
            mongo_uri: var_or(envvars::MONGO_URI, ""),
            mongo_db: var_or(envvars::MONGO_DB, defaults::MONGO_DB),
            mongo_collection: var_or(envvars::MONGO_COLLECTION, defaults::MONGO_COLLECTION),
        }
    }

    /// Only the two cloud API credentials are mandatory here; everything
    /// else is validated by the worker if and when it needs it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingCredential(envvars::TUYA_API_KEY));
        }
        if self.api_secret.is_empty() {
            return Err(ConfigError::MissingCredential(envvars::TUYA_API_SECRET));
        }
        Ok(())
    }

    /// The key/value pairs set on the worker's environment at spawn time.
    pub fn to_env(&self) -> [(&'static str, &str); 9] {
        [
            (envvars::TUYA_REGION, &self.region),
            (envvars::TUYA_API_KEY, &self.api_key),
            (envvars::TUYA_API_SECRET, &self.api_secret),
            (envvars::TUYA_DEVICE_ID, &self.device_id),
            (envvars::MQTT_BROKER, &self.mqtt_broker),
            (envvars::MQTT_PORT, &self.mqtt_port),
            (envvars::MONGO_URI, &self.mongo_uri),
            (envvars::MONGO_DB, &self.mongo_db),
            (envvars::MONGO_COLLECTION, &self.mongo_collection),
        ]
    }

    pub fn print_summary(&self) {
        println!("{}", "=".repeat(60));
        println!("Tuya Cloud → MQTT Bridge");
        println!("{}", "=".repeat(60));
        println!("Region: {}", self.region);
        println!("Device ID: {}", self.device_id);
        println!("MQTT Broker: {}:{}", self.mqtt_broker, self.mqtt_port);
        println!("MongoDB: {}/{}", self.mongo_db, self.mongo_collection);
        println!("{}", "=".repeat(60));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 9] = [
        envvars::TUYA_REGION,
        envvars::TUYA_API_KEY,
        envvars::TUYA_API_SECRET,
        envvars::TUYA_DEVICE_ID,
        envvars::MQTT_BROKER,
        envvars::MQTT_PORT,
        envvars::MONGO_URI,
        envvars::MONGO_DB,
        envvars::MONGO_COLLECTION,
    ];

    fn sample_config() -> Config {
        Config {
            region: "sg".into(),
            api_key: "pq7h5aw3q99qp9rnkfa3".into(),
            api_secret: "e7b1d65f2d7a48d6ac2acbffb8677594".into(),
            device_id: "a316b14c8d5efb6070abkd".into(),
            mqtt_broker: "localhost".into(),
            mqtt_port: "1883".into(),
            mongo_uri: String::new(),
            mongo_db: "smart_office".into(),
            mongo_collection: "device_raw_data".into(),
        }
    }

    #[test]
    fn defaults_apply_when_env_unset() {
        temp_env::with_vars_unset(ALL_VARS, || {
            let config = Config::from_env();
            assert_eq!(config.region, "sg");
            assert_eq!(config.api_key, "");
            assert_eq!(config.api_secret, "");
            assert_eq!(config.device_id, "a316b14c8d5efb6070abkd");
            assert_eq!(config.mqtt_broker, "localhost");
            assert_eq!(config.mqtt_port, "1883");
            assert_eq!(config.mongo_uri, "");
            assert_eq!(config.mongo_db, "smart_office");
            assert_eq!(config.mongo_collection, "device_raw_data");
        });
    }

    #[test]
    fn env_vars_override_defaults() {
        temp_env::with_vars(
            [
                (envvars::TUYA_REGION, Some("eu")),
                (envvars::MQTT_BROKER, Some("broker.example.com")),
                (envvars::MQTT_PORT, Some("8883")),
            ],
            || {
                let config = Config::from_env();
                assert_eq!(config.region, "eu");
                assert_eq!(config.mqtt_broker, "broker.example.com");
                assert_eq!(config.mqtt_port, "8883");
            },
        );
    }

    #[test]
    fn validate_rejects_empty_api_key() {
        let config = Config {
            api_key: String::new(),
            ..sample_config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingCredential(envvars::TUYA_API_KEY))
        );
    }

    #[test]
    fn validate_rejects_empty_api_secret() {
        let config = Config {
            api_secret: String::new(),
            ..sample_config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingCredential(envvars::TUYA_API_SECRET))
        );
    }

    #[test]
    fn validate_passes_with_both_credentials() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn to_env_covers_all_nine_keys() {
        let config = sample_config();
        let env = config.to_env();
        assert_eq!(env.len(), 9);
        for var in ALL_VARS {
            assert!(env.iter().any(|(k, _)| *k == var), "missing {var}");
        }
    }
}
