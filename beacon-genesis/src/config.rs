//! Named consensus parameters as found in a `config.yaml` of a network
//! definition.

use std::{collections::BTreeMap, fmt, fs, path::Path, str::FromStr};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid value of {key}: expected {expected}, got {value}")]
    InvalidValue {
        key: String,
        expected: &'static str,
        value: String,
    },
}

/// A scalar configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Number(u64),
    Text(String),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<u64> for ConfigValue {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Immutable map of upper-case parameter names to their values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    values: BTreeMap<String, ConfigValue>,
}

impl Config {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let raw: BTreeMap<String, serde_yaml::Value> = match source.trim().is_empty() {
            true => BTreeMap::new(),
            false => serde_yaml::from_str(source)?,
        };

        let mut values = BTreeMap::new();
        for (key, value) in raw {
            let value = match value {
                serde_yaml::Value::Number(number) => match number.as_u64() {
                    Some(number) => ConfigValue::Number(number),
                    None => ConfigValue::Text(number.to_string()),
                },
                serde_yaml::Value::String(text) => ConfigValue::Text(text),
                serde_yaml::Value::Bool(flag) => ConfigValue::Text(flag.to_string()),
                other => {
                    log::debug!("Skipping non-scalar configuration key {key}: {other:?}");
                    continue;
                }
            };

            values.insert(key, value);
        }

        Ok(Self { values })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_yaml_str(&source)
    }

    /// Returns a copy of the configuration with `key` set to `value`.
    pub fn with_value(mut self, key: &str, value: impl Into<ConfigValue>) -> Self {
        self.values.insert(key.to_string(), value.into());

        self
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Integer value of `key`. Decimal and `0x`-prefixed hexadecimal strings
    /// are accepted as well.
    pub fn get_uint(&self, key: &str) -> Result<Option<u64>, ConfigError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };

        let parsed = match value {
            ConfigValue::Number(number) => Some(*number),
            ConfigValue::Text(text) => {
                let text = text.trim();
                match text.strip_prefix("0x") {
                    Some(hex) => u64::from_str_radix(hex, 16).ok(),
                    None => u64::from_str(text).ok(),
                }
            }
        };

        parsed
            .map(Some)
            .ok_or_else(|| invalid_value(key, "an unsigned integer", value))
    }

    pub fn get_uint_or(&self, key: &str, default: u64) -> Result<u64, ConfigError> {
        Ok(self.get_uint(key)?.unwrap_or(default))
    }

    pub fn get_usize_or(&self, key: &str, default: usize) -> Result<usize, ConfigError> {
        let Some(value) = self.get_uint(key)? else {
            return Ok(default);
        };

        usize::try_from(value).map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            expected: "a collection size",
            value: value.to_string(),
        })
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }

    /// Bytes of a `0x`-prefixed hexadecimal string.
    pub fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };

        let ConfigValue::Text(text) = value else {
            return Err(invalid_value(key, "a 0x-prefixed hex string", value));
        };

        let text = text.trim();
        let text = text.strip_prefix("0x").unwrap_or(text);

        hex::decode(text)
            .map(Some)
            .map_err(|_| invalid_value(key, "a 0x-prefixed hex string", value))
    }

    /// Exactly `N` bytes of `key`.
    ///
    /// YAML reads unquoted `0x05000000` as an integer, so integers that fit
    /// into `N` bytes are accepted as their big-endian representation.
    pub fn get_fixed_bytes_or<const N: usize>(
        &self,
        key: &str,
        default: [u8; N],
    ) -> Result<[u8; N], ConfigError> {
        let Some(value) = self.get(key) else {
            return Ok(default);
        };

        let expected = "a fixed-size byte string";
        match value {
            ConfigValue::Number(number) => {
                let bytes = number.to_be_bytes();
                let split = bytes.len().saturating_sub(N);
                if N > bytes.len() || bytes[..split].iter().any(|byte| *byte != 0) {
                    return Err(invalid_value(key, expected, value));
                }

                let mut result = [0u8; N];
                result.copy_from_slice(&bytes[split..]);

                Ok(result)
            }
            ConfigValue::Text(_) => self
                .get_bytes(key)?
                .and_then(|bytes| <[u8; N]>::try_from(bytes).ok())
                .ok_or_else(|| invalid_value(key, expected, value)),
        }
    }
}

fn invalid_value(key: &str, expected: &'static str, value: &ConfigValue) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        expected,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
PRESET_BASE: 'mainnet'
CONFIG_NAME: testnet
MIN_GENESIS_TIME: 1695902100
GENESIS_DELAY: 300
GENESIS_FORK_VERSION: 0x10000038
ELECTRA_FORK_VERSION: "0x60000038"
ELECTRA_FORK_EPOCH: 0
DENEB_FORK_EPOCH: 18446744073709551615
TEE_VENDOR: "2"
BLOB_SCHEDULE:
  - EPOCH: 0
    MAX_BLOBS_PER_BLOCK: 9
"#;

    #[test]
    fn parses_consensus_config() {
        let config = Config::from_yaml_str(CONFIG).unwrap();

        assert_eq!(config.get_uint("MIN_GENESIS_TIME").unwrap(), Some(1695902100));
        assert_eq!(config.get_uint("TEE_VENDOR").unwrap(), Some(2));
        assert_eq!(config.get_uint("DENEB_FORK_EPOCH").unwrap(), Some(u64::MAX));
        assert_eq!(config.get_uint("SLOTS_PER_EPOCH").unwrap(), None);
        assert_eq!(config.get_string("CONFIG_NAME").as_deref(), Some("testnet"));
        assert!(config.get("BLOB_SCHEDULE").is_none());
    }

    #[test]
    fn fork_versions_from_integers_and_strings() {
        let config = Config::from_yaml_str(CONFIG).unwrap();

        assert_eq!(
            config.get_fixed_bytes_or("GENESIS_FORK_VERSION", [0; 4]).unwrap(),
            [0x10, 0x00, 0x00, 0x38]
        );
        assert_eq!(
            config.get_fixed_bytes_or("ELECTRA_FORK_VERSION", [0; 4]).unwrap(),
            [0x60, 0x00, 0x00, 0x38]
        );
        assert_eq!(
            config.get_fixed_bytes_or("DENEB_FORK_VERSION", [4, 0, 0, 0]).unwrap(),
            [4, 0, 0, 0]
        );
        assert!(config
            .get_fixed_bytes_or::<4>("DENEB_FORK_EPOCH", [0; 4])
            .is_err());
    }

    #[test]
    fn invalid_integers() {
        let config = Config::default().with_value("TEE_VENDOR", "sev");

        assert!(matches!(
            config.get_uint("TEE_VENDOR"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(config.get_uint_or("TEE_VENDOR", 1).is_err());
        assert_eq!(config.get_uint_or("MIN_GENESIS_TIME", 1).unwrap(), 1);
    }
}
