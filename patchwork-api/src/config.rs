use alloy::primitives::Address;
use patchwork_transport_service::consts;

/// Registered network profiles: (name, env prefix, chain id, default
/// transaction service).
const NETWORKS: &[(&str, &str, u64, &str)] = &[
    ("base", "BASE", 8453, consts::BASE_TX_SERVICE_URL),
    ("sepolia", "SEPOLIA", 11155111, consts::SEPOLIA_TX_SERVICE_URL),
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no configuration registered for network '{0}'")]
    UnknownNetwork(String),
    #[error("missing environment value {0}")]
    MissingValue(String),
    #[error("invalid address in {var}: {value}")]
    InvalidAddress { var: String, value: String },
    #[error("invalid url in {var}: {value}")]
    InvalidUrl { var: String, value: String },
}

/// The resolved deployment the whole pipeline runs against. Resolved once
/// at startup and passed by reference; components never re-resolve it.
#[derive(Debug, Clone)]
pub struct ManagementConfig {
    pub network: String,
    pub chain_id: u64,
    pub rpc_url: String,
    pub safe_address: Address,
    pub contract_address: Address,
    pub tx_service_url: String,
}

impl ManagementConfig {
    pub fn resolve(network: &str) -> Result<Self, ConfigError> {
        let &(name, prefix, chain_id, default_service) = NETWORKS
            .iter()
            .find(|(name, _, _, _)| *name == network)
            .ok_or_else(|| ConfigError::UnknownNetwork(network.to_string()))?;

        let rpc_url = url_env(&format!("{prefix}_RPC_URL"))?;
        let safe_address = address_env(&format!("{prefix}_SAFE_ADDRESS"))?;
        let contract_address = address_env(&format!("{prefix}_PATCHWORK_ADDRESS"))?;

        let service_var = format!("{prefix}_TX_SERVICE_URL");
        let tx_service_url = match std::env::var(&service_var) {
            Ok(v) if !v.trim().is_empty() => {
                validate_url(&service_var, v.trim())?;
                v.trim().to_string()
            }
            _ => default_service.to_string(),
        };

        Ok(Self {
            network: name.to_string(),
            chain_id,
            rpc_url,
            safe_address,
            contract_address,
            tx_service_url,
        })
    }
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ConfigError::MissingValue(var.to_string())),
    }
}

fn validate_url(var: &str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            var: var.to_string(),
            value: value.to_string(),
        })
    }
}

fn url_env(var: &str) -> Result<String, ConfigError> {
    let value = require_env(var)?;
    validate_url(var, &value)?;
    Ok(value)
}

fn address_env(var: &str) -> Result<Address, ConfigError> {
    let value = require_env(var)?;
    patchwork_utils::address::parse_eth_address(&value).map_err(|_| ConfigError::InvalidAddress {
        var: var.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // process env is shared; serialize tests that touch it
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "SEPOLIA_RPC_URL",
        "SEPOLIA_SAFE_ADDRESS",
        "SEPOLIA_PATCHWORK_ADDRESS",
        "SEPOLIA_TX_SERVICE_URL",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    fn set_valid_env() {
        std::env::set_var("SEPOLIA_RPC_URL", "https://rpc.example.org");
        std::env::set_var(
            "SEPOLIA_SAFE_ADDRESS",
            "0xFe794c3918aAF57E85E238370BDc4005cE6E5f39",
        );
        std::env::set_var(
            "SEPOLIA_PATCHWORK_ADDRESS",
            "0x00000000001616E65bb9FdA42dFBb7155406549b",
        );
    }

    #[test]
    fn test_unknown_network() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        assert!(matches!(
            ManagementConfig::resolve("zora"),
            Err(ConfigError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_missing_value() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        assert!(matches!(
            ManagementConfig::resolve("sepolia"),
            Err(ConfigError::MissingValue(_))
        ));
    }

    #[test]
    fn test_invalid_address() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        set_valid_env();
        std::env::set_var("SEPOLIA_SAFE_ADDRESS", "not-an-address");

        assert!(matches!(
            ManagementConfig::resolve("sepolia"),
            Err(ConfigError::InvalidAddress { .. })
        ));
        clear_env();
    }

    #[test]
    fn test_resolves_with_service_default() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        set_valid_env();

        let config = ManagementConfig::resolve("sepolia").unwrap();
        assert_eq!(config.network, "sepolia");
        assert_eq!(config.chain_id, 11155111);
        assert_eq!(config.tx_service_url, consts::SEPOLIA_TX_SERVICE_URL);
        clear_env();
    }
}
