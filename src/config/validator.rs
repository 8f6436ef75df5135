//! Config validation: values that deserialize fine but cannot start a server.

use crate::config::Config;
use crate::error::ConfigError;

pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.storage_path.as_os_str().is_empty() {
        return Err(ConfigError::Missing("storage_path"));
    }
    validate_address(&config.http_server.address)?;
    if config.http_server.shutdown_timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            key: "shutdown_timeout_secs",
            message: "must be greater than 0".into(),
        });
    }
    Ok(())
}

fn validate_address(address: &str) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::Invalid {
        key: "address",
        message: format!("'{}' {}", address, message),
    };
    let (host, port) = address
        .rsplit_once(':')
        .ok_or_else(|| invalid("must be host:port"))?;
    if host.is_empty() {
        return Err(invalid("has an empty host"));
    }
    port.parse::<u16>().map_err(|_| invalid("has an invalid port"))?;
    Ok(())
}
