use std::env;
use std::fs;
use std::net::{IpAddr, SocketAddr};

use dotenvy::dotenv;
use serde::{Deserialize, Serialize};

use crate::ClientError;

// Destination and payload used when nothing overrides them.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 2333;
pub const DEFAULT_PAYLOAD: &str = "Hello, libcoevent from python UDP";

// Environment variables recognized as overrides.
pub const ENV_ADDRESS: &str = "UDP_CLIENT_ADDRESS";
pub const ENV_PORT: &str = "UDP_CLIENT_PORT";
pub const ENV_PAYLOAD: &str = "UDP_CLIENT_PAYLOAD";
pub const ENV_CONFIG_FILE: &str = "UDP_CLIENT_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ClientConfig {
    pub address: String,
    pub port: u16,
    pub payload: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            payload: DEFAULT_PAYLOAD.to_string(),
        }
    }
}

impl ClientConfig {
    // Effective configuration for the process: a JSON file when
    // UDP_CLIENT_CONFIG names one, otherwise the environment overrides.
    pub fn load() -> Result<Self, ClientError> {
        dotenv().ok();
        match env::var(ENV_CONFIG_FILE) {
            Ok(path) => Self::from_file(&path),
            Err(_) => Self::from_env(),
        }
    }

    // Defaults with any recognized environment variable applied on top.
    pub fn from_env() -> Result<Self, ClientError> {
        let mut config = ClientConfig::default();
        if let Ok(address) = env::var(ENV_ADDRESS) {
            config.address = address;
        }
        if let Ok(port) = env::var(ENV_PORT) {
            config.port = port.trim().parse().map_err(|_| {
                ClientError::Config(format!("{} is not a valid port: {}", ENV_PORT, port))
            })?;
        }
        if let Ok(payload) = env::var(ENV_PAYLOAD) {
            config.payload = payload;
        }
        Ok(config)
    }

    // JSON document with the recognized keys; missing keys keep their defaults.
    pub fn from_file(path: &str) -> Result<Self, ClientError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("Failed to read {}: {}", path, e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| ClientError::Config(format!("Failed to parse {}: {}", path, e)))
    }

    // Strict IP literal plus port; no name resolution is attempted.
    pub fn endpoint(&self) -> Result<SocketAddr, ClientError> {
        let ip: IpAddr = self.address.trim().parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
