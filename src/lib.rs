pub mod config;
pub mod sender;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid destination address: {0}")]
    Address(#[from] std::net::AddrParseError),
    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),
}
