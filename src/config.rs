//! Host configuration read from the process environment.
//!
//! Unset or blank variables fall back to defaults; malformed values are
//! startup errors rather than silent fallbacks.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const PORT_VAR: &str = "PORT";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: String, value: String },

    #[error("invalid {var}: {value:?} is not an IP address")]
    InvalidBindAddr { var: String, value: String },
}

/// Where the SSR host listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Read `BIND_ADDR` and `PORT`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(BIND_ADDR_VAR, PORT_VAR)
    }

    fn from_vars(bind_addr_var: &str, port_var: &str) -> Result<Self, ConfigError> {
        let bind_addr = parse_bind_addr(bind_addr_var, std::env::var(bind_addr_var).ok().as_deref())?;
        let port = parse_port(port_var, std::env::var(port_var).ok().as_deref())?;
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(var: &str, raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(v) => v
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { var: var.to_owned(), value: v.to_owned() }),
    }
}

fn parse_bind_addr(var: &str, raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_BIND_ADDR),
        Some(v) => v
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr { var: var.to_owned(), value: v.to_owned() }),
    }
}
