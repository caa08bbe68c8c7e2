//
// Copyright (c) 2026 Nathan Fiedler
//

//! Address on which the server listens. The leptos configuration supplies
//! the default; `HOST` and `PORT` in the environment take precedence.

use std::env;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use thiserror::Error;

/// Problems with the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOST must be an IP address or localhost, not {value:?}")]
    InvalidHost {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("PORT must be a number from 0 to 65535, not {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

///
/// Apply the optional host and port overrides to the default address.
/// Empty values are treated as absent.
///
pub fn resolve_address(
    host: Option<&str>,
    port: Option<&str>,
    default: SocketAddr,
) -> Result<SocketAddr, ConfigError> {
    let mut addr = default;
    if let Some(value) = host.map(str::trim).filter(|v| !v.is_empty()) {
        let ip = if value.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            value
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost {
                    value: value.to_owned(),
                    source,
                })?
        };
        addr.set_ip(ip);
    }
    if let Some(value) = port.map(str::trim).filter(|v| !v.is_empty()) {
        let number = value
            .parse::<u16>()
            .map_err(|source| ConfigError::InvalidPort {
                value: value.to_owned(),
                source,
            })?;
        addr.set_port(number);
    }
    Ok(addr)
}

/// Resolve the server address using `HOST` and `PORT` from the environment.
pub fn server_address(default: SocketAddr) -> Result<SocketAddr, ConfigError> {
    let host = env::var("HOST").ok();
    let port = env::var("PORT").ok();
    resolve_address(host.as_deref(), port.as_deref(), default)
}
