//! Host configuration.
//!
//! DESIGN
//! ======
//! Build/serve options come from `[package.metadata.leptos]` (loaded in
//! `routes::load_options`). The listen address starts from the Leptos
//! `site-addr` port and can be overridden from the environment:
//! - `PORT`: listen port
//! - `BIND_ADDR`: listen IP (default `0.0.0.0`)
//!
//! Unparseable values fall back to the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

// =============================================================================
// SERVER CONFIG
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env(site_addr: SocketAddr) -> Self {
        Self::resolve(site_addr, |key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    fn resolve<F>(site_addr: SocketAddr, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let ip = parse_or(lookup("BIND_ADDR"), DEFAULT_BIND_ADDR);
        let port = parse_or(lookup("PORT"), site_addr.port());
        Self { addr: SocketAddr::new(ip, port) }
    }
}

fn parse_or<T>(raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr,
{
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}
