//! Server Configuration
//!
//! Read from the process environment after `.env` has been loaded.

use anyhow::Context;
use axum::http::HeaderValue;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use withdrawal::WithdrawalConfig;

const DEFAULT_PORT: u16 = 31113;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub allowed_origins: Vec<HeaderValue>,
    pub withdrawal: WithdrawalConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host: IpAddr = match lookup("API_HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("API_HOST is not an IP address: {raw}"))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port: u16 = match lookup("API_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("API_PORT is not a port number: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let frontend_origins =
            lookup("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string());

        let allowed_origins: Vec<HeaderValue> = frontend_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| origin.parse().ok())
            .collect();

        let withdrawal = match lookup("WITHDRAW_MAX_NOTES") {
            Some(raw) => {
                let max_notes: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("WITHDRAW_MAX_NOTES is not a count: {raw}"))?;
                anyhow::ensure!(max_notes > 0, "WITHDRAW_MAX_NOTES must be positive");
                WithdrawalConfig::with_max_notes(max_notes)
            }
            None => WithdrawalConfig::default(),
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            allowed_origins,
            withdrawal,
        })
    }
}
