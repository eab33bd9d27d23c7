//! Runtime configuration, read once at startup from the environment.

use core::num::NonZeroUsize;
use std::net::SocketAddr;

use anyhow::Context;

use storefront_client::DEFAULT_API_URL;
use storefront_products::{DEFAULT_PAGE_SIZE, Paginator};

pub const ENV_API_URL: &str = "STOREFRONT_API_URL";
pub const ENV_BIND_ADDR: &str = "STOREFRONT_BIND_ADDR";
pub const ENV_PAGE_SIZE: &str = "STOREFRONT_PAGE_SIZE";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub bind_addr: SocketAddr,
    pub api_url: String,
    pub page_size: NonZeroUsize,
}

impl WebConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get(ENV_BIND_ADDR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("{ENV_BIND_ADDR} must be a socket address like 127.0.0.1:8080"))?;

        let api_url = match get(ENV_API_URL) {
            Some(url) => url.trim().to_string(),
            None => {
                tracing::info!("{ENV_API_URL} not set; using {DEFAULT_API_URL}");
                DEFAULT_API_URL.to_string()
            }
        };

        let page_size = match get(ENV_PAGE_SIZE) {
            Some(raw) => {
                let requested = raw
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("{ENV_PAGE_SIZE} must be a positive integer, got {raw:?}"))?;
                Paginator::with_page_size(requested)
                    .with_context(|| format!("{ENV_PAGE_SIZE} must be a positive integer, got {raw:?}"))?
                    .page_size()
            }
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            bind_addr,
            api_url,
            page_size,
        })
    }
}
