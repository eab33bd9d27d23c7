//! Storefront web frontend: server-rendered catalog views over the remote API.

pub mod app;
pub mod config;
pub mod middleware;
