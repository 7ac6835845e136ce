use std::net::SocketAddr;

use anyhow::{ensure, Context, Result};
use dotenvy::dotenv;

use crate::chat_core::ResponseEngine;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3030";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub listen_addr: SocketAddr,
    /// host:port the browser uses to open the LiveView socket.
    pub reachable_addr: String,
    pub fallback: Option<String>,
}

impl Settings {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Settings> {
        dotenv().ok();
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Settings> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let listen_addr: SocketAddr = listen_addr
            .parse()
            .with_context(|| format!("LISTEN_ADDR is not a socket address: {}", listen_addr))?;

        let reachable_addr = lookup("REACHABLE_ADDR").unwrap_or_else(|| listen_addr.to_string());

        let fallback = fallback_from_lookup(&lookup)?;

        Ok(Settings {
            listen_addr,
            reachable_addr,
            fallback,
        })
    }

    pub fn engine(&self) -> Result<ResponseEngine> {
        match &self.fallback {
            Some(fallback) => ResponseEngine::with_fallback(fallback),
            None => Ok(ResponseEngine::default()),
        }
    }
}

/// Builds the engine from `CHATBOT_FALLBACK` alone, for front ends that
/// never bind a socket.
pub fn engine_from_env() -> Result<ResponseEngine> {
    dotenv().ok();
    engine_from_lookup(|key| std::env::var(key).ok())
}

pub fn engine_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<ResponseEngine> {
    match fallback_from_lookup(&lookup)? {
        Some(fallback) => ResponseEngine::with_fallback(&fallback),
        None => Ok(ResponseEngine::default()),
    }
}

fn fallback_from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Option<String>> {
    let fallback = lookup("CHATBOT_FALLBACK");
    if let Some(fallback) = &fallback {
        ensure!(!fallback.is_empty(), "CHATBOT_FALLBACK must not be empty");
    }
    Ok(fallback)
}
