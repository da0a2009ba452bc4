use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3333;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Read `HOST` and `PORT`, falling back to `127.0.0.1:3333`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_values(host: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        let host = match host {
            Some(raw) => raw
                .parse::<IpAddr>()
                .with_context(|| format!("HOST is not a valid IP address: {raw}"))?,
            None => DEFAULT_HOST.parse()?,
        };

        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}
