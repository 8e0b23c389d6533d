use std::env;
use std::net::SocketAddr;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            bind_address,
            log_level,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        self.bind_address.parse::<SocketAddr>().map_err(|_| {
            format!(
                "BIND_ADDRESS must be a valid socket address, got '{}'",
                self.bind_address
            )
        })?;

        Ok(())
    }
}
