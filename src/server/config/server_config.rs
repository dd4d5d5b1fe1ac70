use crate::config::Config;

/// Listen address of the wiki server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1", "0.0.0.0")
    pub address: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig::from_config(&Config::default())
    }
}

impl ServerConfig {
    pub fn new(address: &str, port: u16) -> Self {
        ServerConfig {
            address: address.to_string(),
            port,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.host, config.port)
    }

    /// Get the full address string (e.g., "127.0.0.1:8080")
    pub fn address_string(&self) -> String {
        if self.address.contains(':') {
            format!("[{}]:{}", self.address, self.port)
        } else {
            format!("{}:{}", self.address, self.port)
        }
    }

    /// Get the URL to browse the wiki at (e.g., "http://localhost:8080/")
    pub fn url(&self) -> String {
        let address = if self.address == "127.0.0.1" {
            "localhost".to_string()
        } else if self.address.contains(':') {
            format!("[{}]", self.address)
        } else {
            self.address.clone()
        };

        format!("http://{}:{}/", address, self.port)
    }
}
