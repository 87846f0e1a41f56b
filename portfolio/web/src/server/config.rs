use serde::Deserialize;

/// Server configuration loaded from environment variables
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address to bind when the Dioxus CLI does not provide one
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind when the Dioxus CLI does not provide one
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        settings.try_deserialize()
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}
