use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_host")]
    pub listen_host: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    #[serde(default = "default_kubectl_path")]
    pub kubectl_path: String,
    #[serde(default = "default_command_timeout_secs")]
    pub command_timeout_secs: u64,
    #[serde(default = "default_recent_events")]
    pub recent_events: usize,
}

fn default_listen_host() -> String {
    "127.0.0.1".to_string()
}

fn default_listen_port() -> u16 {
    9000
}

fn default_kubectl_path() -> String {
    "kubectl".to_string()
}

fn default_command_timeout_secs() -> u64 {
    5
}

fn default_recent_events() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_host: default_listen_host(),
            listen_port: default_listen_port(),
            kubectl_path: default_kubectl_path(),
            command_timeout_secs: default_command_timeout_secs(),
            recent_events: default_recent_events(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("reading config {}: {}", path.display(), e))?;
        Self::from_yaml(&data)
    }

    pub fn from_yaml(data: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let cfg: Config =
            serde_yaml::from_str(data).map_err(|e| format!("parsing config: {}", e))?;

        if cfg.kubectl_path.trim().is_empty() {
            return Err("kubectl_path must not be empty".into());
        }
        if cfg.command_timeout_secs == 0 {
            return Err("command_timeout_secs must be greater than zero".into());
        }

        Ok(cfg)
    }

    /// Applies the positional port argument, if any.
    pub fn with_port_arg(mut self, arg: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(raw) = arg {
            self.listen_port = raw
                .parse()
                .map_err(|e| format!("invalid port {:?}: {}", raw, e))?;
        }
        Ok(self)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.listen_port)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}
