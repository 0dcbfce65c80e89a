use domain_request::model::vo::TransitionPolicy;
use serde::Deserialize;
use service_request::DEFAULT_EMPLOYEE_ID_ATTEMPTS;

use super::telemetry::TelemetryConfig;

const CONFIG_FILE: &str = "config";
const CONFIG_ENV_PREFIX: &str = "RTS";
const CONFIG_ENV_SEPARATOR: &str = "__";

#[derive(Default, Clone, Deserialize, Debug)]
pub struct RtsConfig {
    #[serde(default, flatten)]
    pub common: CommonConfig,
    #[serde(default)]
    pub request: RequestConfig,
}

#[derive(Default, Clone, Deserialize, Debug)]
pub struct CommonConfig {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub db: DatabaseConfig,
    #[serde(default)]
    pub host: HostConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct HostConfig {
    #[serde(default = "HostConfig::default_address")]
    pub bind_address: String,
    #[serde(default = "HostConfig::default_port")]
    pub bind_port: u16,
}

impl HostConfig {
    fn default_address() -> String {
        "0.0.0.0".to_string()
    }
    fn default_port() -> u16 {
        5000
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: Self::default_address(),
            bind_port: Self::default_port(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseConfig::default_url")]
    pub url: String,
    #[serde(default = "DatabaseConfig::default_max_connections")]
    pub max_connections: u32,
    /// Run pending migrations once before serving
    #[serde(default = "DatabaseConfig::default_auto_migrate")]
    pub auto_migrate: bool,
}

impl DatabaseConfig {
    fn default_url() -> String {
        "sqlite:///tmp/app.db?mode=rwc".to_string()
    }
    fn default_max_connections() -> u32 {
        10
    }
    fn default_auto_migrate() -> bool {
        true
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            max_connections: Self::default_max_connections(),
            auto_migrate: Self::default_auto_migrate(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct RequestConfig {
    #[serde(default)]
    pub transition_policy: TransitionPolicy,
    #[serde(default = "RequestConfig::default_employee_id_attempts")]
    pub employee_id_attempts: usize,
}

impl RequestConfig {
    fn default_employee_id_attempts() -> usize {
        DEFAULT_EMPLOYEE_ID_ATTEMPTS
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            transition_policy: Default::default(),
            employee_id_attempts: Self::default_employee_id_attempts(),
        }
    }
}

/// Layers `config.yaml`, yaml files named on the command line and `RTS__*` variables.
pub fn build_config() -> anyhow::Result<config::Config> {
    let mut config = config::Config::builder().add_source(
        config::File::with_name(CONFIG_FILE)
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    for arg in std::env::args().skip(1) {
        if arg.ends_with("yaml") || arg.ends_with("yml") {
            config = config.add_source(
                config::File::from(std::path::Path::new(arg.as_str()))
                    .format(config::FileFormat::Yaml)
                    .required(false),
            );
        }
    }
    config = config.add_source(
        config::Environment::with_prefix(CONFIG_ENV_PREFIX)
            .separator(CONFIG_ENV_SEPARATOR)
            .try_parsing(true),
    );
    Ok(config.build()?)
}
