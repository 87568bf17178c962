use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

pub const SCRIPT_ENV_VAR: &str = "REGISTRY_SCRIPT";
pub const LOG_ENV_VAR: &str = "REGISTRY_LOG";
pub const FAIL_FAST_ENV_VAR: &str = "REGISTRY_FAIL_FAST";

const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration for the script driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// JSON-lines script to run; stdin when absent
    pub script_path: Option<PathBuf>,
    /// tracing filter directive
    pub log_filter: String,
    /// Stop at the first failing line
    pub fail_fast: bool,
    /// Fallbacks taken while loading, logged once tracing is up
    pub warnings: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            script_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            fail_fast: false,
            warnings: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Loads configuration from the process environment
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file. Fallbacks are
    /// collected in `warnings` rather than logged, since this usually runs
    /// before the subscriber is installed.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let script_path = lookup(SCRIPT_ENV_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let log_filter = match lookup(LOG_ENV_VAR).filter(|filter| !filter.trim().is_empty()) {
            None => defaults.log_filter,
            Some(filter) => match EnvFilter::try_new(&filter) {
                Ok(_) => filter,
                Err(e) => {
                    warnings.push(format!(
                        "{} has invalid filter {:?} ({}), using {}",
                        LOG_ENV_VAR, filter, e, defaults.log_filter
                    ));
                    defaults.log_filter
                }
            },
        };

        let fail_fast = match lookup(FAIL_FAST_ENV_VAR) {
            None => defaults.fail_fast,
            Some(value) => parse_flag(&value).unwrap_or_else(|| {
                warnings.push(format!(
                    "{} has unrecognized value {:?}, using {}",
                    FAIL_FAST_ENV_VAR, value, defaults.fail_fast
                ));
                defaults.fail_fast
            }),
        };

        Self {
            script_path,
            log_filter,
            fail_fast,
            warnings,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
