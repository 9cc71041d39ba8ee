use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; missing ones fall back to [`AppConfig::default`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let base_url = or_default("CARSCOUT_BASE_URL", &defaults.base_url);
    if base_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "CARSCOUT_BASE_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let request_timeout_secs = parse_u64(
        "CARSCOUT_REQUEST_TIMEOUT_SECS",
        defaults.request_timeout_secs,
    )?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "CARSCOUT_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let search_radius = or_default("CARSCOUT_SEARCH_RADIUS", &defaults.search_radius);
    let excluded_columns = lookup("CARSCOUT_EXCLUDED_COLUMNS")
        .map(|raw| parse_column_list(&raw))
        .unwrap_or_default();
    let log_level = or_default("CARSCOUT_LOG_LEVEL", &defaults.log_level);

    Ok(AppConfig {
        base_url,
        request_timeout_secs,
        search_radius,
        excluded_columns,
        log_level,
    })
}

/// Splits a comma-separated column list, trimming whitespace and skipping
/// blank entries. Duplicates are kept; the exclusion set dedupes them.
#[must_use]
pub fn parse_column_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
