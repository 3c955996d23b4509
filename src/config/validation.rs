use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - `mobile_api` and `del_api` must be non-empty http(s) URLs
/// - `base_url` and `pennydel_url`, when set, must be http(s) URLs
/// - device id cannot be empty and the HTTP timeout must be positive
/// - roster side keys must be non-empty and distinct
/// - if a log file path is provided, its parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_url("mobile_api", &config.urls.mobile_api)?;
    validate_url("del_api", &config.urls.del_api)?;
    if let Some(base_url) = &config.urls.base_url {
        validate_url("base_url", base_url)?;
    }
    if let Some(pennydel_url) = &config.urls.pennydel_url {
        validate_url("pennydel_url", pennydel_url)?;
    }

    if config.device_id.trim().is_empty() {
        return Err(AppError::config_error("Device id cannot be empty"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(shift_name) = &config.shifts.shift_name
        && shift_name.trim().is_empty()
    {
        return Err(AppError::config_error("Shift resource name cannot be empty"));
    }

    let keys = &config.roster;
    if keys.home.is_empty() || keys.visitor.is_empty() {
        return Err(AppError::config_error("Roster side keys cannot be empty"));
    }
    if keys.home == keys.visitor {
        return Err(AppError::config_error(format!(
            "Roster side keys must differ (both are '{}')",
            keys.home
        )));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_url(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{name} must start with http:// or https:// (got '{value}')"
        )));
    }
    Ok(())
}
