//! Scaffold configuration loading from the application base path.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::domain::{AppError, CONFIG_FILE, ScaffoldConfig};

/// Load `vgen.toml` from `app_base_path`, falling back to defaults when absent.
pub fn load_config(app_base_path: &Path) -> Result<ScaffoldConfig, AppError> {
    let config_path = app_base_path.join(CONFIG_FILE);
    if !config_path.is_file() {
        return Ok(ScaffoldConfig::default());
    }

    let content = fs::read_to_string(&config_path)?;
    parse_config_content(&content)
}

pub fn parse_config_content(content: &str) -> Result<ScaffoldConfig, AppError> {
    let config: ScaffoldConfig = toml::from_str(content)?;

    if config.view_extension.is_empty() {
        return Err(AppError::config_error("view_extension cannot be empty"));
    }
    if config.views_folder.trim().is_empty() {
        return Err(AppError::config_error("views_folder cannot be empty"));
    }
    if config.generator_name.trim().is_empty() {
        return Err(AppError::config_error("generator_name cannot be empty"));
    }

    let mut seen = HashSet::new();
    for library in &config.libraries {
        if library.name.trim().is_empty() {
            return Err(AppError::config_error("library name cannot be empty"));
        }
        if !seen.insert(library.name.as_str()) {
            return Err(AppError::config_error(format!(
                "Duplicate library entry '{}'",
                library.name
            )));
        }
    }

    Ok(config)
}
