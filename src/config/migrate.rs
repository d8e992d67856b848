use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Top-level keys present in the default configuration but missing from the
/// YAML file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let (_, missing) = read_with_defaults(path)?;
    Ok(missing)
}

/// Add every missing key (with its default value) to the config file,
/// keeping the values already set. Returns the keys that were added.
pub fn complete_config(path: &Path) -> AppResult<Vec<String>> {
    let (merged, missing) = read_with_defaults(path)?;

    if missing.is_empty() {
        info("Configuration file is up to date.");
        return Ok(missing);
    }

    let yaml = serde_yaml::to_string(&Value::Mapping(merged))
        .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
    fs::write(path, yaml)?;

    success(format!("Added missing fields: {}", missing.join(", ")));
    Ok(missing)
}

fn read_with_defaults(path: &Path) -> AppResult<(Mapping, Vec<String>)> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let mut current = match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => m,
        Ok(Value::Null) => Mapping::new(),
        Ok(_) => {
            return Err(AppError::Config(format!(
                "{} is not a YAML mapping",
                path.display()
            )));
        }
        Err(e) => {
            return Err(AppError::Config(format!(
                "cannot parse {}: {e}",
                path.display()
            )));
        }
    };

    let defaults = match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(m)) => m,
        _ => return Err(AppError::Config("cannot build default configuration".to_string())),
    };

    let mut missing = Vec::new();
    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(k) = key.as_str() {
                missing.push(k.to_string());
            }
            current.insert(key, value);
        }
    }

    Ok((current, missing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_only_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("worklocation.conf");
        fs::write(&path, "database: /tmp/custom.sqlite\nyear_span: 5\n").unwrap();

        let missing = missing_fields(&path).unwrap();
        assert!(missing.contains(&"locations".to_string()));
        assert!(!missing.contains(&"database".to_string()));

        let added = complete_config(&path).unwrap();
        assert_eq!(added, missing);

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/custom.sqlite");
        assert_eq!(cfg.year_span, 5);
        assert!(missing_fields(&path).unwrap().is_empty());
    }
}
