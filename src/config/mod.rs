use crate::errors::{AppError, AppResult};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

pub const DEFAULT_STYLESHEET: &str = "https://classless.de/classless.css";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: String,
    /// First ISO year seeded into `Week` by `init`; `None` means last year.
    pub start_year: Option<i32>,
    /// Number of consecutive years seeded by `init`.
    pub year_span: u32,
    /// Initial location vocabulary.
    pub locations: Vec<String>,
    pub recent_days: usize,
    pub report_file: String,
    pub stylesheet: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            start_year: None,
            year_span: 3,
            locations: vec!["office".to_string(), "remote".to_string()],
            recent_days: crate::db::queries::DEFAULT_RECENT_DAYS,
            report_file: "ytd_location_report.html".to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.worklocation`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".worklocation")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklocation.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worklocation.sqlite")
    }

    /// Year range `[start, end)` seeded into `Week`.
    pub fn week_span(&self, today_year: i32) -> AppResult<(i32, i32)> {
        let start = self.start_year.unwrap_or(today_year - 1);
        let end = i32::try_from(self.year_span)
            .ok()
            .and_then(|span| start.checked_add(span))
            .ok_or_else(|| {
                AppError::Config(format!(
                    "year_span {} from {start} is out of range",
                    self.year_span
                ))
            })?;
        Ok((start, end))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Create the config directory, the config file (unless `is_test`) and an
    /// empty database file. Returns the configuration that was set up.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Self::load().unwrap_or_default();

        // DB name: user provided (relative to the config dir) or default
        if let Some(name) = custom_db {
            let p = Path::new(&name);
            let db_path = if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            };
            config.database = db_path.to_string_lossy().to_string();
        }

        if config.start_year.is_none() {
            config.start_year = Some(chrono::Local::now().year() - 1);
        }

        if !is_test {
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        let db_path = PathBuf::from(&config.database);
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\nyear_span: 4\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.year_span, 4);
        assert_eq!(cfg.recent_days, 15);
        assert_eq!(cfg.locations, vec!["office", "remote"]);
        assert_eq!(cfg.stylesheet, DEFAULT_STYLESHEET);
    }

    #[test]
    fn week_span_defaults_to_three_years_from_last_year() {
        let cfg = Config::default();
        assert_eq!(cfg.week_span(2025).unwrap(), (2024, 2027));

        let cfg = Config {
            start_year: Some(2023),
            year_span: 4,
            ..Config::default()
        };
        assert_eq!(cfg.week_span(2025).unwrap(), (2023, 2027));
    }

    #[test]
    fn week_span_rejects_overflowing_ranges() {
        let cfg = Config {
            start_year: Some(2024),
            year_span: 3_000_000_000,
            ..Config::default()
        };
        assert!(matches!(cfg.week_span(2025), Err(AppError::Config(_))));

        let cfg = Config {
            start_year: Some(i32::MAX),
            year_span: 1,
            ..Config::default()
        };
        assert!(cfg.week_span(2025).is_err());
    }
}
