use crate::core::input::parse_period;
use crate::errors::{AppError, AppResult};
use crate::models::Period;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = ".rclinicbook";
const CONFIG_FILE: &str = "rclinicbook.conf";
const DATABASE_FILE: &str = "clinic.sqlite";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    /// Worker names accepted by `add`/`edit`. Empty list = any name.
    #[serde(default = "default_workers")]
    pub workers: Vec<String>,
    #[serde(default = "default_period")]
    pub default_period: String,
}

fn default_export_dir() -> String {
    ".".to_string()
}
fn default_workers() -> Vec<String> {
    vec!["حليمة".to_string(), "زهرة".to_string()]
}
fn default_period() -> String {
    Period::Morning.to_db_str().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            export_dir: default_export_dir(),
            workers: default_workers(),
            default_period: default_period(),
        }
    }
}

impl Config {
    /// `~/.rclinicbook` (falls back to the current directory without a home).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Resolve a user-given database name: `~` is expanded and relative
    /// names live in the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Database path with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn export_dir_path(&self) -> PathBuf {
        expand_tilde(&self.export_dir)
    }

    pub fn period(&self) -> AppResult<Period> {
        parse_period(&self.default_period)
            .map_err(|_| AppError::Config(format!("invalid default_period '{}'", self.default_period)))
    }

    /// Problems a user should fix in the config file (empty when fine).
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.database.trim().is_empty() {
            problems.push("database path is empty".to_string());
        }
        if let Err(e) = self.period() {
            problems.push(e.to_string());
        }
        for (i, w) in self.workers.iter().enumerate() {
            if w.trim().is_empty() {
                problems.push(format!("workers[{i}] is empty"));
            } else if self.workers[..i].contains(w) {
                problems.push(format!("worker '{w}' is listed twice"));
            }
        }

        problems
    }

    /// Create the config directory and file, and return the database path.
    ///
    /// In test mode the config file is not written, so a developer's real
    /// configuration is never replaced.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => dir.join(DATABASE_FILE),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        Ok(db_path)
    }
}
