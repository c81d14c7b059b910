use crate::errors::AppResult;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    /// Lifetime of an admin login, in hours.
    #[serde(default = "default_session_hours")]
    pub session_hours: i64,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_school_name")]
    pub school_name: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_admin_username() -> String {
    "admin".to_string()
}
fn default_session_hours() -> i64 {
    24
}
fn default_bcrypt_cost() -> u32 {
    10
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_school_name() -> String {
    "SSB".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            admin_username: default_admin_username(),
            session_hours: default_session_hours(),
            bcrypt_cost: default_bcrypt_cost(),
            separator_char: default_separator_char(),
            school_name: default_school_name(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rsarapan")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rsarapan")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rsarapan.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rsarapan.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing fields fall back to their serde defaults.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// A relative `--db` value is taken relative to the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Path of the admin session file that belongs to this database.
    pub fn session_file(&self) -> PathBuf {
        PathBuf::from(format!("{}.session", self.database))
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode the config file is left untouched so that test runs
    /// never clobber the user's real configuration.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        let mut config = if is_test {
            Config::default()
        } else {
            Self::load()?
        };
        config.database = db_path.to_string_lossy().to_string();

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config)
    }
}
