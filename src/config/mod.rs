use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
    #[serde(default = "default_break")]
    pub default_break_minutes: i64,
    #[serde(default = "default_rate")]
    pub default_rate_per_hour: f64,
}

fn default_currency() -> String {
    "₹".to_string()
}
fn default_break() -> i64 {
    0
}
fn default_rate() -> f64 {
    0.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            currency_symbol: default_currency(),
            default_break_minutes: default_break(),
            default_rate_per_hour: default_rate(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tallysheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tallysheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tallysheet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("tallysheet.sqlite")
    }

    /// Return the full path of the session file written by `login`
    pub fn session_file() -> PathBuf {
        Self::config_dir().join("session.yml")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Persist the current configuration to disk.
    pub fn save(&self) -> io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| io::Error::other(format!("config serialization: {e}")))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped in test mode so tests never touch the
        // real per-user configuration)
        if !is_test {
            config.save()?;
            println!("Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("Database:    {:?}", db_path);

        Ok(())
    }

    /// Names of fields missing from the on-disk config file (for `config --check`).
    pub fn missing_fields() -> Vec<&'static str> {
        let path = Self::config_file();
        let Ok(content) = fs::read_to_string(&path) else {
            return vec!["database", "currency_symbol", "default_break_minutes", "default_rate_per_hour"];
        };

        let Ok(doc) = serde_yaml::from_str::<serde_yaml::Value>(&content) else {
            return vec!["database", "currency_symbol", "default_break_minutes", "default_rate_per_hour"];
        };

        let mut missing = Vec::new();
        for field in [
            "database",
            "currency_symbol",
            "default_break_minutes",
            "default_rate_per_hour",
        ] {
            if doc.get(field).is_none() {
                missing.push(field);
            }
        }
        missing
    }
}
