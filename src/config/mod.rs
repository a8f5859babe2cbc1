use crate::ui::messages::warning;
use crate::utils::time::{parse_offset, parse_shift_minutes};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Business baseline: 7 hours 30 minutes per weekday.
const DEFAULT_SHIFT: &str = "7h30";
/// Business wall clock offset (UTC-4).
const DEFAULT_OFFSET: &str = "-04:00";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_offset")]
    pub business_offset: String,
    #[serde(default = "default_shift")]
    pub standard_shift: String,
}

fn default_offset() -> String {
    DEFAULT_OFFSET.to_string()
}
fn default_shift() -> String {
    DEFAULT_SHIFT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            business_offset: default_offset(),
            standard_shift: default_shift(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Parsed business offset. A malformed value degrades to the default
    /// with a warning so report generation never aborts on bad config.
    pub fn offset(&self) -> FixedOffset {
        match parse_offset(&self.business_offset) {
            Some(off) => off,
            None => {
                warning(format!(
                    "Unreadable business_offset '{}', using {}",
                    self.business_offset, DEFAULT_OFFSET
                ));
                parse_offset(DEFAULT_OFFSET).unwrap_or_else(|| FixedOffset::east_opt(0).unwrap())
            }
        }
    }

    /// Parsed standard shift length in minutes, with the same degradation
    /// policy as offset().
    pub fn shift_minutes(&self) -> i64 {
        match parse_shift_minutes(&self.standard_shift) {
            Some(m) if m > 0 => m,
            _ => {
                warning(format!(
                    "Unreadable standard_shift '{}', using {}",
                    self.standard_shift, DEFAULT_SHIFT
                ));
                450
            }
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
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

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialization: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
