use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Application configuration, stored as YAML in the platform config dir.
///
/// The import heuristics (present markers, overtime patterns, skip labels)
/// live here as data rather than code: they are locale-specific and the
/// defaults target the Arabic day-sheets the tool was built for.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON data document.
    pub data_file: String,

    /// Rows to skip at the top of an imported sheet (titles, headers).
    #[serde(default = "default_header_rows")]
    pub import_header_rows: usize,

    /// Note words meaning "workday"; any of them marks the row present.
    #[serde(default = "default_present_markers")]
    pub present_markers: Vec<String>,

    /// Regex patterns tried in order to extract overtime hours from a note.
    /// The first capture group of the first matching pattern wins.
    #[serde(default = "default_ot_patterns")]
    pub ot_patterns: Vec<String>,

    /// First-column values that mark a non-data row (repeated headers,
    /// previous-balance markers).
    #[serde(default = "default_skip_labels")]
    pub skip_labels: Vec<String>,

    /// External extraction command for `scan`: invoked with the image path
    /// as final argument, must print a JSON array of rows on stdout.
    #[serde(default)]
    pub scan_command: Option<String>,
}

fn default_header_rows() -> usize {
    5
}

fn default_present_markers() -> Vec<String> {
    vec!["يوميه".into(), "يومية".into(), "عامل".into()]
}

fn default_ot_patterns() -> Vec<String> {
    vec![
        r"\+\s*(\d+(?:\.\d+)?)".into(),
        r"ساعات\s*(\d+(?:\.\d+)?)".into(),
    ]
}

fn default_skip_labels() -> Vec<String> {
    vec!["التاريخ".into(), "الرصيد السابق".into()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file().to_string_lossy().to_string(),
            import_header_rows: default_header_rows(),
            present_markers: default_present_markers(),
            ot_patterns: default_ot_patterns(),
            skip_labels: default_skip_labels(),
            scan_command: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("wagebook")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".wagebook")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wagebook.conf")
    }

    /// Return the default path of the JSON data document
    pub fn data_file() -> PathBuf {
        Self::config_dir().join(format!("{}.json", crate::store::STORAGE_KEY))
    }

    /// Load configuration from file, or return defaults if not found.
    /// The file is user-edited, so both read and parse failures surface
    /// as ordinary errors.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Report missing fields for `config --check`: fields covered by serde
    /// defaults are filled silently, so the check just parses and re-lists
    /// the effective values.
    pub fn check(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if self.present_markers.is_empty() {
            notes.push("present_markers is empty: no note will ever mark attendance".into());
        }
        if self.ot_patterns.is_empty() {
            notes.push("ot_patterns is empty: overtime hours will always be 0".into());
        }
        if self.scan_command.is_none() {
            notes.push("scan_command is not set: the `scan` command is disabled".into());
        }
        notes
    }

    /// Initialize configuration and (empty) data files
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Data file: user provided or default
        let data_path = if let Some(name) = custom_data {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_file()
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
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

        // Create an empty data document if not exists
        if !data_path.exists() {
            if let Some(parent) = data_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&data_path, "{\"workers\":[],\"logs\":[]}")?;
        }

        println!("✅ Data file:   {:?}", data_path);

        Ok(())
    }
}
