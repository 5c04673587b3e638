// Configuration loading and parsing (transfer-stats.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const CONFIG_FILE: &str = "transfer-stats.toml";

/// Settings used when the base directory has no `config/transfer-stats.toml`.
pub const DEFAULT_CONFIG: &str = include_str!("../defaults/transfer-stats.toml");

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

/// Everything one run needs: where to read, what to report on, where to write.
#[derive(Debug, Clone)]
pub struct Config {
    pub transfers_path: PathBuf,
    pub clubs: Vec<String>,
    pub position: String,
    pub output: OutputPaths,
}

// ---------------------------------------------------------------------------
// transfer-stats.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    input: InputSection,
    request: RequestSection,
    #[serde(default)]
    output: OutputPaths,
}

#[derive(Debug, Clone, Deserialize)]
struct InputSection {
    transfers: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RequestSection {
    #[serde(default)]
    clubs: ClubList,
    position: String,
}

/// Clubs may be given as a TOML array or as one comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ClubList {
    List(Vec<String>),
    Joined(String),
}

impl Default for ClubList {
    fn default() -> Self {
        ClubList::List(Vec::new())
    }
}

impl ClubList {
    fn into_names(self) -> Vec<String> {
        match self {
            ClubList::List(names) => names
                .into_iter()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
            ClubList::Joined(joined) => parse_club_list(&joined),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputPaths {
    #[serde(default = "default_club_stats")]
    pub club_stats: PathBuf,
    #[serde(default = "default_league_stats")]
    pub league_stats: PathBuf,
    #[serde(default = "default_position_stats")]
    pub position_stats: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        OutputPaths {
            club_stats: default_club_stats(),
            league_stats: default_league_stats(),
            position_stats: default_position_stats(),
        }
    }
}

fn default_club_stats() -> PathBuf {
    PathBuf::from("club_stat.txt")
}

fn default_league_stats() -> PathBuf {
    PathBuf::from("league_stat.txt")
}

fn default_position_stats() -> PathBuf {
    PathBuf::from("pos_stat.txt")
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Split a comma-separated club line, trimming names and dropping empty ones.
pub fn parse_club_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect()
}

/// Path of the config file inside `base_dir`.
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join("config").join(CONFIG_FILE)
}

/// Load `config/transfer-stats.toml` from `base_dir`, falling back to the
/// built-in defaults when the file does not exist. Nothing is written.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    match load_config_from(base_dir) {
        Err(ConfigError::FileNotFound { path }) => {
            info!("{} not found, using built-in defaults", path.display());
            parse_config(DEFAULT_CONFIG, Path::new("<built-in defaults>"), base_dir)
        }
        other => other,
    }
}

/// Load and validate `config/transfer-stats.toml` from `base_dir`. A missing
/// file is an error here; see `load_config()` for the fallback.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = config_path(base_dir);
    let text = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound { path: path.clone() },
        _ => ConfigError::ReadError {
            path: path.clone(),
            source: e,
        },
    })?;
    parse_config(&text, &path, base_dir)
}

/// Parse config text. Relative input and output paths are resolved against
/// `base_dir`; `origin` only labels errors.
fn parse_config(text: &str, origin: &Path, base_dir: &Path) -> Result<Config, ConfigError> {
    let file: ConfigFile = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: origin.to_path_buf(),
        source: e,
    })?;
    validate(&file)?;

    let ConfigFile {
        input,
        request,
        output,
    } = file;

    Ok(Config {
        transfers_path: base_dir.join(input.transfers.trim()),
        clubs: request.clubs.into_names(),
        position: request.position.trim().to_string(),
        output: OutputPaths {
            club_stats: base_dir.join(output.club_stats),
            league_stats: base_dir.join(output.league_stats),
            position_stats: base_dir.join(output.position_stats),
        },
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(file: &ConfigFile) -> Result<(), ConfigError> {
    if file.input.transfers.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "input.transfers".into(),
            message: "must not be empty".into(),
        });
    }

    if file.request.position.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "request.position".into(),
            message: "must not be blank".into(),
        });
    }

    let outputs: &[(&str, &Path)] = &[
        ("output.club_stats", file.output.club_stats.as_path()),
        ("output.league_stats", file.output.league_stats.as_path()),
        ("output.position_stats", file.output.position_stats.as_path()),
    ];
    for (i, (name, path)) in outputs.iter().enumerate() {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
        if let Some((other, _)) = outputs[..i].iter().find(|(_, p)| p == path) {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: format!("same path as `{other}`: {}", path.display()),
            });
        }
    }

    Ok(())
}
