use crate::knowledge::search::{SearchOptions, DEFAULT_CONTEXT_LINES, DEFAULT_MAX_WINDOWS};

/// Default name reported in `serverInfo`.
pub const DEFAULT_SERVER_NAME: &str = "company-docs";

/// Default maximum bytes per JSON-RPC message (1 MiB).
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got '{value}'")]
    NotAnInteger { var: &'static str, value: String },
    #[error("{var} must be at least {min}")]
    TooSmall { var: &'static str, min: usize },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_name: String,
    pub search: SearchOptions,
    pub max_message_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_name: DEFAULT_SERVER_NAME.to_string(),
            search: SearchOptions::default(),
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `DOCS_SERVER_NAME` (optional, default `company-docs`)
    /// - `DOCS_SEARCH_CONTEXT_LINES` (optional, default 2): lines kept around a match
    /// - `DOCS_SEARCH_MAX_WINDOWS` (optional, default 3): matches shown per document
    /// - `DOCS_MAX_MESSAGE_BYTES` (optional, default 1 MiB): max bytes per request line
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_name = match lookup("DOCS_SERVER_NAME") {
            Some(name) if name.trim().is_empty() => {
                return Err(ConfigError::Empty { var: "DOCS_SERVER_NAME" })
            }
            Some(name) => name,
            None => DEFAULT_SERVER_NAME.to_string(),
        };

        let context_lines = parse_usize(
            &lookup,
            "DOCS_SEARCH_CONTEXT_LINES",
            DEFAULT_CONTEXT_LINES,
            0,
        )?;
        let max_windows = parse_usize(&lookup, "DOCS_SEARCH_MAX_WINDOWS", DEFAULT_MAX_WINDOWS, 1)?;
        let max_message_bytes = parse_usize(
            &lookup,
            "DOCS_MAX_MESSAGE_BYTES",
            DEFAULT_MAX_MESSAGE_BYTES,
            1,
        )?;

        Ok(Self {
            server_name,
            search: SearchOptions {
                context_lines,
                max_windows,
            },
            max_message_bytes,
        })
    }
}

fn parse_usize<F>(
    lookup: &F,
    var: &'static str,
    default: usize,
    min: usize,
) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::NotAnInteger { var, value: raw.clone() })?,
        None => default,
    };

    if value < min {
        return Err(ConfigError::TooSmall { var, min });
    }
    Ok(value)
}
