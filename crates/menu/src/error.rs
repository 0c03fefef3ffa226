// Chunk: docs/chunks/menu_errors - Error types for the menu crate
//!
//! Error types for configuration and the event loop.

use std::io;
use std::path::PathBuf;

use lite_menu_buffer::BufferError;
use thiserror::Error;

/// A single setting that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("invalid color `{0}`, expected #rgb, #rrggbb or #aarrggbb")]
    Color(String),

    #[error("invalid number `{0}`")]
    Number(String),

    #[error("invalid dimension `{0}`, expected an integer or a percentage")]
    Dimension(String),

    #[error("invalid placement `{0}`, expected start, middle, end or a dimension")]
    Placement(String),

    #[error("invalid layout `{0}`, expected horizontal or vertical")]
    Layout(String),

    #[error("expected 1 to 4 space separated values, got {0}")]
    SideCount(usize),
}

/// Loading or resolving the configuration failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for `{key}`")]
    Invalid {
        key: String,
        #[source]
        source: ValueError,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: impl Into<String>) -> impl FnOnce(ValueError) -> Self {
        let key = key.into();
        move |source| Self::Invalid { key, source }
    }
}

/// The menu loop stopped abnormally.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The query buffer could not grow.
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// Reading input events or drawing failed.
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}
