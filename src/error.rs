//! Error types surfaced by the config writer.

use std::io;

use thiserror::Error;

/// Errors that can occur when writing a config file.
///
/// Both variants carry the target filename so callers see which file failed
/// without having to track it themselves.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The target file could not be created, truncated or written.
    #[error("couldn't write {file}")]
    Open {
        /// Filename the write was aimed at.
        file: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The data bag was incompatible with the file's rendering rules.
    #[error("couldn't render {file}")]
    Render {
        /// Filename the render was aimed at.
        file: String,
        /// What the data bag got wrong.
        #[source]
        source: RenderError,
    },
}

/// Ways a data bag can fail to render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A required key was absent from the data bag.
    #[error("missing required key '{0}'")]
    MissingKey(String),

    /// A value in an interpolated position was not a string, number or bool.
    #[error("key '{0}' must be a string, number or boolean")]
    UnsupportedValue(String),

    /// A value that participates in numeric comparison was not an integer.
    #[error("key '{0}' must be an integer")]
    ExpectedInteger(String),
}
