//! Station directory error types.

use std::path::PathBuf;

/// Errors that can occur when loading the station directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Reading the directory file failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse directory JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A station or line references a city that is not defined
    #[error("{entity} references unknown city {city}")]
    UnknownCity { entity: String, city: String },

    /// Two cities share a slug
    #[error("city slug {0} appears more than once")]
    DuplicateCity(String),

    /// Station names must be unique within a city
    #[error("station {name} appears more than once in {city}")]
    DuplicateStation { city: String, name: String },
}
