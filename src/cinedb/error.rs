use crate::model::Collection;
use crate::sync::Direction;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CinedbError {
    #[error("invalid ID: ID cannot be empty")]
    EmptyId,

    #[error("invalid ID: '{0}' must contain only lowercase letters, numbers, and hyphens")]
    InvalidIdFormat(String),

    #[error("name cannot be empty")]
    EmptyName,

    #[error("'{0}' is not a valid year")]
    InvalidYear(String),

    #[error("{collection} with ID '{id}' already exists")]
    DuplicateId { collection: Collection, id: String },

    #[error("error loading data: failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error loading data: failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("error saving data: failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {direction} {location}: {status}\nOutput: {output}")]
    Transfer {
        direction: Direction,
        location: String,
        status: String,
        output: String,
    },

    #[error("input closed before the prompt was answered")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CinedbError>;
