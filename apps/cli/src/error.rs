use std::ffi::OsString;
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Args(#[from] pico_args::Error),

    #[error("unexpected arguments: {0:?}")]
    UnexpectedArgs(Vec<OsString>),

    #[error("cannot read file '{path}': {source}")]
    ReadInput { path: String, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("cannot read {path}: {source}")]
    ReadConfig { path: String, source: io::Error },

    #[error("invalid {path}: {source}")]
    Config {
        path: String,
        source: toml::de::Error,
    },

    #[error("invalid input pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("output pattern '{pattern}' uses unknown variable '{name}'")]
    MissingVar { pattern: String, name: String },

    #[error("cannot walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("unsupported format '{0}'. Try --format html|tokens")]
    UnsupportedFormat(String),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot write output '{path}': {source}")]
    WriteOutput { path: String, source: io::Error },
}
