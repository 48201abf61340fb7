use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading config file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse JSON configuration in {path}: {source}")]
    JsonParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Configuration file not found at {path}")]
    NotFound { path: PathBuf },
}

/// Errors from decoding an upload payload into CSV text.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Upload payload has no ',' separating content type from data")]
    MissingSeparator,
    #[error("Upload payload is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("Decoded upload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Error reading CSV headers: {source}")]
    HeaderReadError {
        #[source]
        source: csv::Error,
    },
}

/// Errors raised while turning a stored dataset into a chart descriptor.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Schema mismatch: expected {expected} columns, found {found}")]
    SchemaMismatch { expected: usize, found: usize },
    #[error("Required column '{name}' not found in dataset")]
    MissingColumn { name: String },
    #[error("Timestamp parsing error at row {row} for value '{value}'")]
    TimestampParseError { row: usize, value: String },
}

/// Upload-event failure: decode or parse, with the slot it happened on.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Could not read {slot} file: {source}")]
    Decode {
        slot: &'static str,
        #[source]
        source: DecodeError,
    },
    #[error("Could not parse {slot} file: {source}")]
    Parse {
        slot: &'static str,
        #[source]
        source: ParseError,
    },
}
