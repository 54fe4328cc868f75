use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SpotFileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid TOML spot file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON spot file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported spot file extension: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}

#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("missing Unsplash access key")]
    MissingAccessKey,
    #[error("image lookup request failed: {0}")]
    Request(String),
    #[error("image lookup response parse error: {0}")]
    Parse(String),
}

#[derive(thiserror::Error, Debug)]
pub enum PreviewError {
    #[error("image download failed: {0}")]
    Download(String),
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
}
